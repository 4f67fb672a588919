//! Profile sub-client.

use crate::client::GameClient;
use crate::domain::profile::wire::ProfileResponse;
use crate::domain::profile::Profile;
use crate::error::SdkError;
use crate::network::PROFILE_PATH;
use crate::render::ProfileView;

pub struct Profiles<'a> {
    pub(crate) client: &'a GameClient,
}

impl<'a> Profiles<'a> {
    /// Fetch the authenticated user's profile without touching the view.
    pub async fn get(&self) -> Result<Profile, SdkError> {
        let resp: ProfileResponse = self.client.http.get(PROFILE_PATH).await?;
        Ok(resp.profile.unwrap_or_default())
    }

    /// Fetch the profile, keep it as the displayed copy and render it.
    pub async fn refresh(&self) -> Result<Profile, SdkError> {
        let profile = self.get().await?;
        self.show(&profile).await;
        Ok(profile)
    }

    /// The profile currently on display, if any.
    pub async fn current(&self) -> Option<Profile> {
        self.client.profile.read().await.clone()
    }

    pub(crate) async fn show(&self, profile: &Profile) {
        *self.client.profile.write().await = Some(profile.clone());
        self.client.renderer.profile(&ProfileView::from(profile));
    }
}
