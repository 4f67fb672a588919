//! Wire types for profile responses (REST).

use super::Profile;
use serde::{Deserialize, Serialize};

/// `GET /api/profile` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub profile: Option<Profile>,
}
