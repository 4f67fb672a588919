//! Purchase guard — at most one buy request in flight per client.
//!
//! The request pipeline has no notion of duplicate submissions, so a
//! double-click on a buy control would otherwise send two purchases against
//! the same server balance. Holding a [`PurchaseGuard`] marks a purchase as in
//! flight and disables the purchase controls; dropping it re-enables them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::render::Renderer;

pub struct PurchaseGuard {
    in_flight: Arc<AtomicBool>,
    renderer: Arc<dyn Renderer>,
}

impl PurchaseGuard {
    /// Returns `None` when another purchase already holds the guard.
    pub fn acquire(in_flight: &Arc<AtomicBool>, renderer: &Arc<dyn Renderer>) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        renderer.purchase_controls(false);
        Some(Self {
            in_flight: Arc::clone(in_flight),
            renderer: Arc::clone(renderer),
        })
    }
}

impl Drop for PurchaseGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
        self.renderer.purchase_controls(true);
    }
}
