use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;

pub trait Locator {
    fn request_permission(&self) -> bool;
    /// One-shot read of the current position.
    fn current_position(&self) -> AppResult<GeoPoint>;
}

/// Position typed by the user (`--at lat,long`).
pub struct ManualLocator {
    point: Option<GeoPoint>,
    enabled: bool,
}

impl ManualLocator {
    pub fn new(point: Option<GeoPoint>, enabled: bool) -> Self {
        Self { point, enabled }
    }
}

impl Locator for ManualLocator {
    fn request_permission(&self) -> bool {
        self.enabled
    }

    fn current_position(&self) -> AppResult<GeoPoint> {
        self.point.ok_or(AppError::LocationUnavailable)
    }
}
