pub mod geo;
pub mod inspection;
pub mod worksite;

pub use geo::GeoPoint;
pub use inspection::{Inspection, InspectionPayload, InspectionStatus};
pub use worksite::{WorkSite, WorkSitePayload};
