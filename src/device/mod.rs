//! Device capabilities used by the forms: camera and GPS.
//!
//! The real drivers live outside this crate; forms only see the traits below.
//! The terminal front-end plugs in file-backed and manual implementations.

pub mod camera;
pub mod location;
pub mod permission;

pub use camera::{Camera, CapturedImage, Capture, FileCamera};
pub use location::{Locator, ManualLocator};
pub use permission::{Permission, PermissionGate};
