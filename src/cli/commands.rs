pub mod config;
pub mod init;
pub mod inspection;
pub mod site;

use crate::api::Transport;
use crate::cli::parser::CaptureArgs;
use crate::config::Config;
use crate::core::{Draft, FormController, PhotoOutcome};
use crate::device::{FileCamera, ManualLocator};
use crate::errors::AppResult;
use crate::models::GeoPoint;
use crate::ui::messages::{info, notice};
use crate::utils::path::expand_tilde;

/// Run the photo / GPS captures requested on the command line.
pub(crate) fn apply_captures<T: Transport, D: Draft>(
    form: &mut FormController<'_, T, D>,
    capture: &CaptureArgs,
    cfg: &Config,
) -> AppResult<()> {
    if let Some(photo) = &capture.photo {
        let path = (!photo.is_empty()).then(|| expand_tilde(photo));
        let camera = FileCamera::new(path, cfg.camera_enabled);
        if form.capture_photo(&camera)? == PhotoOutcome::Canceled {
            info("Photo capture canceled: keeping the current photo.");
        }
    }

    if let Some(at) = &capture.at {
        let point = GeoPoint::parse(at)?;
        let locator = ManualLocator::new(Some(point), cfg.location_enabled);
        form.capture_location(&locator)?;
    }

    Ok(())
}

/// Submit and show the resulting notice.
pub(crate) fn submit<T: Transport, D: Draft>(form: &mut FormController<'_, T, D>) -> AppResult<()> {
    form.submit()?;
    if let Some(n) = form.notice() {
        notice(n);
    }
    Ok(())
}

pub(crate) fn set_if_some(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}
