//! Terminal colors for list and detail output.

use crate::models::InspectionStatus;
use ansi_term::{Colour, Style};

/// On track → green, late → yellow, halted → red.
pub fn status_style(status: InspectionStatus) -> Style {
    match status {
        InspectionStatus::OnTrack => Colour::Green.bold(),
        InspectionStatus::Late => Colour::Yellow.bold(),
        InspectionStatus::Halted => Colour::Red.bold(),
    }
}

pub fn colorize_status(status: InspectionStatus, enabled: bool) -> String {
    if enabled {
        status_style(status).paint(status.label()).to_string()
    } else {
        status.label().to_string()
    }
}

/// Grey placeholder for fields with no value ("no photo", "not set").
pub fn dim(value: &str, enabled: bool) -> String {
    if enabled {
        Colour::Fixed(244).paint(value).to_string()
    } else {
        value.to_string()
    }
}

pub fn label(value: &str, enabled: bool) -> String {
    if enabled {
        Style::new().bold().paint(value).to_string()
    } else {
        value.to_string()
    }
}
