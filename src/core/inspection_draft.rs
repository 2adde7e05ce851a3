use crate::api::{ApiClient, Transport};
use crate::core::draft::{Draft, is_blank};
use crate::core::site_draft::display_or_empty;
use crate::errors::{AppError, AppResult};
use crate::models::{GeoPoint, Inspection, InspectionPayload, InspectionStatus, WorkSite};
use crate::utils::date::to_exchange_format;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionDraft {
    pub site_id: String,
    pub date: String,
    pub status: Option<InspectionStatus>,
    pub observations: String,
    pub photo: Option<String>,
    pub location: Option<GeoPoint>,
}

impl Draft for InspectionDraft {
    type Record = Inspection;

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.site_id) {
            missing.push("work site");
        }
        if is_blank(&self.date) {
            missing.push("date");
        }
        if self.status.is_none() {
            missing.push("status");
        }
        if is_blank(&self.observations) {
            missing.push("observations");
        }
        missing
    }

    fn to_payload(&self) -> AppResult<InspectionPayload> {
        let missing = self.missing_fields();
        let status = match self.status {
            Some(s) if missing.is_empty() => s,
            _ => return Err(AppError::Validation(missing)),
        };

        Ok(InspectionPayload {
            date: to_exchange_format(&self.date),
            status,
            observations: self.observations.clone(),
            photo: self.photo.clone(),
            location: self.location,
            site_id: self.site_id.clone(),
        })
    }

    fn from_record(insp: &Inspection) -> Self {
        Self {
            site_id: insp.site_id.clone(),
            date: display_or_empty(&insp.date),
            status: Some(insp.status),
            observations: insp.observations.clone(),
            photo: insp.photo.clone().filter(|p| !p.is_empty()),
            location: insp.location,
        }
    }

    fn set_photo(&mut self, data_uri: String) {
        self.photo = Some(data_uri);
    }

    fn set_location(&mut self, point: GeoPoint) {
        self.location = Some(point);
    }

    fn link(&mut self, parent_id: &str) {
        self.site_id = parent_id.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub id: String,
    pub name: String,
}

/// Choices for the "linked work site" field of inspection forms.
#[derive(Debug, Clone, Default)]
pub struct SitePicker {
    options: Vec<SiteOption>,
}

impl SitePicker {
    /// Best effort: a failed fetch leaves the picker empty.
    pub fn load<T: Transport>(api: &ApiClient<T>) -> Self {
        match api.list::<WorkSite>() {
            Ok(sites) => Self {
                options: sites
                    .into_iter()
                    .map(|s| SiteOption {
                        id: s.id,
                        name: s.name,
                    })
                    .collect(),
            },
            Err(e) => {
                debug!(error = %e, "work-site options unavailable");
                Self::default()
            }
        }
    }

    pub fn options(&self) -> &[SiteOption] {
        &self.options
    }

    pub fn find(&self, id: &str) -> Option<&SiteOption> {
        self.options.iter().find(|o| o.id == id)
    }
}
