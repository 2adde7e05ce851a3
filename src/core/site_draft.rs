use crate::core::draft::{Draft, is_blank};
use crate::errors::{AppError, AppResult};
use crate::models::{GeoPoint, WorkSite, WorkSitePayload};
use crate::utils::date::{backend_to_display, to_exchange_format};

/// Work-site form fields. Dates are kept as typed (`DD-MM-YYYY`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkSiteDraft {
    pub name: String,
    pub responsible: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub photo: Option<String>,
    pub location: Option<GeoPoint>,
}

impl Draft for WorkSiteDraft {
    type Record = WorkSite;

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("responsible", &self.responsible),
            ("start date", &self.start_date),
            ("end date", &self.end_date),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, v)| is_blank(v))
        .map(|(label, _)| label)
        .collect()
    }

    fn to_payload(&self) -> AppResult<WorkSitePayload> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(missing));
        }

        Ok(WorkSitePayload {
            name: self.name.clone(),
            responsible: self.responsible.clone(),
            start_date: to_exchange_format(&self.start_date),
            end_date: to_exchange_format(&self.end_date),
            description: self.description.clone(),
            photo: self.photo.clone(),
            location: self.location,
        })
    }

    fn from_record(site: &WorkSite) -> Self {
        Self {
            name: site.name.clone(),
            responsible: site.responsible.clone(),
            start_date: display_or_empty(&site.start_date),
            end_date: display_or_empty(&site.end_date),
            description: site.description.clone(),
            photo: site.photo.clone().filter(|p| !p.is_empty()),
            location: site.location,
        }
    }

    fn set_photo(&mut self, data_uri: String) {
        self.photo = Some(data_uri);
    }

    fn set_location(&mut self, point: GeoPoint) {
        self.location = Some(point);
    }
}

pub(crate) fn display_or_empty(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        backend_to_display(raw)
    }
}
