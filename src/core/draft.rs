use crate::api::Resource;
use crate::errors::AppResult;
use crate::models::GeoPoint;

/// Local, unsaved copy of a record being edited in a form.
pub trait Draft: Default + Clone {
    type Record: Resource;

    /// Labels of required fields that are still empty.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Build the write body, converting dates to exchange format.
    /// Fails with `Validation` when a required field is missing.
    fn to_payload(&self) -> AppResult<<Self::Record as Resource>::Payload>;

    /// Fill a draft from a fetched record, dates in display format.
    fn from_record(record: &Self::Record) -> Self;

    fn set_photo(&mut self, data_uri: String);
    fn set_location(&mut self, point: GeoPoint);

    /// Attach the draft to a parent record (linked creation flow).
    fn link(&mut self, _parent_id: &str) {}
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
