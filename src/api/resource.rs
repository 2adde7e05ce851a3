use crate::models::{Inspection, InspectionPayload, WorkSite, WorkSitePayload};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record kind exposed by the backend as a REST collection.
pub trait Resource: DeserializeOwned + Send {
    /// Collection path, e.g. `/obras`.
    const COLLECTION: &'static str;
    /// Human label used in messages.
    const LABEL: &'static str;

    type Payload: Serialize;

    fn id(&self) -> &str;
}

impl Resource for WorkSite {
    const COLLECTION: &'static str = "/obras";
    const LABEL: &'static str = "work site";

    type Payload = WorkSitePayload;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Inspection {
    const COLLECTION: &'static str = "/fiscalizacoes";
    const LABEL: &'static str = "inspection";

    type Payload = InspectionPayload;

    fn id(&self) -> &str {
        &self.id
    }
}
