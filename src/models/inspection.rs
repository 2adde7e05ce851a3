use super::geo::GeoPoint;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Inspection outcome. The wire value is the Portuguese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionStatus {
    #[serde(rename = "Em dia")]
    OnTrack,
    #[serde(rename = "Atrasada")]
    Late,
    #[serde(rename = "Parada")]
    Halted,
}

impl InspectionStatus {
    pub const ALL: [InspectionStatus; 3] = [
        InspectionStatus::OnTrack,
        InspectionStatus::Late,
        InspectionStatus::Halted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InspectionStatus::OnTrack => "Em dia",
            InspectionStatus::Late => "Atrasada",
            InspectionStatus::Halted => "Parada",
        }
    }

    /// Helper: convert a CLI code (any case) or the label itself
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "em dia" | "em-dia" | "on-track" | "ontrack" => Some(InspectionStatus::OnTrack),
            "atrasada" | "late" => Some(InspectionStatus::Late),
            "parada" | "halted" => Some(InspectionStatus::Halted),
            _ => None,
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inspection ("fiscalização") as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "obra", default, deserialize_with = "site_ref")]
    pub site_id: String,
    #[serde(rename = "data", default)]
    pub date: String,
    pub status: InspectionStatus,
    #[serde(rename = "observacoes", default)]
    pub observations: String,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "localizacao", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Body of `POST /fiscalizacoes` and `PUT /fiscalizacoes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionPayload {
    #[serde(rename = "data")]
    pub date: String,
    pub status: InspectionStatus,
    #[serde(rename = "observacoes")]
    pub observations: String,
    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(rename = "obra")]
    pub site_id: String,
}

/// The backend may send the owning site either as its id or populated.
fn site_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SiteRef {
        Id(String),
        Populated {
            #[serde(rename = "_id")]
            id: String,
        },
        Missing(()),
    }

    Ok(match SiteRef::deserialize(deserializer)? {
        SiteRef::Id(id) | SiteRef::Populated { id } => id,
        SiteRef::Missing(()) => String::new(),
    })
}
