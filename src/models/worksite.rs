use super::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Work site ("obra") as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSite {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "responsavel", default)]
    pub responsible: String,
    #[serde(rename = "dataInicio", default)]
    pub start_date: String, // backend timestamp, exchange format
    #[serde(rename = "dataFim", default)]
    pub end_date: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>, // data URI
    #[serde(rename = "localizacao", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Body of `POST /obras` and `PUT /obras/{id}`: the record minus its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkSitePayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "responsavel")]
    pub responsible: String,
    #[serde(rename = "dataInicio")]
    pub start_date: String,
    #[serde(rename = "dataFim")]
    pub end_date: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "localizacao", skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}
