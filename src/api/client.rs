use super::http::HttpTransport;
use super::resource::Resource;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::errors::{AppError, AppResult};
use crate::models::{Inspection, WorkSite};
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Uniform CRUD access to the backend, shared by all screens.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn http(base_url: &str) -> Self {
        Self::new(HttpTransport::new(base_url))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list<R: Resource>(&self) -> AppResult<Vec<R>> {
        let response = self.send(ApiRequest::new(Method::Get, R::COLLECTION))?;
        decode(&response)
    }

    pub fn get<R: Resource>(&self, id: &str) -> AppResult<R> {
        let response = self.send(ApiRequest::new(Method::Get, item_path::<R>(id)))?;
        decode(&response)
    }

    pub fn create<R: Resource>(&self, payload: &R::Payload) -> AppResult<()> {
        let body = serde_json::to_value(payload)?;
        self.send(ApiRequest::new(Method::Post, R::COLLECTION).with_body(body))?;
        Ok(())
    }

    pub fn update<R: Resource>(&self, id: &str, payload: &R::Payload) -> AppResult<()> {
        let body = serde_json::to_value(payload)?;
        self.send(ApiRequest::new(Method::Put, item_path::<R>(id)).with_body(body))?;
        Ok(())
    }

    pub fn delete<R: Resource>(&self, id: &str) -> AppResult<()> {
        self.send(ApiRequest::new(Method::Delete, item_path::<R>(id)))?;
        Ok(())
    }

    /// `GET /obras/{id}/fiscalizacoes`
    pub fn site_inspections(&self, site_id: &str) -> AppResult<Vec<Inspection>> {
        let path = format!("{}/fiscalizacoes", item_path::<WorkSite>(site_id));
        let response = self.send(ApiRequest::new(Method::Get, path))?;
        decode(&response)
    }

    /// `POST /obras/{id}/email` — the backend builds and mails the report.
    pub fn send_report(&self, site_id: &str, email: &str) -> AppResult<()> {
        let path = format!("{}/email", item_path::<WorkSite>(site_id));
        self.send(ApiRequest::new(Method::Post, path).with_body(json!({ "email": email })))?;
        Ok(())
    }

    fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        debug!(method = %request.method, path = %request.path, "backend request");

        let response = self.transport.execute(&request)?;
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        warn!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            "backend rejected request"
        );

        Err(AppError::Server {
            status: response.status,
            message,
        })
    }
}

fn item_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::COLLECTION, path_segment(id))
}

/// Percent-encode one path segment so `/`, `?` or `#` in an id stay inside it.
fn path_segment(raw: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return raw.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(raw);
    }
    url.path().trim_start_matches('/').to_string()
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> AppResult<D> {
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_encoded_as_a_single_segment() {
        assert_eq!(item_path::<WorkSite>("o1"), "/obras/o1");
        assert_eq!(item_path::<WorkSite>("a/b?c#d"), "/obras/a%2Fb%3Fc%23d");
        assert_eq!(item_path::<Inspection>("f 1"), "/fiscalizacoes/f%201");
    }
}
