#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use obras::api::{ApiRequest, ApiResponse, Method, Transport};
use obras::errors::{AppError, AppResult};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Response, Server};

/// The binary, isolated from the user's config and environment.
pub fn obras(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("obras");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("OBRAS_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

pub fn site_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "nome": name,
        "responsavel": "Maria Souza",
        "dataInicio": "2022-02-13T00:00:00.000Z",
        "dataFim": "2022-12-20T00:00:00.000Z",
        "descricao": "Reforma da escola municipal",
        "localizacao": { "lat": -23.5505, "long": -46.6333 }
    })
}

pub fn inspection_json(id: &str, site: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "obra": site,
        "data": "2022-03-01T00:00:00.000Z",
        "status": status,
        "observacoes": "Fundação concluída"
    })
}

// ------------------------------------------------------------
// In-memory transport for controller tests
// ------------------------------------------------------------

type Hook = Box<dyn Fn(&ApiRequest) + Send + Sync>;

/// Canned responses per (method, path); records every request.
/// Unknown routes answer 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), (u16, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
    offline: bool,
    hook: Option<Hook>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails as if the host were unreachable.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn route(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    /// Runs inside `execute`, before the response is produced.
    pub fn on_execute(mut self, hook: impl Fn(&ApiRequest) + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &ApiRequest) -> AppResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(hook) = &self.hook {
            hook(request);
        }

        if self.offline {
            return Err(AppError::Transport(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))));
        }

        let routes = self.routes.lock().unwrap();
        let (status, body) = routes
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or((404, json!({ "error": "not found" }).to_string()));
        Ok(ApiResponse::new(status, body))
    }
}

// ------------------------------------------------------------
// Throw-away HTTP backend for end-to-end tests
// ------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

pub struct MockBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    /// Serve `handler`'s (status, JSON body) for every request.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, Value) + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let url = format!("http://{}", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for mut req in server.incoming_requests() {
                let mut body = String::new();
                let _ = req.as_reader().read_to_string(&mut body);
                let recorded = Recorded {
                    method: req.method().to_string(),
                    path: req.url().to_string(),
                    body,
                };
                let (status, payload) = handler(&recorded);
                log.lock().unwrap().push(recorded);

                let response = Response::from_string(payload.to_string())
                    .with_status_code(status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("content-type header"),
                    );
                let _ = req.respond(response);
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}
