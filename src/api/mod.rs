//! Backend access: one client shared by every screen, generic over the
//! kind of record, on top of a swappable transport.

mod client;
mod http;
mod resource;
mod transport;

pub use client::ApiClient;
pub use http::HttpTransport;
pub use resource::Resource;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
