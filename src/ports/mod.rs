//! Ports: the seams between the client and the outside world.

mod http_transport;

pub use http_transport::{ApiRequest, ApiResponse, HttpTransport, Method, TransportError};
