//! Adapters - Implementations of port interfaces.
//!
//! - `transport` - HTTP transports (reqwest, mock)

pub mod transport;

pub use transport::{MockTransport, RecordedRequest, ReqwestTransport};
