//! HTTP transport adapters.
//!
//! - `ReqwestTransport` sends over the network
//! - `MockTransport` answers from canned responses for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::{MockTransport, RecordedRequest};
pub use reqwest_transport::ReqwestTransport;
