//! Mock implementations and in-process servers for integration tests.

mod transports;
mod ws_server;

pub use transports::MockEVMTransportClient;
pub use ws_server::{start_test_websocket_server, TestServerBehavior};
