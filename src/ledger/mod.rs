//! Publication of claim reviews to an append-only ledger.

pub mod error;
pub mod http;
pub mod sink;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::{LedgerError, LedgerResult};
pub use http::{HttpLedgerSink, publish_payload};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockLedgerSink;
pub use sink::{LedgerSink, PublishReceipt};
