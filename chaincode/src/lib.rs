//! `handler-chaincode` — registers `HandlerContract` with a host and serves
//! invocations.
//!
//! The host side of a ledger peer is reduced here to two seams:
//!
//! - `Transport` — where invocations come from and responses go
//! - `MemStore` — committed world state
//!
//! `Chaincode::start` runs every invocation in its own `Transaction`,
//! commits the write set on success and drops it on failure. The primary
//! entry points are [`Chaincode::new`] and [`Chaincode::start`].

pub mod error;
pub mod invocation;
pub mod transport;
pub mod server;

pub use error::ChaincodeError;
pub use invocation::{Invocation, Response};
pub use transport::{StdioTransport, Transport};
pub use server::{Chaincode, ServeSummary, GET_METADATA};
