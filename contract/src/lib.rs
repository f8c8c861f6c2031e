//! `handler-contract` — CRUD contract for the `Handler` asset.
//!
//! `HandlerContract` implements five operations over the world state
//! exposed by a `TransactionContext`:
//!
//! | Operation | Router name | Result |
//! |---|---|---|
//! | [`handler_exists`](HandlerContract::handler_exists) | `HandlerExists` | `bool` |
//! | [`create_handler`](HandlerContract::create_handler) | `CreateHandler` | `()` |
//! | [`read_handler`](HandlerContract::read_handler) | `ReadHandler` | `Handler` |
//! | [`update_handler`](HandlerContract::update_handler) | `UpdateHandler` | `()` |
//! | [`delete_handler`](HandlerContract::delete_handler) | `DeleteHandler` | `()` |
//!
//! The contract is stateless: each call reads fresh from the context and
//! performs at most one write or delete. Hosts that receive invocations by
//! name use [`HandlerContract::invoke`].

pub mod error;
pub mod contract;
pub mod router;

pub use error::ContractError;
pub use contract::HandlerContract;
pub use router::HandlerFunction;
