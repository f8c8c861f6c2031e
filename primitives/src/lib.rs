//! `handler-primitives` — foundational types for the Handler chaincode.
//!
//! This crate provides the persisted asset record, its JSON codec, and the
//! metadata types that describe the contract and chaincode to the host:
//!
//! - `Handler` — the single-field asset stored in world state
//! - `codec` — deterministic JSON encoding of stored records
//! - `metadata` — contract/chaincode info reported at registration and by
//!   the `GetMetadata` system function

pub mod handler;
pub mod codec;
pub mod metadata;

// Re-export commonly used types at the crate root for convenience.
pub use handler::Handler;
pub use codec::{decode_handler, encode_handler};
pub use metadata::{
    ChaincodeInfo, ChaincodeMetadata, ContactInfo, ContractInfo, ContractMetadata,
    LicenseInfo, TransactionMetadata, TransactionTag,
};
