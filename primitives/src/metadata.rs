//! Contract and chaincode metadata.
//!
//! The host records this information when the chaincode registers, and
//! callers can fetch it at any time through the `GetMetadata` system
//! function. The JSON shape uses the platform's camelCase field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// License attached to a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Contact details attached to a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Descriptive information for a single contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub version: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl Default for ContractInfo {
    fn default() -> Self {
        Self {
            version: "0.0.1".into(),
            description: "My Smart Contract".into(),
            license: Some(LicenseInfo {
                name: "Apache-2.0".into(),
                url: None,
            }),
            contact: Some(ContactInfo {
                name: "John Doe".into(),
                email: None,
                url: None,
            }),
        }
    }
}

/// Descriptive information for the chaincode package as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeInfo {
    pub title: String,
    pub version: String,
}

impl Default for ChaincodeInfo {
    fn default() -> Self {
        Self {
            title: "raft chaincode".into(),
            version: "0.0.1".into(),
        }
    }
}

/// Whether a transaction is meant to be submitted for ordering or only
/// evaluated against a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionTag {
    Submit,
    Evaluate,
}

/// A named transaction exposed by a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    pub name: String,
    pub tag: Vec<TransactionTag>,
    /// Parameter names, in call order.
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Whether the transaction returns a payload.
    #[serde(default)]
    pub returns: bool,
}

/// Metadata for one contract within the chaincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub name: String,
    pub info: ContractInfo,
    pub transactions: Vec<TransactionMetadata>,
    #[serde(default)]
    pub default: bool,
}

/// Top-level metadata document returned by `GetMetadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeMetadata {
    pub info: ChaincodeInfo,
    /// Contracts keyed by name. `BTreeMap` keeps the JSON output ordered.
    pub contracts: BTreeMap<String, ContractMetadata>,
}

impl ChaincodeMetadata {
    /// Build a metadata document for a chaincode hosting a single contract.
    pub fn single(info: ChaincodeInfo, mut contract: ContractMetadata) -> Self {
        contract.default = true;
        let mut contracts = BTreeMap::new();
        contracts.insert(contract.name.clone(), contract);
        Self { info, contracts }
    }

    /// Returns the default contract, if any.
    pub fn default_contract(&self) -> Option<&ContractMetadata> {
        self.contracts.values().find(|c| c.default)
    }
}
