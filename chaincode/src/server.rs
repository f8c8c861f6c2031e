//! Contract registration and the invocation service loop.

use handler_contract::{ContractError, HandlerContract};
use handler_hostapi::{ChaincodeConfig, MemStore, Transaction};
use handler_primitives::{ChaincodeInfo, ChaincodeMetadata, ContractInfo};
use tracing::{debug, info, info_span, warn};

use crate::error::ChaincodeError;
use crate::invocation::{Invocation, Response};
use crate::transport::Transport;

/// Namespace of functions served by the chaincode itself.
const SYSTEM_NAMESPACE: &str = "org.hyperledger.fabric";

/// Fully qualified name of the metadata system function.
pub const GET_METADATA: &str = "org.hyperledger.fabric:GetMetadata";

/// Counters reported when the service loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    /// Invocations that were decoded and executed.
    pub invocations: u64,
    /// Invocations answered with status 200.
    pub succeeded: u64,
    /// Invocations answered with status 500.
    pub failed: u64,
    /// Inbound messages rejected before execution.
    pub malformed: u64,
}

/// A registered `HandlerContract` together with the chaincode metadata
/// and the per-transaction limits.
#[derive(Debug, Clone, Default)]
pub struct Chaincode {
    contract: HandlerContract,
    info: ChaincodeInfo,
    config: ChaincodeConfig,
}

impl Chaincode {
    pub fn new(contract_info: ContractInfo, chaincode_info: ChaincodeInfo, config: ChaincodeConfig) -> Self {
        Self {
            contract: HandlerContract::with_info(contract_info),
            info: chaincode_info,
            config,
        }
    }

    /// The document served by `GetMetadata`.
    pub fn metadata(&self) -> ChaincodeMetadata {
        ChaincodeMetadata::single(self.info.clone(), self.contract.metadata())
    }

    /// Execute one invocation against `store`.
    ///
    /// The invocation runs in a fresh `Transaction`. Its writes are applied
    /// to `store` only when the contract returns successfully.
    pub fn handle(&self, store: &mut MemStore, invocation: &Invocation) -> Response {
        let span = info_span!(
            "invoke",
            tx_id = %invocation.tx_id,
            function = %invocation.function
        );
        let _enter = span.enter();

        match self.execute(store, invocation) {
            Ok((payload, writes)) => {
                info!(writes, "committed");
                Response::success(invocation.tx_id.as_str(), payload)
            }
            Err(err) => {
                warn!(error = %err, "rolled back");
                Response::error(invocation.tx_id.as_str(), err.to_string())
            }
        }
    }

    /// Serve invocations from `transport` until it reports end of input.
    ///
    /// A message that cannot be decoded is answered with an error response
    /// and the loop continues. Transport failures end the loop.
    pub fn start<T>(&self, store: &mut MemStore, transport: &mut T) -> Result<ServeSummary, ChaincodeError>
    where
        T: Transport + ?Sized,
    {
        info!(
            title = %self.info.title,
            version = %self.info.version,
            contract = HandlerContract::NAME,
            "chaincode started"
        );

        let mut summary = ServeSummary::default();
        loop {
            let mut invocation = match transport.recv() {
                Ok(Some(invocation)) => invocation,
                Ok(None) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "rejected inbound message");
                    summary.malformed += 1;
                    transport.send(&Response::error("", err.to_string()))?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            summary.invocations += 1;
            if invocation.tx_id.is_empty() {
                invocation.tx_id = format!("tx-{}", summary.invocations);
            }

            let response = self.handle(store, &invocation);
            if response.is_ok() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
            transport.send(&response)?;
        }

        info!(
            invocations = summary.invocations,
            succeeded = summary.succeeded,
            failed = summary.failed,
            malformed = summary.malformed,
            "end of input"
        );
        Ok(summary)
    }

    /// Route and run an invocation. Returns the payload and the number of
    /// committed writes.
    fn execute(
        &self,
        store: &mut MemStore,
        invocation: &Invocation,
    ) -> Result<(Option<Vec<u8>>, usize), ChaincodeError> {
        let function = match invocation.function.split_once(':') {
            Some((SYSTEM_NAMESPACE, name)) => {
                return self.system(name).map(|payload| (Some(payload), 0));
            }
            Some((contract, name)) if contract == HandlerContract::NAME => name,
            Some((contract, _)) => return Err(ChaincodeError::ContractNotFound(contract.to_string())),
            None => invocation.function.as_str(),
        };

        let (result, writes) = {
            let mut tx = Transaction::new(invocation.tx_id.as_str(), &*store, self.config.clone());
            let result = self.contract.invoke(&mut tx, function, &invocation.args);
            (result, tx.into_writes())
        };

        let payload = result?;
        debug!(pending = writes.len(), "applying write set");
        let applied = store.apply(writes);
        Ok((payload, applied))
    }

    fn system(&self, name: &str) -> Result<Vec<u8>, ChaincodeError> {
        match name {
            "GetMetadata" => serde_json::to_vec(&self.metadata()).map_err(ChaincodeError::Metadata),
            _ => Err(ContractError::UnknownFunction {
                function: name.to_string(),
                contract: SYSTEM_NAMESPACE,
            }
            .into()),
        }
    }
}
