//! The Handler contract — existence check plus create/read/update/delete.
//!
//! Every operation follows the same shape:
//!
//! 1. Read the key through the transaction's store accessor. A failed read
//!    aborts with `ReadFailure` (or is passed through unchanged by
//!    `handler_exists`).
//! 2. Check presence against the operation's precondition.
//! 3. Perform at most one `put_state` / `del_state`, or decode the record.
//!
//! Nothing is cached between calls. Concurrent transactions touching the
//! same key are the host's concern (commit-time validation), not ours.

use handler_hostapi::{TransactionContext, WorldState};
use handler_primitives::{
    codec, ContractInfo, ContractMetadata, Handler, TransactionMetadata,
};
use tracing::debug;

use crate::error::ContractError;
use crate::router::HandlerFunction;

/// CRUD contract for `Handler` assets.
#[derive(Debug, Clone, Default)]
pub struct HandlerContract {
    info: ContractInfo,
}

impl HandlerContract {
    /// Name under which the contract registers with the host.
    pub const NAME: &'static str = "HandlerContract";

    /// Create a contract with the default metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contract with custom metadata.
    pub fn with_info(info: ContractInfo) -> Self {
        Self { info }
    }

    /// Descriptive metadata for registration.
    pub fn info(&self) -> &ContractInfo {
        &self.info
    }

    /// Metadata describing the contract and every routable transaction.
    pub fn metadata(&self) -> ContractMetadata {
        ContractMetadata {
            name: Self::NAME.to_string(),
            info: self.info.clone(),
            transactions: HandlerFunction::ALL
                .iter()
                .map(|f| TransactionMetadata {
                    name: f.name().to_string(),
                    tag: vec![f.tag()],
                    parameters: f.params().iter().map(|p| p.to_string()).collect(),
                    returns: f.returns(),
                })
                .collect(),
            default: false,
        }
    }

    /// Returns true when a value is stored at `handler_id`.
    ///
    /// A store failure is returned unchanged as `ContractError::Store`.
    pub fn handler_exists<C>(&self, ctx: &C, handler_id: &str) -> Result<bool, ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        let data = ctx.stub().get_state(handler_id)?;
        Ok(data.is_some())
    }

    /// Store a new `Handler { value }` at `handler_id`.
    ///
    /// Fails with `AlreadyExists` if the key is occupied.
    pub fn create_handler<C>(
        &self,
        ctx: &mut C,
        handler_id: &str,
        value: &str,
    ) -> Result<(), ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        debug!(tx_id = ctx.tx_id(), handler_id, "create handler");
        if fetch(ctx, handler_id)?.is_some() {
            return Err(ContractError::AlreadyExists {
                id: handler_id.to_string(),
            });
        }
        put_handler(ctx, handler_id, &Handler::new(value))
    }

    /// Load the `Handler` stored at `handler_id`.
    pub fn read_handler<C>(&self, ctx: &C, handler_id: &str) -> Result<Handler, ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        let bytes = fetch_existing(ctx, handler_id)?;
        codec::decode_handler(&bytes).map_err(|err| {
            debug!(tx_id = ctx.tx_id(), handler_id, %err, "stored bytes are not a Handler");
            ContractError::DecodeFailure(err)
        })
    }

    /// Replace the record at `handler_id` with `Handler { value: new_value }`.
    ///
    /// The previous record is overwritten wholesale; it is never decoded.
    pub fn update_handler<C>(
        &self,
        ctx: &mut C,
        handler_id: &str,
        new_value: &str,
    ) -> Result<(), ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        debug!(tx_id = ctx.tx_id(), handler_id, "update handler");
        fetch_existing(ctx, handler_id)?;
        put_handler(ctx, handler_id, &Handler::new(new_value))
    }

    /// Remove the record at `handler_id`.
    pub fn delete_handler<C>(&self, ctx: &mut C, handler_id: &str) -> Result<(), ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        debug!(tx_id = ctx.tx_id(), handler_id, "delete handler");
        fetch_existing(ctx, handler_id)?;
        ctx.stub_mut().del_state(handler_id)?;
        Ok(())
    }
}

/// Read a key, wrapping store failures as `ReadFailure`.
fn fetch<C>(ctx: &C, handler_id: &str) -> Result<Option<Vec<u8>>, ContractError>
where
    C: TransactionContext + ?Sized,
{
    ctx.stub()
        .get_state(handler_id)
        .map_err(ContractError::ReadFailure)
}

/// Read a key that must be present.
fn fetch_existing<C>(ctx: &C, handler_id: &str) -> Result<Vec<u8>, ContractError>
where
    C: TransactionContext + ?Sized,
{
    fetch(ctx, handler_id)?.ok_or_else(|| ContractError::NotFound {
        id: handler_id.to_string(),
    })
}

fn put_handler<C>(ctx: &mut C, handler_id: &str, handler: &Handler) -> Result<(), ContractError>
where
    C: TransactionContext + ?Sized,
{
    let bytes = codec::encode_handler(handler).map_err(ContractError::Encode)?;
    ctx.stub_mut().put_state(handler_id, &bytes)?;
    Ok(())
}
