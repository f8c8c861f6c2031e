//! Name-based dispatch into `HandlerContract`.
//!
//! Hosts deliver invocations as a function name plus string arguments.
//! `HandlerContract::invoke` resolves the name, checks the argument count,
//! runs the operation, and encodes its result as the response payload.

use handler_hostapi::TransactionContext;
use handler_primitives::{codec, TransactionTag};

use crate::contract::HandlerContract;
use crate::error::ContractError;

/// The routable transactions of `HandlerContract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerFunction {
    Exists,
    Create,
    Read,
    Update,
    Delete,
}

impl HandlerFunction {
    /// All functions, in the order they are reported in metadata.
    pub const ALL: [HandlerFunction; 5] = [
        Self::Exists,
        Self::Create,
        Self::Read,
        Self::Update,
        Self::Delete,
    ];

    /// Name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exists => "HandlerExists",
            Self::Create => "CreateHandler",
            Self::Read => "ReadHandler",
            Self::Update => "UpdateHandler",
            Self::Delete => "DeleteHandler",
        }
    }

    /// Resolve a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Parameter names, in call order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::Exists | Self::Read | Self::Delete => &["handlerID"],
            Self::Create => &["handlerID", "value"],
            Self::Update => &["handlerID", "newValue"],
        }
    }

    /// Whether the function changes world state.
    pub fn tag(self) -> TransactionTag {
        match self {
            Self::Exists | Self::Read => TransactionTag::Evaluate,
            Self::Create | Self::Update | Self::Delete => TransactionTag::Submit,
        }
    }

    /// Whether a successful call produces a payload.
    pub fn returns(self) -> bool {
        matches!(self, Self::Exists | Self::Read)
    }
}

impl HandlerContract {
    /// Run the transaction named `function` with `args`.
    ///
    /// Returns the response payload: `true` / `false` for `HandlerExists`,
    /// the record JSON for `ReadHandler`, nothing for the others.
    pub fn invoke<C>(
        &self,
        ctx: &mut C,
        function: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, ContractError>
    where
        C: TransactionContext + ?Sized,
    {
        let func = HandlerFunction::from_name(function).ok_or_else(|| {
            ContractError::UnknownFunction {
                function: function.to_string(),
                contract: Self::NAME,
            }
        })?;

        let expected = func.params().len();
        if args.len() != expected {
            return Err(ContractError::ArgumentCount {
                function: func.name(),
                expected,
                received: args.len(),
            });
        }

        match func {
            HandlerFunction::Exists => {
                let exists = self.handler_exists(ctx, &args[0])?;
                Ok(Some(exists.to_string().into_bytes()))
            }
            HandlerFunction::Create => {
                self.create_handler(ctx, &args[0], &args[1])?;
                Ok(None)
            }
            HandlerFunction::Read => {
                let handler = self.read_handler(ctx, &args[0])?;
                let payload = codec::encode_handler(&handler).map_err(ContractError::Encode)?;
                Ok(Some(payload))
            }
            HandlerFunction::Update => {
                self.update_handler(ctx, &args[0], &args[1])?;
                Ok(None)
            }
            HandlerFunction::Delete => {
                self.delete_handler(ctx, &args[0])?;
                Ok(None)
            }
        }
    }
}
