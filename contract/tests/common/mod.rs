//! Shared test helpers for contract integration tests.
//!
//! `ScriptedStub` is a `WorldState` double with canned read results for a
//! fixed set of keys. It records every call so tests can assert exactly
//! which writes and deletes an operation performed.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use handler_hostapi::{StubContext, StubError, WorldState};
use handler_primitives::{encode_handler, Handler};

/// Message returned by every read of `STATE_BAD`.
pub const GET_STATE_ERROR: &str = "world state get error";

/// Key whose read always fails.
pub const STATE_BAD: &str = "statebad";
/// Key with no stored value.
pub const MISSING_KEY: &str = "missingkey";
/// Key holding bytes that are not a `Handler` record.
pub const EXISTING_KEY: &str = "existingkey";
/// Key holding `{"value":"set value"}`.
pub const HANDLER_KEY: &str = "handlerkey";

/// A store call observed by `ScriptedStub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Put(String, Vec<u8>),
    Del(String),
}

/// Scripted, call-recording `WorldState`.
#[derive(Debug, Default)]
pub struct ScriptedStub {
    reads: BTreeMap<String, Result<Option<Vec<u8>>, StubError>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedStub {
    /// The standard fixture: `statebad`, `missingkey`, `existingkey`, `handlerkey`.
    pub fn configured() -> Self {
        let handler_bytes = encode_handler(&Handler::new("set value")).unwrap();

        let mut reads = BTreeMap::new();
        reads.insert(STATE_BAD.to_string(), Err(StubError::internal(GET_STATE_ERROR)));
        reads.insert(MISSING_KEY.to_string(), Ok(None));
        reads.insert(EXISTING_KEY.to_string(), Ok(Some(b"some value".to_vec())));
        reads.insert(HANDLER_KEY.to_string(), Ok(Some(handler_bytes)));

        Self {
            reads,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every call observed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Only the mutating calls (puts and deletes).
    pub fn mutations(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| !matches!(c, Call::Get(_)))
            .cloned()
            .collect()
    }

    pub fn assert_put(&self, key: &str, value: &[u8]) {
        let expected = Call::Put(key.to_string(), value.to_vec());
        assert!(
            self.calls.borrow().contains(&expected),
            "expected {:?} in {:?}",
            expected,
            self.calls.borrow()
        );
    }

    pub fn assert_del(&self, key: &str) {
        let expected = Call::Del(key.to_string());
        assert!(
            self.calls.borrow().contains(&expected),
            "expected {:?} in {:?}",
            expected,
            self.calls.borrow()
        );
    }
}

impl WorldState for ScriptedStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        self.calls.borrow_mut().push(Call::Get(key.to_string()));
        self.reads.get(key).cloned().unwrap_or(Ok(None))
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        self.calls
            .borrow_mut()
            .push(Call::Put(key.to_string(), value.to_vec()));
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), StubError> {
        self.calls.borrow_mut().push(Call::Del(key.to_string()));
        Ok(())
    }
}

/// A fresh context over the standard fixture.
pub fn configure_stub() -> StubContext<ScriptedStub> {
    StubContext::new("test-tx", ScriptedStub::configured())
}

/// The wrapped read-failure message every operation but `HandlerExists` returns.
pub fn read_failure_message() -> String {
    format!("Could not read from world state. {}", GET_STATE_ERROR)
}
