//! Operation tests against a scripted world state.
//!
//! Each test drives one operation across the fixture keys and checks both
//! the returned error message and the store calls that were (or were not)
//! made.

mod common;

use handler_contract::{ContractError, HandlerContract};
use handler_hostapi::TransactionContext;
use handler_primitives::{encode_handler, Handler};

use common::*;

// ── HandlerExists ──

#[test]
fn test_handler_exists() {
    let ctx = configure_stub();
    let c = HandlerContract::new();

    let err = c.handler_exists(&ctx, STATE_BAD).unwrap_err();
    assert_eq!(err.to_string(), GET_STATE_ERROR);
    assert!(matches!(err, ContractError::Store(_)));

    let exists = c.handler_exists(&ctx, MISSING_KEY).unwrap();
    assert!(!exists, "should return false when no value for key in world state");

    let exists = c.handler_exists(&ctx, EXISTING_KEY).unwrap();
    assert!(exists, "should return true when value for key in world state");

    assert!(ctx.stub().mutations().is_empty());
}

// ── CreateHandler ──

#[test]
fn test_create_handler() {
    let mut ctx = configure_stub();
    let c = HandlerContract::new();

    let err = c.create_handler(&mut ctx, STATE_BAD, "some value").unwrap_err();
    assert_eq!(err.to_string(), read_failure_message());
    assert!(matches!(err, ContractError::ReadFailure(_)));

    let err = c.create_handler(&mut ctx, EXISTING_KEY, "some value").unwrap_err();
    assert_eq!(err.to_string(), "The asset existingkey already exists");
    assert!(matches!(err, ContractError::AlreadyExists { .. }));

    // Neither failure wrote anything
    assert!(ctx.stub().mutations().is_empty());

    c.create_handler(&mut ctx, MISSING_KEY, "some value").unwrap();
    ctx.stub().assert_put(MISSING_KEY, br#"{"value":"some value"}"#);
    assert_eq!(ctx.stub().mutations().len(), 1);
}

// ── ReadHandler ──

#[test]
fn test_read_handler() {
    let ctx = configure_stub();
    let c = HandlerContract::new();

    let err = c.read_handler(&ctx, STATE_BAD).unwrap_err();
    assert_eq!(err.to_string(), read_failure_message());

    let err = c.read_handler(&ctx, MISSING_KEY).unwrap_err();
    assert_eq!(err.to_string(), "The asset missingkey does not exist");

    let err = c.read_handler(&ctx, EXISTING_KEY).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not unmarshal world state data to type Handler"
    );
    assert!(matches!(err, ContractError::DecodeFailure(_)));

    let handler = c.read_handler(&ctx, HANDLER_KEY).unwrap();
    assert_eq!(handler, Handler::new("set value"));

    assert!(ctx.stub().mutations().is_empty());
}

#[test]
fn test_undecodable_record_still_exists() {
    let ctx = configure_stub();
    let c = HandlerContract::new();

    assert!(c.handler_exists(&ctx, EXISTING_KEY).unwrap());
    assert!(matches!(
        c.read_handler(&ctx, EXISTING_KEY),
        Err(ContractError::DecodeFailure(_))
    ));
}

// ── UpdateHandler ──

#[test]
fn test_update_handler() {
    let mut ctx = configure_stub();
    let c = HandlerContract::new();

    let err = c.update_handler(&mut ctx, STATE_BAD, "new value").unwrap_err();
    assert_eq!(err.to_string(), read_failure_message());

    let err = c.update_handler(&mut ctx, MISSING_KEY, "new value").unwrap_err();
    assert_eq!(err.to_string(), "The asset missingkey does not exist");
    assert!(ctx.stub().mutations().is_empty());

    c.update_handler(&mut ctx, HANDLER_KEY, "new value").unwrap();
    let expected = encode_handler(&Handler::new("new value")).unwrap();
    ctx.stub().assert_put(HANDLER_KEY, &expected);
}

// ── DeleteHandler ──

#[test]
fn test_delete_handler() {
    let mut ctx = configure_stub();
    let c = HandlerContract::new();

    let err = c.delete_handler(&mut ctx, STATE_BAD).unwrap_err();
    assert_eq!(err.to_string(), read_failure_message());

    let err = c.delete_handler(&mut ctx, MISSING_KEY).unwrap_err();
    assert_eq!(err.to_string(), "The asset missingkey does not exist");
    assert!(ctx.stub().mutations().is_empty());

    c.delete_handler(&mut ctx, HANDLER_KEY).unwrap();
    ctx.stub().assert_del(HANDLER_KEY);
    assert_eq!(ctx.stub().mutations(), vec![Call::Del(HANDLER_KEY.to_string())]);
}

// ── Failing reads never mutate ──

#[test]
fn test_statebad_never_mutates() {
    let mut ctx = configure_stub();
    let c = HandlerContract::new();

    assert!(c.handler_exists(&ctx, STATE_BAD).is_err());
    assert!(c.create_handler(&mut ctx, STATE_BAD, "v").is_err());
    assert!(c.read_handler(&ctx, STATE_BAD).is_err());
    assert!(c.update_handler(&mut ctx, STATE_BAD, "v").is_err());
    assert!(c.delete_handler(&mut ctx, STATE_BAD).is_err());

    let stub = ctx.into_stub();
    assert!(stub.mutations().is_empty());
    assert_eq!(stub.calls().len(), 5);
}

// ── Router over the scripted stub ──

#[test]
fn test_invoke_read_payload() {
    let mut ctx = configure_stub();
    let payload = HandlerContract::new()
        .invoke(&mut ctx, "ReadHandler", &[HANDLER_KEY.to_string()])
        .unwrap();
    assert_eq!(payload, Some(br#"{"value":"set value"}"#.to_vec()));
}

#[test]
fn test_invoke_exists_error_is_unwrapped() {
    let mut ctx = configure_stub();
    let err = HandlerContract::new()
        .invoke(&mut ctx, "HandlerExists", &[STATE_BAD.to_string()])
        .unwrap_err();
    assert_eq!(err.to_string(), GET_STATE_ERROR);
}
