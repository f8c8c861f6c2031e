#![allow(dead_code)]

use std::io::Cursor;

use handler_chaincode::{Chaincode, Response, ServeSummary, StdioTransport};
use handler_hostapi::MemStore;

/// Feed `lines` to a fresh transport and serve them against `store`.
pub fn serve_lines(chaincode: &Chaincode, store: &mut MemStore, lines: &[&str]) -> (ServeSummary, Vec<Response>) {
    let mut input = lines.join("\n");
    input.push('\n');
    serve_bytes(chaincode, store, input.into_bytes())
}

/// Serve raw transport input against `store`.
pub fn serve_bytes(chaincode: &Chaincode, store: &mut MemStore, input: Vec<u8>) -> (ServeSummary, Vec<Response>) {
    let mut transport = StdioTransport::new(Cursor::new(input), Vec::new());

    let summary = chaincode.start(store, &mut transport).unwrap();

    let (_, output) = transport.into_inner();
    let responses = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (summary, responses)
}

/// Serve `lines` against an empty store with the default chaincode.
pub fn serve(lines: &[&str]) -> (ServeSummary, Vec<Response>, MemStore) {
    let mut store = MemStore::new();
    let (summary, responses) = serve_lines(&Chaincode::default(), &mut store, lines);
    (summary, responses, store)
}
