//! Bounded log lines from ordinary serde types, with a redacting replacer.
//!
//! Run with: cargo run --example log_context

use serde::Serialize;
use snug_json::{to_string_with_options, FormatOptions, Value};

#[derive(Serialize)]
struct Request {
    method: String,
    path: String,
    token: String,
    body: Vec<u32>,
    attempts: u32,
}

fn redact(key: &str, value: &Value) -> Value {
    if key == "token" {
        Value::from("[REDACTED]")
    } else {
        value.clone()
    }
}

fn main() {
    let request = Request {
        method: "POST".to_string(),
        path: "/v1/ingest".to_string(),
        token: "super-secret-bearer-token".to_string(),
        body: (0..500).collect(),
        attempts: 3,
    };

    let options = FormatOptions::new()
        .with_max_length(120)
        .with_max_array_length(4)
        .with_replacer(redact);

    match to_string_with_options(&request, options) {
        Ok(Some(line)) => println!("request={line}"),
        Ok(None) => println!("request=(absent)"),
        Err(err) => eprintln!("could not format request: {err}"),
    }
}
