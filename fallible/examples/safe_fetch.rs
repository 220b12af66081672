//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Hand-built classification of a multi-stage fallible operation: every
//! stage of the "fetch" maps to its own typed failure, and the caller gets
//! one outcome to match on.

use std::time::Duration;

use fallible::{failure, ok, Outcome};

#[derive(Debug)]
enum FetchError {
    Request { message: String, status: u16 },
    InvalidJson,
    Other,
}

struct Response {
    status: u16,
    status_text: &'static str,
    body: String,
}

/// A stand-in transport: resolves the one URL it knows about, 404s the rest.
async fn fetch(url: &str) -> std::io::Result<Response> {
    smol::Timer::after(Duration::from_millis(10)).await;
    if url == "https://jsonplaceholder.typicode.com/todos/1" {
        Ok(Response {
            status: 200,
            status_text: "OK",
            body: r#"{"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}"#
                .to_owned(),
        })
    } else {
        Ok(Response {
            status: 404,
            status_text: "Not Found",
            body: String::new(),
        })
    }
}

async fn safe_fetch(url: &str) -> Outcome<serde_json::Value, FetchError> {
    let response = match fetch(url).await {
        Ok(response) => response,
        Err(_) => return failure(FetchError::Other),
    };
    if response.status != 200 {
        return failure(FetchError::Request {
            message: response.status_text.to_owned(),
            status: response.status,
        });
    }
    match serde_json::from_str(&response.body) {
        Ok(data) => ok(data),
        Err(_) => failure(FetchError::InvalidJson),
    }
}

fn main() {
    smol::block_on(async {
        let res = safe_fetch("https://jsonplaceholder.typicode.com/todos/1").await;
        res.match_ref(
            |data| println!("fetched: {data}"),
            |err| println!("failed: {err:?}"),
        );

        let res = safe_fetch("https://jsonplaceholder.typicode.com/todos/9999").await;
        res.match_ref(
            |data| println!("fetched: {data}"),
            |err| println!("failed: {err:?}"),
        );
    });
}
