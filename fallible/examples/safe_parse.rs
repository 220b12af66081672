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

use fallible::from_throwable_with;

fn main() {
    let safe_json_parse = from_throwable_with(
        |text: &str| serde_json::from_str::<serde_json::Value>(text).unwrap(),
        |_| "Oh no, parsing error",
    );

    let ok_res = safe_json_parse((r#"{"a": 1}"#,));
    println!("{ok_res:?}");

    let failure_res = safe_json_parse((r#"{"a": 1"#,));
    println!("{failure_res:?}");
}
