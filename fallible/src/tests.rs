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

use crate::{failure, ok, Outcome};

#[test]
fn constructors() {
    let res: Outcome<i32, &str> = ok(1);
    assert!(res.is_ok());
    assert!(!res.is_failure());
    assert_eq!(res.ok(), Some(1));

    let res: Outcome<i32, &str> = failure("error");
    assert!(res.is_failure());
    assert!(!res.is_ok());
    assert_eq!(res.failure(), Some("error"));
}

#[test]
fn predicates_are_exact_complements() {
    for res in [ok::<u8, u8>(1), failure::<u8, u8>(2)] {
        assert_ne!(res.is_ok(), res.is_failure());
    }
}

#[test]
fn none_payload_is_still_ok() {
    // The variant is the discriminant: a success whose payload happens to
    // be `None` classifies as a success.
    let res: Outcome<Option<u8>, &str> = ok(None);
    assert!(res.is_ok());
    assert_eq!(res.ok(), Some(None));
}

#[test]
fn matchers() {
    let res: Outcome<i32, &str> = ok(6);
    assert_eq!(res.match_ref(|v| v * 2, |_| unreachable!()), 12);
    assert_eq!(res.ok_ref(), Some(&6));
    assert_eq!(res.failure_ref(), None);

    let mut res: Outcome<i32, &str> = ok(6);
    res.match_mut(|v| *v += 1, |_| unreachable!());
    assert_eq!(res.ok_mut(), Some(&mut 7));
    assert_eq!(res.match_owned(|v| v, |_| unreachable!()), 7);

    let res: Outcome<i32, &str> = failure("nope");
    assert_eq!(res.match_ref(|_| unreachable!(), |e| e.len()), 4);
    assert_eq!(res.as_ref().failure(), Some(&"nope"));
}

#[test]
fn conversions() {
    let a: core::result::Result<u8, &str> = Ok(8);
    let b: core::result::Result<u8, &str> = Err("boom");
    let a: Outcome<_, _> = a.into();
    let b: Outcome<_, _> = b.into();
    assert_eq!(a, Outcome::Ok(8));
    assert_eq!(b, Outcome::Failure("boom"));
    let a: core::result::Result<u8, &str> = a.into();
    let b: core::result::Result<u8, &str> = b.into();
    assert_eq!(a, Ok(8));
    assert_eq!(b, Err("boom"));
}

#[test]
fn unwraps() {
    let res: Outcome<i32, &str> = ok(3);
    assert_eq!(res.unwrap(), 3);
    assert_eq!(res.unwrap_or_else(|_| 0), 3);
    assert_eq!(unsafe { res.unwrap_unchecked() }, 3);

    let res: Outcome<i32, &str> = failure("bad");
    assert_eq!(res.unwrap_failure(), "bad");
    assert_eq!(res.unwrap_or_else(|e| e.len() as i32), 3);
    assert_eq!(res.unwrap_failure_or_else(|_| ""), "bad");
}

#[test]
#[should_panic(expected = "Outcome::unwrap called on Failure variant")]
fn unwrap_on_failure_panics() {
    let res: Outcome<i32, &str> = failure("bad");
    res.unwrap();
}

#[test]
#[should_panic(expected = "Outcome::unwrap_failure called on Ok variant")]
fn unwrap_failure_on_ok_panics() {
    let res: Outcome<i32, &str> = ok(1);
    res.unwrap_failure();
}

#[cfg(feature = "std")]
#[test]
fn value_semantics() {
    use core::hash::{Hash, Hasher};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let a: Outcome<u8, u8> = ok(1);
    let b = a;
    assert_eq!(a, b.clone());
    // `Ok(x)` and `Failure(x)` carry the same payload but are distinct values.
    assert_ne!(ok::<u8, u8>(1), failure::<u8, u8>(1));
    assert_ne!(hash_of(&ok::<u8, u8>(1)), hash_of(&failure::<u8, u8>(1)));
    assert_eq!(format!("{:?}", ok::<u8, &str>(1)), "Ok(1)");
    assert_eq!(format!("{:?}", failure::<u8, &str>("x")), "Failure(\"x\")");
}
