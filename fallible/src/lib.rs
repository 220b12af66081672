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

//! Explicit outcomes for code that may panic!
//!
//! [`Outcome`] is a two-variant value for operations whose failure would
//! otherwise unwind, and the `from_*` adapters bridge panicking code into it:
//! a panic raised by a wrapped call is caught and classified as
//! [`Outcome::Failure`], never re-raised.
//!
//! ```
//! use fallible::{from_throwable_with, Outcome};
//!
//! let parse = from_throwable_with(
//!     |text: &str| serde_json::from_str::<serde_json::Value>(text).unwrap(),
//!     |_| "Oh no, parsing error",
//! );
//! assert!(parse((r#"{"a": 1}"#,)).is_ok());
//! assert_eq!(parse((r#"{"a": 1"#,)).failure(), Some("Oh no, parsing error"));
//! ```
//!
//! The `std` feature (on by default) carries the adapters; without it, only
//! the representation layer remains.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod call;
pub mod outcome;

#[cfg(feature = "std")]
pub mod adapter;
#[cfg(feature = "std")]
pub mod future;

pub use crate::call::Call;
pub use crate::outcome::{failure, ok, Outcome};

#[cfg(feature = "std")]
pub use crate::adapter::{
    from_throwable, from_throwable_with, from_try_catch, from_try_catch_with, Thrown,
};
#[cfg(feature = "std")]
pub use crate::future::{
    from_async_throwable, from_async_throwable_with, from_async_try_catch,
    from_async_try_catch_with, DeferredOutcome, DeferredOutcomeWith,
};

#[cfg(test)]
mod tests;
