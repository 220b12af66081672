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

//! Adapters that pull panicking synchronous calls into [`Outcome`]s.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::call::Call;
use crate::outcome::Outcome;

/// The opaque payload captured from a caught panic.
///
/// This is whatever the panicking code handed to the unwind: a `&'static str`
/// or `String` for message panics, the exact value for
/// [`panic_any`](std::panic::panic_any). Downcast it to inspect.
pub type Thrown = Box<dyn Any + Send + 'static>;

/// Invokes a thunk that may panic, classifying the call into an [`Outcome`].
///
/// The thunk runs in the caller's context. A normal return becomes
/// [`Outcome::Ok`]; an unwind is caught and becomes [`Outcome::Failure`]
/// carrying the raw payload. Exactly one of the two happens: no panic raised
/// by the thunk escapes, and no bare value is returned outside an outcome.
pub fn from_try_catch<T, F: FnOnce() -> T>(f: F) -> Outcome<T, Thrown> {
    // The thunk is consumed by this single call: nothing is re-entered
    // after an unwind, so no `UnwindSafe` bound is forced on callers.
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(thrown) => Outcome::Failure(thrown),
    }
}

/// Like [`from_try_catch`], mapping the caught payload through `transform`.
///
/// `transform` runs outside the catch: if it panics, that panic unwinds to
/// the caller rather than being folded into the returned [`Outcome`].
/// Transforms are trusted not to fail.
pub fn from_try_catch_with<T, E, F: FnOnce() -> T, M: FnOnce(Thrown) -> E>(
    f: F,
    transform: M,
) -> Outcome<T, E> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(thrown) => Outcome::Failure(transform(thrown)),
    }
}

/// Makes a synchronous callable that may panic safe by wrapping it.
///
/// The returned callable takes `f`'s parameter list as a tuple and behaves,
/// call for call, exactly as [`from_try_catch`] over `f` applied to those
/// arguments. Calls are independent: the wrapper holds no state, and a
/// caught panic in one call does not affect the next.
pub fn from_throwable<Args, F: Call<Args>>(f: F) -> impl Fn(Args) -> Outcome<F::Output, Thrown> {
    move |args| from_try_catch(|| f.call(args))
}

/// Like [`from_throwable`], mapping every caught payload through `transform`.
pub fn from_throwable_with<Args, E, F: Call<Args>, M: Fn(Thrown) -> E>(
    f: F,
    transform: M,
) -> impl Fn(Args) -> Outcome<F::Output, E> {
    move |args| from_try_catch_with(|| f.call(args), &transform)
}
