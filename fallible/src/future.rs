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

//! Deferred outcomes: futures that absorb panics instead of leaking them.

use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::adapter::Thrown;
use crate::call::Call;
use crate::outcome::Outcome;

enum State<F> {
    /// The thunk panicked before yielding a future.
    Thrown(Thrown),
    /// The wrapped future is still being driven.
    Pending(F),
    /// The outcome has been handed out.
    Complete,
}

/// A deferred [`Outcome`]: resolves to [`Outcome::Ok`] if the wrapped future
/// does, to [`Outcome::Failure`] if the thunk or any `poll` of the wrapped
/// future panics.
///
/// Rejection is fully absorbed: `poll` itself never unwinds on behalf of the
/// wrapped code, so awaiting this future cannot fail.
pub struct DeferredOutcome<F> {
    state: State<F>,
}

/// A deferred [`Outcome`] whose caught payload is mapped through a transform
/// on resolution.
///
/// The transform runs outside the catch: if it panics, the panic unwinds
/// into whoever is polling.
pub struct DeferredOutcomeWith<F, M> {
    inner: DeferredOutcome<F>,
    transform: Option<M>,
}

/// Invokes a future-returning thunk that may panic, deferring the
/// classification until the future settles.
///
/// The thunk itself is invoked here and now: a panic raised before any
/// future exists is caught immediately and resolves the returned
/// [`DeferredOutcome`] on its first poll. Awaiting the wrapped future
/// remains as lazy as any other future.
pub fn from_async_try_catch<F, Fut>(f: F) -> DeferredOutcome<Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    DeferredOutcome {
        state: match catch_unwind(AssertUnwindSafe(f)) {
            Ok(future) => State::Pending(future),
            Err(thrown) => State::Thrown(thrown),
        },
    }
}

/// Like [`from_async_try_catch`], mapping the caught payload through
/// `transform` when the deferred outcome resolves.
pub fn from_async_try_catch_with<E, F, Fut, M>(f: F, transform: M) -> DeferredOutcomeWith<Fut, M>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    M: FnOnce(Thrown) -> E,
{
    DeferredOutcomeWith {
        inner: from_async_try_catch(f),
        transform: Some(transform),
    }
}

/// Makes an asynchronous callable that may panic safe by wrapping it.
///
/// The returned callable takes `f`'s parameter list as a tuple; each call
/// invokes `f` with those arguments and yields its own independent
/// [`DeferredOutcome`]. Calls may run repeatedly and concurrently.
pub fn from_async_throwable<Args, F, Fut>(f: F) -> impl Fn(Args) -> DeferredOutcome<Fut>
where
    F: Call<Args, Output = Fut>,
    Fut: Future,
{
    move |args| from_async_try_catch(|| f.call(args))
}

/// Like [`from_async_throwable`], with a transform cloned into each call's
/// deferred [`Outcome`].
pub fn from_async_throwable_with<Args, E, F, Fut, M>(
    f: F,
    transform: M,
) -> impl Fn(Args) -> DeferredOutcomeWith<Fut, M>
where
    F: Call<Args, Output = Fut>,
    Fut: Future,
    M: Clone + FnOnce(Thrown) -> E,
{
    move |args| from_async_try_catch_with(|| f.call(args), transform.clone())
}

impl<F: Future> Future for DeferredOutcome<F> {
    type Output = Outcome<F::Output, Thrown>;
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // The wrapped future is the only structurally pinned state; it is
        // never moved once it has been polled.
        let this = unsafe { self.get_unchecked_mut() };
        if let State::Pending(future) = &mut this.state {
            let polled = {
                let future = unsafe { Pin::new_unchecked(future) };
                catch_unwind(AssertUnwindSafe(move || future.poll(cx)))
            };
            return match polled {
                Ok(Poll::Pending) => Poll::Pending,
                Ok(Poll::Ready(value)) => {
                    this.state = State::Complete;
                    Poll::Ready(Outcome::Ok(value))
                }
                // The broken future stays in place until the wrapper drops;
                // it is not polled again.
                Err(thrown) => Poll::Ready(Outcome::Failure(thrown)),
            };
        }
        match mem::replace(&mut this.state, State::Complete) {
            State::Thrown(thrown) => Poll::Ready(Outcome::Failure(thrown)),
            State::Complete => panic!("DeferredOutcome polled after completion"),
            State::Pending(_) => unreachable!(),
        }
    }
}

impl<E, F: Future, M: FnOnce(Thrown) -> E> Future for DeferredOutcomeWith<F, M> {
    type Output = Outcome<F::Output, E>;
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = unsafe { self.get_unchecked_mut() };
        let inner = unsafe { Pin::new_unchecked(&mut this.inner) };
        match inner.poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Outcome::Ok(value)) => Poll::Ready(Outcome::Ok(value)),
            Poll::Ready(Outcome::Failure(thrown)) => match this.transform.take() {
                Some(transform) => Poll::Ready(Outcome::Failure(transform(thrown))),
                None => panic!("DeferredOutcomeWith polled after completion"),
            },
        }
    }
}
