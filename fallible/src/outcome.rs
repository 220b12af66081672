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

//! Explicit outcomes!

/// The outcome of an operation that may fail.
///
/// The variant itself is the discriminant: a success payload of `()` or
/// `None` is still an unambiguous success, and there is no error value an
/// [`Outcome::Failure`] could carry that would make it classify as anything
/// else.
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Ok(T),
    /// The operation failed with an error.
    Failure(E),
}

/// Creates a success outcome.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates a failure outcome.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        self.match_ref(|ok| Self::Ok(ok.clone()), |err| Self::Failure(err.clone()))
    }
}
impl<T: Copy, E: Copy> Copy for Outcome<T, E> {}
impl<T, E> core::fmt::Debug for Outcome<T, E>
where
    T: core::fmt::Debug,
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Self::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
impl<T, E> core::hash::Hash for Outcome<T, E>
where
    T: core::hash::Hash,
    E: core::hash::Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Ok(value) => {
                true.hash(state);
                value.hash(state);
            }
            Self::Failure(error) => {
                false.hash(state);
                error.hash(state);
            }
        }
    }
}
impl<T, E> core::cmp::PartialEq for Outcome<T, E>
where
    T: core::cmp::PartialEq,
    E: core::cmp::PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ok(a), Self::Ok(b)) => a.eq(b),
            (Self::Failure(a), Self::Failure(b)) => a.eq(b),
            _ => false,
        }
    }
}
impl<T, E> core::cmp::Eq for Outcome<T, E>
where
    T: core::cmp::Eq,
    E: core::cmp::Eq,
{
}
impl<T, E> From<core::result::Result<T, E>> for Outcome<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Failure(error),
        }
    }
}
impl<T, E> From<Outcome<T, E>> for core::result::Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.match_owned(Ok, Err)
    }
}
impl<T, E> Outcome<T, E> {
    /// Returns `true` if in the `Ok` variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
    /// Returns `true` if in the `Failure` variant.
    pub fn is_failure(&self) -> bool {
        !self.is_ok()
    }
    /// Converts to an outcome of immutable references to the variants.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        self.match_ref(Outcome::Ok, Outcome::Failure)
    }
    /// Converts to an outcome of mutable references to the variants.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        self.match_mut(Outcome::Ok, Outcome::Failure)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref<'a, U, FnOk: FnOnce(&'a T) -> U, FnFailure: FnOnce(&'a E) -> U>(
        &'a self,
        ok: FnOk,
        failure: FnFailure,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Failure(error) => failure(error),
        }
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut<'a, U, FnOk: FnOnce(&'a mut T) -> U, FnFailure: FnOnce(&'a mut E) -> U>(
        &'a mut self,
        ok: FnOk,
        failure: FnFailure,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Failure(error) => failure(error),
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnOk: FnOnce(T) -> U, FnFailure: FnOnce(E) -> U>(
        self,
        ok: FnOk,
        failure: FnFailure,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Failure(error) => failure(error),
        }
    }
    /// Returns the success value if it exists, `None` otherwise.
    pub fn ok(self) -> Option<T> {
        self.match_owned(Some, |_| None)
    }
    /// Returns the error value if it exists, `None` otherwise.
    pub fn failure(self) -> Option<E> {
        self.match_owned(|_| None, Some)
    }
    /// Returns the success value by reference if it exists, `None` otherwise.
    pub fn ok_ref(&self) -> Option<&T> {
        self.match_ref(Some, |_| None)
    }
    /// Returns the error value by reference if it exists, `None` otherwise.
    pub fn failure_ref(&self) -> Option<&E> {
        self.match_ref(|_| None, Some)
    }
    /// Returns the success value by mutable reference if it exists, `None` otherwise.
    pub fn ok_mut(&mut self) -> Option<&mut T> {
        self.match_mut(Some, |_| None)
    }
    /// Returns the error value by mutable reference if it exists, `None` otherwise.
    pub fn failure_mut(&mut self) -> Option<&mut E> {
        self.match_mut(|_| None, Some)
    }
    /// Returns the success value if applicable, calling `f` on the error otherwise.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.match_owned(|x| x, f)
    }
    /// # Safety
    /// Called on a `Failure`, this triggers Undefined Behaviour.
    pub unsafe fn unwrap_unchecked(self) -> T {
        self.unwrap_or_else(|_| unsafe { core::hint::unreachable_unchecked() })
    }
    /// # Panics
    /// If `!self.is_ok()`
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("Outcome::unwrap called on Failure variant: {e:?}"))
    }
    /// Returns the error value if applicable, calling `f` on the success value otherwise.
    pub fn unwrap_failure_or_else<F: FnOnce(T) -> E>(self, f: F) -> E {
        self.match_owned(f, |x| x)
    }
    /// # Safety
    /// Called on an `Ok`, this triggers Undefined Behaviour.
    pub unsafe fn unwrap_failure_unchecked(self) -> E {
        self.unwrap_failure_or_else(|_| unsafe { core::hint::unreachable_unchecked() })
    }
    /// # Panics
    /// If `!self.is_failure()`
    pub fn unwrap_failure(self) -> E
    where
        T: core::fmt::Debug,
    {
        self.unwrap_failure_or_else(|v| panic!("Outcome::unwrap_failure called on Ok variant: {v:?}"))
    }
}
