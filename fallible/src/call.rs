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

//! Parameter lists as tuples, so a single generic signature can wrap a
//! callable of any arity.

/// A callable whose parameter list is encoded as the tuple `Args`.
///
/// Implemented for all `Fn` closures and function pointers of up to 9
/// arguments. The function-wrapping adapters rely on this to forward any
/// parameter list, in order, through one generic signature: their produced
/// callables take the argument tuple itself.
pub trait Call<Args> {
    /// The callable's return type.
    type Output;
    /// Invokes the callable, forwarding `args` in order.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! impl_call {
    ($($ty: ident $arg: ident),*) => {
        impl<O, $($ty,)* F: Fn($($ty),*) -> O> Call<($($ty,)*)> for F {
            type Output = O;
            fn call(&self, ($($arg,)*): ($($ty,)*)) -> O {
                self($($arg),*)
            }
        }
    };
}
impl_call!();
impl_call!(I0 _0);
impl_call!(I0 _0, I1 _1);
impl_call!(I0 _0, I1 _1, I2 _2);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3, I4 _4);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3, I4 _4, I5 _5);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3, I4 _4, I5 _5, I6 _6);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3, I4 _4, I5 _5, I6 _6, I7 _7);
impl_call!(I0 _0, I1 _1, I2 _2, I3 _3, I4 _4, I5 _5, I6 _6, I7 _7, I8 _8);
