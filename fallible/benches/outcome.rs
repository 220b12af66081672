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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fallible::{from_throwable, from_try_catch, Outcome};
use rand::{Rng, SeedableRng};

const N: usize = 100000;

fn bench_outcomes(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let safe = (0..N)
        .map(|_| (rng.gen_range(0..=100u32), rng.gen_range(1..=5u32)))
        .collect::<Vec<_>>();
    let mixed = (0..N)
        .map(|_| (rng.gen_range(0..=100u32), rng.gen_range(0..=5u32)))
        .collect::<Vec<_>>();

    // Baseline: classifying with core's Result, no unwind machinery involved.
    c.bench_function("checked_div_result", |b| {
        b.iter(|| {
            let mut result = 0u64;
            for (a, d) in &safe {
                match a.checked_div(*d) {
                    Some(v) => result += v as u64,
                    None => {}
                }
            }
            black_box(result);
        });
    });
    // Same classification through Outcome's conversions and matchers.
    c.bench_function("checked_div_outcome", |b| {
        b.iter(|| {
            let mut result = 0u64;
            for (a, d) in &safe {
                let res: Outcome<u32, ()> = a.checked_div(*d).ok_or(()).into();
                res.match_ref(|v| result += *v as u64, |_| ());
            }
            black_box(result);
        });
    });
    // What arming catch_unwind costs on every call when nothing panics.
    c.bench_function("try_catch_ok_path", |b| {
        b.iter(|| {
            let mut result = 0u64;
            for (a, d) in &safe {
                if let Some(v) = from_try_catch(|| a / d).ok() {
                    result += v as u64;
                }
            }
            black_box(result);
        });
    });
    // The wrapped form over the same inputs.
    c.bench_function("throwable_ok_path", |b| {
        let div = from_throwable(|a: u32, d: u32| a / d);
        b.iter(|| {
            let mut result = 0u64;
            for (a, d) in &safe {
                if let Some(v) = div((*a, *d)).ok() {
                    result += v as u64;
                }
            }
            black_box(result);
        });
    });
    // Roughly one call in six unwinds here; this is the degenerate case the
    // adapters exist for, not a path worth optimizing around.
    c.bench_function("throwable_panic_path", |b| {
        std::panic::set_hook(Box::new(|_| {}));
        let div = from_throwable(|a: u32, d: u32| a / d);
        b.iter(|| {
            let mut result = 0u64;
            for (a, d) in &mixed {
                if let Some(v) = div((*a, *d)).ok() {
                    result += v as u64;
                }
            }
            black_box(result);
        });
        let _ = std::panic::take_hook();
    });
}

criterion_group!(benches, bench_outcomes);
criterion_main!(benches);
