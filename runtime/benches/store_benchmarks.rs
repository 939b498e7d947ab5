//! Store Performance Benchmarks
//!
//! These benchmarks validate that the core abstractions stay cheap enough
//! to run inside an interactive render loop:
//! - Reducer execution: < 1μs (pure in-memory operations)
//! - Store throughput: > 100k actions/sec
//! - Effect overhead: minimal (dispatch feedback vs none)
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(dead_code)] // Benchmark data structures may have unused fields

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use taskdeck_core::{Effect, Effects, Reducer, smallvec};
use taskdeck_runtime::Store;

// Test state
#[derive(Clone, Debug)]
struct BenchState {
    counter: i64,
    data: Vec<u8>, // For testing state size impact
}

impl Default for BenchState {
    fn default() -> Self {
        Self {
            counter: 0,
            data: vec![0; 1024], // 1KB of data
        }
    }
}

// Test actions
#[derive(Clone, Debug)]
enum BenchAction {
    Increment,
    Decrement,
    Reset,
    SetValue(i64),
    Cascade,
    NoOp,
}

// Test environment
#[derive(Clone, Debug)]
struct BenchEnv;

// Test reducer
#[derive(Clone)]
struct BenchReducer;

impl Reducer for BenchReducer {
    type State = BenchState;
    type Action = BenchAction;
    type Environment = BenchEnv;
    type Error = std::convert::Infallible;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> Result<Effects<Self::Action>, Self::Error> {
        match action {
            BenchAction::Increment => {
                state.counter += 1;
                Ok(smallvec![Effect::None])
            },
            BenchAction::Decrement => {
                state.counter -= 1;
                Ok(smallvec![Effect::None])
            },
            BenchAction::Reset => {
                state.counter = 0;
                Ok(smallvec![Effect::None])
            },
            BenchAction::SetValue(v) => {
                state.counter = v;
                Ok(smallvec![Effect::None])
            },
            BenchAction::Cascade => {
                state.counter += 1;
                Ok(smallvec![Effect::dispatch(BenchAction::NoOp)])
            },
            BenchAction::NoOp => Ok(smallvec![Effect::None]),
        }
    }
}

/// Benchmark reducer execution in isolation (no Store overhead)
fn benchmark_reducer_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");
    group.throughput(Throughput::Elements(1));

    let reducer = BenchReducer;
    let env = BenchEnv;

    group.bench_function("increment", |b| {
        let mut state = BenchState::default();
        b.iter(|| {
            let _effects = reducer.reduce(&mut state, black_box(BenchAction::Increment), &env);
        });
    });

    group.bench_function("set_value", |b| {
        let mut state = BenchState::default();
        b.iter(|| {
            let _effects = reducer.reduce(&mut state, black_box(BenchAction::SetValue(42)), &env);
        });
    });

    group.finish();
}

/// Benchmark Store throughput (actions/sec)
fn benchmark_store_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_throughput");
    group.throughput(Throughput::Elements(1));

    group.bench_function("send_action", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, BenchEnv);

        b.iter(|| {
            let _ = store.send(black_box(BenchAction::Increment));
        });
    });

    group.bench_function("send_and_read_state", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, BenchEnv);

        b.iter(|| {
            let _ = store.send(black_box(BenchAction::Increment));
            let _value = store.state(|s| s.counter);
        });
    });

    group.finish();
}

/// Benchmark effect execution overhead
fn benchmark_effect_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("effect_overhead");
    group.throughput(Throughput::Elements(1));

    group.bench_function("effect_none", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, BenchEnv);

        b.iter(|| {
            let _ = store.send(black_box(BenchAction::NoOp));
        });
    });

    group.bench_function("effect_dispatch", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, BenchEnv);

        b.iter(|| {
            let _ = store.send(black_box(BenchAction::Cascade));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_reducer_execution,
    benchmark_store_throughput,
    benchmark_effect_overhead,
);
criterion_main!(benches);
