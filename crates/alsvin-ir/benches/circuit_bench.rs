//! Benchmarks for Alsvin circuit operations
//!
//! Run with: cargo bench -p alsvin-ir

use alsvin_ir::{Circuit, QubitId};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

/// Benchmark appending validated gates
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("rz_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit
                .rz(black_box(PI / 4.0), black_box(QubitId(0)))
                .unwrap();
        });
    });

    group.bench_function("rx_pi_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit.rx_pi(black_box(1), black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("cz_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit
                .cz(black_box(QubitId(0)), black_box(QubitId(1)))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark building a layered cost/mixer circuit, the rebuild that
/// happens on every objective-function evaluation
fn bench_layered_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_circuit");

    for num_qubits in &[2u32, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("build", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut circuit = Circuit::with_size("layered", n, n);
                    for q in 0..n {
                        circuit.h(QubitId(q)).unwrap();
                    }
                    for q in 0..n - 1 {
                        circuit.cx(QubitId(q), QubitId(q + 1)).unwrap();
                        circuit.rz(0.3, QubitId(q + 1)).unwrap();
                        circuit.cx(QubitId(q), QubitId(q + 1)).unwrap();
                    }
                    for q in 0..n {
                        circuit.rx(0.7, QubitId(q)).unwrap();
                    }
                    circuit.barrier_all().unwrap();
                    circuit.measure_all().unwrap();
                    black_box(circuit)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_gate_addition, bench_layered_circuit);

criterion_main!(benches);
