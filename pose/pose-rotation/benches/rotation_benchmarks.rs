//! Benchmarks for pose-rotation conversions.
//!
//! Run with: cargo bench -p pose-rotation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nalgebra::{Vector3, Vector4};
use pose_rotation::{RotationConverter, quaternions_to_matrices, rotation_vectors_to_matrices};
use pose_types::{Batch, RotationTensor};

// =============================================================================
// Input Generation
// =============================================================================

/// Deterministic rotation vectors with angles spread over `[0, π)`, including
/// a share below the small-angle threshold.
#[allow(clippy::cast_precision_loss)]
fn make_rotvecs(batch: usize, joints: usize) -> Batch<Vector3<f64>> {
    let data = (0..batch * joints)
        .map(|i| {
            let t = i as f64;
            let scale = if i % 7 == 0 { 1e-8 } else { 1.0 };
            Vector3::new((t * 0.37).sin(), (t * 0.11).cos(), (t * 0.05).sin()) * scale
        })
        .collect();
    Batch::new(vec![batch, joints], data).unwrap_or_else(|_| Batch::from_vec(Vec::new()))
}

#[allow(clippy::cast_precision_loss)]
fn make_quats(batch: usize, joints: usize) -> Batch<Vector4<f64>> {
    let data = (0..batch * joints)
        .map(|i| {
            let t = i as f64;
            Vector4::new(
                1.0 + t.cos(),
                (t * 0.3).sin(),
                (t * 0.7).cos(),
                (t * 0.2).sin(),
            )
        })
        .collect();
    Batch::new(vec![batch, joints], data).unwrap_or_else(|_| Batch::from_vec(Vec::new()))
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("RotationConversion");

    for batch in [1_usize, 64, 1024] {
        let rotvecs = make_rotvecs(batch, 15);
        let quats = make_quats(batch, 15);

        group.throughput(Throughput::Elements((batch * 15) as u64));

        let id = BenchmarkId::new("rotvec_to_rotmat", batch);
        group.bench_with_input(id, &rotvecs, |b, v| {
            b.iter(|| rotation_vectors_to_matrices(black_box(v)));
        });

        let id = BenchmarkId::new("quat_to_rotmat", batch);
        group.bench_with_input(id, &quats, |b, q| {
            b.iter(|| quaternions_to_matrices(black_box(q)));
        });
    }

    group.finish();
}

fn bench_converter_dispatch(c: &mut Criterion) {
    let Ok(converter) = RotationConverter::<f64>::from_name("rotvec") else {
        return;
    };
    let input = RotationTensor::RotationVector(make_rotvecs(64, 15));

    c.bench_function("converter_rotvec_64x15", |b| {
        b.iter(|| converter.convert(black_box(&input)));
    });
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_conversions, bench_converter_dispatch);
criterion_main!(benches);
