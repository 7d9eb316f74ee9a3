use antidiag::{Matrix, anti_diagonal_naive};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anti_diagonal");

    for (rows, cols) in [(64, 64), (256, 256), (1024, 64), (64, 1024)] {
        let matrix = Matrix::from_row_major(
            (0..rows * cols).map(|i| (i % 100) as f64).collect(),
            rows,
            cols,
        )
        .unwrap();
        let label = format!("{}x{}", rows, cols);

        group.bench_with_input(BenchmarkId::new("lazy", &label), &matrix, |b, m| {
            b.iter(|| black_box(m).anti_diagonals().sum::<f64>())
        });
        group.bench_with_input(BenchmarkId::new("naive", &label), &matrix, |b, m| {
            b.iter(|| anti_diagonal_naive(black_box(m)).iter().sum::<f64>())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
