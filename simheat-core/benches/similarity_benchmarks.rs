use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use simheat_core::config::FilterConfig;
use simheat_core::filter::{similarity_filter, similarity_filter_with};
use simheat_core::similarity::pairwise_cosine_similarity;
use simheat_core::vector::{Embedding, Label};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIM: usize = 384; // Typical sentence-embedding width

// --- Data Generation Helper Functions ---

fn generate_random_vector(dim: usize, rng: &mut StdRng) -> Embedding {
    let vec: Vec<f32> = (0..dim).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect(); // Values between -1 and 1
    vec.into()
}

fn generate_label(i: usize) -> Label {
    format!("item_{}", i)
}

fn generate_test_data(n: usize, dim: usize, seed: u64) -> (Vec<Embedding>, Vec<Label>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| (generate_random_vector(dim, &mut rng), generate_label(i)))
        .unzip()
}

// --- Benchmark Functions ---

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_cosine");

    for n in [50usize, 200, 800].iter() {
        let (embeddings, _) = generate_test_data(*n, DIM, 1);
        group.throughput(Throughput::Elements((*n * *n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &embeddings, |b, e| {
            b.iter(|| pairwise_cosine_similarity(black_box(e), black_box(e)).unwrap());
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_filter");

    for n in [50usize, 200, 800].iter() {
        let (embeddings, labels) = generate_test_data(*n, DIM, 2);
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::new("self", n), &(), |b, _| {
            b.iter(|| {
                similarity_filter(&embeddings, &embeddings, &labels, &labels, black_box(0.1)).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("independent", n), &(), |b, _| {
            let config = FilterConfig::new(0.1);
            b.iter(|| {
                similarity_filter_with(&embeddings, &embeddings, &labels, &labels, black_box(&config))
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_filter);
criterion_main!(benches);
