use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use lanealign::{Aligner, BatchAligner, Config, MatrixScoreModel, Method, Scoring};

fn gen_sequences(count: usize, mean_len: f64, alphabet: &[u8], seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let len_dist = Normal::new(mean_len, mean_len / 4.0).unwrap();
    (0..count)
        .map(|_| {
            let len = len_dist.sample(&mut rng).max(1.0) as usize;
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect()
}

fn gen_pairs(count: usize, mean_len: f64, alphabet: &[u8], seed: u64) -> Vec<(Vec<u8>, Vec<u8>)> {
    let seqs1 = gen_sequences(count, mean_len, alphabet, seed);
    let seqs2 = gen_sequences(count, mean_len, alphabet, seed + 1);
    seqs1.into_iter().zip(seqs2).collect()
}

fn dna_configs() -> [(&'static str, Config); 2] {
    [
        ("global", Scoring::default().into()),
        (
            "local",
            Scoring {
                method: Method::local(),
                ..Scoring::default()
            }
            .into(),
        ),
    ]
}

fn scalar_bench(c: &mut Criterion) {
    let pairs = gen_pairs(64, 150.0, b"ACGT", 42);
    let mut group = c.benchmark_group("scalar");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    for (name, config) in dna_configs() {
        let aligner = Aligner::<i32>::new(config).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                for (seq1, seq2) in pairs.iter() {
                    black_box(aligner.compute(black_box(seq1), black_box(seq2)));
                }
            })
        });
    }
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let pairs = gen_pairs(1024, 150.0, b"ACGT", 7);
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    for (name, config) in dna_configs() {
        let i16_aligner = BatchAligner::<i16>::new(config.clone()).unwrap();
        group.bench_function(BenchmarkId::new(name, "i16"), |b| {
            b.iter(|| black_box(i16_aligner.compute_all(black_box(&pairs)).unwrap()))
        });

        let i32_aligner = BatchAligner::<i32>::new(config.clone()).unwrap();
        group.bench_function(BenchmarkId::new(name, "i32"), |b| {
            b.iter(|| black_box(i32_aligner.compute_all(black_box(&pairs)).unwrap()))
        });

        #[cfg(feature = "parallel")]
        group.bench_function(BenchmarkId::new(name, "i16 parallel"), |b| {
            b.iter(|| black_box(i16_aligner.par_compute_all(black_box(&pairs)).unwrap()))
        });
    }

    let local = BatchAligner::<i8>::new(dna_configs()[1].1.clone()).unwrap();
    group.bench_function(BenchmarkId::new("local", "i8"), |b| {
        b.iter(|| black_box(local.compute_all(black_box(&pairs)).unwrap()))
    });
    group.finish();
}

fn one_to_many_bench(c: &mut Criterion) {
    let query = gen_sequences(1, 300.0, b"ARNDCQEGHILKMFPSTWYV", 1).remove(0);
    let config = Config {
        score_model: MatrixScoreModel::blosum62().into(),
        method: Method::local(),
        ..Config::default()
    };
    let aligner = BatchAligner::<i16>::new(config).unwrap();
    let targets = gen_sequences(aligner.lanes(), 300.0, b"ARNDCQEGHILKMFPSTWYV", 2)
        .into_iter()
        .map(Some)
        .collect::<Vec<_>>();
    let pairs = targets
        .iter()
        .flatten()
        .map(|target| Some((query.as_slice(), target.as_slice())))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("protein");
    group.bench_function("profile", |b| {
        b.iter(|| black_box(aligner.compute_one_to_many(&query, black_box(&targets)).unwrap()))
    });
    group.bench_function("pairs", |b| {
        b.iter(|| black_box(aligner.compute(black_box(&pairs)).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, scalar_bench, batch_bench, one_to_many_bench);
criterion_main!(benches);
