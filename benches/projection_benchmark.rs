use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use patentnet::{
    impute_gender, project_onto_inventors, GenderClassifier, NameLexicon, NormalizationContext,
    RawInventor, RawPatentRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 6] = ["John", "Mary", "Kim", "Wei", "Ashley", "Zorblax"];

/// Synthetic record set: `patents` patents drawn over a pool of inventors
fn synthetic_records(patents: usize, inventors: usize, seed: u64) -> Vec<RawPatentRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..patents)
        .map(|p| {
            let team = rng.gen_range(1..=6);
            RawPatentRecord {
                patent_number: Some(format!("{}", 7_000_000 + p)),
                inventors: (0..team)
                    .map(|_| {
                        let i = rng.gen_range(0..inventors);
                        RawInventor {
                            inventor_id: Some(format!("inv-{}", i)),
                            inventor_first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
                            inventor_last_name: format!("Family{}", i),
                        }
                    })
                    .collect(),
                ..RawPatentRecord::default()
            }
        })
        .collect()
}

/// Benchmark normalization plus bipartite construction
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let classifier = GenderClassifier::new(NameLexicon::builtin().unwrap());

    for size in [1_000, 10_000].iter() {
        let records = synthetic_records(*size, size / 3, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let mut context = NormalizationContext::new(&classifier);
                context.ingest_all(records).unwrap();
                context.into_bipartite().unwrap()
            });
        });
    }
    group.finish();
}

/// Benchmark weighted projection onto the inventor layer
fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let classifier = GenderClassifier::new(NameLexicon::builtin().unwrap());

    for size in [1_000, 10_000].iter() {
        let records = synthetic_records(*size, size / 3, 11);
        let mut context = NormalizationContext::new(&classifier);
        context.ingest_all(&records).unwrap();
        let bipartite = context.into_bipartite().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &bipartite, |b, bipartite| {
            b.iter(|| project_onto_inventors(bipartite).unwrap());
        });
    }
    group.finish();
}

/// Benchmark gender imputation
fn bench_imputation(c: &mut Criterion) {
    let classifier = GenderClassifier::new(NameLexicon::builtin().unwrap());
    let records = synthetic_records(10_000, 3_000, 13);
    let mut context = NormalizationContext::new(&classifier);
    context.ingest_all(&records).unwrap();
    let graph = project_onto_inventors(&context.into_bipartite().unwrap()).unwrap();

    c.bench_function("imputation_10k", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            let mut g = graph.clone();
            impute_gender(&mut g, &mut rng).unwrap()
        });
    });
}

criterion_group!(benches, bench_normalize, bench_projection, bench_imputation);
criterion_main!(benches);
