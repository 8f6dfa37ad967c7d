//! Benchmarks for IBAN and BIC validation
//!
//! Run with: cargo bench --bench validation_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iban_tools::{Bic, Iban};

/// Benchmark for the full IBAN validation pipeline
fn bench_iban_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("iban_validation");

    // A variety of registry countries and lengths
    let ibans = vec![
        "NO9386011117947",                   // shortest published length
        "GB82WEST12345698765432",            // letters in the BBAN
        "DE89370400440532013000",            // digits-only BBAN
        "FR1420041010050500013M02606",       // mixed runs
        "MT84MALT011000012345MTLCAST001S",   // longest in the corpus
    ];

    for iban in ibans {
        group.bench_with_input(BenchmarkId::new("validate", iban), &iban, |b, &iban| {
            b.iter(|| {
                let result = Iban::valid(iban);
                assert!(result);
            })
        });

        let parsed = Iban::new(iban);
        group.bench_with_input(BenchmarkId::new("prettify", iban), &parsed, |b, parsed| {
            b.iter(|| {
                let _: String = parsed.prettify();
            })
        });

        group.bench_with_input(BenchmarkId::new("numerify", iban), &parsed, |b, parsed| {
            b.iter(|| {
                let _: String = parsed.numerify();
            })
        });
    }

    group.finish();
}

/// Benchmark for rejected inputs at each pipeline stage
fn bench_iban_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("iban_rejection");

    let invalid_ibans = vec![
        "gb99 %BC",                 // bad characters
        "ZZ9386011117947",          // unknown country
        "NO93860111179470",         // bad length
        "RO7999991B31007593840000", // bad format, checksum fine
        "GB99WEST12345698765432",   // bad check digits
    ];

    group.bench_function("validate_invalid", |b| {
        b.iter(|| {
            for iban in &invalid_ibans {
                let result = Iban::valid(iban);
                assert!(!result);
            }
        })
    });

    group.finish();
}

/// Benchmark for BIC validation
fn bench_bic_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("bic_validation");

    let valid_bics = vec!["ESSESESS", "DABASESX", "UNCRIT2B912", "DSBACNBXSHA"];
    let invalid_bics = vec!["ESS%SS", "ES", "SWEDXXSS", "beforeESSESESSafter"];

    group.bench_function("validate_bics", |b| {
        b.iter(|| {
            for bic in &valid_bics {
                let result = Bic::valid(bic);
                assert!(result);
            }
            for bic in &invalid_bics {
                let result = Bic::valid(bic);
                assert!(!result);
            }
        })
    });

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_iban_validation,
    bench_iban_rejection,
    bench_bic_validation
);
criterion_main!(validation_benches);
