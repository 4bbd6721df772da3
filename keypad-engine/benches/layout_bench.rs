//! Language loading and key lookup benchmarks
//!
//! Run with:
//!   cargo bench -p keypad-engine --bench layout_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keypad_engine::{Digit, LanguageRegistry, SpecialCharCycler, TextCase};

fn bench_builtin_registry(c: &mut Criterion) {
    c.bench_function("builtin_registry", |b| {
        b.iter(|| black_box(LanguageRegistry::builtin()))
    });
}

fn bench_key_lookup(c: &mut Criterion) {
    let registry = LanguageRegistry::builtin();
    let en = registry.get("en").unwrap();

    c.bench_function("key_letters_all_keys", |b| {
        b.iter(|| {
            let mut total = 0;
            for key in Digit::ALL {
                total += en.key_letters(black_box(key)).len();
                total += en.key_number(key).len();
            }
            total
        })
    });

    let tr = registry.get("tr").unwrap();
    c.bench_function("change_case_turkish", |b| {
        b.iter(|| tr.change_case(black_box("ığişçö"), TextCase::Upper))
    });

    c.bench_function("special_cycle", |b| {
        let mut cycler = SpecialCharCycler::new();
        b.iter(|| cycler.next(black_box(en.as_ref())))
    });
}

criterion_group!(benches, bench_builtin_registry, bench_key_lookup);
criterion_main!(benches);
