use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;

#[allow(dead_code)]
#[path = "../tests/fst/mod.rs"]
mod fst;
#[allow(dead_code)]
#[path = "../tests/ranges/mod.rs"]
mod ranges;
#[allow(dead_code)]
#[path = "../tests/roaring/mod.rs"]
mod roaring;
#[allow(dead_code)]
#[path = "../tests/trie/mod.rs"]
mod trie;

fn bench(c: &mut Criterion) {
    let mut code_points = (0..=u16::MAX).collect::<Vec<u16>>();
    let mut rng = SmallRng::seed_from_u64(!0);
    code_points.shuffle(&mut rng);

    c.bench_function("table", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(xml_name_chars::is_name_char(black_box(cp)));
            }
        })
    });

    c.bench_function("ranges", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(ranges::is_name_char(black_box(cp)));
            }
        })
    });

    let set = fst::name_char_fst();
    c.bench_function("fst", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(set.contains(black_box(cp).to_be_bytes()));
            }
        })
    });

    let bitmap = roaring::name_char_bitmap();
    c.bench_function("roaring", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(bitmap.contains(black_box(cp) as u32));
            }
        })
    });

    let trie = trie::name_char_trie();
    c.bench_function("trie", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(trie.contains_u32(black_box(cp) as u32));
            }
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
