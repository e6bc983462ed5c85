use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ternary_trie::Trie;

fn random_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_put(c: &mut Criterion) {
    let words = random_words(10_000);

    c.bench_function("put 10k words", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for (i, word) in words.iter().enumerate() {
                trie.put(word, i).unwrap();
            }
            black_box(trie)
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let words = random_words(10_000);
    let trie: Trie<usize> = words.iter().enumerate().map(|(i, w)| (w, i)).collect();
    let mut probes = words.clone();
    probes.shuffle(&mut StdRng::seed_from_u64(7));

    c.bench_function("get 10k words", |b| {
        b.iter(|| {
            for word in &probes {
                black_box(trie.get(word));
            }
        })
    });
}

fn bench_keys_with_prefix(c: &mut Criterion) {
    let words = random_words(10_000);
    let trie: Trie<usize> = words.iter().enumerate().map(|(i, w)| (w, i)).collect();

    c.bench_function("keys_with_prefix short", |b| {
        b.iter(|| black_box(trie.keys_with_prefix(black_box("ab"))))
    });
    c.bench_function("all_keys", |b| b.iter(|| black_box(trie.all_keys())));
    c.bench_function("iter all", |b| b.iter(|| black_box(trie.iter().count())));
}

criterion_group!(benches, bench_put, bench_get, bench_keys_with_prefix);
criterion_main!(benches);
