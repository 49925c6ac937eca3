use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cryptogram_tools::wordlist::trie::Trie;

/// Spells `number` in base 13 over `a`..`m`, so consecutive numbers share prefixes.
fn number_to_word(mut number: u64) -> String {
    let radix = 13;
    let mut word = vec![];
    loop {
        word.push((b'a' + (number % radix) as u8) as char);
        number /= radix;
        if number == 0 {
            break;
        }
    }
    word.iter().rev().collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words: Vec<String> = (0..200_000).map(number_to_word).collect();
    let trie: Trie = words.iter().map(|x| x.as_str()).collect();

    c.bench_function("load 200k words", |b| b.iter(|| {
        words.iter().map(|x| x.as_str()).collect::<Trie>()
    }));

    let mut group = c.benchmark_group("lookups");
    group.sample_size(10);
    group.bench_function("existing words", |b| b.iter(|| {
        words.iter().filter(|x| trie.contains_word(black_box(x))).count()
    }));
    group.bench_function("missing words", |b| b.iter(|| {
        words.iter().filter(|x| trie.contains_word(black_box(&format!("{}xx", x)))).count()
    }));
    group.bench_function("words of every length", |b| b.iter(|| {
        (0..=8).map(|n| trie.words_of_length(n).len()).sum::<usize>()
    }));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
