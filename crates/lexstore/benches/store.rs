use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexstore::DictionaryStore;
use tempfile::TempDir;

const ROWS: usize = 10_000;

fn json_store(rows: usize) -> String {
    let entries: Vec<String> = (0..rows)
        .map(|i| {
            format!(
                r#"{{"word":"word{i}","partOfSpeech":"noun","definition":"Definition number {i}.","example":"Example {i}."}}"#
            )
        })
        .collect();
    format!(r#"{{"entries":[{}]}}"#, entries.join(","))
}

fn toon_store(rows: usize) -> String {
    let mut out = format!("entries[{rows}]{{word,partOfSpeech,definition,example}}:\n");
    for i in 0..rows {
        out.push_str(&format!("  word{i},noun,Definition number {i}.,\"Example {i}.\"\n"));
    }
    out
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");
    group.sample_size(20);
    group.throughput(Throughput::Elements(ROWS as u64));

    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("dictionary.json");
    let toon_path = dir.path().join("dictionary.toon");
    std::fs::write(&json_path, json_store(ROWS)).unwrap();
    std::fs::write(&toon_path, toon_store(ROWS)).unwrap();

    group.bench_function("json_10k", |b| {
        b.iter(|| black_box(DictionaryStore::open(&json_path).unwrap()));
    });
    group.bench_function("toon_10k", |b| {
        b.iter(|| black_box(DictionaryStore::open(&toon_path).unwrap()));
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_search");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.json");
    std::fs::write(&path, json_store(ROWS)).unwrap();
    let store = DictionaryStore::open(&path).unwrap();

    let mut counter = 0;
    group.bench_function("search_hit", |b| {
        b.iter(|| {
            let word = format!("word{}", counter % ROWS);
            black_box(store.search(&word).unwrap());
            counter += 1;
        });
    });
    group.finish();
}

criterion_group!(benches, bench_open, bench_search);
criterion_main!(benches);
