// Benchmarks for directory scans

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use mediascan::{LocalDirectory, MediaScanner, MemoryDirectory};

const NAMES: [&str; 6] = ["photo.jpg", "notes.txt", "Clip.MP4", "archive.tar.gz", "README", "still.webp"];

fn setup_local_dir(rt: &Runtime, count: usize) -> PathBuf {
    let test_dir = std::env::temp_dir().join(format!("mediascan_bench_{}", count));
    if test_dir.exists() {
        std::fs::remove_dir_all(&test_dir).ok();
    }
    std::fs::create_dir_all(&test_dir).unwrap();

    rt.block_on(async {
        for i in 0..count {
            let name = format!("{}_{}", i, NAMES[i % NAMES.len()]);
            tokio::fs::write(test_dir.join(name), b"x").await.unwrap();
        }
    });
    test_dir
}

fn bench_memory_scan(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("memory_scan");

    for count in [10, 100, 1000].iter() {
        let mut dir = MemoryDirectory::new("memory:///bench");
        for i in 0..*count {
            dir = dir.with_file(&format!("{}_{}", i, NAMES[i % NAMES.len()]), b"");
        }
        let scanner = MediaScanner::new();

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let entries = scanner.scan(&dir, None).await.unwrap();
                black_box(entries);
            });
        });
    }

    group.finish();
}

fn bench_local_scan(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("local_scan");

    for count in [10, 100, 1000].iter() {
        let path = setup_local_dir(&rt, *count);
        let dir = LocalDirectory::new(path.clone());
        let scanner = MediaScanner::new();

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let entries = scanner.scan(&dir, None).await.unwrap();
                black_box(entries);
            });
        });

        std::fs::remove_dir_all(&path).ok();
    }

    group.finish();
}

criterion_group!(benches, bench_memory_scan, bench_local_scan);
criterion_main!(benches);
