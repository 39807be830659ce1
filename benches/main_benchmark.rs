use criterion::{Criterion, criterion_group, criterion_main};
use mkcpp::build::{CommandTemplate, Sources, Target, is_up_to_date, targets_in_dir};
use mkcpp::config::Verbosity;
use std::hint::black_box;
use std::path::{Path, PathBuf};

fn bench_scan_sources(c: &mut Criterion) {
    let temp_dir = std::env::temp_dir().join("mkcpp_bench_scan");
    let src = temp_dir.join("src");
    if !src.exists() {
        std::fs::create_dir_all(&src).unwrap();
        for i in 0..200 {
            std::fs::write(src.join(format!("file{i}.cpp")), "int x;").unwrap();
            std::fs::write(src.join(format!("file{i}.hpp")), "#pragma once").unwrap();
        }
    }
    let build = temp_dir.join("build");

    c.bench_function("targets_in_dir_200", |b| {
        b.iter(|| {
            targets_in_dir(
                black_box(&src),
                Some(build.as_path()),
                |name| name.ends_with(".cpp"),
                |name| format!("{name}.o"),
                Verbosity::Silent,
            )
            .unwrap()
        })
    });

    let targets = targets_in_dir(
        &src,
        Some(build.as_path()),
        |name| name.ends_with(".cpp"),
        |name| format!("{name}.o"),
        Verbosity::Silent,
    )
    .unwrap();
    c.bench_function("is_up_to_date_missing_objects", |b| {
        b.iter(|| {
            for t in &targets {
                let _ = is_up_to_date(black_box(t));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let compile = CommandTemplate::new("clang++ -O1 -std=c++20 -c {0} -o {1}");
    let single = Target::single("src/main.cpp", "build/main.cpp.o");

    c.bench_function("render_compile", |b| {
        b.iter(|| compile.render(black_box(&single.sources), black_box(&single.dest)))
    });

    let link = CommandTemplate::new("clang++ {0} -o {1}");
    let objects: Vec<PathBuf> = (0..100)
        .map(|i| PathBuf::from(format!("build/file{i}.cpp.o")))
        .collect();
    let sources = Sources::Multi(objects);

    c.bench_function("render_link_100", |b| {
        b.iter(|| link.render(black_box(&sources), black_box(Path::new("bin/app"))))
    });
}

criterion_group!(benches, bench_scan_sources, bench_render);
criterion_main!(benches);
