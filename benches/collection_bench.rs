//! Benchmarks for collection pass performance.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crash_collector::collectors::{
    Collector, CollectorRegistry, DisplayCollector, ExceptionCollector, ScreenSize,
    StaticDisplayProvider,
};
use crash_collector::exception::ExceptionInfo;
use crash_collector::report::{ObjectScope, StructuredWriter, TreeWriter};

/// Writes a fixed number of fields into its own section
struct FieldsCollector {
    name: String,
    fields: usize,
}

impl Collector for FieldsCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, &self.name);
        for i in 0..self.fields {
            scope.write_display(&format!("field{}", i), i);
        }
        Ok(())
    }
}

fn exception() -> ExceptionInfo {
    ExceptionInfo::new("std::io::Error", "disk full")
        .with_cause("write failed")
        .with_cause("device removed")
}

/// Benchmark a pass with different numbers of collectors
fn bench_collector_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("collector_count");

    for count in [1usize, 10, 50, 100] {
        let mut registry = CollectorRegistry::new();
        for i in 0..count {
            registry.register(FieldsCollector {
                name: format!("section_{}", i),
                fields: 10,
            });
        }

        group.bench_with_input(
            BenchmarkId::new("collect", format!("{}_collectors", count)),
            &registry,
            |b, registry| {
                b.iter(|| {
                    let mut writer = TreeWriter::new();
                    registry.collect(black_box(&exception()), &mut writer);
                    writer.into_report()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the built-in collectors that need no system queries
fn bench_builtin_collectors(c: &mut Criterion) {
    let mut registry = CollectorRegistry::new();
    registry
        .register(ExceptionCollector::new())
        .register(DisplayCollector::new(StaticDisplayProvider::new(
            Some(ScreenSize {
                width: 1920,
                height: 1080,
            }),
            Some((96.0, 96.0)),
        )));

    c.bench_function("builtin_collectors", |b| {
        b.iter(|| {
            let mut writer = TreeWriter::new();
            registry.collect(black_box(&exception()), &mut writer);
            writer.into_report()
        });
    });
}

criterion_group!(benches, bench_collector_count, bench_builtin_collectors);
criterion_main!(benches);
