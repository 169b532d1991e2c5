use chart_brush::api::{ChartAggregateRef, ChartInfo, ColorFrameStrategy, combine_measure_frames};
use chart_brush::core::{
    AllRows, BrushRange, CellValue, DatasetUnion, LinearRange, MemoryDataset, ParetoRange,
    ScaleRange, StackRange,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MEASURES: [&str; 4] = ["Sales", "__all__Sales", "Profit", "__all__Profit"];

fn dataset(rows: usize) -> MemoryDataset {
    let mut ds = MemoryDataset::new(MEASURES).expect("unique columns");
    for i in 0..rows {
        let t = i as f64;
        let sales = 100.0 + (t * 0.37).sin() * 40.0;
        let profit = (t * 0.11).cos() * 25.0;
        ds.push_row(vec![
            CellValue::from(sales * 0.4),
            CellValue::from(sales),
            CellValue::from(profit * 0.4),
            CellValue::from(profit),
        ])
        .expect("row width matches");
    }
    ds
}

fn columns() -> Vec<String> {
    MEASURES.iter().map(|name| (*name).to_owned()).collect()
}

fn bench_linear_range_10k(c: &mut Criterion) {
    let ds = dataset(10_000);
    let cols = columns();
    let range = LinearRange::default();

    c.bench_function("linear_range_10k", |b| {
        b.iter(|| range.calculate(black_box(&ds), black_box(&cols), &AllRows))
    });
}

fn bench_brushed_stack_range_10k(c: &mut Criterion) {
    let ds = dataset(10_000);
    let cols = columns();
    let range = BrushRange::new(Box::new(StackRange::default()));

    c.bench_function("brushed_stack_range_10k", |b| {
        b.iter(|| range.calculate(black_box(&ds), black_box(&cols), &AllRows))
    });
}

fn bench_pareto_range_over_union_10k(c: &mut Criterion) {
    let union = DatasetUnion::new(Box::new(dataset(5_000)), Box::new(dataset(5_000)));
    let cols = columns();
    let range = ParetoRange::default();

    c.bench_function("pareto_range_over_union_10k", |b| {
        b.iter(|| range.calculate(black_box(&union), black_box(&cols), &AllRows))
    });
}

fn bench_color_frame_combination(c: &mut Criterion) {
    let names: Vec<String> = (0..32).map(|i| format!("measure_{i}")).collect();
    let info = names.iter().fold(ChartInfo::default(), |info, name| {
        info.with_measure(name.clone(), ChartAggregateRef::default())
    });

    c.bench_function("color_frame_combination_32", |b| {
        b.iter(|| combine_measure_frames(&ColorFrameStrategy, black_box(&info), &names, true))
    });
}

criterion_group!(
    benches,
    bench_linear_range_10k,
    bench_brushed_stack_range_10k,
    bench_pareto_range_over_union_10k,
    bench_color_frame_combination
);
criterion_main!(benches);
