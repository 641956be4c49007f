use anyhow::Result;
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stream_core::{RawRecord, Series, StreamChart};

fn build_chart(n: usize) -> StreamChart {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let rows: Vec<RawRecord> = (0..n)
        .map(|i| {
            let mut r = RawRecord::new();
            let d = start.checked_add_days(Days::new(i as u64)).unwrap();
            r.insert("Date".to_string(), d.format("%m/%d/%y").to_string());
            for s in Series::ALL {
                let v = 10.0 + ((i as f64) * 0.03 + s.index() as f64).cos() * 8.0;
                r.insert(s.column().to_string(), format!("{v:.2}"));
            }
            r
        })
        .collect();
    let mut chart = StreamChart::default();
    chart.opts.draw_labels = false;
    chart.load_dataset(&rows);
    chart
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[365usize, 3_650usize] {
        group.bench_function(format!("days_{n}"), |b| {
            let mut chart = build_chart(n);
            b.iter(|| -> Result<()> {
                chart.render();
                let bytes = chart.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
