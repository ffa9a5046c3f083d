use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dominant_colors::{DominantColors, HistogramParser};

fn histogram(colors: u32) -> String {
    (0..colors)
        .map(|i| {
            let (r, g, b) = ((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8);
            format!(
                "{:>10}: ({:>3},{:>3},{:>3},255) #{:02X}{:02X}{:02X}FF\n",
                (i + 1) * 1000 % 7919,
                r,
                g,
                b,
                r,
                g,
                b
            )
        })
        .collect()
}

fn benchmark_palette_extraction(c: &mut Criterion) {
    let text = histogram(64);

    c.bench_function("parse_histogram_64", |b| {
        let parser = HistogramParser::new();
        b.iter(|| parser.parse(black_box(&text)))
    });

    c.bench_function("all_projections_64", |b| {
        b.iter(|| {
            let colors = DominantColors::from_histogram(black_box(&text), 64).unwrap();
            black_box(colors.to_hsl_alpha().unwrap().len() + colors.to_pct().unwrap().len())
        })
    });
}

criterion_group!(benches, benchmark_palette_extraction);
criterion_main!(benches);
