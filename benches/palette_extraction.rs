use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hue_palette::{extract_palette, PaletteParams, PixelGrid, PixelSample};

/// Deterministic multi-hue test grid; a small LCG spreads pixels over the
/// hue range without pulling in a random number crate
fn synthetic_grid(rows: usize, cols: usize) -> PixelGrid {
    let mut state: u32 = 0x2545_f491;
    let samples: Vec<PixelSample> = (0..rows * cols)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let hue = (state >> 8) % 180;
            let saturation = (state >> 16) as u8;
            let value = (state >> 24) as u8 | 0x40;
            PixelSample::new(hue as u8, saturation, value)
        })
        .collect();
    PixelGrid::new(rows, cols, samples).unwrap()
}

fn benchmark_palette_extraction(c: &mut Criterion) {
    let grid = synthetic_grid(480, 640);
    let params = PaletteParams {
        max_colors: 9,
        hue_separation: 10,
        ..PaletteParams::default()
    };

    c.bench_function("extract_palette_480x640", |b| {
        b.iter(|| extract_palette(black_box(&grid), black_box(&params)).unwrap())
    });
}

criterion_group!(benches, benchmark_palette_extraction);
criterion_main!(benches);
