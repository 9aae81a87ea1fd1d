use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_glitch::core::{GlitchConfig, GlitchEffect, GlitchGrid, SimpleRng, WaitlistForm};
use tui_glitch::term::{GlitchView, Viewport};
use tui_glitch::types::{PixelViewport, DEFAULT_PALETTE, GLYPH_ALPHABET};

fn bench_frame(c: &mut Criterion) {
    let mut fx = GlitchEffect::new(GlitchConfig::default(), 12345).unwrap();
    fx.attach(PixelViewport::for_terminal(200, 60), 0);

    let mut now = 0u64;
    c.bench_function("effect_frame_16ms", |b| {
        b.iter(|| {
            now += 16;
            fx.on_frame(black_box(now));
        })
    });
}

fn bench_mutate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut grid = GlitchGrid::new(200, 60, GLYPH_ALPHABET, DEFAULT_PALETTE, &mut rng);

    c.bench_function("grid_mutate_tick", |b| {
        b.iter(|| {
            grid.mutate(GLYPH_ALPHABET, DEFAULT_PALETTE, true, &mut rng);
        })
    });
}

fn bench_transitions(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut grid = GlitchGrid::new(200, 60, GLYPH_ALPHABET, DEFAULT_PALETTE, &mut rng);

    c.bench_function("advance_transitions", |b| {
        b.iter(|| {
            // Re-arm some transitions so the pass has work to do.
            grid.mutate(GLYPH_ALPHABET, DEFAULT_PALETTE, true, &mut rng);
            grid.advance_transitions();
        })
    });
}

fn bench_view_render(c: &mut Criterion) {
    let mut fx = GlitchEffect::new(GlitchConfig::default(), 12345).unwrap();
    fx.attach(PixelViewport::for_terminal(200, 60), 0);
    let form = WaitlistForm::new();
    let view = GlitchView::default();

    c.bench_function("view_render_200x60", |b| {
        b.iter(|| {
            let fb = view.render(black_box(&fx), &form, Viewport::new(200, 60));
            black_box(fb);
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_mutate,
    bench_transitions,
    bench_view_render
);
criterion_main!(benches);
