use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Field, Game};
use blockfall::types::{BlockColor, TickInput, FIELD_COLS};

fn bench_advance(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            game.advance(black_box(16), TickInput::idle());
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    let color = BlockColor::new(1).unwrap();

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20 {
                for x in 0..FIELD_COLS as i8 {
                    field.set(x, y, Some(color));
                }
            }
            field.clear_full_rows()
        })
    });
}

fn bench_rotate_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    let rotate = TickInput {
        move_left: false,
        move_right: false,
        rotate: true,
        soft_drop: false,
    };

    c.bench_function("advance_with_rotate", |b| {
        b.iter(|| {
            game.advance(black_box(0), rotate);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::new(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(
    benches,
    bench_advance,
    bench_clear_four_rows,
    bench_rotate_tick,
    bench_snapshot
);
criterion_main!(benches);
