use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timebomb_core::*;

fn generate(c: &mut Criterion) {
    let config = GameConfig::new(30, 225, 300).unwrap();

    c.bench_function("generate 30x30/225", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(RandomMineGenerator::from_seed(seed).generate(config))
        })
    });
}

fn flood_fill(c: &mut Criterion) {
    let corners = [(0, 0), (0, 29), (29, 0), (29, 29)];
    let layout = MineLayout::from_mine_coords((30, 30), &corners).unwrap();

    c.bench_function("flood fill 30x30", |b| {
        b.iter_batched(
            || Board::new(layout.clone()),
            |mut board| black_box(board.reveal((15, 15)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
