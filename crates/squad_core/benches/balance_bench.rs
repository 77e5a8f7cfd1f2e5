use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use squad_core::{
    distribute_seeded, distribute_with, BalanceConfig, IdentityShuffle, Player, Position,
};

fn roster(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| {
            let position = match i % 11 {
                0 => Position::Goalkeeper,
                1..=4 => Position::Defender,
                5..=8 => Position::Midfielder,
                _ => Position::Forward,
            };
            let rating = 40 + (i % 50) as u8;
            let mut player =
                Player::new(format!("p{}", i), format!("Player {}", i), position, rating);
            if i % 3 == 0 {
                player.secondary_position = Some(Position::Midfielder);
            }
            player
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let config = BalanceConfig::default();
    let mut group = c.benchmark_group("distribute");

    for size in [10usize, 16, 22] {
        let players = roster(size);
        group.bench_with_input(BenchmarkId::new("seeded", size), &players, |b, players| {
            b.iter(|| distribute_seeded(black_box(players), &config, black_box(42)))
        });
        group.bench_with_input(BenchmarkId::new("identity", size), &players, |b, players| {
            b.iter(|| distribute_with(black_box(players), &config, IdentityShuffle))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distribute);
criterion_main!(benches);
