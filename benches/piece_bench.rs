use board_scenarios::*;
use criterion::{criterion_group, criterion_main, Criterion};
use piece_pathfinding::{Board, Cell, Piece, DEFAULT_GRID_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn scenario_bench(c: &mut Criterion) {
    for name in get_benchmark_names() {
        let (bool_grid, scenarios) = get_benchmark(&name).unwrap();
        let board = Board::from_bool_grid(bool_grid).unwrap();
        let queries: Vec<(Piece, Cell, Cell)> = scenarios
            .iter()
            .map(|s| (s.piece.parse().unwrap(), s.start.into(), s.end.into()))
            .collect();
        c.bench_function(format!("{name}, scenarios").as_str(), |b| {
            b.iter(|| {
                for (piece, start, end) in &queries {
                    black_box(board.find_path(*piece, *start, *end).unwrap());
                }
            })
        });
    }
}

fn random_board_bench(c: &mut Criterion) {
    const N_QUERIES: usize = 50;
    let mut rng = StdRng::seed_from_u64(0);
    let mut board = Board::default();
    let n = DEFAULT_GRID_SIZE as i32;
    for row in 0..n {
        for col in 0..n {
            if rng.gen_bool(0.3) {
                board.paint(Cell::new(row, col)).unwrap();
            }
        }
    }
    let queries: Vec<(Cell, Cell)> = (0..N_QUERIES)
        .map(|_| {
            (
                Cell::new(rng.gen_range(0..n), rng.gen_range(0..n)),
                Cell::new(rng.gen_range(0..n), rng.gen_range(0..n)),
            )
        })
        .collect();
    for piece in Piece::ALL {
        c.bench_function(format!("random {n}x{n}, {piece}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &queries {
                    black_box(board.find_path(piece, *start, *end).unwrap());
                }
            })
        });
        let components = board.components(piece).unwrap();
        c.bench_function(format!("random {n}x{n}, {piece} components").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &queries {
                    black_box(components.reachable(start, end));
                }
            })
        });
    }
}

criterion_group!(benches, scenario_bench, random_board_bench);
criterion_main!(benches);
