use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use cubit::board::{Board, Coord, SymbolKind, ALL_COORDS};
use cubit::random::RngSource;
use cubit::rules::{check_win, perform_collapse};

/// Builds a board with a pending marker on every cell: alternating single
/// symbols on two thirds of the board, entangled cells on the rest.
fn saturated_board() -> Board {
    let mut board = Board::new();
    for (i, &cell) in ALL_COORDS.iter().enumerate() {
        match i % 3 {
            0 => {
                board.apply_move(cell, SymbolKind::X);
            }
            1 => {
                board.apply_move(cell, SymbolKind::O);
            }
            _ => {
                board.apply_move(cell, SymbolKind::X);
                board.apply_move(cell, SymbolKind::O);
            }
        }
    }
    board
}

fn bench_collapse_saturated(c: &mut Criterion) {
    let board = saturated_board();
    let mut random = RngSource::seeded(42);
    c.bench_function("collapse_27_pending", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| perform_collapse(black_box(&mut board), &mut random),
            BatchSize::SmallInput,
        )
    });
}

fn bench_check_win_no_winner(c: &mut Criterion) {
    // Tentative markers everywhere: the detector must scan all 49 lines.
    let board = saturated_board();
    c.bench_function("check_win_full_scan", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

fn bench_check_win_early_line(c: &mut Criterion) {
    let mut board = Board::new();
    for &cell in &[Coord::new(0, 0, 0), Coord::new(1, 0, 0), Coord::new(2, 0, 0)] {
        board.apply_move(cell, SymbolKind::X);
        board.collapse_cell(cell, SymbolKind::X);
    }
    c.bench_function("check_win_first_line", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_collapse_saturated,
    bench_check_win_no_winner,
    bench_check_win_early_line
);
criterion_main!(benches);
