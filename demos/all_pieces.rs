use piece_pathfinding::{Board, Cell, Piece};
use std::env;

// Usage: all_pieces [start_row start_col end_row end_col]
//
// Compares the shortest paths of every piece on a board with a wall across the middle that has a
// single gap.
fn main() {
    env_logger::init();
    let args: Vec<i32> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let (start, end) = match args.as_slice() {
        [sr, sc, er, ec] => (Cell::new(*sr, *sc), Cell::new(*er, *ec)),
        _ => (Cell::new(0, 0), Cell::new(9, 9)),
    };
    let mut board = Board::new(10);
    for col in 0..9 {
        board.paint(Cell::new(5, col)).unwrap();
    }
    print!("{board}");
    for piece in Piece::ALL {
        match board.find_path(piece, start, end) {
            Ok(Some(path)) => println!("{piece}: {} moves, {path}", path.moves()),
            Ok(None) => println!("{piece}: no path"),
            Err(e) => {
                println!("{e}");
                return;
            }
        }
    }
}
