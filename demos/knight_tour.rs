use piece_pathfinding::{Board, Cell, Piece};

// Prints the number of knight moves needed to reach every cell of an empty 8x8 board from a
// corner, followed by one shortest path to the opposite corner.
fn main() {
    env_logger::init();
    let board = Board::new(8);
    let start = Cell::new(0, 0);
    let distances = board.distances(Piece::Knight, start).unwrap();
    for row in distances.chunks(board.size()) {
        let line = row
            .iter()
            .map(|d| d.map_or("-".to_owned(), |d| d.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
    let end = Cell::new(7, 7);
    if let Some(path) = board.find_path(Piece::Knight, start, end).unwrap() {
        println!("{path}");
    }
}
