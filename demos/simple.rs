use piece_pathfinding::{Board, Cell, Piece};

// In this example a rook path is found on a board with shape
//  _____
// |S    |
// | ### |
// | #E# |
// |     |
// |     |
//  _____
// S marks the start
// E marks the end
fn main() {
    env_logger::init();
    let mut board = Board::new(5);
    for cell in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3)] {
        board.paint(cell.into()).unwrap();
    }
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    print!("{board}");
    match board.find_path(Piece::Rook, start, end) {
        Ok(Some(path)) => {
            println!("A path with {} moves has been found:", path.moves());
            for c in &path {
                println!("{c}");
            }
        }
        Ok(None) => println!("No path found!"),
        Err(e) => println!("Invalid query: {e}"),
    }
}
