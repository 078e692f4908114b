use piece_pathfinding::{Board, Cell, Piece};

// In this example a king picks the closest of two goals
//  _____
// |S    |
// | #   |
// |     |
// |   G |
// |    G|
//  _____
fn main() {
    env_logger::init();
    let mut board = Board::new(5);
    board.paint(Cell::new(1, 1)).unwrap();
    let start = Cell::new(0, 0);
    let goals = [Cell::new(4, 4), Cell::new(3, 3)];
    if let Some((goal, path)) = board.find_path_to_any(Piece::King, start, &goals).unwrap() {
        println!("Selected goal {goal}, path: {path}");
    }
}
