//! Loads the board maps under `maps/` and the matching scenario lists under `scenarios/`.
//!
//! A map file starts with a `size N` line followed by `N` rows of `N` characters, where `#`
//! marks a blocked cell and `.`, `S` and `E` are free. A scenario file is a CSV table with the
//! header `piece,start_row,start_col,end_row,end_col,moves`; an empty `moves` field means the end
//! cannot be reached.
use csv::ReaderBuilder;
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::BoolGrid;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Record {
    piece: String,
    start_row: i32,
    start_col: i32,
    end_row: i32,
    end_col: i32,
    moves: Option<u32>,
}

/// One recorded query. Points use `x` for the column and `y` for the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub piece: String,
    pub start: Point,
    pub end: Point,
    pub moves: Option<u32>,
}

fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Parses a board map. Rows shorter than the declared size are rejected.
pub fn parse_board(map_str: &str) -> io::Result<BoolGrid> {
    let mut lines = map_str.lines();
    let header = lines
        .next()
        .ok_or_else(|| invalid("empty map".to_owned()))?;
    let n = header
        .split_once(' ')
        .filter(|(key, _)| *key == "size")
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .ok_or_else(|| invalid(format!("bad header line {header:?}")))?;

    let mut bool_grid = BoolGrid::new(n, n, false);
    for row in 0..n {
        let line = lines
            .next()
            .ok_or_else(|| invalid(format!("missing row {row}")))?
            .as_bytes();
        if line.len() < n {
            return Err(invalid(format!("row {row} has {} cells", line.len())));
        }
        for col in 0..n {
            let val = ![b'.', b'S', b'E'].contains(&line[col]);
            bool_grid.set(col, row, val);
        }
    }
    Ok(bool_grid)
}

/// Parses a scenario table.
pub fn parse_scenarios(data: &str) -> io::Result<Vec<Scenario>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        scenarios.push(Scenario {
            piece: record.piece,
            start: Point::new(record.start_col, record.start_row),
            end: Point::new(record.end_col, record.end_row),
            moves: record.moves,
        });
    }
    Ok(scenarios)
}

fn load_benchmark(name: &str) -> io::Result<(BoolGrid, Vec<Scenario>)> {
    let map_str = fs::read_to_string(root().join("maps").join(format!("{name}.board")))?;
    let scen_str = fs::read_to_string(root().join("scenarios").join(format!("{name}.csv")))?;
    Ok((parse_board(&map_str)?, parse_scenarios(&scen_str)?))
}

/// Names of all bundled maps, sorted.
pub fn get_benchmark_names() -> Vec<String> {
    let maps = root().join("maps");
    let mut names: Vec<String> = WalkDir::new(&maps)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.path();
            (path.extension()? == "board")
                .then(|| path.file_stem()?.to_str().map(str::to_owned))
                .flatten()
        })
        .collect();
    names.sort();
    names
}

/// Loads a bundled map together with its scenarios.
pub fn get_benchmark(name: &str) -> io::Result<(BoolGrid, Vec<Scenario>)> {
    if get_benchmark_names().iter().any(|n| n == name) {
        load_benchmark(name)
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no benchmark named {name:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_small_board() {
        let grid = parse_board("size 3\nS#.\n.#.\n..E\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 1));
        assert!(!grid.get(0, 0));
        assert!(!grid.get(2, 2));
    }

    #[test]
    fn reject_bad_boards() {
        assert!(parse_board("").is_err());
        assert!(parse_board("width 3\n...\n").is_err());
        assert!(parse_board("size 3\n...\n..\n...\n").is_err());
        assert!(parse_board("size 2\n..\n").is_err());
    }

    #[test]
    fn parse_scenario_rows() {
        let scenarios = parse_scenarios(
            "piece,start_row,start_col,end_row,end_col,moves\nKnight,0,1,2,3,4\nBishop,0,0,0,1,\n",
        )
        .unwrap();
        assert_eq!(
            scenarios,
            vec![
                Scenario {
                    piece: "Knight".to_owned(),
                    start: Point::new(1, 0),
                    end: Point::new(3, 2),
                    moves: Some(4),
                },
                Scenario {
                    piece: "Bishop".to_owned(),
                    start: Point::new(0, 0),
                    end: Point::new(1, 0),
                    moves: None,
                },
            ]
        );
    }

    #[test]
    fn bundled_maps_load() {
        let names = get_benchmark_names();
        assert!(names.contains(&"open8".to_owned()));
        for name in names {
            let (grid, scenarios) = get_benchmark(&name).unwrap();
            assert_eq!(grid.width(), grid.height());
            assert!(!scenarios.is_empty());
        }
        assert!(get_benchmark("missing").is_err());
    }
}
