//! Text rendering of a board snapshot.

use noughts_core::{Cell, Player, Snapshot};

fn symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => " ",
        Cell::Occupied(Player::X) => "X",
        Cell::Occupied(Player::O) => "O",
    }
}

/// Formats the board one row per line, cells separated by `delimiter`.
///
/// The delimiter also frames each row, so `" | "` gives `| X | O |   |`.
pub fn render_board(snapshot: &Snapshot, delimiter: &str) -> String {
    let mut out = String::new();
    for row in snapshot {
        out.push_str(delimiter.trim_start());
        let cells: Vec<&str> = row.iter().map(|c| symbol(*c)).collect();
        out.push_str(&cells.join(delimiter));
        out.push_str(delimiter.trim_end());
        out.push('\n');
    }
    out
}
