//! Parsing of typed moves and restart answers.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error for a line that cannot become board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The text is not two comma-separated integers.
    #[display("Expected row,col but got {:?}", input)]
    Malformed {
        /// The offending line, trimmed.
        input: String,
    },

    /// The numbers parsed but lie below the first row or column.
    #[display("Coordinates ({}, {}) are below the board", row, col)]
    BelowBoard {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
    },
}

/// Parses `row,col` into zero-based board coordinates.
///
/// With `one_based` set, `1,1` is the top-left cell. Values past the far edge
/// are passed through so the board can reject them.
#[instrument]
pub fn parse_move(line: &str, one_based: bool) -> Result<(usize, usize), InputError> {
    let line = line.trim();
    let malformed = || InputError::Malformed {
        input: line.to_string(),
    };

    let (row, col) = line.split_once(',').ok_or_else(malformed)?;
    let row: i64 = row.trim().parse().map_err(|_| malformed())?;
    let col: i64 = col.trim().parse().map_err(|_| malformed())?;

    let offset = i64::from(one_based);
    let below = || InputError::BelowBoard { row, col };
    let r = usize::try_from(row.saturating_sub(offset)).map_err(|_| below())?;
    let c = usize::try_from(col.saturating_sub(offset)).map_err(|_| below())?;
    Ok((r, c))
}

/// Returns true when the answer to the restart prompt is `yes`.
#[instrument]
pub fn wants_restart(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
