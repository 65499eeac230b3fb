//! Interactive session: rounds, re-prompting and restart.

use crate::config::GameConfig;
use crate::input::{self, InputError};
use crate::render::render_board;
use anyhow::{Context, Result};
use derive_getters::Getters;
use noughts_core::{GameEngine, GameStatus, MoveError, Player, create_round};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const INVALID_INPUT: &str = "Invalid input. Please enter your move as row,col (e.g., 1,2).";
const INVALID_MOVE: &str = "Invalid move. Spot is either taken or out of bounds.";

/// Tally of finished rounds in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds drawn.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress(_) => {}
        }
    }

    /// Number of rounds that reached a result.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Drives rounds over a line-based reader and writer.
///
/// Each round gets a fresh engine; nothing carries over except the summary.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: GameConfig,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `reader` and printing to `writer`.
    pub fn new(reader: R, writer: W, config: GameConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            summary: SessionSummary::default(),
        }
    }

    /// Plays rounds until the players decline a restart or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        writeln!(self.writer, "Welcome to Tic Tac Toe!")?;

        loop {
            let Some(status) = self.play_round()? else {
                info!("Input closed during round");
                break;
            };
            self.summary.record(status);

            match status.winner() {
                Some(player) => {
                    writeln!(self.writer, "Congratulations! {} is the winner!", player)?
                }
                None => writeln!(self.writer, "The game ended in a tie.")?,
            }

            write!(self.writer, "Do you want to play again? (yes/no): ")?;
            self.writer.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            if !input::wants_restart(&answer) {
                writeln!(self.writer, "Thanks for playing! Goodbye!")?;
                break;
            }
            debug!("Restarting with a new round");
        }

        info!(summary = ?self.summary, "Session finished");
        Ok(self.summary)
    }

    /// Plays one round to a win or a draw.
    ///
    /// Returns `None` if input ends before the round finishes.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Option<GameStatus>> {
        let mut engine = create_round();
        self.print_board(&engine)?;

        while let Some(player) = engine.current_player() {
            let Some((row, col)) = self.prompt_move(player)? else {
                return Ok(None);
            };

            match engine.apply_move(row, col) {
                Ok(status) => {
                    self.print_board(&engine)?;
                    match status {
                        GameStatus::Won(winner) => writeln!(self.writer, "Player {} wins!", winner)?,
                        GameStatus::Draw => writeln!(self.writer, "It's a tie!")?,
                        GameStatus::InProgress(_) => {}
                    }
                }
                Err(MoveError::InvalidMove(reason)) => {
                    debug!(%reason, "Re-prompting after rejected move");
                    writeln!(self.writer, "{}", INVALID_MOVE)?;
                }
                Err(e @ MoveError::GameOver) => {
                    return Err(e).context("Round accepted no more moves while in progress");
                }
            }
        }

        Ok(Some(engine.status()))
    }

    /// Asks `player` for coordinates until a line parses.
    fn prompt_move(&mut self, player: Player) -> Result<Option<(usize, usize)>> {
        let indexing = if *self.config.one_based() { "1-based" } else { "0-based" };
        let example = if *self.config.one_based() { "1,2" } else { "0,1" };

        loop {
            write!(
                self.writer,
                "{}'s move (row,col), use {} indexing (e.g., {}): ",
                player, indexing, example
            )?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match input::parse_move(&line, *self.config.one_based()) {
                Ok(coords) => return Ok(Some(coords)),
                Err(e @ InputError::BelowBoard { .. }) => {
                    warn!(error = %e, "Move below the board");
                    writeln!(self.writer, "{}", INVALID_MOVE)?;
                }
                Err(e @ InputError::Malformed { .. }) => {
                    warn!(error = %e, "Unparseable move");
                    writeln!(self.writer, "{}", INVALID_INPUT)?;
                }
            }
        }
    }

    fn print_board(&mut self, engine: &GameEngine) -> Result<()> {
        writeln!(self.writer, "\nCurrent Board:")?;
        let text = render_board(&engine.board().snapshot(), self.config.delimiter());
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Consumes the session, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Applies typed moves to a fresh round and prints the result.
///
/// Stops at the first line that does not parse or that the round rejects.
#[instrument(skip(config, writer))]
pub fn replay_moves<W: Write>(moves: &[String], config: &GameConfig, writer: &mut W) -> Result<GameStatus> {
    let mut engine = create_round();

    for (i, text) in moves.iter().enumerate() {
        let (row, col) = input::parse_move(text, *config.one_based())
            .with_context(|| format!("Move {} ({:?}) is not row,col", i + 1, text))?;
        engine
            .apply_move(row, col)
            .with_context(|| format!("Move {} ({:?}) rejected", i + 1, text))?;
    }

    write!(writer, "{}", render_board(&engine.board().snapshot(), config.delimiter()))?;
    writeln!(writer, "{}", engine.status())?;
    Ok(engine.status())
}
