//! The interactive session: reads commands, drives a [`Game`], prints results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Game, GameStatus, Move, Square};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::ConsoleError;

const HELP: &str = "\
commands:
  new                    start a new game
  board                  show the board
  moves <sq>             list legal destinations of the piece on <sq>
  move <from><to>        play a move (the bare move, e.g. e2e4, also works)
  undo                   take back the last move
  history                list the moves played
  layout <layout> [w|b]  load a position, side to move defaults to white
  set <option> <value>   autoboard on|off, notation on|off
  help                   show this text
  quit                   leave";

/// A console session holding one game.
///
/// Single-threaded: each input line is parsed and handled before the next
/// one is read.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a new session with a fresh game.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Bad commands and rejected moves are reported on `out` and the loop
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ConsoleError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| match cmd {
                Command::Quit => Ok(false),
                cmd => self.handle(cmd, &mut out).map(|()| true),
            });
            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        info!("session ended");
        Ok(())
    }

    /// Handle one parsed command.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ConsoleError> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                writeln!(out, "new game")?;
                self.print_board_if_auto(out)?;
            }
            Command::Board => self.print_board(out)?,
            Command::Moves(sq) => self.handle_moves(sq, out)?,
            Command::Move(mv) => self.handle_move(mv, out)?,
            Command::Undo => match self.game.undo() {
                Some(record) => {
                    writeln!(out, "took back {}", self.describe(&record.mv, &record.notation))?;
                    self.print_board_if_auto(out)?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::History => self.print_history(out)?,
            Command::Layout { board, side } => {
                self.game = Game::from_board(board, side);
                writeln!(out, "position loaded")?;
                self.print_board_if_auto(out)?;
                self.print_status(out)?;
            }
            Command::Set(option) => {
                self.config.apply(option);
                writeln!(
                    out,
                    "autoboard {}, notation {}",
                    on_off(self.config.autoboard),
                    on_off(self.config.notation)
                )?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
            Command::Unknown(word) => writeln!(out, "unknown command: {word} (try help)")?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, sq: Square, out: &mut W) -> Result<(), ConsoleError> {
        let moves = self.game.legal_moves(sq);
        if moves.is_empty() {
            writeln!(out, "no moves from {sq}")?;
        } else {
            writeln!(out, "{sq}: {moves}")?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), ConsoleError> {
        let record = self.game.play(mv)?;
        writeln!(out, "played {}", self.describe(&record.mv, &record.notation))?;
        self.print_board_if_auto(out)?;
        self.print_status(out)
    }

    fn describe(&self, mv: &Move, notation: &str) -> String {
        if self.config.notation {
            notation.to_string()
        } else {
            mv.to_string()
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        writeln!(out, "{}", self.game.board().pretty())?;
        writeln!(out, "{} to move", self.game.side_to_move())?;
        Ok(())
    }

    fn print_board_if_auto<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        if self.config.autoboard {
            self.print_board(out)?;
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        match self.game.status() {
            GameStatus::Checkmate { winner } => writeln!(out, "checkmate, {winner} wins")?,
            GameStatus::InProgress if self.game.in_check() => {
                writeln!(out, "{} is in check", self.game.side_to_move())?;
            }
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn print_history<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        let history = self.game.history();
        if history.is_empty() {
            writeln!(out, "no moves yet")?;
            return Ok(());
        }
        for (number, pair) in history.chunks(2).enumerate() {
            let moves: Vec<String> = pair
                .iter()
                .map(|record| self.describe(&record.mv, &record.notation))
                .collect();
            writeln!(out, "{}. {}", number + 1, moves.join(" "))?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
