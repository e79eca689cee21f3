//! Console command parsing.

use rookery_core::{Board, Color, Move, Square};

use crate::config::SessionOption;
use crate::error::ConsoleError;

/// A parsed console command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard position.
    New,
    /// `board` -- print the current position.
    Board,
    /// `moves <sq>` -- list the legal destinations of a piece.
    Moves(Square),
    /// `move <from><to>`, or the bare move -- play a move.
    Move(Move),
    /// `undo` -- take back the last move.
    Undo,
    /// `history` -- list the moves played so far.
    History,
    /// `layout <layout> [w|b]` -- load a position.
    Layout {
        /// The parsed board.
        board: Board,
        /// Side to move, White unless given.
        side: Color,
    },
    /// `set <option> <value>` -- change a session setting.
    Set(SessionOption),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "new" => Ok(Command::New),
        "board" | "show" => Ok(Command::Board),
        "moves" => parse_square(args.first(), "moves").map(Command::Moves),
        "move" => parse_move(args.first(), "move").map(Command::Move),
        "undo" => Ok(Command::Undo),
        "history" => Ok(Command::History),
        "layout" => parse_layout(args),
        "set" => parse_set(args),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => match Move::from_coords(head) {
            Some(mv) if args.is_empty() => Ok(Command::Move(mv)),
            _ => Ok(Command::Unknown(head.to_string())),
        },
    }
}

fn parse_square(token: Option<&&str>, command: &'static str) -> Result<Square, ConsoleError> {
    let text = token.ok_or(ConsoleError::MissingArgument {
        command,
        argument: "square",
    })?;
    Square::from_algebraic(text).ok_or_else(|| ConsoleError::InvalidSquare {
        square: text.to_string(),
    })
}

fn parse_move(token: Option<&&str>, command: &'static str) -> Result<Move, ConsoleError> {
    let text = token.ok_or(ConsoleError::MissingArgument {
        command,
        argument: "move",
    })?;
    Move::from_coords(text).ok_or_else(|| ConsoleError::InvalidMove {
        text: text.to_string(),
    })
}

/// Parse `layout` arguments.
///
/// The layout itself may span up to three fields; a trailing `w` or `b`
/// names the side to move.
fn parse_layout(args: &[&str]) -> Result<Command, ConsoleError> {
    let (fields, side) = match args.split_last() {
        None => {
            return Err(ConsoleError::MissingArgument {
                command: "layout",
                argument: "layout",
            });
        }
        Some((&last, rest)) if !rest.is_empty() && last.len() == 1 => {
            match last.chars().next().and_then(Color::from_char) {
                Some(side) => (rest, side),
                None => (args, Color::White),
            }
        }
        Some(_) => (args, Color::White),
    };

    let layout = fields.join(" ");
    let board = layout
        .parse()
        .map_err(|source| ConsoleError::InvalidLayout { layout, source })?;
    Ok(Command::Layout { board, side })
}

fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    match args {
        [name, value] => SessionOption::parse(name, value).map(Command::Set),
        [] | [_] => Err(ConsoleError::MissingArgument {
            command: "set",
            argument: "option name and value",
        }),
        [name, ..] => Err(ConsoleError::InvalidOptionValue {
            name: name.to_string(),
            value: args[1..].join(" "),
        }),
    }
}
