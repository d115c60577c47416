//! Local commands typed into the line client.
use std::str::FromStr;

use game_core::ActionKind;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Toggle the card at a zero-based hand position.
    Select(usize),
    Play,
    Believe,
    Liar,
    Roll,
    Restart,
    Chat(String),
    Show,
    Help,
    Quit,
}

impl Command {
    pub const USAGE: &'static str = "/select <n>, /play, /believe, /liar, /roll, /restart, \
                                     /chat <text>, /show, /help, /quit";

    pub fn action(&self) -> Option<ActionKind> {
        match self {
            Command::Play => Some(ActionKind::MakePlay),
            Command::Believe => Some(ActionKind::BelieveClaim),
            Command::Liar => Some(ActionKind::CallLiar),
            Command::Roll => Some(ActionKind::RollDice),
            Command::Restart => Some(ActionKind::Restart),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0}; try /help")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("card positions start at 1, got {0:?}")]
    BadPosition(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name {
            "/select" | "/s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("/select"));
                }
                match rest.parse::<usize>() {
                    Ok(position) if position > 0 => Ok(Command::Select(position - 1)),
                    _ => Err(CommandError::BadPosition(rest.to_owned())),
                }
            }
            "/play" => Ok(Command::Play),
            "/believe" => Ok(Command::Believe),
            "/liar" => Ok(Command::Liar),
            "/roll" => Ok(Command::Roll),
            "/restart" => Ok(Command::Restart),
            "/chat" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("/chat"))
                } else {
                    Ok(Command::Chat(rest.to_owned()))
                }
            }
            "/show" => Ok(Command::Show),
            "/help" => Ok(Command::Help),
            "/quit" | "/q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}
