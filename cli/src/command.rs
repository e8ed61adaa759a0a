use std::str::FromStr;
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal { row: i64, col: i64 },
    ToggleFlag { row: i64, col: i64 },
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Wrong format, please input: r 3 4 or f 2 1")]
    WrongFormat,
    #[error(
        "Invalid command {0:?}. Please use 'r' to reveal or 'f' to flag or 'q' to quit the game."
    )]
    UnknownOperation(String),
    #[error("Coordinates must be whole numbers, got {0:?}")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(Self::Quit);
        }

        let mut words = line.split_whitespace();
        let (Some(op), Some(row), Some(col), None) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            return Err(CommandError::WrongFormat);
        };

        let parse = |value: &str| {
            value
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidNumber(value.to_owned()))
        };

        match op {
            "r" => Ok(Self::Reveal {
                row: parse(row)?,
                col: parse(col)?,
            }),
            "f" => Ok(Self::ToggleFlag {
                row: parse(row)?,
                col: parse(col)?,
            }),
            _ => Err(CommandError::UnknownOperation(op.to_owned())),
        }
    }
}
