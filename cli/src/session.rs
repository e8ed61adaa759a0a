use sapper_core::*;
use std::io::{self, BufRead, Write};

use crate::command::Command;
use crate::render::BoardView;

const PROMPT: &str =
    "Enter your operation (e.g. 'r 2 3' to reveal, 'f 1 4' to flag, or 'q' to quit): ";
const GOODBYE: &str = "👋 Game closed. Thanks for playing!";
const LOSS: &str = "💥 Boom! You hit a mine. Game over!";
const WIN: &str = "🎉 Congratulations! You win!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Won,
    Lost,
}

/// Reads one line, `None` on end of input. Bytes that are not UTF-8 are
/// replaced so the line is rejected by the parser instead of ending the session.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// Prints the difficulty menu and reads the selection.
pub fn choose_difficulty(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Difficulty> {
    writeln!(output, "Choose your difficulty level: ")?;
    for difficulty in Difficulty::ALL {
        writeln!(output, "{}. {}", difficulty.key(), difficulty)?;
    }
    write!(output, "Your difficulty level(1/2/3): ")?;
    output.flush()?;

    let choice = read_line(input)?.unwrap_or_default();
    if Difficulty::parse(&choice).is_none() {
        writeln!(output, "Invalid input.")?;
    }
    Ok(Difficulty::from_choice(&choice))
}

enum Feedback {
    Mark(MarkOutcome),
    Reveal(RevealOutcome),
}

/// Turn loop: render, prompt, read one command, apply it.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> io::Result<Ending> {
        loop {
            self.render()?;
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                log::debug!("end of input, closing session");
                writeln!(self.output)?;
                writeln!(self.output, "{GOODBYE}")?;
                return Ok(Ending::Quit);
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            log::trace!("command: {:?}", command);

            let feedback = match command {
                Command::Quit => {
                    writeln!(self.output, "{GOODBYE}")?;
                    return Ok(Ending::Quit);
                }
                Command::Reveal { row, col } => self
                    .game
                    .coords(row, col)
                    .and_then(|coords| self.game.reveal_at(coords))
                    .map(Feedback::Reveal),
                Command::ToggleFlag { row, col } => self
                    .game
                    .coords(row, col)
                    .and_then(|coords| self.game.toggle_flag(coords))
                    .map(Feedback::Mark),
            };

            match feedback {
                Err(err) => {
                    log::debug!("rejected {:?}: {}", command, err);
                    writeln!(self.output, "{err}")?;
                }
                Ok(Feedback::Mark(MarkOutcome::Flagged)) => {
                    writeln!(self.output, "🚩 Tile flagged.")?;
                }
                Ok(Feedback::Mark(MarkOutcome::Unflagged)) => {
                    writeln!(self.output, "❌ Flag removed.")?;
                }
                Ok(Feedback::Mark(MarkOutcome::NoChange))
                | Ok(Feedback::Reveal(RevealOutcome::NoChange)) => {
                    writeln!(self.output, "Tile already revealed.")?;
                }
                Ok(Feedback::Reveal(RevealOutcome::Revealed(_))) => {}
                Ok(Feedback::Reveal(RevealOutcome::HitMine)) => {
                    self.render()?;
                    writeln!(self.output, "{LOSS}")?;
                    return Ok(Ending::Lost);
                }
                Ok(Feedback::Reveal(RevealOutcome::Won)) => {
                    self.render()?;
                    writeln!(self.output, "{WIN}")?;
                    return Ok(Ending::Won);
                }
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        write!(self.output, "{}", BoardView::new(&self.game))
    }
}
