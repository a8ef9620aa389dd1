//! Interactive play loop
//!
//! Reads one guess per line, rejects malformed input without spending a
//! round, and stops as soon as the session is won or lost.

use crate::core::Code;
use crate::error::PlayError;
use crate::game::{GameSession, GameState};
use crate::output::{
    print_banner, print_defeat, print_prompt, print_rejection, print_round, print_victory,
};
use std::io::{self, BufRead, Read, Write};
use tracing::{debug, info};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { rounds: u32 },
    Lost { secret: Code },
    /// Input ran out before the game finished
    Abandoned,
}

/// Run the interactive game loop until the session finishes or input ends
///
/// End of input counts as a forfeit: the loop returns
/// `PlayOutcome::Abandoned` without spending a round.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// session has already finished before the loop starts.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> Result<PlayOutcome, PlayError> {
    print_banner(&mut out, session.max_rounds())?;

    loop {
        print_prompt(&mut out)?;

        let Some(line) = read_guess(&mut input)? else {
            info!(round = session.round(), "input closed before game finished");
            writeln!(out, "\nNo more input. Thanks for playing!")?;
            return Ok(PlayOutcome::Abandoned);
        };

        let guess = match Code::parse(&line) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(input = %line.trim(), error = ?e, "guess rejected");
                print_rejection(&mut out, &e)?;
                continue;
            }
        };

        let round = session.evaluate(&guess)?;
        print_round(&mut out, &round)?;

        match session.state() {
            GameState::Won => {
                print_victory(&mut out, round.number, session.max_rounds())?;
                return Ok(PlayOutcome::Won {
                    rounds: round.number,
                });
            }
            GameState::Lost => {
                print_defeat(&mut out, session.secret())?;
                return Ok(PlayOutcome::Lost {
                    secret: *session.secret(),
                });
            }
            GameState::InProgress => {}
        }
    }
}

/// Longest line kept from input; the rest of a longer line is discarded
const MAX_LINE_BYTES: u64 = 256;

/// Read one line of input; `None` at end of input
///
/// Bytes that are not UTF-8 become U+FFFD, which the palette check rejects.
fn read_guess<R: BufRead>(input: &mut R) -> Result<Option<String>, PlayError> {
    let mut buf = Vec::new();
    if input.by_ref().take(MAX_LINE_BYTES).read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() != Some(&b'\n') && buf.len() as u64 == MAX_LINE_BYTES {
        skip_rest_of_line(input)?;
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Consume input up to and including the next newline without buffering it
fn skip_rest_of_line<R: BufRead>(input: &mut R) -> io::Result<()> {
    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }

        if let Some(pos) = available.iter().position(|&b| b == b'\n') {
            input.consume(pos + 1);
            return Ok(());
        }

        let len = available.len();
        input.consume(len);
    }
}
