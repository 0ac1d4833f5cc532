//! Session commands
//!
//! One command per line. Blank lines and `#` comments are skipped.

use crate::error::{PlayerError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Play the track at this index (negative indices are ignored)
    Play(i64),
    Next,
    Prev,
    /// The host finished playing the current track
    Ended,
    Shuffle,
    Repeat,
    Pause,
    Resume,
    Toggle,
    /// Like or unlike a track (default: the current one)
    Like(Option<String>),
    /// Elapsed seconds in the current track
    Progress(f64),
    Status,
    Summary,
    Quit,
}

impl Command {
    /// Parse one script line; `None` for blank lines and comments
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        let command = match keyword.as_str() {
            "play" => {
                let raw = argument
                    .ok_or_else(|| PlayerError::invalid_argument("play", "missing index"))?;
                let index = raw.parse::<i64>().map_err(|_| {
                    PlayerError::invalid_argument("play", format!("not an index: {}", raw))
                })?;
                Command::Play(index)
            }
            "next" => Command::Next,
            "prev" | "previous" => Command::Prev,
            "ended" => Command::Ended,
            "shuffle" => Command::Shuffle,
            "repeat" => Command::Repeat,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "toggle" => Command::Toggle,
            "like" => Command::Like(argument.map(str::to_string)),
            "progress" => {
                let raw = argument
                    .ok_or_else(|| PlayerError::invalid_argument("progress", "missing seconds"))?;
                let seconds = raw.parse::<f64>().map_err(|_| {
                    PlayerError::invalid_argument("progress", format!("not a number: {}", raw))
                })?;
                Command::Progress(seconds)
            }
            "status" => Command::Status,
            "summary" => Command::Summary,
            "quit" | "exit" => Command::Quit,
            _ => return Err(PlayerError::UnknownCommand(s.trim().to_string())),
        };

        Ok(command)
    }
}
