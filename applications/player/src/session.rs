//! Headless playback session
//!
//! Drives a [`PlaylistController`] from text commands and reports what the
//! controller did. The session stands in for the presentation layer: it
//! logs the callbacks, prints drained events, and keeps liked tracks and
//! per-track progress next to the controller.

use crate::command::Command;
use crate::error::{PlayerError, Result};
use crate::manifest::PlaylistManifest;
use eptss_core::{format_duration, PlaylistSummary, TrackId};
use eptss_playlist::{LikedTracks, PlaylistController, PlaylistOptions, TrackProgress};
use std::io::{BufRead, Write};

pub struct Session {
    title: Option<String>,
    description: Option<String>,
    summary: PlaylistSummary,
    controller: PlaylistController,
    likes: LikedTracks,
    progress: TrackProgress,
}

impl Session {
    pub fn new(manifest: PlaylistManifest, options: PlaylistOptions) -> Self {
        let summary = manifest.summary();
        let controller = PlaylistController::new(manifest.tracks, options)
            .on_track_change(|track, index| {
                tracing::info!(index, id = %track.id, source = %track.source, "now playing: {}", track.title);
            })
            .on_track_restart(|track, index| {
                tracing::info!(index, id = %track.id, "replaying: {}", track.title);
            })
            .on_playlist_end(|| tracing::info!("playlist finished"));

        Self {
            title: manifest.title,
            description: manifest.description,
            summary,
            controller,
            likes: LikedTracks::new(),
            progress: TrackProgress::new(),
        }
    }

    pub fn controller(&self) -> &PlaylistController {
        &self.controller
    }

    pub fn likes(&self) -> &LikedTracks {
        &self.likes
    }

    pub fn progress(&self) -> &TrackProgress {
        &self.progress
    }

    /// Apply one command and return the lines to print
    ///
    /// Drained controller events come first, then any command output.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>> {
        let mut output = Vec::new();

        match command {
            Command::Play(index) => match usize::try_from(*index) {
                Ok(index) => self.controller.play_track(index),
                Err(_) => tracing::debug!(index, "ignoring negative index"),
            },
            Command::Next => self.controller.next(),
            Command::Prev => self.controller.previous(),
            Command::Ended => self.controller.handle_track_ended(),
            Command::Shuffle => self.controller.toggle_shuffle(),
            Command::Repeat => self.controller.toggle_repeat(),
            Command::Pause => self.controller.set_is_playing(false),
            Command::Resume => self.controller.set_is_playing(true),
            Command::Toggle => self.controller.toggle_playing(),
            Command::Like(id) => output.push(self.toggle_like(id.as_deref())?),
            Command::Progress(seconds) => {
                if let Some(track) = self.controller.current_track() {
                    let ratio = self.progress.record(track, *seconds);
                    output.push(format!(
                        "progress: {} {:.0}%",
                        track.id,
                        ratio * 100.0
                    ));
                }
            }
            Command::Status => output.push(self.status_line()),
            Command::Summary => output.extend(self.summary_lines()),
            Command::Quit => {}
        }

        let mut lines: Vec<String> = self
            .controller
            .drain_events()
            .into_iter()
            .map(|event| format!("event: {}", event))
            .collect();
        lines.append(&mut output);
        Ok(lines)
    }

    /// Run commands from `input` until it ends or a `quit` command
    ///
    /// Bad lines are reported on `output` and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;

            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(line = number + 1, "{}", err);
                    writeln!(output, "error: {}", err)?;
                    continue;
                }
            };

            if command == Command::Quit {
                tracing::debug!(line = number + 1, "quit requested");
                break;
            }

            match self.execute(&command) {
                Ok(lines) => {
                    for line in lines {
                        writeln!(output, "{}", line)?;
                    }
                }
                Err(err) => {
                    tracing::warn!(line = number + 1, "{}", err);
                    writeln!(output, "error: {}", err)?;
                }
            }
        }

        output.flush()?;
        Ok(())
    }

    /// One-line description of the current state
    pub fn status_line(&self) -> String {
        let state = self.controller.state();
        let Some(track) = self.controller.current_track() else {
            return "status: empty playlist".to_string();
        };

        format!(
            "status: {}/{} {} \"{}\" {} shuffle={} repeat={} remaining={}",
            state.current_index + 1,
            self.controller.len(),
            track.id,
            track.title,
            if state.is_playing { "playing" } else { "paused" },
            if state.shuffle { "on" } else { "off" },
            state.repeat,
            self.controller.remaining()
        )
    }

    /// Header lines: title, description, counts and total duration
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(format!("title: {}", title));
        }
        if let Some(description) = &self.description {
            lines.push(format!("description: {}", description));
        }

        let mut line = format!("summary: {}", self.summary.count_label());
        if self.summary.has_known_duration() {
            line.push_str(&format!(
                ", {} total ({} with duration)",
                format_duration(self.summary.total_duration_secs),
                self.summary.tracks_with_duration
            ));
        }
        lines.push(line);
        lines
    }

    fn toggle_like(&mut self, id: Option<&str>) -> Result<String> {
        let id = match id {
            Some(id) => TrackId::new(id),
            None => match self.controller.current_track() {
                Some(track) => track.id.clone(),
                None => return Err(PlayerError::invalid_argument("like", "playlist is empty")),
            },
        };

        if !self.controller.tracks().iter().any(|track| track.id == id) {
            return Err(PlayerError::invalid_argument(
                "like",
                format!("unknown track id: {}", id),
            ));
        }

        let liked = self.likes.toggle(&id);
        let verb = if liked { "liked" } else { "unliked" };
        Ok(format!("{}: {}", verb, id))
    }
}
