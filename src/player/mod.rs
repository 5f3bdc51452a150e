use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{ChooserError, Result};

#[cfg(test)]
pub mod mock;

pub trait Player {
    /// Plays `path`, blocking until playback ends.
    fn play(&mut self, path: &Path) -> Result<()>;
}

/// Runs an external player with the video as its last argument.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(command: Vec<String>) -> Result<Self> {
        let mut words = command.into_iter();
        let program = words
            .next()
            .ok_or_else(|| ChooserError::InvalidArg("player command is empty".to_string()))?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl Player for CommandPlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(path);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        info!(player = %self.program, video = %path.display(), "starting player");
        let status = cmd.status().map_err(|source| ChooserError::Player {
            program: self.program.clone(),
            source,
        })?;

        // The player's exit status does not affect the session.
        if status.success() {
            debug!(%status, "player exited");
        } else {
            warn!(%status, "player exited with failure");
        }
        Ok(())
    }
}
