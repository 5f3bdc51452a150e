use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::player::Player;

/// Remembers every path it was asked to play.
#[derive(Default)]
pub struct RecordingPlayer {
    pub played: Vec<PathBuf>,
}

impl RecordingPlayer {
    pub fn names(&self) -> Vec<String> {
        self.played
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

impl Player for RecordingPlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        self.played.push(path.to_path_buf());
        Ok(())
    }
}
