use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ChooserError, Result};

pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

/// One video found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub name: String,
    pub created: SystemTime,
}

/// Lists the videos directly inside `dir`, ordered by file name.
pub fn scan_videos(dir: &Path) -> Result<Vec<MediaFile>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut videos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Only the directory itself failing ends the scan.
            Err(source) if source.depth() == 0 => {
                return Err(ChooserError::Scan {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                if err.path().is_some_and(is_video) {
                    warn!(error = %err, "skipping unreadable video");
                }
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_video(entry.path()) {
            continue;
        }
        // Birth time is missing on some filesystems.
        let created = entry
            .metadata()
            .map_err(io::Error::from)
            .and_then(|metadata| metadata.created().or_else(|_| metadata.modified()));
        let created = match created {
            Ok(created) => created,
            Err(err) => {
                warn!(video = %entry.path().display(), error = %err, "skipping unreadable video");
                continue;
            }
        };
        videos.push(MediaFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
            created,
        });
    }

    debug!(dir = %dir.display(), count = videos.len(), "scanned videos");
    Ok(videos)
}

fn is_video(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext),
        None => false,
    }
}
