use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::channel::{Channel, group_by_channel};
use crate::error::{ChooserError, Result, Selection};
use crate::output::{self, Palette};
use crate::player::Player;
use crate::prompt::{ask, ask_choice, is_yes};
use crate::scan::{MediaFile, scan_videos};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NoVideos,
    Played(usize),
}

/// One interactive session: pick a channel, pick a video, play it.
///
/// Every prompt and every playback blocks the whole process.
pub fn run<R, W, P>(
    dir: &Path,
    palette: Palette,
    input: &mut R,
    out: &mut W,
    player: &mut P,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    let videos = scan_videos(dir)?;
    if videos.is_empty() {
        writeln!(out, "No videos found in folder {}", dir.display())?;
        return Ok(Outcome::NoVideos);
    }

    let channels = group_by_channel(videos);
    output::print_channels(out, palette, &channels)?;
    writeln!(out)?;

    let (index, defaulted) = ask_choice(
        input,
        out,
        "Choose channel to watch next: ",
        channels.len(),
        Selection::Channel,
    )?;
    if defaulted {
        writeln!(out, "No input - choosing first channel as default")?;
    }
    let channel = &channels[index];
    info!(channel = %channel.name, videos = channel.videos.len(), "channel chosen");
    writeln!(out)?;
    writeln!(out, "{}", channel.name)?;

    if let [only] = channel.videos.as_slice() {
        play_video(only, input, out, player)?;
        return Ok(Outcome::Played(1));
    }

    choose_video(channel, palette, input, out, player)
}

fn choose_video<R, W, P>(
    channel: &Channel,
    palette: Palette,
    input: &mut R,
    out: &mut W,
    player: &mut P,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    let sorted = channel.sorted_by_creation();
    output::print_videos(out, palette, channel, &sorted)?;

    // One extra slot for "play all".
    let (index, defaulted) = ask_choice(
        input,
        out,
        "Choose video to watch next: ",
        sorted.len() + 1,
        Selection::Video,
    )?;
    if defaulted {
        writeln!(out, "No input - choosing first video as default")?;
    }

    if index == sorted.len() {
        writeln!(out)?;
        writeln!(out, "Playing all videos in order of creation date")?;
        for video in &sorted {
            play_video(video, input, out, player)?;
        }
        return Ok(Outcome::Played(sorted.len()));
    }

    play_video(sorted[index], input, out, player)?;
    Ok(Outcome::Played(1))
}

/// Plays one video, then offers to delete it.
fn play_video<R, W, P>(
    video: &MediaFile,
    input: &mut R,
    out: &mut W,
    player: &mut P,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    player.play(&video.path)?;

    let answer = ask(input, out, "Delete file? [y/N] ")?;
    if is_yes(answer.as_deref()) {
        fs::remove_file(&video.path).map_err(|source| ChooserError::Delete {
            path: video.path.clone(),
            source,
        })?;
        info!(video = %video.path.display(), "deleted");
    }
    writeln!(out)?;
    Ok(())
}
