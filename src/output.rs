use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use crossterm::style::Stylize;
use serde::Serialize;

use crate::channel::Channel;
use crate::error::{ChooserError, Result};
use crate::scan::MediaFile;

const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Decides once whether listings carry ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors are off with `--no-color` or a non-empty `NO_COLOR`.
    pub fn detect(no_color_flag: bool, no_color_env: Option<OsString>) -> Self {
        let env_disabled = no_color_env.is_some_and(|value| !value.is_empty());
        Self::new(!no_color_flag && !env_disabled)
    }

    pub fn green(&self, text: impl Display) -> String {
        if self.color {
            text.to_string().green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cyan(&self, text: impl Display) -> String {
        if self.color {
            text.to_string().cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn print_banner<W: Write>(out: &mut W, palette: Palette) -> Result<()> {
    writeln!(out, "{}", palette.cyan("Welcome to the interactive video chooser!"))?;
    writeln!(out, "{}", palette.cyan("----------------------------------------"))?;
    writeln!(out)?;
    Ok(())
}

pub fn print_channels<W: Write>(out: &mut W, palette: Palette, channels: &[Channel]) -> Result<()> {
    for (index, channel) in channels.iter().enumerate() {
        write_channel_line(out, palette, index, channel)?;
    }
    Ok(())
}

fn write_channel_line<W: Write>(
    out: &mut W,
    palette: Palette,
    index: usize,
    channel: &Channel,
) -> Result<()> {
    let number = palette.green(index + 1);
    let count = channel.videos.len();
    if count > 1 {
        let annotation = palette.cyan(format!("({count} videos)"));
        writeln!(out, "  {number} {} {annotation}", channel.name)?;
    } else {
        writeln!(out, "  {number} {}", channel.name)?;
    }
    Ok(())
}

/// Lists `videos` (already sorted) followed by the "play all" entry.
pub fn print_videos<W: Write>(
    out: &mut W,
    palette: Palette,
    channel: &Channel,
    videos: &[&MediaFile],
) -> Result<()> {
    for (index, video) in videos.iter().enumerate() {
        let number = palette.green(index + 1);
        let stamp = palette.cyan(format!("({})", format_timestamp(video.created)));
        writeln!(out, "  {number} {} {stamp}", channel.display_name(video))?;
    }
    let play_all = palette.green(videos.len() + 1);
    writeln!(out, "  {play_all} Play all videos")?;
    Ok(())
}

pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// Non-interactive listing for `--list`.
pub fn print_listing<W: Write>(
    out: &mut W,
    palette: Palette,
    format: &str,
    channels: &[Channel],
) -> Result<()> {
    match format {
        "text" => print_listing_text(out, palette, channels),
        "json" => print_listing_json(out, channels),
        other => Err(ChooserError::InvalidArg(format!(
            "Unknown output format: {other}"
        ))),
    }
}

fn print_listing_text<W: Write>(out: &mut W, palette: Palette, channels: &[Channel]) -> Result<()> {
    for (index, channel) in channels.iter().enumerate() {
        write_channel_line(out, palette, index, channel)?;
        for video in channel.sorted_by_creation() {
            let stamp = palette.cyan(format!("({})", format_timestamp(video.created)));
            writeln!(out, "      {} {stamp}", channel.display_name(video))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonChannel<'a> {
    name: &'a str,
    videos: Vec<JsonVideo<'a>>,
}

#[derive(Serialize)]
struct JsonVideo<'a> {
    name: &'a str,
    path: String,
    created: String,
}

fn print_listing_json<W: Write>(out: &mut W, channels: &[Channel]) -> Result<()> {
    let json: Vec<JsonChannel<'_>> = channels
        .iter()
        .map(|channel| JsonChannel {
            name: &channel.name,
            videos: channel
                .sorted_by_creation()
                .into_iter()
                .map(|video| JsonVideo {
                    name: &video.name,
                    path: video.path.to_string_lossy().into_owned(),
                    created: DateTime::<Local>::from(video.created).to_rfc3339(),
                })
                .collect(),
        })
        .collect();
    let text = serde_json::to_string_pretty(&json)?;
    writeln!(out, "{text}")?;
    Ok(())
}
