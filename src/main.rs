mod channel;
mod cli;
mod error;
mod output;
mod player;
mod prompt;
mod runner;
mod scan;

use std::env;
use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::ChooserError;
use crate::output::Palette;
use crate::player::CommandPlayer;
use crate::runner::{Outcome, run};

fn main() {
    if let Err(err) = real_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), ChooserError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();

    cli.validate().map_err(ChooserError::InvalidArg)?;
    let palette = Palette::detect(cli.no_color, env::var_os("NO_COLOR"));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        let videos = scan::scan_videos(&cli.dir)?;
        let channels = channel::group_by_channel(videos);
        return output::print_listing(&mut out, palette, &cli.output, &channels);
    }

    let command = cli.player_command().map_err(ChooserError::InvalidArg)?;
    let mut player = CommandPlayer::new(command)?;

    output::print_banner(&mut out, palette)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    match run(&cli.dir, palette, &mut input, &mut out, &mut player)? {
        Outcome::NoVideos => debug!("nothing to play"),
        Outcome::Played(count) => debug!(count, "session finished"),
    }
    Ok(())
}
