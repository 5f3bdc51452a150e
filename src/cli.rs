use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "video-chooser",
    version,
    about = "Interactive tool to choose the next video to watch from a channel"
)]
pub struct Cli {
    /// The directory on your computer which contains the videos
    pub dir: PathBuf,

    /// Player command line; the video path is appended as the last argument
    #[arg(long, env = "VIDEO_CHOOSER_PLAYER", default_value = "mpv")]
    pub player: String,

    /// Print the channel listing and exit without prompting
    #[arg(long)]
    pub list: bool,

    /// Format of the `--list` output: text or json
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Print listings without ANSI colors (also set by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.output.as_str(), "text" | "json") {
            return Err(format!("Unknown output format: {}", self.output));
        }

        self.player_command().map(|_| ())
    }

    /// Splits `--player` into the program and its leading arguments.
    pub fn player_command(&self) -> Result<Vec<String>, String> {
        let words = shell_words::split(&self.player)
            .map_err(|err| format!("cannot parse player command {:?}: {err}", self.player))?;
        if words.is_empty() {
            return Err("player command is empty".to_string());
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["video-chooser", "/tmp/videos"]).expect("parse");
        assert_eq!(cli.dir.to_str(), Some("/tmp/videos"));
        assert_eq!(cli.output, "text");
        assert!(!cli.list);
        assert!(!cli.no_color);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn requires_directory() {
        assert!(Cli::try_parse_from(["video-chooser"]).is_err());
    }

    #[test]
    fn splits_quoted_player_command() {
        let cli = Cli::try_parse_from([
            "video-chooser",
            "--player",
            "mpv --fs --title 'my player'",
            "videos",
        ])
        .expect("parse");
        assert_eq!(
            cli.player_command().expect("split"),
            vec!["mpv", "--fs", "--title", "my player"]
        );
    }

    #[test]
    fn rejects_empty_player_and_unknown_output() {
        let cli =
            Cli::try_parse_from(["video-chooser", "--player", "  ", "videos"]).expect("parse");
        assert!(cli.validate().is_err());

        let cli =
            Cli::try_parse_from(["video-chooser", "--output", "yaml", "videos"]).expect("parse");
        assert!(cli.validate().is_err());
    }

    #[test]
    fn help_describes_every_option() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Player command line"));
        assert!(help.contains("Print the channel listing"));
        assert!(help.contains("Format of the `--list` output"));
        assert!(help.contains("without ANSI colors"));
    }
}
