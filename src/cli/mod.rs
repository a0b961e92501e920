//! Command-line options and one-shot mode.

mod clipboard;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use tokio::sync::mpsc;
use zeroize::Zeroizing;

use passgen::config::{self, CharacterSet, GenerationConfig, Length, Mode};
use passgen::pass::RandomGenerator;
use passgen::Controller;

pub use clipboard::copy as copy_to_clipboard;

#[derive(Debug, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Configure, preview and accept a generated password"
)]
pub struct Args {
    /// Generation mode: characters or words
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Characters per password (10-50)
    #[arg(short, long)]
    pub length: Option<Length>,

    /// Enable a character set; repeat to enable several. Replaces the saved sets.
    #[arg(short = 's', long = "set", value_name = "SET")]
    pub sets: Vec<CharacterSet>,

    /// Words per passphrase (at least one)
    #[arg(short, long)]
    pub words: Option<NonZeroUsize>,

    /// Separator between passphrase words
    #[arg(long)]
    pub separator: Option<String>,

    /// Print one password and exit instead of opening the interactive view
    #[arg(short, long)]
    pub print: bool,

    /// Copy one password to the clipboard and exit
    #[arg(short, long)]
    pub board: bool,

    /// Ignore saved defaults
    #[arg(short, long)]
    pub default: bool,

    /// Save the effective configuration as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Log filter directives
    #[arg(long, env = "PASSGEN_LOG", default_value = "warn")]
    pub log_filter: String,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn is_one_shot(&self) -> bool {
        self.print || self.board
    }

    /// Saved (or default) configuration with command-line overrides applied.
    pub fn config(&self) -> passgen::Result<GenerationConfig> {
        let mut config = if self.default {
            GenerationConfig::default()
        } else {
            config::load()?
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(length) = self.length {
            config.random_characters.length = length;
        }
        if !self.sets.is_empty() {
            config.random_characters.enabled_character_sets = self.sets.iter().copied().collect();
        }
        if let Some(count) = self.words {
            config.words.count = count;
        }
        if let Some(ref separator) = self.separator {
            config.words.separator = separator.clone();
        }

        if self.save {
            config::save(&config)?;
        }
        Ok(config)
    }
}

/// Generate once, accept, and print or copy the result.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config()?;

    let (accepted_tx, mut accepted_rx) = mpsc::unbounded_channel::<Zeroizing<String>>();
    let (mut controller, mut failures) =
        Controller::new(RandomGenerator::new(), config, move |password: &str| {
            let _ = accepted_tx.send(Zeroizing::new(password.to_string()));
        });

    controller.settled().await;
    if let Some(err) = failures.try_recv() {
        return Err(err.into());
    }

    controller.accept_current_password();
    let password = accepted_rx
        .recv()
        .await
        .unwrap_or_else(|| Zeroizing::new(String::new()));
    if password.is_empty() {
        anyhow::bail!("no password can be generated with this configuration");
    }

    if args.board {
        copy_to_clipboard(&password)?;
        println!("*** -COPIED TO CLIPBOARD- ***");
    } else {
        println!("{}", password.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sets_and_length() {
        let args = Args::try_parse_from([
            "passgen", "-d", "-l", "24", "-s", "DIGITS", "--set", "SYMBOLS", "--print",
        ])
        .unwrap();

        assert!(args.is_one_shot());
        let config = args.config().unwrap();
        assert_eq!(config.random_characters.length.get(), 24);
        let sets: Vec<_> = config.random_characters.enabled_character_sets.iter().collect();
        assert_eq!(sets, vec![CharacterSet::Digits, CharacterSet::Symbols]);
    }

    #[test]
    fn rejects_out_of_range_length() {
        assert!(Args::try_parse_from(["passgen", "--length", "9"]).is_err());
        assert!(Args::try_parse_from(["passgen", "--length", "51"]).is_err());
    }

    #[test]
    fn rejects_unknown_set() {
        assert!(Args::try_parse_from(["passgen", "--set", "EMOJI"]).is_err());
    }

    #[test]
    fn rejects_zero_words() {
        assert!(Args::try_parse_from(["passgen", "--words", "0"]).is_err());
        assert!(Args::try_parse_from(["passgen", "--words", "1"]).is_ok());
    }

    #[test]
    fn words_overrides() {
        let args = Args::try_parse_from([
            "passgen", "-d", "-m", "words", "-w", "6", "--separator", "-",
        ])
        .unwrap();

        assert!(!args.is_one_shot());
        let config = args.config().unwrap();
        assert_eq!(config.mode, Mode::Words);
        assert_eq!(config.words.count.get(), 6);
        assert_eq!(config.words.separator, "-");
    }
}
