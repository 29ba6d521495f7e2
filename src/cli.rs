use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::config::AppConfig;
use crate::app::state::AppState;
use crate::domain::CandidateList;

/// Expand a candidate list and spin the roller for a winner.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Candidates to start with, one per argument
    pub items: Vec<String>,

    /// Pre-filled target size for Expand
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=9999))]
    pub count: Option<u16>,

    /// Roller samples per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Spin length in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u32>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags given on the command line win over file values.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(fps) = self.fps {
            config.spinner.frame_rate = fps;
        }
        if let Some(ms) = self.duration {
            config.spinner.duration = Duration::from_millis(ms);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }

    /// Pre-fills the editor fields from positional items and `--count`.
    pub fn prefill(&self, state: &mut AppState) {
        if !self.items.is_empty() {
            state.set_candidates(&CandidateList::from_items(self.items.iter().cloned()));
        }
        if let Some(count) = self.count {
            state.count.set_text(count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::spinner::{DEFAULT_FRAME_RATE, SpinnerConfig};
    use rstest::rstest;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gacha").chain(args.iter().copied())).unwrap()
    }

    fn file_config() -> AppConfig {
        AppConfig {
            spinner: SpinnerConfig {
                frame_rate: 30,
                duration: Duration::from_millis(2000),
            },
            seed: Some(1),
        }
    }

    mod apply {
        use super::*;

        #[test]
        fn no_flags_keep_file_values() {
            let config = parse(&[]).apply(file_config());

            assert_eq!(config, file_config());
        }

        #[test]
        fn flags_override_file_values() {
            let config =
                parse(&["--fps", "60", "--duration", "750", "--seed", "130725"]).apply(file_config());

            assert_eq!(config.spinner.frame_rate, 60);
            assert_eq!(config.spinner.duration, Duration::from_millis(750));
            assert_eq!(config.seed, Some(130_725));
        }

        #[test]
        fn defaults_survive_when_nothing_is_set() {
            let config = parse(&[]).apply(AppConfig::default());

            assert_eq!(config.spinner.frame_rate, DEFAULT_FRAME_RATE);
            assert!(config.seed.is_none());
        }
    }

    mod parsing {
        use super::*;

        #[rstest]
        #[case(&["--fps", "0"])]
        #[case(&["--count", "10000"])]
        #[case(&["--seed", "-3"])]
        fn rejects_out_of_range(#[case] args: &[&str]) {
            let result =
                Args::try_parse_from(std::iter::once("gacha").chain(args.iter().copied()));

            assert!(result.is_err());
        }

        #[test]
        fn positional_items_and_count_prefill_state() {
            let args = parse(&["pizza", "sushi", "pizza", "--count", "6"]);
            let mut state = AppState::seeded(1, SpinnerConfig::default());

            args.prefill(&mut state);

            assert_eq!(state.candidates.as_str(), "pizza\nsushi\npizza");
            assert_eq!(state.requested_count(), 6);
        }
    }
}
