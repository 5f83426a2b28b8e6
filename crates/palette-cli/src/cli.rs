//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use palette_cli::engine::{OverrideArg, parse_mode, parse_override_arg};
use palette_model::{ExecutionMode, Tier};

#[derive(Parser)]
#[command(
    name = "palette",
    version,
    about = "Adaptive operation palette generator",
    long_about = "Generate operation palettes adapted to the learner's experience tier.\n\n\
                  The tier is persisted between runs; section overrides supplied by\n\
                  extensions replace or extend the built-in sections."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Engine configuration file (default: ./palette.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble and print the full palette document.
    Render(RenderArgs),

    /// Print the compact palette used by the horizontal layout.
    Compact,

    /// Read or change the persisted experience tier.
    Tier {
        #[command(subcommand)]
        action: TierAction,
    },

    /// List sections and where they appear in each ordering.
    Sections,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Tier to render for (default: the persisted tier).
    #[arg(long = "tier", value_enum)]
    pub tier: Option<TierArg>,

    /// Render for the stage rather than a sprite.
    #[arg(long = "stage")]
    pub stage: bool,

    /// Render the first palette shown before any target is selected.
    #[arg(long = "initial-setup")]
    pub initial_setup: bool,

    /// Target whose reporter ids are generated.
    #[arg(long = "target-id", value_name = "ID", default_value = "sprite1")]
    pub target_id: String,

    /// Connected device type.
    #[arg(long = "device", value_name = "TYPE")]
    pub device: Option<String>,

    /// Execution mode: realtime, or upload to the connected device.
    #[arg(long = "mode", value_name = "MODE", default_value = "realtime", value_parser = parse_mode)]
    pub mode: ExecutionMode,

    /// Example costume name.
    #[arg(long = "costume", value_name = "NAME", default_value = "")]
    pub costume: String,

    /// Example backdrop name.
    #[arg(long = "backdrop", value_name = "NAME", default_value = "")]
    pub backdrop: String,

    /// Example sound name.
    #[arg(long = "sound", value_name = "NAME", default_value = "")]
    pub sound: String,

    /// Replace or add a section with markup read from FILE.
    #[arg(long = "override", value_name = "ID=FILE", value_parser = parse_override_arg)]
    pub overrides: Vec<OverrideArg>,

    /// Print the document's SHA-256 digest instead of the document.
    #[arg(long = "digest")]
    pub digest: bool,
}

#[derive(Subcommand)]
pub enum TierAction {
    /// Print the current tier.
    Get,
    /// Select a tier. Unrecognized values are ignored with a warning.
    Set {
        #[arg(value_name = "TIER")]
        value: String,
    },
    /// Clear the persisted tier.
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TierArg {
    Novice,
    Standard,
}

impl From<TierArg> for Tier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::Novice => Tier::Novice,
            TierArg::Standard => Tier::Standard,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
