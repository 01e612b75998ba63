use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edgesync")]
#[command(about = "Inspect and render bucket/CDN synchronization reports")]
#[command(after_help = "Run '<command> --help' for detailed options on each command.")]
pub struct Cli {
    /// Override the configuration directory for this invocation
    #[arg(long, global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a run report as text
    Render(RenderArgs),
    /// Show change counts for a run report
    Summary(SummaryArgs),
    /// Apply partial updates to a run report
    Merge(MergeArgs),
    /// Show or change persisted settings
    Config(ConfigArgs),
}

#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
    /// Report JSON file ('-' reads stdin)
    pub report: PathBuf,
    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,
    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

impl RenderArgs {
    pub fn colors_flag(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct SummaryArgs {
    /// Report JSON file ('-' reads stdin)
    pub report: PathBuf,
    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct MergeArgs {
    /// Report JSON file to start from
    pub report: PathBuf,
    /// Patch JSON files, applied in order
    #[arg(required = true)]
    pub patches: Vec<PathBuf>,
    /// Write the merged report here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    /// Persist whether reports are colorized by default
    #[arg(long, value_enum)]
    pub colors: Option<Toggle>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}
