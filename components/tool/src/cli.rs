use clap::{Args, Parser, Subcommand};
use model::Direction;

#[derive(Debug, Parser, Clone)]
#[command(author, about, version, long_about = None)]
pub struct Cli {
    /// Path to the log4rs configuration file in YAML format.
    ///
    /// Logs go to stderr through env_logger and `RUST_LOG` if absent.
    #[arg(long, env = "GAP_TOOL_LOG", global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Known gaps in the form of `a_b,c_d`. Use `-1` for an open endpoint.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub gaps: String,

    /// Paging direction: `forward` (alias `after`) or `backward` (alias `before`).
    #[arg(long, default_value_t = Direction::Forward)]
    pub direction: Direction,

    /// Cursor the request pages from.
    #[arg(long, allow_hyphen_values = true)]
    pub near: i64,

    /// Outer edge of the request. `0` means no outer limit.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub far: i64,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Seq ids to test against the known gaps.
    #[arg(required = true, allow_hyphen_values = true)]
    pub seq_ids: Vec<i64>,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Seq ids of the messages present in the simulated conversation, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub present: Vec<i64>,

    /// Number of messages wanted. Defaults to the configured page size.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Path to the configuration file in YAML format.
    #[arg(long, env = "GAP_TOOL_CONFIG")]
    pub config: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Tell, per seq id, whether it is a known gap.
    Check(CheckArgs),

    /// Print the gaps after resolving open endpoints and normalizing.
    Describe(FilterArgs),

    /// Assemble a page against an in-memory conversation.
    Page(PageArgs),
}
