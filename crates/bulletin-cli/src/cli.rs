use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bulletin_core::query::SortMode;
use bulletin_core::VERSION;

use crate::ui::OutputFormat;

/// Bulletin - keep a local collection of rich-text news posts
#[derive(Parser)]
#[command(name = "bulletin")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding news.json
    #[arg(short, long, global = true, env = "BULLETIN_STORE", value_name = "DIR")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only posts whose text contains this (case-insensitive)
    #[arg(short = 'S', long, default_value = "")]
    pub search: String,

    /// Ordering: date-newest, date-oldest, title, pinned
    #[arg(long, value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Posts per page: 5, 10, 20, 50 or 100
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Same as `bulletin list` with no flags.
impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size: None,
            json: false,
            format: None,
        }
    }
}

/// Arguments for the `new` command
#[derive(Args)]
pub struct NewArgs {
    /// Post HTML (overrides stdin/editor)
    #[arg(long)]
    pub content: Option<String>,

    /// Pin the post
    #[arg(long)]
    pub pin: bool,

    /// Publication time (ISO-8601 or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Post ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replacement HTML (overrides stdin/editor)
    #[arg(long)]
    pub content: Option<String>,

    /// Pin the post
    #[arg(long, conflicts_with = "unpin")]
    pub pin: bool,

    /// Unpin the post
    #[arg(long)]
    pub unpin: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Post ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print the stored HTML instead of its text
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pin` and `unpin` commands
#[derive(Args)]
pub struct PinArgs {
    /// Post ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Post ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show effective settings and paths
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// List posts with search, sort and paging
    List(ListArgs),

    /// Publish a new post
    New(NewArgs),

    /// Change a post's content or pin state
    Edit(EditArgs),

    /// Show one post
    Show(ShowArgs),

    /// Pin a post
    Pin(PinArgs),

    /// Unpin a post
    Unpin(PinArgs),

    /// Delete a post
    Delete(DeleteArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    value.parse().map_err(|e: bulletin_core::BulletinError| e.to_string())
}
