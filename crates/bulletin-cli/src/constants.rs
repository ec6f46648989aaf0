//! Constants used throughout the CLI.

/// Process exit codes.
///
/// 0 is success, 1 is an unclassified error and 2 is reserved for usage
/// errors reported by clap. Application-specific codes start at 3.
pub mod exit_codes {
    /// Post, config or store not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Widest title shown in a listing row.
pub const TITLE_WIDTH: usize = 60;

/// Environment variable for the config file location.
pub const CONFIG_ENV: &str = "BULLETIN_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "BULLETIN_LOG";
