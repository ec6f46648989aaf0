//! Output mode routing.

use clap::ValueEnum;

/// Value of `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns when stdout is a terminal
    Table,
    /// Stable line-oriented output for scripts
    Plain,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document, nothing else
    Json,
    /// `key=value` and space-separated rows
    #[default]
    Plain,
    /// Colors, tables and hints (TTY only)
    Pretty,
}

impl OutputMode {
    /// Pick the mode from flags and terminal facts.
    ///
    /// `--json` wins outright. `--format plain` and `TERM=dumb` force plain;
    /// otherwise a terminal gets pretty output and anything else gets plain.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(OutputFormat::Plain) || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_wins_over_format() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_format_on_tty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        assert_eq!(
            OutputMode::resolve(false, None, true, true),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), true, true),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_tty_is_pretty() {
        assert_eq!(
            OutputMode::resolve(false, None, true, false),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), true, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_pipe_is_plain() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Plain
        );
    }
}
