//! Pipeline orchestration: read a report, derive its view, write output.
//!
//! Shared by the CLI command handlers so each handler stays a thin
//! sequence of stages.

mod output;
mod parse;
mod report_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{read_report, read_report_str, LoadedReport, STDIN_PATH};
pub use report_stage::{output_report, report_config_for};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Report rendered; no severity threshold reached
    pub const SUCCESS: i32 = 0;
    /// The `--fail-on` severity threshold was reached
    pub const SEVERITY_THRESHOLD: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::SEVERITY_THRESHOLD, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
