//! Report output stage.

use crate::config::ViewConfig;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat, ReportMetadata};
use crate::viewmodel::ReportView;
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

/// Report-generation settings for a view invocation.
#[must_use]
pub fn report_config_for(config: &ViewConfig) -> ReportConfig {
    ReportConfig {
        title: config.view.title.clone(),
        max_issues: config.view.max_issues,
        metadata: ReportMetadata {
            source_path: Some(config.report_path.to_string_lossy().into_owned()),
            ..ReportMetadata::new()
        },
    }
}

/// Render `view` in `format` and write it to the configured destination.
///
/// `format` must already be resolved (not `Auto`).
pub fn output_report(
    config: &ViewConfig,
    view: &ReportView,
    format: ReportFormat,
    target: &OutputTarget,
) -> Result<()> {
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(format, use_color);
    let report = reporter.generate(view, &report_config_for(config))?;
    write_output(&report, target, config.quiet)
}
