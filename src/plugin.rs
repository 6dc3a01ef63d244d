use crate::command;
use crate::config::Config;
use crate::parser::{self, Finding};
use crate::provider::LinkResolver;
use crate::report::Report;
use crate::runner::CommandRunner;
use tracing::debug;

/// The plugin itself: runs flake8 through the injected runner and appends
/// formatted results to the report sink. Never fails - a missing tool,
/// malformed output, or a count below threshold all degrade to silence.
pub struct DangerPep8<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    resolver: Option<&'a dyn LinkResolver>,
}

impl<'a> DangerPep8<'a> {
    pub fn new(
        config: &'a Config,
        runner: &'a dyn CommandRunner,
        resolver: Option<&'a dyn LinkResolver>,
    ) -> Self {
        Self {
            config,
            runner,
            resolver,
        }
    }

    /// Lint `base_dir` and report findings, either as one inline comment
    /// per finding or as a single markdown table.
    pub fn lint(&self, report: &mut Report, use_inline_comments: bool) {
        if !self.flake8_installed() {
            debug!("flake8 not found, skipping lint");
            return;
        }

        let raw = self.runner.run(&command::lint_command(self.config));
        let findings = parser::parse_findings(&raw);

        if findings.len() <= self.config.threshold {
            debug!(
                "{} findings at or below threshold {}, nothing to report",
                findings.len(),
                self.config.threshold
            );
            return;
        }

        if use_inline_comments {
            for finding in &findings {
                report.message(finding.message.clone());
            }
        } else {
            report.markdown(self.issues_table(&findings));
        }
    }

    /// Report only the total violation count as a single warning.
    pub fn count_errors(&self, report: &mut Report) {
        if !self.flake8_installed() {
            debug!("flake8 not found, skipping count");
            return;
        }

        let raw = self.runner.run(&command::count_command(self.config));
        let total = raw.trim();
        if total.is_empty() {
            return;
        }

        // Unparseable counts are treated as zero
        let count: usize = total.parse().unwrap_or(0);
        if count > self.config.threshold {
            report.warn(format!(
                "{} PEP 8 issues found. Swallow your pride and fix them.",
                count
            ));
        }
    }

    fn flake8_installed(&self) -> bool {
        let located = self.runner.run(&command::which_command(self.config));
        !located.trim().is_empty()
    }

    fn issues_table(&self, findings: &[Finding]) -> String {
        let mut md = String::new();
        md.push_str("## DangerPep8 found issues\n\n");
        md.push_str("| File | Line | Column | Message |\n");
        md.push_str("|------|------|--------|---------|\n");

        for finding in findings {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                self.link_cell(finding),
                finding.line,
                finding.column,
                finding.message
            ));
        }

        md
    }

    fn link_cell(&self, finding: &Finding) -> String {
        match self.resolver {
            Some(resolver) => resolver.html_link(&finding.anchor(), false),
            None => finding.file.display().to_string(),
        }
    }
}
