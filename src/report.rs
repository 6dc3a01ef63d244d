use serde::{Deserialize, Serialize};

/// Append-only sink the plugin writes into. The review host owns the
/// collections; this crate only pushes.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Report {
    /// Plain warning strings shown in the review summary
    pub warnings: Vec<String>,

    /// Rendered markdown blocks (heading + table)
    pub markdowns: Vec<Markdown>,

    /// Inline-comment texts, one per finding, in finding order
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Markdown {
    pub message: String,
}

impl Report {
    pub fn warn(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    pub fn markdown(&mut self, text: impl Into<String>) {
        self.markdowns.push(Markdown {
            message: text.into(),
        });
    }

    pub fn message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.markdowns.is_empty() && self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_only() {
        let mut report = Report::default();
        assert!(report.is_empty());

        report.warn("10 PEP 8 issues found");
        report.markdown("## DangerPep8 found issues");
        report.message("E128 continuation line under-indented for visual indent");

        assert!(!report.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.markdowns[0].message, "## DangerPep8 found issues");
        assert_eq!(report.messages.len(), 1);
    }
}
