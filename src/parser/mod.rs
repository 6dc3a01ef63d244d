mod finding;

pub use finding::Finding;

use regex::Regex;
use std::path::PathBuf;

/// Parse flake8 report output, one finding per line of the shape
/// `<file>:<line>:<column>: <message>`. Lines that do not match are
/// skipped silently, the trailing blank line included.
pub fn parse_findings(raw: &str) -> Vec<Finding> {
    let Ok(line_re) = Regex::new(r"^(.+):(\d+):(\d+): (.+)$") else {
        return Vec::new();
    };

    raw.lines()
        .filter_map(|line| {
            let caps = line_re.captures(line)?;
            Some(Finding {
                file: PathBuf::from(caps.get(1)?.as_str()),
                line: caps.get(2)?.as_str().parse().ok()?,
                column: caps.get(3)?.as_str().parse().ok()?,
                message: caps.get(4)?.as_str().to_string(),
            })
        })
        .collect()
}
