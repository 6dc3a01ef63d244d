use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One flake8-reported issue, parsed from a single report line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    pub file: PathBuf,

    pub line: u32,

    pub column: u32,

    /// Rule code plus description, e.g. `E128 continuation line ...`
    pub message: String,
}

impl Finding {
    /// Location string used for link anchors: `<file>#L<line>`
    pub fn anchor(&self) -> String {
        format!("{}#L{}", self.file.display(), self.line)
    }
}
