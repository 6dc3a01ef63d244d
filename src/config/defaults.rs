use std::path::PathBuf;

pub fn default_base_dir() -> String {
    ".".to_string()
}

pub fn default_flake8_binary() -> String {
    "flake8".to_string()
}

pub fn default_git_ref() -> String {
    "main".to_string()
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}
