use crate::config::Config;

/// Build the lint invocation: `flake8 <base_dir> [--config <file>]`.
/// Values are interpolated verbatim, matching what the review host would
/// run by hand.
pub fn lint_command(config: &Config) -> String {
    let mut cmd = format!("{} {}", config.flake8.binary, config.base_dir);
    if let Some(config_file) = &config.config_file {
        cmd.push_str(&format!(" --config {}", config_file));
    }
    cmd
}

/// Build the count invocation: `flake8 <base_dir> --quiet --quiet --count`.
/// The count command never carries `--config`.
pub fn count_command(config: &Config) -> String {
    format!(
        "{} {} --quiet --quiet --count",
        config.flake8.binary, config.base_dir
    )
}

/// Availability probe for the configured binary.
pub fn which_command(config: &Config) -> String {
    format!("which {}", config.flake8.binary)
}
