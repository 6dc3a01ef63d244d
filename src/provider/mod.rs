mod github;

pub use github::GitHubLinkResolver;

use crate::config::{Config, Provider};
use tracing::debug;

/// Resolves a `path#L<line>` location into a human-clickable link for the
/// review report. Supplied only when the hosting provider supports it.
pub trait LinkResolver {
    /// `path_with_anchor` is `<file>#L<line>`. With `full_path` the link
    /// label is the whole path, otherwise just the file name.
    fn html_link(&self, path_with_anchor: &str, full_path: bool) -> String;
}

/// Build the resolver for the configured provider, if any. Only GitHub
/// resolves links; other providers fall back to raw file paths.
pub fn create_resolver(config: &Config) -> Option<Box<dyn LinkResolver>> {
    match config.provider {
        Provider::GitHub => match &config.github.repo {
            Some(repo) => Some(Box::new(GitHubLinkResolver::new(
                repo.clone(),
                config.github.git_ref.clone(),
            ))),
            None => {
                debug!("Provider is github but github.repo is not set, links disabled");
                None
            }
        },
        Provider::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resolver_for_other_provider() {
        let mut config = Config::default();
        config.provider = Provider::Other;
        config.github.repo = Some("acme/widgets".to_string());

        assert!(create_resolver(&config).is_none());
    }

    #[test]
    fn test_no_resolver_without_repo() {
        let mut config = Config::default();
        config.provider = Provider::GitHub;

        assert!(create_resolver(&config).is_none());
    }

    #[test]
    fn test_resolver_for_github() {
        let mut config = Config::default();
        config.provider = Provider::GitHub;
        config.github.repo = Some("acme/widgets".to_string());

        assert!(create_resolver(&config).is_some());
    }
}
