use super::LinkResolver;

/// Builds markdown links into a GitHub repository's blob view from an
/// `owner/repo` slug and a git ref.
pub struct GitHubLinkResolver {
    repo: String,
    git_ref: String,
}

impl GitHubLinkResolver {
    pub fn new(repo: String, git_ref: String) -> Self {
        Self { repo, git_ref }
    }
}

impl LinkResolver for GitHubLinkResolver {
    fn html_link(&self, path_with_anchor: &str, full_path: bool) -> String {
        let (file, anchor) = match path_with_anchor.split_once('#') {
            Some((file, anchor)) => (file, Some(anchor)),
            None => (path_with_anchor, None),
        };

        // Blob URLs are rooted at the repo, so the relative `./` goes
        let clean = file.trim_start_matches("./");

        let mut url = format!(
            "https://github.com/{}/blob/{}/{}",
            self.repo, self.git_ref, clean
        );
        if let Some(anchor) = anchor {
            url.push('#');
            url.push_str(anchor);
        }

        let label = if full_path {
            file
        } else {
            file.rsplit('/').next().unwrap_or(file)
        };

        format!("[{}]({})", label, url)
    }
}
