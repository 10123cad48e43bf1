use crate::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::LazyLock;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9_-]+)").expect("static regex")
});
static BARE_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex"));

/// Accepts a bare username or a GitHub profile URL and returns the username.
pub fn extract_username(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PortfolioError::EmptyUsername);
    }

    if let Some(captures) = PROFILE_URL.captures(input) {
        return Ok(captures[1].to_string());
    }
    if BARE_USERNAME.is_match(input) {
        return Ok(input.to_string());
    }

    Err(PortfolioError::InvalidUsername(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_usernames_pass_through_trimmed() {
        assert_eq!(extract_username("  octo-cat_9 ").expect("valid"), "octo-cat_9");
    }

    #[test]
    fn profile_urls_are_reduced_to_the_username() {
        for input in [
            "https://github.com/octocat",
            "https://www.github.com/octocat/",
            "http://github.com/octocat?tab=repositories",
            "github.com/octocat",
            "https://github.com/octocat/hello-world",
        ] {
            assert_eq!(extract_username(input).expect("valid url"), "octocat", "{input}");
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(extract_username("   "), Err(PortfolioError::EmptyUsername)));
    }

    #[test]
    fn invalid_input_is_rejected() {
        let err = extract_username("not a user!").expect_err("should fail");
        assert!(err.to_string().contains("invalid GitHub username or URL"));
        assert!(extract_username("https://gitlab.com/octocat").is_err());
    }
}
