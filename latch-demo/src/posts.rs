//! Remote option data source.
//!
//! The widget never sees any of this: fetching, mapping, and failure
//! handling happen entirely in the container, which only mounts the
//! posts-backed select once the data is ready.

use latch::SelectOption;
use serde::Deserialize;
use thiserror::Error;

/// Endpoint the demo fetches posts from, unless `LATCH_POSTS_URL` is set.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// One post record from the remote endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Why the post fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// State of an async-loadable resource.
#[derive(Debug, Clone)]
pub enum ResourceState<T> {
    Loading,
    Ready(T),
    Error(String),
}

/// Fetch the post list from `url`.
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// Map post records onto the widget's option contract.
pub fn posts_to_options(posts: &[Post]) -> Vec<SelectOption> {
    posts
        .iter()
        .map(|post| SelectOption::new(post.id.to_string(), &post.title).with_meta(&post.body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_posts_onto_option_contract() {
        let payload = r#"[
            {"userId": 1, "id": 1, "title": "first post", "body": "hello world"},
            {"userId": 1, "id": 2, "title": "second post", "body": "more text"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(payload).unwrap();
        let options = posts_to_options(&posts);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "1");
        assert_eq!(options[0].label.as_deref(), Some("first post"));
        assert_eq!(options[0].meta.as_deref(), Some("hello world"));
        assert_eq!(options[1].value, "2");
    }
}
