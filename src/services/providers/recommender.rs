/// Movie recommender backend client
///
/// Thin wrapper over the backend's two read endpoints:
/// 1. Search: /search?query=<text> → movies matching a title query
/// 2. Recommend: /recommend?movie_id=<id> → movies similar to the given one
///
/// Both endpoints return a JSON envelope of the form {"data": [...]}. Errors
/// propagate to the caller unchanged; there is no retry and no caching here.
use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieListResponse},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct RecommenderApi {
    http_client: HttpClient,
    api_url: String,
}

impl RecommenderApi {
    /// Creates a new client for the backend at `api_url`
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    /// Issues a GET against `path` and decodes the `{"data": [...]}` envelope
    async fn fetch_movies(&self, path: &str, params: &[(&str, &str)]) -> AppResult<Vec<Movie>> {
        let url = format!("{}/{}", self.api_url, path);

        let response = self.http_client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommender API returned status {}: {}",
                status, body
            )));
        }

        let envelope: MovieListResponse = response.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait::async_trait]
impl MovieProvider for RecommenderApi {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let movies = self.fetch_movies("search", &[("query", query)]).await?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = self.name(),
            "Movie search completed"
        );

        Ok(movies)
    }

    async fn recommend_movies(&self, movie_id: u64) -> AppResult<Vec<Movie>> {
        let id = movie_id.to_string();
        let movies = self
            .fetch_movies("recommend", &[("movie_id", id.as_str())])
            .await?;

        tracing::info!(
            movie_id,
            results = movies.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "recommender"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected_before_any_request() {
        let client = RecommenderApi::new("http://test.local".to_string());
        let err = tokio_test::block_on(client.search_movies("  ")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_provider_name() {
        let client = RecommenderApi::new("http://test.local".to_string());
        assert_eq!(client.name(), "recommender");
    }
}
