/// Movie data provider abstraction
///
/// The view-state controller only ever talks to this trait, keeping the HTTP
/// transport behind a single seam. That makes the controller testable against
/// a mock and leaves room to surface errors differently later without
/// touching control flow.
use crate::{error::AppResult, models::Movie};

pub mod recommender;

pub use recommender::RecommenderApi;

/// Trait for movie search and recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for movies by title
    ///
    /// Returns matching movies in the order the backend ranked them.
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Fetch movies similar to the given movie ID
    async fn recommend_movies(&self, movie_id: u64) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
