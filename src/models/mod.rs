use serde::{Deserialize, Serialize};

/// A movie known to the recommender backend
///
/// Movies are sourced entirely from the backend; the client never constructs
/// or mutates one. The same shape is returned by both the search and the
/// recommend endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Backend identifier, used for recommendation lookups
    pub movie_id: u64,
    pub title: String,
    /// Pipe-delimited genre list (e.g. "Sci-Fi|Action")
    pub genres: String,
}

impl Movie {
    /// Splits the pipe-delimited genre field into individual genres
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres.split('|').filter(|g| !g.is_empty()).collect()
    }
}

/// Wire envelope returned by both backend endpoints: `{"data": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    pub data: Vec<Movie>,
}
