use crate::models::Movie;

/// Lifecycle phase of the search-and-recommend flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Empty query, no candidates, no selection
    Idle,
    /// Query text present, candidates may be showing
    Searching,
    /// A movie is selected and its recommendations are being fetched
    SelectedLoading,
    /// A movie is selected; recommendations (possibly empty) have arrived
    SelectedReady,
}

/// Whole-app view state
///
/// Mutated only by [`update`](super::update). All of it is transient process
/// memory, replaced per event and discarded on exit.
#[derive(Debug)]
pub struct AppState {
    /// Current search box text
    pub query: String,
    /// Candidates returned for the current query, in backend order
    pub candidates: Vec<Movie>,
    /// Highlighted dropdown row
    pub cursor: usize,
    /// The movie the user has committed to, if any
    pub selected: Option<Movie>,
    /// Movies similar to the selection, in backend order
    pub recommendations: Vec<Movie>,
    /// True while a recommend request is outstanding
    pub loading: bool,
    /// Dark/light palette flag; not persisted across runs
    pub dark_mode: bool,
    /// Advances while loading to animate the spinner
    pub spinner_frame: usize,
    /// Sequence number of the latest dispatched search request
    pub search_seq: u64,
    /// Sequence number of the latest dispatched recommend request
    pub recommend_seq: u64,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            candidates: Vec::new(),
            cursor: 0,
            selected: None,
            recommendations: Vec::new(),
            loading: false,
            dark_mode: true,
            spinner_frame: 0,
            search_seq: 0,
            recommend_seq: 0,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn phase(&self) -> Phase {
        match (&self.selected, self.loading) {
            (Some(_), true) => Phase::SelectedLoading,
            (Some(_), false) => Phase::SelectedReady,
            (None, _) if self.query.is_empty() => Phase::Idle,
            (None, _) => Phase::Searching,
        }
    }

    /// The dropdown shows only while candidates exist and nothing is selected
    pub fn dropdown_visible(&self) -> bool {
        !self.candidates.is_empty() && self.selected.is_none()
    }

    /// The recommendation panel shows only for a settled, non-empty result
    pub fn panel_visible(&self) -> bool {
        self.selected.is_some() && !self.recommendations.is_empty() && !self.loading
    }

    /// Candidate under the dropdown cursor, if any
    pub fn highlighted(&self) -> Option<&Movie> {
        self.candidates.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            movie_id: id,
            title: title.to_string(),
            genres: "Sci-Fi".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = AppState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.dark_mode);
        assert!(!state.dropdown_visible());
        assert!(!state.panel_visible());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = AppState::default();

        state.query = "incep".to_string();
        assert_eq!(state.phase(), Phase::Searching);

        state.selected = Some(movie(1, "Inception"));
        state.loading = true;
        assert_eq!(state.phase(), Phase::SelectedLoading);

        state.loading = false;
        assert_eq!(state.phase(), Phase::SelectedReady);
    }

    #[test]
    fn test_dropdown_hidden_once_selected() {
        let mut state = AppState::default();
        state.candidates = vec![movie(1, "Inception")];
        assert!(state.dropdown_visible());

        state.selected = Some(movie(1, "Inception"));
        assert!(!state.dropdown_visible());
    }

    #[test]
    fn test_panel_requires_settled_nonempty_result() {
        let mut state = AppState::default();
        state.selected = Some(movie(1, "Inception"));

        // Still loading
        state.loading = true;
        state.recommendations = vec![movie(2, "Interstellar")];
        assert!(!state.panel_visible());

        // Settled
        state.loading = false;
        assert!(state.panel_visible());

        // Empty result stays hidden
        state.recommendations.clear();
        assert!(!state.panel_visible());
    }

    #[test]
    fn test_highlighted_follows_cursor() {
        let mut state = AppState::default();
        assert!(state.highlighted().is_none());

        state.candidates = vec![movie(1, "Inception"), movie(2, "Interstellar")];
        state.cursor = 1;
        assert_eq!(state.highlighted().unwrap().title, "Interstellar");

        state.cursor = 5;
        assert!(state.highlighted().is_none());
    }
}
