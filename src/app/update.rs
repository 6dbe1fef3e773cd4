//! Pure update function for the search-and-recommend flow.
//!
//! `update()` takes the current state and a message, mutates the state, and
//! returns a command describing any request the runtime should dispatch.
//! This module performs no I/O beyond tracing.
//!
//! Requests carry a per-kind sequence number taken at dispatch time; a
//! completion is applied only if its number is still the latest issued for
//! that kind. The last *request* wins, not the last response to arrive.

use crate::error::AppResult;
use crate::models::Movie;

use super::state::AppState;

/// Everything that can happen to the app
#[derive(Debug)]
pub enum Msg {
    /// A printable character was typed into the search box
    InputChar(char),
    InputBackspace,
    /// The whole query was wiped (Ctrl+U)
    ClearQuery,
    CursorUp,
    CursorDown,
    /// The highlighted candidate was committed (Enter)
    SelectHighlighted,
    /// A search request finished
    SearchFinished {
        seq: u64,
        result: AppResult<Vec<Movie>>,
    },
    /// A recommend request finished
    RecommendFinished {
        seq: u64,
        result: AppResult<Vec<Movie>>,
    },
    ToggleTheme,
    Tick,
    Quit,
}

/// Side effect for the runtime to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    None,
    Search { seq: u64, query: String },
    Recommend { seq: u64, movie_id: u64 },
}

/// Apply a message to the state and return the next command for the runtime
pub fn update(state: &mut AppState, msg: Msg) -> Cmd {
    match msg {
        Msg::InputChar(c) => {
            state.query.push(c);
            on_query_edited(state)
        }

        Msg::InputBackspace => {
            state.query.pop();
            on_query_edited(state)
        }

        Msg::ClearQuery => {
            state.query.clear();
            on_query_edited(state)
        }

        Msg::CursorUp => {
            if state.cursor > 0 {
                state.cursor -= 1;
            }
            Cmd::None
        }

        Msg::CursorDown => {
            if !state.candidates.is_empty() && state.cursor < state.candidates.len() - 1 {
                state.cursor += 1;
            }
            Cmd::None
        }

        Msg::SelectHighlighted => select_highlighted(state),

        Msg::SearchFinished { seq, result } => {
            if seq != state.search_seq {
                tracing::debug!(seq, latest = state.search_seq, "Discarding stale search response");
                return Cmd::None;
            }
            match result {
                Ok(movies) => {
                    state.candidates = movies;
                }
                Err(e) => {
                    // Fail silently to an empty result; nothing reaches the UI
                    tracing::error!(error = %e, "Search request failed");
                    state.candidates.clear();
                    state.selected = None;
                    state.recommendations.clear();
                }
            }
            state.cursor = 0;
            Cmd::None
        }

        Msg::RecommendFinished { seq, result } => {
            if seq != state.recommend_seq {
                tracing::debug!(
                    seq,
                    latest = state.recommend_seq,
                    "Discarding stale recommend response"
                );
                return Cmd::None;
            }
            match result {
                Ok(movies) => {
                    state.recommendations = movies;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Recommend request failed");
                    state.recommendations.clear();
                }
            }
            state.loading = false;
            Cmd::None
        }

        Msg::ToggleTheme => {
            state.dark_mode = !state.dark_mode;
            Cmd::None
        }

        Msg::Tick => {
            if state.loading {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            Cmd::None
        }

        Msg::Quit => {
            state.should_quit = true;
            Cmd::None
        }
    }
}

/// Shared transition for every way the query text can change
fn on_query_edited(state: &mut AppState) -> Cmd {
    // Editing away from the selected title reopens search instead of leaving
    // a stale recommendation panel visible
    if let Some(selected) = &state.selected {
        if state.query != selected.title {
            state.selected = None;
            state.recommendations.clear();
            // An in-flight recommend now has no owner; retire its sequence
            // number so the completion is dropped on arrival
            state.loading = false;
            state.recommend_seq += 1;
        }
    }

    state.cursor = 0;

    if state.query.is_empty() {
        state.candidates.clear();
        return Cmd::None;
    }

    state.search_seq += 1;
    Cmd::Search {
        seq: state.search_seq,
        query: state.query.clone(),
    }
}

/// Commit the highlighted candidate and kick off the recommend request
fn select_highlighted(state: &mut AppState) -> Cmd {
    let Some(movie) = state.highlighted().cloned() else {
        return Cmd::None;
    };

    state.query = movie.title.clone();
    state.candidates.clear();
    state.cursor = 0;
    state.recommendations.clear();
    state.loading = true;
    state.selected = Some(movie.clone());

    state.recommend_seq += 1;
    Cmd::Recommend {
        seq: state.recommend_seq,
        movie_id: movie.movie_id,
    }
}
