//! Terminal client for a movie search-and-recommend backend.
//!
//! The user types a title, picks a candidate from the dropdown, and gets a
//! list of similar movies from a remote recommendation service. The crate
//! splits into a pure view-state reducer ([`app`]), a two-endpoint HTTP
//! client ([`services`]), and a ratatui presentation layer ([`tui`]).

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;
