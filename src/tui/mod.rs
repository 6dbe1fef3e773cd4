//! Terminal runtime: owns the event loop and executes reducer commands.
//!
//! Input events, request completions, and spinner ticks all funnel into one
//! `select!` loop, so every state mutation happens on this task. Request
//! tasks are spawned and never aborted; completions that lost the race are
//! discarded by the reducer's sequence-number guard.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::app::{update, AppState, Cmd, Msg};
use crate::error::AppResult;
use crate::services::providers::MovieProvider;

pub mod ui;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the app until the user quits, restoring the terminal on the way out
pub async fn run(provider: Arc<dyn MovieProvider>, mut state: AppState) -> AppResult<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, provider, &mut state).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    provider: Arc<dyn MovieProvider>,
    state: &mut AppState,
) -> AppResult<()> {
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<CEvent>();
    std::thread::spawn(move || loop {
        if let Ok(true) = crossterm::event::poll(INPUT_POLL_INTERVAL) {
            if let Ok(ev) = crossterm::event::read() {
                if input_tx.send(ev).is_err() {
                    break;
                }
            }
        }
    });

    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Msg>();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        let msg = tokio::select! {
            Some(ev) = input_rx.recv() => match map_event(ev) {
                Some(msg) => msg,
                None => continue,
            },
            Some(msg) = msg_rx.recv() => msg,
            _ = tick.tick() => Msg::Tick,
        };

        let cmd = update(state, msg);
        dispatch(cmd, provider.clone(), msg_tx.clone());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Translate a raw terminal event into a reducer message
fn map_event(ev: CEvent) -> Option<Msg> {
    let CEvent::Key(key) = ev else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    map_key(key)
}

fn map_key(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Msg::Quit),
            KeyCode::Char('u') => Some(Msg::ClearQuery),
            KeyCode::Char('t') => Some(Msg::ToggleTheme),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Up => Some(Msg::CursorUp),
        KeyCode::Down => Some(Msg::CursorDown),
        KeyCode::Enter => Some(Msg::SelectHighlighted),
        KeyCode::Backspace => Some(Msg::InputBackspace),
        KeyCode::Char(c) => Some(Msg::InputChar(c)),
        _ => None,
    }
}

/// Spawn the request a command describes; the completion comes back as a Msg
fn dispatch(cmd: Cmd, provider: Arc<dyn MovieProvider>, tx: UnboundedSender<Msg>) {
    match cmd {
        Cmd::None => {}
        Cmd::Search { seq, query } => {
            tokio::spawn(async move {
                let result = provider.search_movies(&query).await;
                let _ = tx.send(Msg::SearchFinished { seq, result });
            });
        }
        Cmd::Recommend { seq, movie_id } => {
            tokio::spawn(async move {
                let result = provider.recommend_movies(movie_id).await;
                let _ = tx.send(Msg::RecommendFinished { seq, result });
            });
        }
    }
}
