// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use gifdex_app::{
    CatalogLookup, RecognitionRequest, SearchCommand, SearchOutcome, SearchScreenState,
    Transcription,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io;
use std::time::Duration;

pub const DEFAULT_PLACEHOLDER: &str = "Search your GIFs";

const CURSOR_MARK: &str = "▏";
const MIC_HINT: &str = "ctrl-r mic";
const CLEAR_HINT: &str = "ctrl-u clear";

/// The catalog and recognizer sides of the screen, provided by the caller.
/// Lookup is the pure read from `CatalogLookup`; recognition is the one
/// asynchronous-looking boundary, delivered synchronously as a one-shot
/// result on this thread.
pub trait ScreenRuntime: CatalogLookup {
    fn recognize(&mut self, request: &RecognitionRequest) -> Result<Option<Transcription>>;

    fn catalog_size(&self) -> usize;

    fn recognition_request(&self) -> RecognitionRequest {
        RecognitionRequest::default()
    }
}

/// Presentation-only state that does not belong in the search screen model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub placeholder: String,
    pub status: Option<String>,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            status: None,
        }
    }
}

impl ScreenView {
    pub fn with_placeholder(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_owned(),
            status: None,
        }
    }
}

pub fn run_app<R: ScreenRuntime>(
    state: &mut SearchScreenState,
    runtime: &mut R,
    view: &mut ScreenView,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, &*runtime, view)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, view, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns true when the app should quit.
fn handle_key_event<R: ScreenRuntime>(
    state: &mut SearchScreenState,
    runtime: &mut R,
    view: &mut ScreenView,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.dispatch(SearchCommand::ClearQuery);
            view.status = None;
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            request_voice_input(state, runtime, view);
        }
        (KeyCode::Enter, _) => {
            let outcome = state.submit(&*runtime);
            view.status = Some(match &outcome {
                SearchOutcome::Resolved(handle) => format!("showing {}", handle.name),
                SearchOutcome::NotFound { key } => format!("no match for key {key:?}"),
            });
        }
        (KeyCode::Esc, _) => {
            state.dispatch(SearchCommand::SetActive(false));
        }
        (KeyCode::Backspace, _) => {
            let mut query = state.query.clone();
            query.pop();
            state.dispatch(SearchCommand::EditQuery(query));
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            let mut query = state.query.clone();
            query.push(ch);
            state.dispatch(SearchCommand::EditQuery(query));
            state.dispatch(SearchCommand::SetActive(true));
        }
        _ => {}
    }

    false
}

fn request_voice_input<R: ScreenRuntime>(
    state: &mut SearchScreenState,
    runtime: &mut R,
    view: &mut ScreenView,
) {
    let request = runtime.recognition_request();
    match runtime.recognize(&request) {
        Ok(Some(transcription)) => {
            view.status = Some(format!("heard {:?}", transcription.best()));
            state.dispatch(SearchCommand::AcceptVoiceResult(
                transcription.candidates().to_vec(),
            ));
        }
        // Dismissed or nothing recognized; the screen stays as it is.
        Ok(None) => {}
        Err(error) => {
            view.status = Some(format!("voice input failed: {error:#}"));
        }
    }
}

fn render<R: ScreenRuntime>(
    frame: &mut ratatui::Frame<'_>,
    state: &SearchScreenState,
    runtime: &R,
    view: &ScreenView,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let bar_style = if state.active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let bar = Paragraph::new(search_bar_text(state, view))
        .style(bar_style)
        .block(Block::default().title("gifdex").borders(Borders::ALL));
    frame.render_widget(bar, layout[0]);

    let result = Paragraph::new(result_area_text(state))
        .block(Block::default().title("result").borders(Borders::ALL));
    frame.render_widget(result, layout[1]);

    let status = Paragraph::new(status_text(state, runtime.catalog_size(), view))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);
}

fn search_bar_text(state: &SearchScreenState, view: &ScreenView) -> String {
    // Mirror the trailing affordance of a material search bar: mic while the
    // query is empty, clear once there is something to clear.
    let affordance = if state.query.is_empty() {
        MIC_HINT
    } else {
        CLEAR_HINT
    };

    if state.query.is_empty() && !state.active {
        return format!("{}  [{affordance}]", view.placeholder);
    }

    let cursor = if state.active { CURSOR_MARK } else { "" };
    format!("{}{cursor}  [{affordance}]", state.query)
}

fn result_area_text(state: &SearchScreenState) -> String {
    match &state.display.handle {
        Some(handle) => [
            state.display.label.clone(),
            String::new(),
            format!("name: {}", handle.name),
            format!("file: {}", handle.path.display()),
            format!("size: {} bytes", handle.size_bytes),
        ]
        .join("\n"),
        None => format!("No GIF found for \"{}\"", state.query),
    }
}

fn status_text(state: &SearchScreenState, catalog_size: usize, view: &ScreenView) -> String {
    if let Some(status) = &view.status {
        return status.clone();
    }
    let mode = if state.active { "search" } else { "idle" };
    format!(
        "{mode} | {catalog_size} gifs | enter search | ctrl-r voice | ctrl-u clear | ctrl-q quit"
    )
}
