// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

use crate::{CatalogLookup, DisplayState, GifHandle, display_label, normalize_key};

/// State of the single search screen. Everything lives on the UI's event
/// dispatch context; there is no concurrent access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchScreenState {
    /// Query as typed; no length or character-set constraint.
    pub query: String,
    /// Whether the search bar is expanded for input.
    pub active: bool,
    /// Outcome of the last submission. Edits do not touch it; submit and
    /// clear do.
    pub display: DisplayState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    EditQuery(String),
    ClearQuery,
    SetActive(bool),
    /// Completed speech-to-text result. An empty candidate list is a
    /// dismissed or failed recognition and must change nothing.
    AcceptVoiceResult(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    QueryChanged(String),
    ActiveChanged(bool),
    DisplayCleared,
}

/// The two outcomes a submission can have. A miss is a representable result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Resolved(GifHandle),
    NotFound { key: String },
}

impl SearchScreenState {
    pub fn dispatch(&mut self, command: SearchCommand) -> Vec<SearchEvent> {
        match command {
            SearchCommand::EditQuery(query) => {
                self.query = query;
                vec![SearchEvent::QueryChanged(self.query.clone())]
            }
            SearchCommand::ClearQuery => {
                self.query.clear();
                let mut events = vec![SearchEvent::QueryChanged(String::new())];
                if self.display != DisplayState::default() {
                    // A cleared query with no resubmission shows the
                    // not-found state; no stale handle survives a clear.
                    self.display = DisplayState::default();
                    events.push(SearchEvent::DisplayCleared);
                }
                events
            }
            SearchCommand::SetActive(active) => {
                if self.active == active {
                    return Vec::new();
                }
                self.active = active;
                vec![SearchEvent::ActiveChanged(active)]
            }
            SearchCommand::AcceptVoiceResult(candidates) => {
                let Some(first) = candidates.into_iter().next() else {
                    return Vec::new();
                };
                self.query = first;
                let mut events = vec![SearchEvent::QueryChanged(self.query.clone())];
                if self.active {
                    self.active = false;
                    events.push(SearchEvent::ActiveChanged(false));
                }
                events
            }
        }
    }

    /// One user-initiated search: collapse the bar, normalize the query, hit
    /// the catalog once. A hit stores the handle plus a label computed from
    /// the query as typed; a miss clears both.
    pub fn submit<C: CatalogLookup>(&mut self, catalog: &C) -> SearchOutcome {
        self.active = false;
        let key = normalize_key(&self.query);
        match catalog.lookup(&key) {
            Some(handle) => {
                self.display = DisplayState {
                    handle: Some(handle.clone()),
                    label: display_label(&self.query),
                };
                SearchOutcome::Resolved(handle)
            }
            None => {
                self.display = DisplayState::default();
                SearchOutcome::NotFound { key }
            }
        }
    }
}
