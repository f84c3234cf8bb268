// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolved catalog entry for one bundled animated image. Opaque to the
/// screen: it is handed to the rendering surface, never decoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifHandle {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// What the result area shows after the most recent submission. The default
/// is the not-found state; a fresh screen starts there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub handle: Option<GifHandle>,
    pub label: String,
}

impl DisplayState {
    pub const fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }
}

/// Language-model hint forwarded to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageModelHint {
    FreeForm,
    WebSearch,
}

impl LanguageModelHint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeForm => "free_form",
            Self::WebSearch => "web_search",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "free_form" => Some(Self::FreeForm),
            "web_search" => Some(Self::WebSearch),
            _ => None,
        }
    }
}

/// One-shot speech-to-text request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionRequest {
    pub language_model: LanguageModelHint,
    pub locale: String,
    pub prompt: String,
}

impl Default for RecognitionRequest {
    fn default() -> Self {
        Self {
            language_model: LanguageModelHint::FreeForm,
            locale: "en-US".to_owned(),
            prompt: "Speak now".to_owned(),
        }
    }
}

/// Ordered transcription candidates, best first. Non-empty by construction;
/// a recognition that produced nothing is `None` at the port instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    candidates: Vec<String>,
}

impl Transcription {
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self { candidates })
        }
    }

    pub fn best(&self) -> &str {
        &self.candidates[0]
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// Read-only name-to-handle resolution, the resource side of the screen.
/// Single-key exact match: no ranking, no partial matches, no suggestions.
pub trait CatalogLookup {
    fn lookup(&self, key: &str) -> Option<GifHandle>;
}

impl CatalogLookup for BTreeMap<String, GifHandle> {
    fn lookup(&self, key: &str) -> Option<GifHandle> {
        self.get(key).cloned()
    }
}

/// Speech-to-text port. `Ok(None)` covers both a dismissed recognition and
/// one that produced no candidates; the caller must leave its state alone.
pub trait SpeechRecognizer {
    fn recognize(&mut self, request: &RecognitionRequest) -> Result<Option<Transcription>>;
}

#[cfg(test)]
mod tests {
    use super::{DisplayState, GifHandle, LanguageModelHint, Transcription};
    use std::path::PathBuf;

    #[test]
    fn language_model_hint_round_trips() {
        for hint in [LanguageModelHint::FreeForm, LanguageModelHint::WebSearch] {
            assert_eq!(LanguageModelHint::parse(hint.as_str()), Some(hint));
        }
        assert_eq!(LanguageModelHint::parse("dictation"), None);
    }

    #[test]
    fn transcription_rejects_empty_candidate_list() {
        assert!(Transcription::new(Vec::new()).is_none());

        let transcription = Transcription::new(vec!["cat".to_owned(), "hat".to_owned()])
            .expect("non-empty candidates");
        assert_eq!(transcription.best(), "cat");
        assert_eq!(transcription.candidates().len(), 2);
    }

    #[test]
    fn default_display_state_is_not_found() {
        let display = DisplayState::default();
        assert!(!display.is_resolved());
        assert_eq!(display.label, "");
    }

    #[test]
    fn display_state_with_handle_is_resolved() {
        let display = DisplayState {
            handle: Some(GifHandle {
                name: "cat".to_owned(),
                path: PathBuf::from("/assets/cat.gif"),
                size_bytes: 43,
            }),
            label: "Cat".to_owned(),
        };
        assert!(display.is_resolved());
    }
}
