// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

//! Shared fixtures for the other workspace members' tests: temp asset
//! directories, a scripted recognizer, and normalization phrase fixtures.

use anyhow::{Context, Result};
use gifdex_app::{RecognitionRequest, SpeechRecognizer, Transcription};
use gifdex_catalog::{Catalog, STUB_GIF};
use std::fs;
use std::path::PathBuf;

/// Write stub `.gif` assets named `names` into a fresh temp directory and
/// return it alongside the assets path. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_catalog(names: &[&str]) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let assets = dir.path().join("gifs");
    fs::create_dir_all(&assets).context("create assets dir")?;
    for name in names {
        let path = assets.join(format!("{name}.gif"));
        fs::write(&path, STUB_GIF)
            .with_context(|| format!("write stub asset {}", path.display()))?;
    }
    Ok((dir, assets))
}

/// `temp_catalog` plus the loaded `Catalog`.
pub fn loaded_catalog(names: &[&str]) -> Result<(tempfile::TempDir, Catalog)> {
    let (dir, assets) = temp_catalog(names)?;
    let catalog = Catalog::load(&assets)?;
    Ok((dir, catalog))
}

/// Recognizer that replays queued responses in order and records every
/// request it receives. Once the queue runs dry it keeps answering `None`.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    responses: Vec<Option<Vec<String>>>,
    pub requests: Vec<RecognitionRequest>,
}

impl ScriptedRecognizer {
    pub fn new(responses: Vec<Option<Vec<String>>>) -> Self {
        Self {
            responses,
            requests: Vec::new(),
        }
    }

    /// A recognizer that answers one request with the given candidates.
    pub fn with_candidates(candidates: &[&str]) -> Self {
        Self::new(vec![Some(
            candidates.iter().map(|c| (*c).to_owned()).collect(),
        )])
    }

    /// A recognizer whose every answer is a dismissed recognition.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn recognize(&mut self, request: &RecognitionRequest) -> Result<Option<Transcription>> {
        self.requests.push(request.clone());
        if self.responses.is_empty() {
            return Ok(None);
        }
        Ok(self.responses.remove(0).and_then(Transcription::new))
    }
}

/// Phrases exercising diacritics, punctuation, repeated spaces, and the
/// empty query.
pub fn search_phrases() -> &'static [&'static str] {
    &[
        "Café Time",
        "  Déjà Vu!! ",
        "Party Parrot",
        "ÜBER  cool",
        "naïve",
        "cat",
        "12 Monkeys!",
        "",
    ]
}
