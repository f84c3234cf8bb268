// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

//! Speech-to-text over an external transcriber command.
//!
//! The command is run through `sh -c` with the request delivered in
//! environment variables; each non-empty stdout line is one transcription
//! candidate, best first. A non-zero exit or empty output is a dismissed
//! recognition rather than an error, so the screen stays untouched.

use anyhow::{Context, Result, bail};
use gifdex_app::{RecognitionRequest, SpeechRecognizer, Transcription};
use std::process::{Command, Stdio};

/// Environment variables the transcriber command receives.
pub const LOCALE_VAR: &str = "GIFDEX_STT_LOCALE";
pub const PROMPT_VAR: &str = "GIFDEX_STT_PROMPT";
pub const MODEL_VAR: &str = "GIFDEX_STT_MODEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecognizer {
    command: String,
}

impl CommandRecognizer {
    pub fn new(command: &str) -> Result<Self> {
        if command.trim().is_empty() {
            bail!("speech.command must not be empty");
        }
        Ok(Self {
            command: command.to_owned(),
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn recognize(&mut self, request: &RecognitionRequest) -> Result<Option<Transcription>> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(LOCALE_VAR, &request.locale)
            .env(PROMPT_VAR, &request.prompt)
            .env(MODEL_VAR, request.language_model.as_str())
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("run transcriber command {:?}", self.command))?;

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let candidates = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect::<Vec<String>>();
        Ok(Transcription::new(candidates))
    }
}
