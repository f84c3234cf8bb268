// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use gifdex_app::{
    CatalogLookup, GifHandle, RecognitionRequest, SpeechRecognizer, Transcription,
};
use gifdex_catalog::Catalog;
use gifdex_speech::CommandRecognizer;
use gifdex_tui::ScreenRuntime;

/// Screen runtime backed by the on-disk catalog and, when configured, an
/// external speech-to-text command. Without a recognizer the voice path
/// answers like a dismissed recognition.
pub struct CatalogRuntime {
    catalog: Catalog,
    recognizer: Option<CommandRecognizer>,
    request: RecognitionRequest,
}

impl CatalogRuntime {
    pub fn new(
        catalog: Catalog,
        recognizer: Option<CommandRecognizer>,
        request: RecognitionRequest,
    ) -> Self {
        Self {
            catalog,
            recognizer,
            request,
        }
    }
}

impl CatalogLookup for CatalogRuntime {
    fn lookup(&self, key: &str) -> Option<GifHandle> {
        self.catalog.lookup(key)
    }
}

impl ScreenRuntime for CatalogRuntime {
    fn recognize(&mut self, request: &RecognitionRequest) -> Result<Option<Transcription>> {
        match &mut self.recognizer {
            Some(recognizer) => recognizer.recognize(request),
            None => Ok(None),
        }
    }

    fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    fn recognition_request(&self) -> RecognitionRequest {
        self.request.clone()
    }
}
