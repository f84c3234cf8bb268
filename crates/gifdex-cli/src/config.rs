// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use gifdex_app::{LanguageModelHint, RecognitionRequest};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub assets: Assets,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub speech: Speech,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            assets: Assets::default(),
            ui: Ui::default(),
            speech: Speech::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Assets {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub placeholder: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            placeholder: Some(gifdex_tui::DEFAULT_PLACEHOLDER.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Speech {
    pub enabled: Option<bool>,
    pub command: Option<String>,
    pub locale: Option<String>,
    pub prompt: Option<String>,
    pub language_model: Option<String>,
}

impl Default for Speech {
    fn default() -> Self {
        let request = RecognitionRequest::default();
        Self {
            enabled: Some(true),
            command: None,
            locale: Some(request.locale),
            prompt: Some(request.prompt),
            language_model: Some(request.language_model.as_str().to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("GIFDEX_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set GIFDEX_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(gifdex_catalog::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [assets], [ui], and [speech]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(dir) = &self.assets.dir {
            // Existence is checked at startup; here only catch a pasted URL.
            if let Some(index) = dir.find("://")
                && index > 0
                && dir[..index].chars().all(char::is_alphabetic)
            {
                bail!(
                    "assets.dir in {} looks like a URI ({dir:?}); pass a filesystem path instead",
                    path.display()
                );
            }
        }

        if let Some(command) = &self.speech.command
            && command.trim().is_empty()
        {
            bail!(
                "speech.command in {} must not be blank; remove it to disable voice input",
                path.display()
            );
        }

        if let Some(hint) = &self.speech.language_model
            && LanguageModelHint::parse(hint).is_none()
        {
            bail!(
                "speech.language_model in {} must be \"free_form\" or \"web_search\", got {hint:?}",
                path.display()
            );
        }

        Ok(())
    }

    pub fn assets_dir(&self) -> Result<PathBuf> {
        match &self.assets.dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => gifdex_catalog::default_assets_dir(),
        }
    }

    pub fn placeholder(&self) -> &str {
        self.ui
            .placeholder
            .as_deref()
            .unwrap_or(gifdex_tui::DEFAULT_PLACEHOLDER)
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech.enabled.unwrap_or(true)
    }

    pub fn speech_command(&self) -> Option<&str> {
        self.speech.command.as_deref()
    }

    pub fn recognition_request(&self) -> RecognitionRequest {
        let defaults = RecognitionRequest::default();
        RecognitionRequest {
            language_model: self
                .speech
                .language_model
                .as_deref()
                .and_then(LanguageModelHint::parse)
                .unwrap_or(defaults.language_model),
            locale: self
                .speech
                .locale
                .clone()
                .unwrap_or(defaults.locale),
            prompt: self
                .speech
                .prompt
                .clone()
                .unwrap_or(defaults.prompt),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# gifdex config\n# Place this file at: {}\n\nversion = 1\n\n[assets]\n# Optional. Default is platform data dir (for example ~/.local/share/gifdex/gifs)\n# dir = \"/absolute/path/to/gifs\"\n\n[ui]\nplaceholder = \"{}\"\n\n[speech]\nenabled = true\n# External speech-to-text command; one candidate per stdout line.\n# command = \"my-stt --once\"\nlocale = \"en-US\"\nprompt = \"Speak now\"\nlanguage_model = \"free_form\"\n",
            path.display(),
            gifdex_tui::DEFAULT_PLACEHOLDER,
        )
    }
}
