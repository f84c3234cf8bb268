// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

//! The resource side of the screen: a read-only map from normalized asset
//! names to handles, built once at startup from a directory of `.gif` files.
//! The packaging step owns naming; entries whose stems are not already
//! normalized keys are skipped rather than repaired.

use anyhow::{Context, Result, anyhow, bail};
use gifdex_app::{CatalogLookup, GifHandle};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "gifdex";

const GIF_EXTENSION: &str = "gif";

/// Single-frame black-pixel GIF89a. Demo seeds and test fixtures use it so a
/// real decoder pointed at a seeded catalog still has something valid.
pub const STUB_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, // GIF89a
    0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, // 1x1, global color table
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, // black, white
    0x21, 0xF9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, // graphic control
    0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
    0x02, 0x02, 0x44, 0x01, 0x00, // image data
    0x3B, // trailer
];

pub const DEMO_GIF_NAMES: [&str; 8] = [
    "cafe_time",
    "cat",
    "dog",
    "facepalm",
    "mind_blown",
    "party_parrot",
    "slow_clap",
    "thumbs_up",
];

/// Immutable name-to-handle map over the bundled assets.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, GifHandle>,
}

impl Catalog {
    /// Scan `dir` for `*.gif` files (extension matched case-insensitively)
    /// and index them by file stem. Subdirectories, other file types, and
    /// stems outside `[a-z0-9_]+` are ignored. When two entries fold to the
    /// same key the alphabetically later path wins.
    pub fn load(dir: &Path) -> Result<Self> {
        validate_assets_dir(dir)?;

        let listing = fs::read_dir(dir)
            .with_context(|| format!("read assets directory {}", dir.display()))?;
        let mut paths = Vec::new();
        for entry in listing {
            let entry =
                entry.with_context(|| format!("list assets directory {}", dir.display()))?;
            paths.push(entry.path());
        }
        paths.sort();

        let mut entries = BTreeMap::new();
        for path in paths {
            if !path.is_file() || !has_gif_extension(&path) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !is_catalog_key(stem) {
                continue;
            }
            let metadata =
                fs::metadata(&path).with_context(|| format!("stat asset {}", path.display()))?;
            entries.insert(
                stem.to_owned(),
                GifHandle {
                    name: stem.to_owned(),
                    path: path.clone(),
                    size_bytes: metadata.len(),
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog keys in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CatalogLookup for Catalog {
    fn lookup(&self, key: &str) -> Option<GifHandle> {
        self.entries.get(key).cloned()
    }
}

fn has_gif_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(GIF_EXTENSION))
}

fn is_catalog_key(stem: &str) -> bool {
    !stem.is_empty()
        && stem
            .chars()
            .all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '_'))
}

pub fn validate_assets_dir(path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        bail!("assets directory must not be empty");
    }

    if let Some(index) = raw.find("://")
        && index > 0
    {
        let scheme = &raw[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "assets directory {raw:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if !path.exists() {
        bail!(
            "assets directory {} does not exist; set [assets].dir or GIFDEX_ASSETS_PATH",
            path.display()
        );
    }
    if !path.is_dir() {
        bail!("assets path {} is not a directory", path.display());
    }
    Ok(())
}

pub fn default_assets_dir() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("GIFDEX_ASSETS_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set GIFDEX_ASSETS_PATH to the assets directory")
    })?;

    Ok(data_root.join(APP_NAME).join("gifs"))
}

/// Write the demo asset set into `dir`, creating it if needed.
pub fn seed_demo_assets(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create demo assets directory {}", dir.display()))?;
    for name in DEMO_GIF_NAMES {
        let path = dir.join(format!("{name}.{GIF_EXTENSION}"));
        fs::write(&path, STUB_GIF)
            .with_context(|| format!("write demo asset {}", path.display()))?;
    }
    Ok(())
}
