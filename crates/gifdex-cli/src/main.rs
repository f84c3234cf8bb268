// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use gifdex_app::SearchScreenState;
use gifdex_catalog::Catalog;
use gifdex_speech::CommandRecognizer;
use gifdex_tui::ScreenView;
use runtime::CatalogRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `gifdex --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let assets_dir = config.assets_dir()?;
    if options.print_assets_path {
        println!("{}", assets_dir.display());
        return Ok(());
    }

    if options.demo {
        gifdex_catalog::seed_demo_assets(&assets_dir)?;
    }
    gifdex_catalog::validate_assets_dir(&assets_dir)?;

    let catalog = Catalog::load(&assets_dir).with_context(|| {
        format!(
            "load GIF catalog from {} -- if this path is wrong, set [assets].dir or GIFDEX_ASSETS_PATH",
            assets_dir.display()
        )
    })?;

    let recognizer = match config.speech_command() {
        Some(command) if config.speech_enabled() => Some(
            CommandRecognizer::new(command).with_context(|| {
                format!(
                    "invalid [speech] config in {}; fix the command value",
                    options.config_path.display()
                )
            })?,
        ),
        _ => None,
    };
    if options.check_only {
        return Ok(());
    }

    if options.list {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(term) = &options.query {
        println!("{}", resolve_query(&catalog, term));
        return Ok(());
    }

    let mut state = SearchScreenState::default();
    let mut runtime = CatalogRuntime::new(catalog, recognizer, config.recognition_request());
    let mut view = ScreenView::with_placeholder(config.placeholder());
    gifdex_tui::run_app(&mut state, &mut runtime, &mut view)
}

/// One headless search, printed the way the result area would show it: the
/// resolved file path on a hit, the not-found message otherwise.
fn resolve_query(catalog: &Catalog, term: &str) -> String {
    let mut state = SearchScreenState {
        query: term.to_owned(),
        ..SearchScreenState::default()
    };
    state.submit(catalog);
    match &state.display.handle {
        Some(handle) => handle.path.display().to_string(),
        None => format!("No GIF found for \"{term}\""),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_assets_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    list: bool,
    query: Option<String>,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_assets_path: false,
        print_example: false,
        demo: false,
        check_only: false,
        list: false,
        query: None,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--query" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--query requires a search term"))?;
                options.query = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-assets-path" => {
                options.print_assets_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--list" => {
                options.list = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("gifdex");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-assets-path      Print resolved assets directory");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Seed demo GIFs into the assets directory");
    println!("  --check                  Validate config + assets + startup dependencies");
    println!("  --list                   Print catalog names and exit");
    println!("  --query <term>           Resolve one search term and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args, resolve_query};
    use anyhow::Result;
    use gifdex_app::normalize_key;
    use gifdex_testkit::{loaded_catalog, search_phrases};
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/gifdex-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_assets_path: false,
                print_example: false,
                demo: false,
                check_only: false,
                list: false,
                query: None,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
    }

    #[test]
    fn parse_cli_args_captures_query_term() -> Result<()> {
        let options = parse_cli_args(vec!["--query", "Party Parrot"], default_options_path())?;
        assert_eq!(options.query.as_deref(), Some("Party Parrot"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_query_term() {
        let error = parse_cli_args(vec!["--query"], default_options_path())
            .expect_err("missing query term should fail");
        assert!(error.to_string().contains("--query requires a search term"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(!options.print_assets_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_demo_list_and_assets_path_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--demo", "--list", "--print-assets-path"],
            default_options_path(),
        )?;
        assert!(options.demo);
        assert!(options.list);
        assert!(options.print_assets_path);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }

    #[test]
    fn resolve_query_prints_path_on_hit() -> Result<()> {
        let (_temp, catalog) = loaded_catalog(&["party_parrot"])?;
        let line = resolve_query(&catalog, "Party Parrot");
        assert!(line.ends_with("party_parrot.gif"), "got {line}");
        Ok(())
    }

    #[test]
    fn resolve_query_handles_every_fixture_phrase() -> Result<()> {
        let keys: Vec<String> = search_phrases().iter().map(|p| normalize_key(p)).collect();
        for (phrase, key) in search_phrases().iter().zip(&keys) {
            assert!(
                key.chars()
                    .all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '_')),
                "phrase {phrase:?} produced {key:?}"
            );
            assert_eq!(&normalize_key(key), key, "phrase {phrase:?}");
        }

        // Seed the catalog with the non-empty keys; every phrase must then
        // resolve to its own asset, and the rest get the not-found line.
        let names: Vec<&str> = keys
            .iter()
            .filter(|key| !key.is_empty())
            .map(String::as_str)
            .collect();
        let (_temp, catalog) = loaded_catalog(&names)?;
        for (phrase, key) in search_phrases().iter().zip(&keys) {
            let line = resolve_query(&catalog, phrase);
            if key.is_empty() {
                assert_eq!(line, format!("No GIF found for \"{phrase}\""));
            } else {
                assert!(
                    line.ends_with(&format!("{key}.gif")),
                    "phrase {phrase:?} resolved to {line}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn resolve_query_prints_not_found_message_with_raw_term() -> Result<()> {
        let (_temp, catalog) = loaded_catalog(&["cat"])?;
        assert_eq!(
            resolve_query(&catalog, "Déjà Vu"),
            "No GIF found for \"Déjà Vu\"",
        );
        Ok(())
    }
}
