// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;

use anyhow::{Context, Result};
use config::Config;
use scry_app::{Session, SessionCommand};
use scry_client::Client;
use scry_testkit::DemoBackend;
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
            "load config {}; run `scry --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let mut session = Session::new();
    if config.hover_effects() {
        session.dispatch(SessionCommand::ToggleHoverEffects);
    }

    if options.demo {
        if options.check_only {
            return Ok(());
        }
        let backend = DemoBackend::new();
        return scry_tui::run_app(&mut session, &backend);
    }

    let base_url = options
        .base_url
        .clone()
        .unwrap_or_else(|| config.base_url());
    let client = Client::new(&base_url, config.timeout()?).with_context(|| {
        format!(
            "invalid [backend] config in {}; fix base_url/timeout values",
            options.config_path.display()
        )
    })?;
    if options.check_only {
        return Ok(());
    }

    scry_tui::run_app(&mut session, &client)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    base_url: Option<String>,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        base_url: None,
        print_config_path: false,
        print_example: false,
        demo: false,
        check_only: false,
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
            "--base-url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--base-url requires a URL"))?;
                options.base_url = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
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
    println!("scry");
    println!("  --config <path>          Use a specific config path");
    println!("  --base-url <url>         Override the backend base URL for this run");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Explore a built-in dataset without a backend");
    println!("  --check                  Validate config and backend settings, then exit");
    println!("  --help                   Show this help");
}
