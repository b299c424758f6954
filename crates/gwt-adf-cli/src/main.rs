use anyhow::{Context, Result};
use gwt_adf_config::Config;
use gwt_adf_engine::{Classifier, convert_using};
use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Debug, PartialEq)]
enum Input {
    Stdin,
    File(PathBuf),
}

/// Picks the input source from the command line: a path, `-` or nothing.
fn parse_args(args: &[String]) -> Option<Input> {
    match args {
        [_] => Some(Input::Stdin),
        [_, flag] if flag == "-h" || flag == "--help" => None,
        [_, dash] if dash == "-" => Some(Input::Stdin),
        [_, path] => Some(Input::File(PathBuf::from(path))),
        _ => None,
    }
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read write-up from stdin")?;
            Ok(text)
        }
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read write-up from '{}'", path.display())),
    }
}

/// Converts a write-up to ADF JSON using the rules and output style from `config`.
fn render(text: &str, config: &Config) -> Result<String> {
    let classifier = Classifier::new(config.rules.clone())?;
    let doc = convert_using(&classifier, text);
    log::info!("Converted write-up into {} blocks", doc.len());

    let json = if config.pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(input) = parse_args(&args) else {
        eprintln!("Usage: {} [write-up-file | -]", args[0]);
        eprintln!("Reads from stdin when no file (or `-`) is given.");
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let text = read_input(&input)?;
    println!("{}", render(&text, &config)?);
    Ok(())
}
