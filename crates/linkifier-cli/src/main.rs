use anyhow::{Context, Result};
use linkifier_config::Config;
use linkifier_engine::{LinkifyOptions, split, tokenize};
use std::{
    env,
    io::{self, Read, Write},
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// One line per link/plain segment.
    Segments,
    /// One line per splitter fragment.
    Split,
}

fn parse_args(args: &[String]) -> (Mode, Vec<&str>) {
    let mut mode = Mode::Segments;
    let mut words = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--split" => mode = Mode::Split,
            other => words.push(other),
        }
    }
    (mode, words)
}

fn load_options() -> LinkifyOptions {
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config.to_options()
        }
        Ok(None) => LinkifyOptions::default(),
        Err(e) => {
            log::warn!("Ignoring config: {e}");
            LinkifyOptions::default()
        }
    }
}

fn render_segments(text: &str, options: &LinkifyOptions) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .map(|seg| match seg.href(&options.default_scheme) {
            Some(href) => format!("link  {:?}  -> {href}", seg.text),
            None => format!("text  {:?}", seg.text),
        })
        .collect()
}

fn render_split(text: &str) -> Vec<String> {
    split(text)
        .into_iter()
        .map(|fragment| format!("{fragment:?}"))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "linkifier".to_string());
    let args: Vec<String> = args.collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {program} [--split] [TEXT...]");
        eprintln!("Reads TEXT from stdin when none is given.");
        process::exit(0);
    }

    let (mode, words) = parse_args(&args);
    let text = if words.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        words.join(" ")
    };

    let lines = match mode {
        Mode::Segments => render_segments(&text, &load_options()),
        Mode::Split => render_split(&text),
    };

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
