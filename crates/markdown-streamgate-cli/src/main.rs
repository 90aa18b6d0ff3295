//! Replays a markdown document through the classifier the way a streaming
//! host would: grow the buffer chunk by chunk, print each safe snapshot.

use anyhow::{Context, Result, bail};
use markdown_streamgate_config::Config;
use markdown_streamgate_engine::{
    Classifier, ConstructKind, PlaceholderBindings, guard,
    reveal::{self, RevealConfig, RevealMode},
    StreamState,
};
use pulldown_cmark::{Parser, html};
use std::io::Read;
use std::time::Duration;
use std::{env, fs, process, thread};

struct Options {
    file: Option<String>,
    chunk: usize,
    render: bool,
    reveal: bool,
}

fn usage() -> ! {
    eprintln!(
        "Usage: markdown-streamgate-cli [--chunk N] [--render] [--reveal] [FILE]\n\n\
         Replays FILE (or stdin) through the streaming classifier, printing\n\
         each safe snapshot. --render pushes the final snapshot through the\n\
         markdown renderer with newline-guarded custom regions; --reveal\n\
         paces the final text with the reveal scheduler."
    );
    process::exit(2);
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        file: None,
        chunk: 16,
        render: false,
        reveal: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chunk" => {
                let value = args.next().context("--chunk needs a value")?;
                opts.chunk = value.parse().context("--chunk needs a number")?;
                if opts.chunk == 0 {
                    bail!("--chunk must be at least 1");
                }
            }
            "--render" => opts.render = true,
            "--reveal" => opts.reveal = true,
            "--help" | "-h" => usage(),
            _ if arg.starts_with('-') => bail!("unknown option: {arg}"),
            _ => opts.file = Some(arg),
        }
    }
    Ok(opts)
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn bindings_from(config: &Config) -> PlaceholderBindings {
    let mut bindings = PlaceholderBindings::new();
    for (kind_name, marker) in &config.placeholders {
        let Some(kind) = ConstructKind::from_name(kind_name) else {
            eprintln!("warning: unknown construct kind in config: {kind_name}");
            continue;
        };
        if marker.is_empty() {
            bindings.bind(kind);
        } else {
            bindings.bind_as(kind, marker.clone());
        }
    }
    bindings
}

fn reveal_config_from(config: &Config) -> Result<RevealConfig> {
    let mode = match config.reveal.mode.as_str() {
        "sentence" => RevealMode::Sentence,
        "word" => RevealMode::Word,
        other => bail!("unknown reveal mode in config: {other}"),
    };
    Ok(RevealConfig {
        mode,
        pattern: config.reveal.pattern.clone(),
        delays: config
            .reveal
            .delays_ms
            .iter()
            .map(|&ms| Duration::from_millis(ms))
            .collect(),
    })
}

/// Next chunk boundary at or after `from + step`, snapped to a char
/// boundary.
fn chunk_end(input: &str, from: usize, step: usize) -> usize {
    let mut end = (from + step).min(input.len());
    while !input.is_char_boundary(end) {
        end += 1;
    }
    end
}

fn render_markdown(safe: &str, protected_tags: &[&str]) -> String {
    let (protected, map) = guard::protect(safe, protected_tags);
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(&protected));
    guard::restore(&out, &map)
}

fn run() -> Result<()> {
    let opts = parse_args()?;
    let config = Config::load()?.unwrap_or_default();

    let input = read_input(opts.file.as_deref())?;
    let classifier = Classifier::with_bindings(bindings_from(&config));
    let mut state = StreamState::new();

    let mut end = 0;
    let mut last = String::new();
    while end < input.len() {
        end = chunk_end(&input, end, opts.chunk);
        let snapshot = if end == input.len() {
            classifier.finish(&mut state, &input[..end])
        } else {
            classifier.advance(&mut state, &input[..end])
        };
        if snapshot != last {
            println!("--- {end} bytes consumed ---");
            println!("{snapshot}");
            last = snapshot;
        }
    }

    if opts.reveal {
        let reveal_config = reveal_config_from(&config)?;
        println!("=== reveal ===");
        for step in reveal::schedule(&last, &reveal_config)? {
            thread::sleep(step.delay);
            println!("{}", step.text);
        }
    }

    if opts.render {
        let tags: Vec<&str> = config.protected_tags.iter().map(String::as_str).collect();
        println!("=== rendered ===");
        print!("{}", render_markdown(&last, &tags));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
