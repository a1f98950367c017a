//! Terminal demo for the emoji picker engine.
//!
//! Reads lines from stdin and drives a real [`PickerSession`]: a plain line
//! becomes the search term, slash commands replay the navigation keys the
//! host would forward. Suggestions and picks are printed as they are
//! published, so the full notification path is exercised.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use emoji_inline::dictionary::{Dictionary, EmojiEntry};
use emoji_inline::events::{PickerListener, PickerSnapshot};
use emoji_inline::logging;
use emoji_inline::picker::PickerSession;
use emoji_inline::PickerConfig;

#[derive(Parser, Debug)]
#[command(name = "emoji-inline", about = "Interactive emoji search demo")]
struct Args {
    /// Maximum number of suggestions
    #[arg(long)]
    limit: Option<usize>,

    /// Minimum term length before searching
    #[arg(long)]
    threshold: Option<usize>,

    /// Path to a custom dictionary JSON file (array of {"name", "char"})
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

/// Prints each published snapshot and pick to stdout.
struct ReplPrinter;

impl PickerListener for ReplPrinter {
    fn state_updated(&mut self, snapshot: &PickerSnapshot) {
        if !snapshot.active {
            println!("  (idle)");
            return;
        }
        for (i, entry) in snapshot.suggestions.iter().enumerate() {
            let marker = if i == snapshot.highlight_index { ">" } else { " " };
            println!("  {} {}  :{}:", marker, entry.glyph, entry.name);
        }
    }

    fn emoji_picked(&mut self, entry: &EmojiEntry) {
        println!("picked {}  :{}:", entry.glyph, entry.name);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init();

    let mut config = PickerConfig::load();
    if let Some(limit) = args.limit {
        config.suggestion_limit = limit;
    }
    if let Some(threshold) = args.threshold {
        config.char_threshold = threshold;
    }
    config
        .validate()
        .context("Invalid picker configuration")?;

    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display()))?,
        None => Dictionary::builtin().context("Embedded dictionary is corrupt")?,
    };
    tracing::info!(entries = dictionary.len(), "Dictionary loaded");

    let mut session = PickerSession::new(dictionary, config);
    session.subscribe(Box::new(ReplPrinter));

    println!("Type a search term; /tab /down /up /enter /left /right /esc replay keys; /quit exits.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');

        match line {
            "/quit" => break,
            "/tab" => session.handle_key_down("Tab"),
            "/down" => session.handle_key_down("ArrowDown"),
            "/up" => session.handle_key_down("ArrowUp"),
            "/enter" => session.handle_key_down("Enter"),
            "/left" => session.handle_key_down("ArrowLeft"),
            "/right" => session.handle_key_down("ArrowRight"),
            "/esc" => session.handle_key_down("Escape"),
            term => session.handle_search_term_changed(Some(term)),
        }
    }

    Ok(())
}
