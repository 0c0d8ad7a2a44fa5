//! mdhighlight - Markdown syntax highlighter for the terminal
//!
//! Highlights a Markdown file, fenced code blocks included, and prints
//! the result with ANSI styling.

use std::env;
use std::fs;
use std::process;

use mdhighlight::config::Config;
use mdhighlight::error::Result;
use mdhighlight::render::render_line;
use mdhighlight::rules::HighlightingOptions;
use mdhighlight::state::HighlighterState;
use mdhighlight::style::default_text_formats;
use mdhighlight::{Document, MarkdownHighlighter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }
    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "--version" | "-V" => {
            print_version();
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;

    let mut highlighter = MarkdownHighlighter::with_options(HighlightingOptions {
        fully_highlighted_block_quote: config.full_block_quote,
    });
    let mut formats = default_text_formats(config.font_size);
    if let Some(color) = config.heading_color {
        use HighlighterState::*;
        for state in [H1, H2, H3, H4, H5, H6] {
            if let Some(format) = formats.get_mut(&state) {
                format.foreground = Some(color);
            }
        }
    }
    highlighter.set_text_formats(formats);

    let text = fs::read_to_string(&args[1])?;
    let mut document = Document::new();
    let annotations = document.highlight_text(&mut highlighter, &text);

    for (line, spans) in text.lines().zip(annotations.iter()) {
        println!("{}", render_line(line, spans));
    }

    Ok(())
}

fn print_usage() {
    println!(
        "mdhighlight {} - Markdown syntax highlighter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: mdhighlight [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Configuration is read from ~/.mdhighlight.conf (key = value):");
    println!("  font-size         base font point size (default 12)");
    println!("  full-block-quote  style whole block-quote lines (default false)");
    println!("  heading-color     #rrggbb override for headings");
}

fn print_version() {
    println!("mdhighlight {}", env!("CARGO_PKG_VERSION"));
}
