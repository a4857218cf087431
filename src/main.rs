use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use latex2md::{FileSink, MarkdownRenderer, OutputSink, ParseError, StdoutSink, TreeParser};

fn cli() -> Command {
    Command::new("latex2md")
        .about("Convert a parsed LaTeX document tree to Markdown")
        .arg(
            Arg::new("input")
                .help("Document tree produced by the LaTeX front end (JSON)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Markdown file to write, or - for standard output")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Print the document tree to stderr before rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    // --verbose wins over RUST_LOG, which defaults to warn
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let input = matches
        .get_one::<String>("input")
        .context("missing input path")?;
    let output = matches
        .get_one::<String>("output")
        .context("missing output path")?;

    let root = match TreeParser::new().parse_file(Path::new(input)) {
        Ok(root) => root,
        Err(e @ ParseError::Io { .. }) => {
            return Err(e).with_context(|| format!("Error opening file: {}", input));
        }
        Err(e) => return Err(e).with_context(|| format!("Parse error in {}", input)),
    };

    if matches.get_flag("dump") {
        eprint!("{}", root.dump(1));
    }

    let markdown = MarkdownRenderer::new()
        .render_document(&root)
        .with_context(|| format!("Failed to convert {}", input))?;
    info!(input = %input, bytes = markdown.len(), "converted document");

    let sink: &dyn OutputSink = if output == "-" {
        &StdoutSink
    } else {
        &FileSink
    };
    sink.emit(&markdown, output)
        .with_context(|| format!("Failed to write {}", output))?;

    Ok(())
}
