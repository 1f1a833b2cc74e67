use anyhow::Result;
use clap::{Parser, ValueEnum};
use clippings_core::collection::{ClippingFilter, ParseMode};
use clippings_core::config::Settings;
use clippings_core::domain::AnnotationKind;
use clippings_core::error::ClipError;
use clippings_core::listing::{ListingRow, detail, status_line};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Browse the highlights, notes and bookmarks of a "My Clippings" export
#[derive(Parser, Debug)]
#[command(name = "kindleclip", version)]
struct Args {
    /// Clippings file to read
    #[arg(env = "CLIPPINGS_FILE")]
    file: Option<PathBuf>,

    /// Kinds to show (repeatable); defaults to notes and highlights
    #[arg(long, value_enum)]
    kind: Vec<KindArg>,

    /// Only show clippings from this exact book title
    #[arg(long)]
    book: Option<String>,

    /// Only show clippings whose text contains this string
    #[arg(long)]
    text: Option<String>,

    /// List the distinct book titles and exit
    #[arg(long)]
    books: bool,

    /// Skip malformed clippings instead of rejecting the whole file
    #[arg(long)]
    skip_invalid: bool,

    /// Print every clipping in full instead of one line each
    #[arg(long)]
    full: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Note,
    Bookmark,
    Highlight,
}

impl From<KindArg> for AnnotationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Note => AnnotationKind::Note,
            KindArg::Bookmark => AnnotationKind::Bookmark,
            KindArg::Highlight => AnnotationKind::Highlight,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if args.skip_invalid {
        ParseMode::SkipInvalid
    } else {
        ParseMode::Abort
    };

    let settings = Settings::resolve(args.file.clone());
    let loaded = match settings.load(mode) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, ClipError::NotFound(_)) {
                eprintln!(
                    "\"My Clippings.txt\" was not found in the current path, and no clippings \
                     file was otherwise specified - Cannot continue."
                );
            }
            return Ok(ExitCode::from(e.exit_code()));
        }
    };
    for notice in &loaded.notices {
        eprintln!("{notice}");
    }
    let clippings = loaded.clippings;

    if args.books {
        for book in clippings.sorted_books() {
            println!("{book}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut filter = ClippingFilter::reset();
    if !args.kind.is_empty() {
        filter = filter.with_kinds(args.kind.iter().copied().map(AnnotationKind::from));
    }
    if let Some(book) = args.book {
        filter = filter.with_book(book);
    }
    if let Some(text) = args.text {
        filter = filter.with_text(text);
    }

    let shown = filter.apply(&clippings);
    for clipping in &shown {
        if args.full {
            println!("{}\n", detail(clipping));
        } else {
            println!("{}", ListingRow::from(*clipping).to_line());
        }
    }
    eprintln!("{}", status_line(shown.len()));

    Ok(ExitCode::SUCCESS)
}
