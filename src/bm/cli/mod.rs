//! # CLI Layer
//!
//! One client of the bm library. This layer is the only place that:
//! - Parses arguments (clap)
//! - Sets up logging
//! - Writes to stdout/stderr
//! - Decides the process exit code
//!
//! Exit codes: `0` on success, `2` when no subcommand is given, `10` for any handled
//! failure.

mod logging;
mod setup;

use bm::api::BookmarkApi;
use bm::config::{config_dir, BmConfig};
use bm::convert::PandocConverter;
use bm::editor::TerminalAnnotator;
use bm::error::{BmError, Result};
use bm::extract::ReadableExtractor;
use bm::format::Format;
use bm::writer::{self, file_name, write_file, Destination};
use clap::{CommandFactory, Parser};
use setup::{AddArgs, Cli, Commands};
use std::io;
use std::str::FromStr;
use tracing::{debug, error, info};

/// Exit code when no subcommand was given.
pub const NO_COMMAND_EXIT_CODE: i32 = 2;

/// Runs the CLI and returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Help output is best effort.
        let _ = Cli::command().print_help();
        return NO_COMMAND_EXIT_CODE;
    };

    let subscriber = logging::subscriber(cli.verbose);
    tracing::subscriber::with_default(subscriber, || {
        let result = match command {
            Commands::Add(args) => handle_add(args),
        };
        match result {
            Ok(()) => 0,
            Err(e) => {
                error!("{}", e);
                e.exit_code()
            }
        }
    })
}

fn handle_add(args: AddArgs) -> Result<()> {
    let url = args
        .url
        .ok_or_else(|| BmError::InvalidUrl("no URL given (use --url)".into()))?;

    let config_dir = config_dir()?;
    debug!("loading config from {}", config_dir.display());
    let config = BmConfig::load(&config_dir)?;

    // Validate the selector before doing any work.
    let format = Format::from_str(args.format.as_deref().unwrap_or(&config.format))?;
    let destination = Destination::resolve(args.output, &config)?;

    let api = BookmarkApi::new(
        ReadableExtractor::new(config.extractor.clone()),
        PandocConverter::new(config.converter.clone()),
    );
    let annotator = TerminalAnnotator::new(config.editor.clone());

    let record = api.add_bookmark(&url, &annotator, args.edit)?;
    let document = api.render_as(&record, format)?;

    match destination {
        Destination::Stdout => writer::write(&mut io::stdout().lock(), &document)?,
        Destination::Directory(dir) => {
            let name = file_name(&record.bookmark_date, format);
            let path = write_file(&dir, &name, &document)?;
            info!("bookmark written to {}", path.display());
            println!("{}", path.display());
        }
    }
    Ok(())
}
