// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation notify event dumper.
//!
//! Drop an exported animation JSON onto the executable (or pass its path
//! as the only argument) to write `<name>_events.txt` next to it.
//!
//! The status line always goes to stdout. Diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\nDrag & Drop JSON onto this EXE\n";

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    tracing::debug!("Processing {:?}", path);

    match anim_event_dump::process_file(&path) {
        Ok(output) => {
            println!("Saved → {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Extraction failed: {e:?}");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
