use crate::config::load_options;
use crate::error::CliResult;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Validate `manifest` and write the normalized copy, printing progress to stdout
pub fn execute(
    manifest: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> CliResult<()> {
    let mut options = load_options(config.as_deref())?;
    if let Some(output) = output {
        options.output = output;
    }

    let stdout = io::stdout();
    let mut progress = stdout.lock();
    let report = manifest_csvs::validate_manifest(&manifest, &options, &mut progress)?;
    progress.flush()?;

    debug!(columns = ?report.columns, "normalized manifest columns");
    Ok(())
}
