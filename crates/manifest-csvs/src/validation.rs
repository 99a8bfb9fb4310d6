/*!
# Manifest Validation & I/O

Reading, checking and re-writing sample manifests. The checks run in a fixed
order and stop at the first failure; the normalized file is only written once
every check has passed.
*/

use crate::{
    config::ValidatorOptions,
    errors::{ManifestError, ManifestResult},
    schemas::{Manifest, ValidationReport},
};
use csv::{Reader, Writer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;
use thousands::Separable;
use tracing::{debug, info};

// ================================================================================================
// Full Validation Run
// ================================================================================================

/// Validate the manifest at `input` and write its normalized form to `options.output`.
///
/// Progress lines are written to `progress` as each step completes. A missing
/// input fails before anything is written to `progress`.
pub fn validate_manifest<W: Write>(
    input: &Path,
    options: &ValidatorOptions,
    progress: &mut W,
) -> ManifestResult<ValidationReport> {
    ensure_exists(input)?;

    writeln!(progress, "Reading in {} as CSV", input.display())?;
    let manifest = parse_manifest(input)?;
    writeln!(
        progress,
        "Read in {} rows and {} columns",
        manifest.row_count().separate_with_commas(),
        manifest.column_count().separate_with_commas()
    )?;

    writeln!(progress, "Columns: ")?;
    for column in manifest.columns() {
        writeln!(progress, "{column}")?;
    }

    validate_required_columns(&manifest, &options.required_columns)?;
    if !options.allow_duplicate_columns {
        validate_unique_columns(&manifest)?;
    }

    write_manifest_csv(&options.output, &manifest)?;
    info!(
        input = %input.display(),
        output = %options.output.display(),
        rows = manifest.row_count(),
        "manifest validated"
    );

    Ok(ValidationReport::from_manifest(&manifest, options.output.clone()))
}

// ================================================================================================
// CSV Reading
// ================================================================================================

/// Read a manifest, failing if the path does not exist or the content is not CSV
pub fn read_manifest_csv<P: AsRef<Path>>(path: P) -> ManifestResult<Manifest> {
    let path = path.as_ref();
    ensure_exists(path)?;
    parse_manifest(path)
}

fn ensure_exists(path: &Path) -> ManifestResult<()> {
    if !path.exists() {
        return Err(ManifestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn parse_manifest(path: &Path) -> ManifestResult<Manifest> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let parse_error = |source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let headers = rdr.headers().map_err(parse_error)?.clone();
    if headers.is_empty() {
        return Err(ManifestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result.map_err(parse_error)?);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "parsed manifest"
    );
    Ok(Manifest::new(path, headers, rows))
}

// ================================================================================================
// Header Validation
// ================================================================================================

/// Check that every required column is present, reporting the first one missing
pub fn validate_required_columns<S: AsRef<str>>(
    manifest: &Manifest,
    required: &[S],
) -> ManifestResult<()> {
    for column in required.iter().map(AsRef::as_ref) {
        if !manifest.has_column(column) {
            return Err(ManifestError::MissingColumn {
                column: column.to_string(),
                path: manifest.path().to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Check that no column name appears twice in the header
pub fn validate_unique_columns(manifest: &Manifest) -> ManifestResult<()> {
    let mut seen = HashSet::new();
    for column in manifest.columns() {
        if !seen.insert(column) {
            return Err(ManifestError::DuplicateColumn {
                column: column.to_string(),
                path: manifest.path().to_path_buf(),
            });
        }
    }
    Ok(())
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write the manifest as CSV with `\n` line endings.
///
/// The data goes to a temporary file beside `path` which then replaces it, so
/// an existing file is either fully replaced or left as it was. The file is
/// created with the same umask-governed mode as `File::create`.
pub fn write_manifest_csv<P: AsRef<Path>>(path: P, manifest: &Manifest) -> ManifestResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    {
        let mut wtr = Writer::from_writer(tmp.as_file_mut());
        wtr.write_record(manifest.headers()).map_err(io::Error::from)?;
        for row in manifest.rows() {
            wtr.write_record(row).map_err(io::Error::from)?;
        }
        wtr.flush()?;
    }
    tmp.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), rows = manifest.row_count(), "wrote manifest");
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
