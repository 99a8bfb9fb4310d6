/*!
# Sample Manifest CSVs

This crate checks the **sample manifest** a pipeline run starts from and
re-emits it in a normalized form for the steps that follow.

## Manifest (`manifest.csv`)
A comma-separated file whose header must include:
- `sample`: Sample identifier
- `R1`: Forward read file of the pair
- `R2`: Reverse read file of the pair

Other columns are allowed and passed through unchanged.

## Validation Steps

1. The input path must exist.
2. The content must parse as CSV with a header row.
3. `sample`, `R1` and `R2` must appear in the header (checked in that order).
4. Column names must be unique, unless explicitly allowed.

Only when every step passes is the manifest written back out, with `\n` line
endings and the original column order.

## Usage

```rust,no_run
use manifest_csvs::{validate_manifest, ManifestResult, ValidatorOptions};
use std::path::Path;

fn example() -> ManifestResult<()> {
    let options = ValidatorOptions::default();
    let report = validate_manifest(Path::new("samples.csv"), &options, &mut std::io::stdout())?;
    println!("{} samples", report.row_count);
    Ok(())
}
```
*/

pub mod config;
pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use config::ValidatorOptions;
pub use errors::{ErrorKind, ManifestError, ManifestResult};
pub use schemas::{Manifest, ValidationReport, DEFAULT_OUTPUT_FILENAME, REQUIRED_COLUMNS};
pub use validation::{
    read_manifest_csv, validate_manifest, validate_required_columns, validate_unique_columns,
    write_manifest_csv,
};
