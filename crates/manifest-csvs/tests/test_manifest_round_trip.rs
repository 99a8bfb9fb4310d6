use manifest_csvs::{
    read_manifest_csv, validate_manifest, ErrorKind, ManifestError, ValidatorOptions,
};
use std::fs;
use std::io;
use tempfile::TempDir;

#[test]
fn test_revalidating_output_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("user_manifest.csv");
    fs::write(
        &input,
        "sample,R1,R2,condition\r\nA,a1.fq.gz,a2.fq.gz,ctrl\r\nB,b1.fq.gz,b2.fq.gz,\"treated, 2h\"\r\n",
    )
    .unwrap();

    let options = ValidatorOptions {
        output: dir.path().join("manifest.csv"),
        ..Default::default()
    };
    let first = validate_manifest(&input, &options, &mut io::sink()).unwrap();
    let first_content = fs::read_to_string(&options.output).unwrap();

    // Validate the normalized file in place.
    let second = validate_manifest(&options.output, &options, &mut io::sink()).unwrap();
    let second_content = fs::read_to_string(&options.output).unwrap();

    assert_eq!(first_content, second_content);
    assert_eq!(first.row_count, second.row_count);
    assert_eq!(first.columns, second.columns);
}

#[test]
fn test_output_matches_input_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(
        &input,
        "R1,R2,sample,lane\nx1.fq,x2.fq,X,1\ny1.fq,y2.fq,Y,2\nz1.fq,z2.fq,Z,3\n",
    )
    .unwrap();
    let options = ValidatorOptions {
        output: dir.path().join("out").join("manifest.csv"),
        ..Default::default()
    };
    fs::create_dir(dir.path().join("out")).unwrap();

    validate_manifest(&input, &options, &mut io::sink()).unwrap();

    let original = read_manifest_csv(&input).unwrap();
    let written = read_manifest_csv(&options.output).unwrap();
    assert_eq!(written.row_count(), original.row_count());
    assert_eq!(
        written.columns().collect::<Vec<_>>(),
        original.columns().collect::<Vec<_>>()
    );
    for row in 0..original.row_count() {
        for column in original.columns() {
            assert_eq!(written.value(row, column), original.value(row, column));
        }
    }
}

#[test]
fn test_missing_r2_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, "sample,R1\nA,a1.fq\n").unwrap();
    let options = ValidatorOptions {
        output: dir.path().join("manifest.csv"),
        ..Default::default()
    };

    let err = validate_manifest(&input, &options, &mut io::sink()).unwrap_err();

    assert!(matches!(
        err,
        ManifestError::MissingColumn { ref column, .. } if column == "R2"
    ));
    assert!(!options.output.exists());
}

#[test]
fn test_malformed_input_fails_before_column_check() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    // No required columns at all, but the parse failure must win.
    fs::write(&input, "a,b\n1,2\n3,4,5\n").unwrap();
    let options = ValidatorOptions {
        output: dir.path().join("manifest.csv"),
        ..Default::default()
    };

    let err = validate_manifest(&input, &options, &mut io::sink()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!options.output.exists());
}

#[test]
fn test_invalid_utf8_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, b"sample,R1,R2\nA,\xff\xfe.fq,a2.fq\n").unwrap();

    let err = read_manifest_csv(&input).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_custom_required_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, "sample,R1,R2\nA,a1.fq,a2.fq\n").unwrap();
    let options = ValidatorOptions {
        required_columns: vec!["sample".to_string(), "fasta".to_string()],
        output: dir.path().join("manifest.csv"),
        ..Default::default()
    };

    let err = validate_manifest(&input, &options, &mut io::sink()).unwrap_err();

    assert_eq!(err.to_string(), "Manifest file must contain a column fasta");
}

#[test]
fn test_leading_bom_and_blank_lines_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, "\u{feff}sample,R1,R2\n\nA,a1.fq,a2.fq\n\n").unwrap();
    let options = ValidatorOptions {
        output: dir.path().join("manifest.csv"),
        ..Default::default()
    };

    let report = validate_manifest(&input, &options, &mut io::sink()).unwrap();

    assert_eq!(report.columns[0], "sample");
    assert_eq!(report.row_count, 1);
    assert_eq!(
        fs::read_to_string(&options.output).unwrap(),
        "sample,R1,R2\nA,a1.fq,a2.fq\n"
    );
}
