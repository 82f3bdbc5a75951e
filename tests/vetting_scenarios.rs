//! End-to-end vetting of CSV text through the public API
use cvet::{
    parse_dataset, row_outcomes, validate, vet, Dataset, InvalidRecord, ParseError, ParseOptions,
    RowOutcome,
};

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn invalid(row: usize, columns: &[&str]) -> InvalidRecord {
    InvalidRecord {
        row,
        columns: columns.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn test_complete_and_incomplete_rows() {
    let input = "name,phone,class\nnana,1111111111,golang\nnana,1111111111,golang\n,4545,accra";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert_eq!(
        result.valid_records,
        vec![
            row(&["nana", "1111111111", "golang"]),
            row(&["nana", "1111111111", "golang"]),
        ]
    );
    assert_eq!(result.invalid_records, vec![invalid(4, &["name"])]);
}

#[test]
fn test_every_row_incomplete() {
    let input = "name,phone,class,address\nnana,1111111111,golang,\nnana,,golang,golang\n,4545,accra,";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert!(result.valid_records.is_empty());
    assert_eq!(
        result.invalid_records,
        vec![
            invalid(2, &["address"]),
            invalid(3, &["phone"]),
            invalid(4, &["name", "address"]),
        ]
    );
}

#[test]
fn test_header_only() {
    let result = vet(b"name,phone,class\n", &ParseOptions::default()).expect("vet");
    assert!(result.valid_records.is_empty());
    assert!(result.invalid_records.is_empty());
}

#[test]
fn test_empty_input() {
    let result = vet(b"", &ParseOptions::default()).expect("vet");
    assert!(result.valid_records.is_empty());
    assert!(result.invalid_records.is_empty());
}

#[test]
fn test_fully_empty_rows_are_dropped() {
    let input = "a,b,c\n1,2,3\n , ,\t\n,,\n4,,6\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert_eq!(result.valid_records, vec![row(&["1", "2", "3"])]);
    assert_eq!(result.invalid_records, vec![invalid(5, &["b"])]);
    assert_eq!(result.dropped_rows, 2);
}

#[test]
fn test_whitespace_only_lines_are_dropped() {
    let input = "name,phone,class\nnana,1,go\n   \n,\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert_eq!(result.valid_records, vec![row(&["nana", "1", "go"])]);
    assert!(result.invalid_records.is_empty());
    assert_eq!(result.dropped_rows, 2);
}

#[test]
fn test_padded_quoted_field_is_accepted() {
    let input = "name,phone\nnana, \"0244\"\nkofi,  \"\"\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert_eq!(result.valid_records, vec![row(&["nana", "0244"])]);
    assert_eq!(result.invalid_records, vec![invalid(3, &["phone"])]);
}

#[test]
fn test_row_accounting_without_dropped_rows() {
    let input = "a,b\n1,2\n,2\n1,\n3,4\n";
    let dataset = parse_dataset(input.as_bytes(), &ParseOptions::default()).expect("parse");
    let data_rows = dataset.data_rows().len();

    let result = validate(dataset);
    assert_eq!(result.reported_rows(), data_rows);
}

#[test]
fn test_row_numbers_follow_record_position() {
    let input = "a,b\n,1\n,2\n,3\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");
    let rows: Vec<usize> = result.invalid_records.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![2, 3, 4]);
}

#[test]
fn test_blank_lines_do_not_shift_row_numbers() {
    let input = "a,b\n\n1,2\n\n,x\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");
    assert_eq!(result.invalid_records, vec![invalid(3, &["a"])]);
}

#[test]
fn test_columns_follow_header_order() {
    let input = "z,y,x,w\n,1,,2\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");
    assert_eq!(result.invalid_records, vec![invalid(2, &["z", "x"])]);
}

#[test]
fn test_valid_rows_are_verbatim() {
    let input = "a,b\n  padded  ,\"quoted, comma\"\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");
    assert_eq!(result.valid_records, vec![row(&["  padded  ", "quoted, comma"])]);
}

#[test]
fn test_same_input_same_result() {
    let input = "name,phone\nnana,\n,1\nkofi,2\n, \n";
    let dataset = parse_dataset(input.as_bytes(), &ParseOptions::default()).expect("parse");

    let first = validate(dataset.clone());
    let second = validate(dataset);
    assert_eq!(first, second);
}

#[test]
fn test_short_row_flexible_checks_present_fields() {
    let input = "name,phone,class\nnana,\nkofi,2\n";
    let result = vet(input.as_bytes(), &ParseOptions::default()).expect("vet");

    assert_eq!(result.valid_records, vec![row(&["kofi", "2"])]);
    assert_eq!(result.invalid_records, vec![invalid(2, &["phone"])]);
}

#[test]
fn test_short_row_strict_is_a_parse_error() {
    let input = "name,phone,class\nnana,1,go\nkofi,2\n";
    let err = vet(input.as_bytes(), &ParseOptions::strict()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::FieldCount {
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[test]
fn test_malformed_quoting_fails_whole_call() {
    for input in [
        "a,b\n1,\"unterminated\n",
        "a,b\n1,ba\"re\n",
        "a,b\n\"x\"y,2\n",
    ] {
        let err = vet(input.as_bytes(), &ParseOptions::default()).unwrap_err();
        assert_eq!(err.line(), Some(2), "input: {:?}", input);
    }
}

#[test]
fn test_row_outcomes_stream() {
    let dataset = Dataset::new(vec![row(&["a", "b"]), row(&["1", "2"]), row(&["", " "]), row(&["", "2"])]);
    let outcomes: Vec<RowOutcome> = row_outcomes(dataset).collect();

    assert_eq!(
        outcomes,
        vec![
            RowOutcome::Valid(row(&["1", "2"])),
            RowOutcome::Dropped { row: 3 },
            RowOutcome::Invalid(invalid(4, &["a"])),
        ]
    );
}
