//! Integration tests for reading order exports.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tindhl_ingest::{IngestError, read_orders, read_orders_from_reader};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const EXPORT: &str = "\
Order ID,First Name,Last Name,Email,Company,Street,City,Postal/Zip Code,Country
1001,Jane,Doe,jane@example.com,,Hauptstrasse 5,Berlin,10115,Germany
1002,John,Smith,john@example.com,\"Smith, Sons & Co\",5 Main Street,Springfield,62701,United States of America
1003,,,,,,,,
";

#[test]
fn reads_rows_by_header_name() {
    let file = create_temp_csv(EXPORT);
    let orders = read_orders(file.path()).unwrap();

    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].first_name, "Jane");
    assert_eq!(orders[0].company, "");
    assert_eq!(orders[0].street, "Hauptstrasse 5");
    assert_eq!(orders[0].postal_code, "10115");
    assert_eq!(orders[0].city, "Berlin");
    assert_eq!(orders[1].company, "Smith, Sons & Co");
    assert_eq!(orders[1].country, "United States of America");
    assert_eq!(orders[2].first_name, "");
}

#[test]
fn utf8_bom_is_ignored() {
    let file = create_temp_csv(&format!("\u{feff}{EXPORT}"));
    let orders = read_orders(file.path()).unwrap();
    assert_eq!(orders[0].first_name, "Jane");
}

#[test]
fn missing_column_aborts_load() {
    let content = "First Name,Last Name,Company,Street,City,Country\nJane,Doe,,Main 1,Berlin,Germany\n";
    let file = create_temp_csv(content);
    let err = read_orders(file.path()).unwrap_err();

    match err {
        IngestError::MissingColumn { column, path } => {
            assert_eq!(column, "Postal/Zip Code");
            assert_eq!(path, file.path());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_row_aborts_load() {
    let content = "\
First Name,Last Name,Company,Street,Postal/Zip Code,City,Country
Jane,Doe,,Hauptstrasse 5,10115,Berlin,Germany
John,Smith,,Main 1
";
    let err = read_orders_from_reader(content.as_bytes(), Path::new("orders.csv")).unwrap_err();

    assert!(matches!(
        err,
        IngestError::MissingField { ref column, line: 3, .. } if column == "Postal/Zip Code"
    ));
    assert_eq!(
        err.to_string(),
        "row 3 of orders.csv has no value for column 'Postal/Zip Code'"
    );
}

#[test]
fn rows_with_extra_or_missing_optional_fields_are_read() {
    let content = "\
First Name,Last Name,Company,Street,Postal/Zip Code,City,Country,Notes
Jane,Doe,,Hauptstrasse 5,10115,Berlin,Germany,leave at door,extra
John,Smith,,5 Main Street,62701,Springfield,United States of America
";
    let orders = read_orders_from_reader(content.as_bytes(), Path::new("orders.csv")).unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].country, "Germany");
    assert_eq!(orders[1].street, "5 Main Street");
    assert_eq!(orders[1].country, "United States of America");
}

#[test]
fn header_only_yields_no_rows() {
    let content = "First Name,Last Name,Company,Street,Postal/Zip Code,City,Country\n";
    let orders = read_orders_from_reader(content.as_bytes(), Path::new("orders.csv")).unwrap();
    assert!(orders.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let err = read_orders(Path::new("/no/such/orders.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
