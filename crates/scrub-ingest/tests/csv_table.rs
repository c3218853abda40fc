use std::fs;
use std::path::PathBuf;

use scrub_ingest::{CsvOptions, first_column_values, read_table, write_table};
use scrub_model::Table;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("scrub_ingest_table_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

#[test]
fn reads_semicolon_table_as_text() {
    let path = temp_file("base.csv", "NOME;FONE1_NR\nAna;11988887777\nBia;\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(table.headers, vec!["NOME", "FONE1_NR"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["Ana", "11988887777"]);
    // Empty cell is the empty string, not a missing marker.
    assert_eq!(table.rows[1], vec!["Bia", ""]);
    cleanup(&path);
}

#[test]
fn cells_are_not_trimmed_or_inferred() {
    let path = temp_file("raw.csv", "A;B\n 007 ;0123\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(table.rows[0], vec![" 007 ", "0123"]);
    cleanup(&path);
}

#[test]
fn short_records_pad_and_long_records_cut() {
    let path = temp_file("ragged.csv", "A;B;C\n1\n1;2;3;4\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(table.rows[0], vec!["1", "", ""]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    cleanup(&path);
}

#[test]
fn strips_bom_from_first_header() {
    let path = temp_file("bom.csv", "\u{feff}FONE1_NR;NOME\n988887777;Ana\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(table.headers[0], "FONE1_NR");
    cleanup(&path);
}

#[test]
fn empty_file_yields_empty_table() {
    let path = temp_file("empty.csv", "");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert!(table.headers.is_empty());
    assert!(table.is_empty());
    cleanup(&path);
}

#[test]
fn header_only_file_yields_zero_rows() {
    let path = temp_file("header.csv", "FONE1_NR;NOME\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(table.headers, vec!["FONE1_NR", "NOME"]);
    assert!(table.is_empty());
    cleanup(&path);
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("scrub_ingest_does_not_exist.csv");
    let error = read_table(&path, CsvOptions::default()).unwrap_err();
    assert!(format!("{error:#}").contains("scrub_ingest_does_not_exist.csv"));
}

#[test]
fn write_then_read_preserves_cells() {
    let mut table = Table::new(vec!["NOME".to_string(), "FONE1_NR".to_string()]);
    table.push_row(vec!["Ana".to_string(), "11988887777".to_string()]);
    table.push_row(vec!["Bia".to_string(), String::new()]);

    let path = temp_file("out.csv", "");
    write_table(&table, &path, CsvOptions::default()).expect("write csv");
    let contents = fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with("NOME;FONE1_NR\n"));

    let round = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(round, table);
    cleanup(&path);
}

#[test]
fn custom_delimiter_round_trip() {
    let options = CsvOptions { delimiter: b',' };
    let path = temp_file("comma.csv", "A,B\n1,2\n");
    let table = read_table(&path, options).expect("read csv");
    assert_eq!(table.rows[0], vec!["1", "2"]);
    cleanup(&path);
}

#[test]
fn first_column_is_positional() {
    let path = temp_file("mirror.csv", "QUALQUER_NOME;OUTRA\n988887777;x\n11933334444;y\n");
    let table = read_table(&path, CsvOptions::default()).expect("read csv");
    assert_eq!(
        first_column_values(&table),
        vec!["988887777".to_string(), "11933334444".to_string()]
    );
    cleanup(&path);
}

#[test]
fn first_column_of_empty_table_is_empty() {
    let table = Table::new(Vec::new());
    assert!(first_column_values(&table).is_empty());
}
