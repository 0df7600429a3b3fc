use std::fs;

use chemlog::sink::{CsvWorkbook, RowSink};

mod common;
use common::setup_test_workbook;

fn sample_row(id: &str) -> [String; 5] {
    [
        "2070".to_string(),
        "Cesar".to_string(),
        "Sat PM".to_string(),
        id.to_string(),
        "Sat, 20 Dec 25, 01:05 PM".to_string(),
    ]
}

#[test]
fn header_is_written_once_per_sheet() {
    let dir = setup_test_workbook("header_once");
    let mut wb = CsvWorkbook::open(&dir).unwrap();

    wb.append_row("Chem_2070", &sample_row("1234567")).unwrap();
    wb.append_row("Chem_2070", &sample_row("ab1234")).unwrap();

    let content = fs::read_to_string(wb.sheet_path("Chem_2070")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Course,TA,Section,ID,Time");
    assert!(lines[1].contains("1234567"));
    assert!(lines[2].contains("ab1234"));
}

#[test]
fn each_course_gets_its_own_sheet() {
    let dir = setup_test_workbook("per_course");
    let mut wb = CsvWorkbook::open(&dir).unwrap();

    wb.append_row("Chem_2070", &sample_row("1234567")).unwrap();
    wb.append_row("Chem_2510", &sample_row("7654321")).unwrap();

    assert!(wb.sheet_path("Chem_2070").exists());
    assert!(wb.sheet_path("Chem_2510").exists());

    let c2510 = fs::read_to_string(wb.sheet_path("Chem_2510")).unwrap();
    assert!(c2510.contains("7654321"));
    assert!(!c2510.contains("1234567"));
}

#[test]
fn timestamps_with_commas_are_quoted_not_split() {
    let dir = setup_test_workbook("quoting");
    let mut wb = CsvWorkbook::open(&dir).unwrap();

    wb.append_row("Chem_2080", &sample_row("1234567")).unwrap();

    let content = fs::read_to_string(wb.sheet_path("Chem_2080")).unwrap();
    // "Sat, 20 Dec 25, 01:05 PM" contains commas and must stay one field
    assert!(content.contains("\"Sat, 20 Dec 25, 01:05 PM\""));
}
