#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Cell written into a fixture workbook.
pub enum Fixture<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write a single-sheet workbook with a header row followed by `rows`.
pub fn write_workbook(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<Fixture<'_>>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).expect("valid sheet name");

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .expect("write header");
    }
    for (row_idx, row) in rows.iter().enumerate() {
        let sheet_row = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Fixture::Text(s) => {
                    worksheet
                        .write_string(sheet_row, col as u16, *s)
                        .expect("write text");
                }
                Fixture::Number(n) => {
                    worksheet
                        .write_number(sheet_row, col as u16, *n)
                        .expect("write number");
                }
                Fixture::Blank => {}
            }
        }
    }

    workbook.save(path).expect("save workbook");
}
