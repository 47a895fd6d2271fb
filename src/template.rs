//! テンプレートExcel生成
//!
//! 期待する列構成（同義語の先頭の正準名 + 7曜日カラム）でヘッダ行と
//! サンプル行を書き出す。取り込み側の列解決がそのまま読める形式。

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;

/// テンプレートのヘッダ（正準名 + 曜日カラム）
pub const TEMPLATE_HEADERS: [&str; 12] = [
    "itemCode",
    "itemName",
    "count",
    "netWeight",
    "symbol",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// サンプル行（itemCode, itemName, count, netWeight, symbol, 日値）
const SAMPLE_ROWS: [(&str, &str, f64, &str, &str); 3] = [
    ("A-101", "Mango Pickle", 4.0, "500g", "V"),
    ("A-102", "Turmeric Powder", 2.0, "250g", "T"),
    ("B-201", "Ghee", 1.0, "1kg", "T"),
];

/// テンプレートワークブックを書き出す
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row, (code, name, count, weight, symbol)) in SAMPLE_ROWS.iter().enumerate() {
        let row = row as u32 + 1;
        worksheet.write_string(row, 0, *code)?;
        worksheet.write_string(row, 1, *name)?;
        worksheet.write_number(row, 2, *count)?;
        worksheet.write_string(row, 3, *weight)?;
        worksheet.write_string(row, 4, *symbol)?;
        // Monday〜Sundayの日値
        for day in 0..7u16 {
            worksheet.write_number(row, 5 + day, (day + 1) as f64)?;
        }
    }

    worksheet.set_column_width(1, 18)?;

    workbook.save(path)?;
    Ok(())
}
