//! スプレッドシート取り込み
//!
//! calamineで.xlsx/.xlsを読み、ヘッダ行をキーにしたRawRowの列へ変換する。
//! 複数シートは対象外で、常に先頭シートだけを読む。
//! 空セルはキーを作らず、全セル空の行は行ごとスキップする。

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::error::{Error, Result};
use crate::types::{CellValue, RawRow};

/// 取り込み結果
///
/// RawRowは順序を持たないので、表示用の列順はここで別に保持する。
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    /// ヘッダ行の列名（シート上の並び順）
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// ワークブックのバイト列から先頭シートを取り込む（ブラウザ経由の入力用）
pub fn read_workbook_bytes(bytes: &[u8]) -> Result<SheetTable> {
    let cursor = Cursor::new(bytes);
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| Error::Sheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Sheet("workbook has no sheets".to_string()))?
        .map_err(|e| Error::Sheet(e.to_string()))?;
    Ok(table_from_range(&range))
}

/// ファイルパスから先頭シートを取り込む（CLI用）
#[cfg(not(target_arch = "wasm32"))]
pub fn read_workbook(path: &std::path::Path) -> Result<SheetTable> {
    let mut workbook =
        calamine::open_workbook_auto(path).map_err(|e| Error::Sheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Sheet("workbook has no sheets".to_string()))?
        .map_err(|e| Error::Sheet(e.to_string()))?;
    Ok(table_from_range(&range))
}

/// セル範囲をヘッダ+行へ変換する（SheetJSのsheet_to_json相当）
fn table_from_range(range: &Range<Data>) -> SheetTable {
    let mut table = SheetTable::default();
    let mut row_iter = range.rows();

    let Some(header_cells) = row_iter.next() else {
        return table;
    };
    table.headers = header_cells
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    for cells in row_iter {
        let mut row = RawRow::new();
        for (header, cell) in table.headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            let value = cell_value(cell);
            if value != CellValue::Empty {
                row.insert(header.clone(), value);
            }
        }
        if !row.is_empty() {
            table.rows.push(row);
        }
    }

    table
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
