//! テンプレート生成→取り込み→展開の統合テスト

use product_cards_common::{expand_all, ingest, CellValue, DateContext};
use product_cards_rust::template::{write_template, TEMPLATE_HEADERS};
use tempfile::tempdir;

fn friday() -> DateContext {
    // 2026-08-07 は金曜日
    DateContext::from_ymd(2026, 8, 7).expect("valid date")
}

#[test]
fn test_template_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("template.xlsx");

    write_template(&path).expect("template write failed");
    assert!(path.exists(), "template file missing");

    let table = ingest::read_workbook(&path).expect("read failed");
    assert_eq!(table.headers, TEMPLATE_HEADERS);
    assert_eq!(table.rows.len(), 3);

    // 数値セルはNumberとして取り込まれる
    assert_eq!(table.rows[0].get("count"), Some(&CellValue::Number(4.0)));
    assert_eq!(
        table.rows[0].get("itemName"),
        Some(&CellValue::Text("Mango Pickle".into()))
    );
}

#[test]
fn test_template_rows_expand_without_warnings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("template.xlsx");
    write_template(&path).expect("template write failed");

    let table = ingest::read_workbook(&path).expect("read failed");
    let expansion = expand_all(&table.rows, &friday());

    assert!(expansion.warnings.is_empty(), "{:?}", expansion.warnings);
    // counts 4 + 2 + 1
    assert_eq!(expansion.items.len(), 7);

    let first = &expansion.items[0];
    assert_eq!(first.item_code, "A-101");
    assert_eq!(first.qr_payload, "a_A-101_20260807");
    assert_eq!(first.net_weight, "500g");
    // 金曜日カラムの値
    assert_eq!(first.day_value, "5");
    assert_eq!(first.total_count, 4);
}

#[test]
fn test_header_only_workbook_yields_no_rows() {
    use rust_xlsxwriter::Workbook;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .write_string(0, 0, "itemCode")
        .expect("write header");
    worksheet
        .write_string(0, 1, "itemName")
        .expect("write header");
    workbook.save(&path).expect("save");

    let table = ingest::read_workbook(&path).expect("read failed");
    assert!(table.rows.is_empty());
}
