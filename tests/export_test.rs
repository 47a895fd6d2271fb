//! カードHTML出力の統合テスト

use product_cards_common::export::cards_html::render_print_document;
use product_cards_common::{expand_all, CellValue, DateContext, RawRow};
use tempfile::tempdir;

fn row(code: &str, name: &str, count: f64) -> RawRow {
    [
        ("itemCode".to_string(), CellValue::Text(code.into())),
        ("itemName".to_string(), CellValue::Text(name.into())),
        ("count".to_string(), CellValue::Number(count)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_cards_file_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("cards.html");

    let rows = vec![row("C1", "Apple Jam", 2.0), row("C2", "Lemon Pickle", 1.0)];
    let ctx = DateContext::from_ymd(2026, 8, 7).expect("valid date");
    let expansion = expand_all(&rows, &ctx);
    assert_eq!(expansion.items.len(), 3);

    let html = render_print_document(&expansion.items, &ctx);
    std::fs::write(&output_path, &html).expect("write failed");

    let written = std::fs::read_to_string(&output_path).expect("read back");
    assert!(!written.is_empty(), "cards file is empty");
    assert_eq!(written.matches("class=\"card\"").count(), 3);
    assert!(written.contains("a_C1_20260807"));
    assert!(written.contains("a_C2_20260807"));
    assert!(written.contains("Packed: 07-08-2026"));
}

#[test]
fn test_cards_html_is_stable_for_fixed_date() {
    let rows = vec![row("C1", "Apple Jam", 1.0)];
    let ctx = DateContext::from_ymd(2026, 8, 7).expect("valid date");

    let first = render_print_document(&expand_all(&rows, &ctx).items, &ctx);
    let second = render_print_document(&expand_all(&rows, &ctx).items, &ctx);
    assert_eq!(first, second);
}
