//! 行の検証とラベル展開
//!
//! 解決済みの行を検証し、count枚のLabelItemへ複製する。
//!
//! ## 処理フロー
//! 1. マークされた行だけを行順に処理
//! 2. 必須フィールド（itemCode / itemName / count）の偽値チェック
//! 3. countの整数化（失敗・0以下はスキップ）
//! 4. 1..=count のserial_numberで複製
//!
//! 行のスキップは警告として残し、残りの行の処理は続行する。

use std::collections::BTreeSet;

use crate::columns::resolve_row;
use crate::daydate::DateContext;
use crate::error::{Error, Result};
use crate::types::{CellValue, LabelItem, RawRow, RowWarning, SkipReason};

/// 1生成パスの結果スナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub items: Vec<LabelItem>,
    pub warnings: Vec<RowWarning>,
}

impl Expansion {
    /// 空結果ならテーブルレベルのエラーを返す
    ///
    /// 行が無い・全行スキップ・全行マーク除外のいずれでも、黙って空を
    /// 返すのではなく呼び出し側へエラーとして知らせる。
    pub fn check(&self) -> Result<()> {
        if self.items.is_empty() {
            Err(Error::NoItems)
        } else {
            Ok(())
        }
    }
}

/// countセルの整数化
///
/// i64として読めればそのまま、"3.5"のような値は切り捨てる。
fn parse_count(value: &CellValue) -> Option<i64> {
    let text = value.as_text();
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => None,
    }
}

/// 偽値ならデフォルトへ置き換えて文字列化
fn text_or_default(value: &Option<CellValue>, default: &str) -> String {
    match value {
        Some(v) if !v.is_falsy() => v.as_text(),
        _ => default.to_string(),
    }
}

/// マークされた行をラベル列へ展開する
///
/// 同一の行・マーク・日付に対して再実行しても結果はバイト単位で一致する
/// （隠れたカウンタや乱数idは持たない）。範囲外のマークは無視する。
pub fn expand_rows(rows: &[RawRow], marks: &BTreeSet<usize>, ctx: &DateContext) -> Expansion {
    let compact = ctx.compact();
    let weekday = ctx.weekday_name();

    let mut expansion = Expansion::default();

    for (index, row) in rows.iter().enumerate() {
        if !marks.contains(&index) {
            continue;
        }

        let fields = resolve_row(row, weekday);

        let (Some(code), Some(name), Some(count_cell)) =
            (&fields.item_code, &fields.item_name, &fields.count)
        else {
            expansion.warnings.push(RowWarning {
                row: index + 1,
                reason: SkipReason::MissingFields,
            });
            continue;
        };

        if code.is_falsy() || name.is_falsy() || count_cell.is_falsy() {
            expansion.warnings.push(RowWarning {
                row: index + 1,
                reason: SkipReason::MissingFields,
            });
            continue;
        }

        let count = match parse_count(count_cell).and_then(|n| u32::try_from(n).ok()) {
            Some(n) if n > 0 => n,
            _ => {
                expansion.warnings.push(RowWarning {
                    row: index + 1,
                    reason: SkipReason::InvalidCount,
                });
                continue;
            }
        };

        let item_code = code.as_text();
        let item_name = name.as_text();
        let net_weight = text_or_default(&fields.net_weight, "500g");
        let symbol = text_or_default(&fields.symbol, "T");
        let day_value = if fields.day_value.is_falsy() {
            "2".to_string()
        } else {
            fields.day_value.as_text()
        };
        let qr_payload = format!("a_{}_{}", item_code, compact);

        for serial in 1..=count {
            expansion.items.push(LabelItem {
                id: format!("{}-{}", item_code, serial),
                item_code: item_code.clone(),
                item_name: item_name.clone(),
                net_weight: net_weight.clone(),
                symbol: symbol.clone(),
                day_value: day_value.clone(),
                qr_payload: qr_payload.clone(),
                serial_number: serial,
                total_count: count,
            });
        }
    }

    expansion
}

/// 全行をマーク扱いで展開する（CLIの一括生成用）
pub fn expand_all(rows: &[RawRow], ctx: &DateContext) -> Expansion {
    let marks: BTreeSet<usize> = (0..rows.len()).collect();
    expand_rows(rows, &marks, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DateContext {
        // 2026-08-07 は金曜日
        DateContext::from_ymd(2026, 8, 7).unwrap()
    }

    fn row(pairs: &[(&str, CellValue)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_expansion_cardinality() {
        let rows = vec![row(&[
            ("itemCode", "C1".into()),
            ("itemName", "Widget".into()),
            ("count", CellValue::Number(3.0)),
            ("netWeight", "250g".into()),
            ("symbol", "V".into()),
            ("Friday", "5".into()),
        ])];

        let expansion = expand_all(&rows, &ctx());
        assert!(expansion.warnings.is_empty());
        assert_eq!(expansion.items.len(), 3);

        for (i, item) in expansion.items.iter().enumerate() {
            assert_eq!(item.serial_number, i as u32 + 1);
            assert_eq!(item.id, format!("C1-{}", i + 1));
            assert_eq!(item.item_code, "C1");
            assert_eq!(item.item_name, "Widget");
            assert_eq!(item.net_weight, "250g");
            assert_eq!(item.symbol, "V");
            assert_eq!(item.day_value, "5");
            assert_eq!(item.qr_payload, "a_C1_20260807");
            assert_eq!(item.total_count, 3);
        }
    }

    #[test]
    fn test_default_substitution() {
        let rows = vec![row(&[
            ("itemCode", "C1".into()),
            ("itemName", "Widget".into()),
            ("count", CellValue::Number(2.0)),
        ])];

        let expansion = expand_all(&rows, &ctx());
        assert_eq!(expansion.items.len(), 2);
        for item in &expansion.items {
            assert_eq!(item.net_weight, "500g");
            assert_eq!(item.symbol, "T");
            assert_eq!(item.day_value, "2");
        }
    }

    #[test]
    fn test_rejection_without_abort() {
        let rows = vec![
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "A".into()),
                ("count", CellValue::Number(1.0)),
            ]),
            row(&[
                ("itemCode", "C2".into()),
                ("itemName", "B".into()),
                ("count", "abc".into()),
            ]),
            row(&[
                ("itemCode", "C3".into()),
                ("itemName", "C".into()),
                ("count", CellValue::Number(2.0)),
            ]),
        ];

        let expansion = expand_all(&rows, &ctx());
        let codes: Vec<&str> = expansion
            .items
            .iter()
            .map(|i| i.item_code.as_str())
            .collect();
        assert_eq!(codes, ["C1", "C3", "C3"]);

        assert_eq!(expansion.warnings.len(), 1);
        assert_eq!(expansion.warnings[0].row, 2);
        assert_eq!(expansion.warnings[0].reason, SkipReason::InvalidCount);
    }

    #[test]
    fn test_missing_required_field_warns() {
        let rows = vec![
            row(&[("itemName", "NoCode".into()), ("count", "1".into())]),
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "".into()),
                ("count", "1".into()),
            ]),
            row(&[
                ("itemCode", "C2".into()),
                ("itemName", "Ok".into()),
                ("count", "1".into()),
            ]),
        ];

        let expansion = expand_all(&rows, &ctx());
        assert_eq!(expansion.items.len(), 1);
        assert_eq!(expansion.warnings.len(), 2);
        assert!(expansion
            .warnings
            .iter()
            .all(|w| w.reason == SkipReason::MissingFields));
        assert_eq!(expansion.warnings[0].row, 1);
        assert_eq!(expansion.warnings[1].row, 2);
    }

    #[test]
    fn test_zero_and_negative_counts_rejected() {
        let rows = vec![
            // count=0 は偽値として必須フィールド欠落扱い
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "A".into()),
                ("count", CellValue::Number(0.0)),
            ]),
            // 負数は整数化は通るが0以下で弾かれる
            row(&[
                ("itemCode", "C2".into()),
                ("itemName", "B".into()),
                ("count", "-3".into()),
            ]),
        ];

        let expansion = expand_all(&rows, &ctx());
        assert!(expansion.items.is_empty());
        assert_eq!(expansion.warnings.len(), 2);
        assert_eq!(expansion.warnings[0].reason, SkipReason::MissingFields);
        assert_eq!(expansion.warnings[1].reason, SkipReason::InvalidCount);
        assert!(expansion.check().is_err());
    }

    #[test]
    fn test_qr_payload_determinism_across_days() {
        let rows = vec![
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "A".into()),
                ("count", "1".into()),
            ]),
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "B".into()),
                ("count", "1".into()),
            ]),
        ];

        // 同一パス内では同じitemCodeのqr_payloadは一致する
        let pass = expand_all(&rows, &ctx());
        assert_eq!(pass.items[0].qr_payload, pass.items[1].qr_payload);

        // 別の日には別のペイロードになる
        let other_day = DateContext::from_ymd(2026, 8, 8).unwrap();
        let other = expand_all(&rows, &other_day);
        assert_eq!(other.items[0].qr_payload, "a_C1_20260808");
        assert_ne!(pass.items[0].qr_payload, other.items[0].qr_payload);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let rows = vec![row(&[
            ("itemCode", "C1".into()),
            ("itemName", "A".into()),
            ("count", CellValue::Number(4.0)),
        ])];
        let marks: BTreeSet<usize> = [0].into_iter().collect();

        let first = expand_rows(&rows, &marks, &ctx());
        let second = expand_rows(&rows, &marks, &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn test_mark_filter_excludes_rows() {
        let rows = vec![
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "A".into()),
                ("count", "1".into()),
            ]),
            row(&[
                ("itemCode", "C2".into()),
                ("itemName", "B".into()),
                ("count", "1".into()),
            ]),
        ];

        let marks: BTreeSet<usize> = [1].into_iter().collect();
        let expansion = expand_rows(&rows, &marks, &ctx());
        assert_eq!(expansion.items.len(), 1);
        assert_eq!(expansion.items[0].item_code, "C2");

        // 範囲外のマークは無視される
        let stale: BTreeSet<usize> = [7].into_iter().collect();
        let expansion = expand_rows(&rows, &stale, &ctx());
        assert!(expansion.items.is_empty());
        assert!(expansion.check().is_err());
    }

    #[test]
    fn test_duplicate_item_code_ids_collide() {
        // 別の行が同じitemCodeを持つとidも衝突する（許容事項）
        let rows = vec![
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "A".into()),
                ("count", "1".into()),
            ]),
            row(&[
                ("itemCode", "C1".into()),
                ("itemName", "B".into()),
                ("count", "1".into()),
            ]),
        ];

        let expansion = expand_all(&rows, &ctx());
        assert_eq!(expansion.items[0].id, expansion.items[1].id);
    }

    #[test]
    fn test_numeric_code_cells_format_as_integers() {
        let rows = vec![row(&[
            ("itemCode", CellValue::Number(101.0)),
            ("itemName", "Numbered".into()),
            ("count", "2.5".into()),
        ])];

        let expansion = expand_all(&rows, &ctx());
        // "2.5"は切り捨てでcount=2
        assert_eq!(expansion.items.len(), 2);
        assert_eq!(expansion.items[0].item_code, "101");
        assert_eq!(expansion.items[0].qr_payload, "a_101_20260807");
    }

    #[test]
    fn test_empty_rows_produce_table_error() {
        let expansion = expand_all(&[], &ctx());
        assert!(expansion.items.is_empty());
        assert!(matches!(expansion.check(), Err(Error::NoItems)));
    }
}
