//! 列名解決モジュール
//!
//! 取り込んだ行の表記ゆれのある列名を正準フィールドへ解決する。
//! フィールドごとに固定順の同義語リストを持ち、最初に「存在する」
//! キーの値を採用する。ここでは存在チェックのみを行い、
//! 検証とデフォルト代入は展開側（expand）が行う。

use crate::types::{CellValue, RawRow};

/// itemCodeの同義語（優先順）
pub const ITEM_CODE_KEYS: &[&str] = &[
    "itemCode",
    "item_code",
    "Item Code",
    "code",
    "Code",
    "ITEM_CODE",
];

/// itemNameの同義語（優先順）
pub const ITEM_NAME_KEYS: &[&str] = &[
    "itemName",
    "item_name",
    "Item Name",
    "name",
    "Name",
    "ITEM_NAME",
];

/// countの同義語（優先順）
pub const COUNT_KEYS: &[&str] = &[
    "count",
    "Count",
    "quantity",
    "Quantity",
    "COUNT",
    "no_of_items",
];

/// netWeightの同義語（優先順）
pub const NET_WEIGHT_KEYS: &[&str] = &[
    "netWeight",
    "net_weight",
    "Net Weight",
    "weight",
    "Weight",
    "NET_WEIGHT",
];

/// symbolの同義語（優先順）
pub const SYMBOL_KEYS: &[&str] = &["symbol", "Symbol", "SYMBOL"];

/// 解決済みフィールド（検証前の生値）
#[derive(Debug, Clone, Default)]
pub struct ResolvedFields {
    pub item_code: Option<CellValue>,
    pub item_name: Option<CellValue>,
    pub count: Option<CellValue>,
    pub net_weight: Option<CellValue>,
    pub symbol: Option<CellValue>,
    /// アクティブな曜日カラムの値。見つからなければ`Empty`。
    pub day_value: CellValue,
}

/// 同義語リストの中で最初に存在するキーの値を返す
///
/// 「存在する」はキーがあり値が`Empty`でないこと。空文字や0は
/// 存在扱いで、後段の検証に委ねる（真偽値ではなく存在で判定する）。
fn first_present(row: &RawRow, keys: &[&str]) -> Option<CellValue> {
    keys.iter().find_map(|key| match row.get(*key) {
        Some(CellValue::Empty) | None => None,
        Some(value) => Some(value.clone()),
    })
}

/// 1行を解決する。行と曜日名の純関数で、副作用はない。
///
/// 曜日カラムは「そのままの曜日名 → 小文字 → 大文字」の順で探す。
pub fn resolve_row(row: &RawRow, weekday: &str) -> ResolvedFields {
    let day_keys = [
        weekday.to_string(),
        weekday.to_lowercase(),
        weekday.to_uppercase(),
    ];
    let day_value = day_keys
        .iter()
        .find_map(|key| match row.get(key.as_str()) {
            Some(CellValue::Empty) | None => None,
            Some(value) => Some(value.clone()),
        })
        .unwrap_or(CellValue::Empty);

    ResolvedFields {
        item_code: first_present(row, ITEM_CODE_KEYS),
        item_name: first_present(row, ITEM_NAME_KEYS),
        count: first_present(row, COUNT_KEYS),
        net_weight: first_present(row, NET_WEIGHT_KEYS),
        symbol: first_present(row, SYMBOL_KEYS),
        day_value,
    }
}

/// 列名がcountフィールドとして扱われるか
///
/// セル編集時の入力検証（editセッション）で使う。
pub fn is_count_column(column: &str) -> bool {
    COUNT_KEYS.contains(&column)
}
