//! ラベル生成の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CellValue / RawRow: 取り込んだ表の生データ（スキーマなし）
//! - LabelItem: ラベル1枚に対応する正規化済みレコード
//! - RowWarning: 行単位のスキップ警告

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 表の1セルの生値
///
/// 列名は任意なので値も型を固定しない。欠損セルはキー自体を持たないのが
/// 基本だが、取り込み元によっては`Empty`が混ざることも許容する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// 表示・連結用の文字列へ変換
    ///
    /// 整数値のセル（Excelでは数値は全てfloat）は"101.0"ではなく"101"にする。
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// 必須チェックとデフォルト代入で使う「偽値」判定
    ///
    /// 空文字・空白のみ・数値0・false・欠損を偽とする。
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => *n == 0.0,
            CellValue::Bool(b) => !b,
            CellValue::Empty => true,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// 取り込んだ1行。列名→生値のマッピングで、固定スキーマを持たない。
pub type RawRow = HashMap<String, CellValue>;

/// ラベル1枚分の正規化済みレコード
///
/// 1行はcount枚のLabelItemに展開される。同じ行から生まれた全枚は
/// serial_number以外のフィールドを共有する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelItem {
    /// `"<itemCode>-<serialNumber>"`。itemCodeが行間で重複すると
    /// idも衝突するが、これは元仕様どおりの許容事項。
    pub id: String,
    pub item_code: String,
    pub item_name: String,
    pub net_weight: String,
    pub symbol: String,
    pub day_value: String,
    /// `"a_<itemCode>_<YYYYMMDD>"`。同じ生成パス内の同一行では全枚同一。
    pub qr_payload: String,
    /// 行内での1始まりの通し番号
    pub serial_number: u32,
    /// 行の解決済みcount
    pub total_count: u32,
}

/// 行スキップの理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// itemCode / itemName / count のいずれかが偽値
    MissingFields,
    /// countが整数化できない、または0以下
    InvalidCount,
}

/// 行単位の警告。処理は中断せず、該当行だけをスキップして報告する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWarning {
    /// 表示上の行位置（1始まり）
    pub row: usize,
    pub reason: SkipReason,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::MissingFields => write!(
                f,
                "Row {}: Missing required fields (itemCode, itemName, count)",
                self.row
            ),
            SkipReason::InvalidCount => write!(f, "Row {}: Invalid count value", self.row),
        }
    }
}
