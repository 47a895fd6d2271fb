//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 行単位の問題はエラーではなく`RowWarning`として報告する。
/// ここにあるのはパイプライン全体を止めるテーブルレベルのエラーのみ。
#[derive(Error, Debug)]
pub enum Error {
    /// 取り込んだテーブルに行が1つもない
    #[error("The Excel file appears to be empty")]
    EmptyTable,

    /// 検証・マーク適用後にラベルが1枚も残らなかった
    #[error("No valid items found. Please check your Excel format. Expected columns: itemCode, itemName, count, netWeight, symbol, and day columns (Monday, Tuesday, etc.)")]
    NoItems,

    /// ワークブックの読み取り失敗
    #[error("Workbook error: {0}")]
    Sheet(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
