//! 日付コンテキスト
//!
//! 「今日」の3表現（YYYYMMDD / DD-MM-YYYY / 曜日名）をまとめて持ち運ぶ値。
//! 生成パスごとに1回だけ作り、リゾルバと展開に明示的に渡す。
//! パスの途中で日付が変わっても同一パス内では値がぶれない。

use chrono::{Datelike, NaiveDate};

/// 曜日名（Sunday始まり）。日カラムの検索キーにも使うためローカライズしない。
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// 1生成パス分の日付コンテキスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateContext {
    date: NaiveDate,
}

impl DateContext {
    /// ローカルカレンダーの今日（非WASM環境のみ。ブラウザでは
    /// js_sys::Date経由で`from_ymd`を使う）
    ///
    /// キャッシュせず呼び出しごとに再計算する。日付境界をまたぐ
    /// 長時間実行では生成パスごとに呼び直すこと。
    #[cfg(not(target_arch = "wasm32"))]
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().date_naive(),
        }
    }

    /// 指定日のコンテキスト（テストとブラウザ環境用）
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self { date })
    }

    /// QRペイロード用の`YYYYMMDD`
    pub fn compact(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// 表示用の`DD-MM-YYYY`
    pub fn display(&self) -> String {
        self.date.format("%d-%m-%Y").to_string()
    }

    /// カード右下の`DD/MM/YYYY`表記
    pub fn display_slash(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// アクティブな曜日名（`Sunday`〜`Saturday`）
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.date.weekday().num_days_from_sunday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_zero_padded() {
        let ctx = DateContext::from_ymd(2026, 8, 7).unwrap();
        assert_eq!(ctx.compact(), "20260807");
    }

    #[test]
    fn test_display_zero_padded() {
        let ctx = DateContext::from_ymd(2026, 8, 7).unwrap();
        assert_eq!(ctx.display(), "07-08-2026");
        assert_eq!(ctx.display_slash(), "07/08/2026");
    }

    #[test]
    fn test_weekday_name() {
        // 2026-08-07 は金曜日
        let ctx = DateContext::from_ymd(2026, 8, 7).unwrap();
        assert_eq!(ctx.weekday_name(), "Friday");

        let ctx = DateContext::from_ymd(2026, 8, 9).unwrap();
        assert_eq!(ctx.weekday_name(), "Sunday");
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(DateContext::from_ymd(2026, 2, 30).is_none());
        assert!(DateContext::from_ymd(2026, 13, 1).is_none());
    }
}
