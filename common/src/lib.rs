//! Product Cards Common Library
//!
//! CLIとWeb(WASM)で共有される型とパイプライン:
//! 列名解決 → 検証・展開 → 編集セッションの再整合
//!
//! 表の取り込み（ingest）とカードHTML生成（export）は境界側の
//! コラボレータで、コア契約はLabelItem列と日付コンテキストのみ。

pub mod columns;
pub mod daydate;
pub mod error;
pub mod expand;
pub mod export;
pub mod ingest;
pub mod session;
pub mod types;

pub use columns::{resolve_row, ResolvedFields};
pub use daydate::{DateContext, WEEKDAY_NAMES};
pub use error::{Error, Result};
pub use expand::{expand_all, expand_rows, Expansion};
pub use ingest::{read_workbook_bytes, SheetTable};
pub use session::{LabelSession, SessionMode};
pub use types::{CellValue, LabelItem, RawRow, RowWarning, SkipReason};
