//! 編集セッションストア
//!
//! コミット済み行・編集中ドラフト・行マークの3つのビューを一元管理する
//! 唯一の所有者。状態を変える操作のたびに、直前に変更した配列に対して
//! 展開を再実行する（古いスナップショットに対しては決して走らせない）。
//!
//! ## 状態機械
//! - Viewing: committedが正。行の追加・削除はcommittedへ直接作用し即再展開。
//! - Editing: start_editでcommittedをdraftへスナップショット。セル編集と
//!   行の追加・削除はdraftのみに作用し、保存でViewingへ戻るまで再展開しない。
//!
//! マークは編集スコープ外で、どちらの状態でも「いま表示されている行」に
//! 対して作用し即再展開する。

use std::collections::BTreeSet;

use crate::columns::is_count_column;
use crate::daydate::{DateContext, WEEKDAY_NAMES};
use crate::error::{Error, Result};
use crate::expand::{expand_rows, Expansion};
use crate::types::{CellValue, LabelItem, RawRow, RowWarning};

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Viewing,
    Editing,
}

/// 編集セッション
///
/// 行配列とマーク集合はこの型だけが変更できる。範囲外インデックスの
/// 操作は全てno-op（例外にしない）。探索的な編集UIでは並行フィルタ由来の
/// 古いインデックスが届いてもセッションを壊してはならない。
#[derive(Debug, Clone, Default)]
pub struct LabelSession {
    committed_rows: Vec<RawRow>,
    draft_rows: Vec<RawRow>,
    mode: SessionMode,
    marks: BTreeSet<usize>,
    expansion: Expansion,
}

impl LabelSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// テーブルを取り込む
    ///
    /// 空入力は`EmptyTable`で失敗し、既存の状態には触れない
    /// （直前のスナップショットが生き残る）。成功時はViewingへ戻し、
    /// 全行をマークして再展開する。
    pub fn load_rows(&mut self, rows: Vec<RawRow>, ctx: &DateContext) -> Result<()> {
        if rows.is_empty() {
            return Err(Error::EmptyTable);
        }
        self.draft_rows = rows.clone();
        self.committed_rows = rows;
        self.mode = SessionMode::Viewing;
        self.marks = (0..self.committed_rows.len()).collect();
        self.regenerate(ctx)
    }

    /// Viewing → Editing。committedをdraftへスナップショット。
    pub fn start_edit(&mut self) {
        if self.mode == SessionMode::Viewing {
            self.draft_rows = self.committed_rows.clone();
            self.mode = SessionMode::Editing;
        }
    }

    /// Editing → Viewing。draftをcommittedへ昇格して再展開。
    pub fn save_changes(&mut self, ctx: &DateContext) -> Result<()> {
        if self.mode != SessionMode::Editing {
            return Ok(());
        }
        self.committed_rows = std::mem::take(&mut self.draft_rows);
        self.mode = SessionMode::Viewing;
        self.regenerate(ctx)
    }

    /// Editing → Viewing。draftを破棄。何も変わらないので再展開しない。
    pub fn cancel_edit(&mut self) {
        if self.mode == SessionMode::Editing {
            self.draft_rows.clear();
            self.mode = SessionMode::Viewing;
        }
    }

    /// セル値を更新する
    ///
    /// countカラムは「入力があるのに整数化できない・負数」の値を
    /// no-opで拒否する。空文字は入力途中として受け付ける（検証は展開時）。
    /// Editingではdraftのみ更新し再展開しない。Viewingではcommittedを
    /// 更新して即再展開する。
    pub fn update_cell(
        &mut self,
        index: usize,
        column: &str,
        value: &str,
        ctx: &DateContext,
    ) -> Result<()> {
        if is_count_column(column) && !value.is_empty() {
            match value.trim().parse::<i64>() {
                Ok(n) if n >= 0 => {}
                _ => return Ok(()),
            }
        }

        let editing = self.mode == SessionMode::Editing;
        let rows = if editing {
            &mut self.draft_rows
        } else {
            &mut self.committed_rows
        };
        let Some(row) = rows.get_mut(index) else {
            return Ok(());
        };
        row.insert(column.to_string(), CellValue::Text(value.to_string()));

        if editing {
            Ok(())
        } else {
            self.regenerate(ctx)
        }
    }

    /// 空の識別子と曜日デフォルト（Monday:"1"〜Sunday:"7"）で行を追加する
    pub fn add_row(&mut self, ctx: &DateContext) -> Result<()> {
        let row = template_row();
        match self.mode {
            SessionMode::Editing => {
                self.draft_rows.push(row);
                Ok(())
            }
            SessionMode::Viewing => {
                self.committed_rows.push(row);
                self.regenerate(ctx)
            }
        }
    }

    /// 行を削除する。範囲外はno-op。マーク集合は付け替えない。
    pub fn delete_row(&mut self, index: usize, ctx: &DateContext) -> Result<()> {
        match self.mode {
            SessionMode::Editing => {
                if index < self.draft_rows.len() {
                    self.draft_rows.remove(index);
                }
                Ok(())
            }
            SessionMode::Viewing => {
                if index >= self.committed_rows.len() {
                    return Ok(());
                }
                self.committed_rows.remove(index);
                self.regenerate(ctx)
            }
        }
    }

    /// 行のマークを反転する。どちらの状態でも即再展開。
    pub fn toggle_mark(&mut self, index: usize, ctx: &DateContext) -> Result<()> {
        if index >= self.rows().len() {
            return Ok(());
        }
        if !self.marks.remove(&index) {
            self.marks.insert(index);
        }
        self.regenerate(ctx)
    }

    /// 表示中の全行をマークする
    pub fn mark_all(&mut self, ctx: &DateContext) -> Result<()> {
        self.marks = (0..self.rows().len()).collect();
        self.regenerate(ctx)
    }

    /// 全マークを外す。結果は必ず空になり`NoItems`が返る。
    pub fn unmark_all(&mut self, ctx: &DateContext) -> Result<()> {
        self.marks.clear();
        self.regenerate(ctx)
    }

    /// 初期状態へ戻す
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// いま表示されている行（Editingならdraft、それ以外はcommitted）
    pub fn rows(&self) -> &[RawRow] {
        match self.mode {
            SessionMode::Editing => &self.draft_rows,
            SessionMode::Viewing => &self.committed_rows,
        }
    }

    /// 現在のラベル列スナップショット
    pub fn items(&self) -> &[LabelItem] {
        &self.expansion.items
    }

    /// 最後の生成パスの行警告
    pub fn warnings(&self) -> &[RowWarning] {
        &self.expansion.warnings
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SessionMode::Editing
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marks.contains(&index)
    }

    pub fn marks(&self) -> &BTreeSet<usize> {
        &self.marks
    }

    /// 直前の変更を反映した行配列に対して展開を再実行する
    fn regenerate(&mut self, ctx: &DateContext) -> Result<()> {
        let expansion = match self.mode {
            SessionMode::Editing => expand_rows(&self.draft_rows, &self.marks, ctx),
            SessionMode::Viewing => expand_rows(&self.committed_rows, &self.marks, ctx),
        };
        self.expansion = expansion;
        self.expansion.check()
    }
}

/// add_rowのひな型行
fn template_row() -> RawRow {
    let mut row = RawRow::new();
    for key in ["itemCode", "itemName", "count", "netWeight", "symbol"] {
        row.insert(key.to_string(), CellValue::Text(String::new()));
    }
    // Monday:"1" 〜 Sunday:"7"
    for (offset, day) in WEEKDAY_NAMES
        .iter()
        .cycle()
        .skip(1)
        .take(7)
        .enumerate()
    {
        row.insert(day.to_string(), CellValue::Text((offset + 1).to_string()));
    }
    row
}
