//! データテーブルコンポーネント
//!
//! 行マーク・編集モード・行追加/削除の編集サーフェス。
//! セル入力は編集モード中のみ有効（Viewingでは無効化する）。
//! マークは編集スコープ外なので、どちらのモードでも即座に効く。

use leptos::prelude::*;
use product_cards_common::{CellValue, LabelSession, WEEKDAY_NAMES};

use crate::app::apply_op;

/// ヘッダ未取得時（手入力で1行目から作る場合）の既定列
fn default_columns() -> Vec<String> {
    let mut columns: Vec<String> = ["itemCode", "itemName", "count", "netWeight", "symbol"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    columns.extend(
        WEEKDAY_NAMES
            .iter()
            .cycle()
            .skip(1)
            .take(7)
            .map(|s| s.to_string()),
    );
    columns
}

#[component]
pub fn DataTable(
    session: RwSignal<LabelSession>,
    headers: RwSignal<Vec<String>>,
    error: RwSignal<String>,
) -> impl IntoView {
    let editing = move || session.with(|s| s.is_editing());
    let row_count = move || session.with(|s| s.rows().len());

    let columns = move || {
        let list = headers.get();
        if list.is_empty() {
            default_columns()
        } else {
            list
        }
    };

    let cell_text = move |row: usize, column: &str| {
        session.with(|s| {
            s.rows()
                .get(row)
                .and_then(|r| r.get(column))
                .map(CellValue::as_text)
                .unwrap_or_default()
        })
    };

    let table_body = move || {
        let cols = columns();
        (0..row_count())
            .map(|i| {
                let cols = cols.clone();
                view! {
                    <tr>
                        <td class="mark-cell">
                            <input
                                type="checkbox"
                                prop:checked=move || session.with(|s| s.is_marked(i))
                                on:change=move |_| {
                                    apply_op(session, error, move |s, ctx| s.toggle_mark(i, ctx))
                                }
                            />
                        </td>
                        {cols
                            .iter()
                            .map(|column| {
                                let column = column.clone();
                                let column_for_edit = column.clone();
                                view! {
                                    <td>
                                        <input
                                            type="text"
                                            prop:value=move || cell_text(i, &column)
                                            prop:disabled=move || !editing()
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                let column = column_for_edit.clone();
                                                apply_op(session, error, move |s, ctx| {
                                                    s.update_cell(i, &column, &value, ctx)
                                                })
                                            }
                                        />
                                    </td>
                                }
                            })
                            .collect_view()}
                        <td class="row-actions">
                            <button
                                class="btn btn-small btn-danger"
                                on:click=move |_| {
                                    apply_op(session, error, move |s, ctx| s.delete_row(i, ctx))
                                }
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="table-panel">
            <div class="table-toolbar">
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| session.update(|s| s.start_edit())
                            >
                                "Edit"
                            </button>
                        }
                    }
                >
                    <button
                        class="btn btn-primary"
                        on:click=move |_| apply_op(session, error, |s, ctx| s.save_changes(ctx))
                    >
                        "Save"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| {
                            session.update(|s| s.cancel_edit());
                            error.set(String::new());
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| apply_op(session, error, |s, ctx| s.add_row(ctx))
                >
                    "Add Row"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| apply_op(session, error, |s, ctx| s.mark_all(ctx))
                >
                    "Mark All"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| apply_op(session, error, |s, ctx| s.unmark_all(ctx))
                >
                    "Unmark All"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th class="mark-cell">"✓"</th>
                        {move || {
                            columns()
                                .iter()
                                .map(|c| view! { <th>{c.clone()}</th> })
                                .collect_view()
                        }}
                        <th></th>
                    </tr>
                </thead>
                <tbody>{table_body}</tbody>
            </table>

            <Show when=move || session.with(|s| !s.warnings().is_empty())>
                <ul class="warnings">
                    {move || {
                        session.with(|s| {
                            s.warnings()
                                .iter()
                                .map(|w| view! { <li>{w.to_string()}</li> })
                                .collect_view()
                        })
                    }}
                </ul>
            </Show>
        </div>
    }
}
