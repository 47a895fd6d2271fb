//! アップロードエリアコンポーネント
//!
//! ファイル選択 → FileReaderでバイト列化 → 取り込み → セッションへロード。
//! 拡張子チェックと読み込み失敗の報告はここ（境界側）の責務で、
//! コアには行データしか渡さない。

use leptos::prelude::*;
use product_cards_common::{ingest, LabelSession};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlInputElement};

use crate::app::{apply_op, today_ctx};

#[component]
pub fn UploadArea(
    session: RwSignal<LabelSession>,
    headers: RwSignal<Vec<String>>,
    error: RwSignal<String>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !is_excel_file(&file.name()) {
            error.set("Please upload a valid Excel file (.xlsx or .xls)".to_string());
            return;
        }

        loading.set(true);
        error.set(String::new());

        read_file(file, move |bytes| {
            loading.set(false);
            match ingest::read_workbook_bytes(&bytes) {
                Ok(table) => {
                    headers.set(table.headers.clone());
                    apply_op(session, error, move |s, ctx| s.load_rows(table.rows, ctx));
                    // 行単位の警告はコンソールへ（元実装のconsole.warn相当）
                    session.with(|s| {
                        for warning in s.warnings() {
                            gloo::console::warn!(warning.to_string());
                        }
                    });
                }
                Err(e) => error.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="upload-panel">
            <label class="upload-label">"Upload Excel File"</label>
            <input
                type="file"
                accept=".xlsx,.xls"
                class="upload-input"
                prop:disabled=move || loading.get()
                on:change=on_change
            />

            <div class="format-help">
                <p><strong>"Expected Excel format:"</strong></p>
                <ul>
                    <li><strong>"itemCode"</strong>" (or code, Item Code) - Product code"</li>
                    <li><strong>"itemName"</strong>" (or name, Item Name) - Product name"</li>
                    <li><strong>"count"</strong>" (or quantity, Count) - Number of cards to generate"</li>
                    <li><strong>"netWeight"</strong>" (or weight, Net Weight) - Product weight (e.g., 500g)"</li>
                    <li><strong>"symbol"</strong>" (or Symbol) - Symbol to display (e.g., T, V, N)"</li>
                    <li><strong>"Day columns"</strong>" - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday"</li>
                </ul>
                <p class="current-day">
                    <strong>"Current day: "</strong>
                    {move || today_ctx().weekday_name()}
                    " (will fetch from the matching day column)"
                </p>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Processing Excel file..."</div>
            </Show>
        </div>
    }
}

fn is_excel_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".xlsx") || lower.ends_with(".xls")
}

/// FileReaderでバイト列として読み込む
fn read_file<F>(file: File, mut on_loaded: F)
where
    F: FnMut(Vec<u8>) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_for_closure = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Ok(buffer) = reader_for_closure.result() {
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            on_loaded(bytes);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    let _ = reader.read_as_array_buffer(&file);
}
