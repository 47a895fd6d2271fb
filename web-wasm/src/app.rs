//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use product_cards_common::{DateContext, LabelSession};

use crate::components::{
    card_grid::CardGrid, data_table::DataTable, header::Header, upload_area::UploadArea,
};
use crate::export::print::open_print_window;

/// ブラウザのローカル日付から日付コンテキストを作る
///
/// キャッシュせず、ユーザー操作（=生成パス）ごとに呼び直す。
pub fn today_ctx() -> DateContext {
    let now = js_sys::Date::new_0();
    DateContext::from_ymd(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("valid browser date")
}

/// セッション操作を1つ適用し、結果をエラーバナーへ反映する
///
/// 日付コンテキストはここで1回だけ計算して渡す。
pub fn apply_op(
    session: RwSignal<LabelSession>,
    error: RwSignal<String>,
    op: impl FnOnce(&mut LabelSession, &DateContext) -> product_cards_common::Result<()>,
) {
    let ctx = today_ctx();
    let mut result = Ok(());
    session.update(|s| result = op(s, &ctx));
    match result {
        Ok(()) => error.set(String::new()),
        Err(e) => error.set(e.to_string()),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(LabelSession::new());
    let headers = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let item_count = move || session.with(|s| s.items().len());
    let has_rows = move || session.with(|s| !s.rows().is_empty());

    // 印刷ウィンドウを開くハンドラ
    let on_print = move |_| {
        let ctx = today_ctx();
        let result = session.with(|s| open_print_window(s.items(), &ctx));
        if let Err(e) = result {
            error.set(e);
        }
    };

    // 全消去ハンドラ
    let on_clear = move |_| {
        session.update(|s| s.clear());
        headers.set(Vec::new());
        error.set(String::new());
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea session=session headers=headers error=error loading=loading />

            <Show when=move || !error.get().is_empty()>
                <div class="error-banner">{move || error.get()}</div>
            </Show>

            <Show when=has_rows>
                <DataTable session=session headers=headers error=error />
            </Show>

            <Show when=move || { item_count() > 0 }>
                <div class="results">
                    <div class="results-header">
                        <h2>{move || format!("Generated Product Cards ({} items)", item_count())}</h2>
                        <div class="actions">
                            <button class="btn btn-primary" on:click=on_print>
                                "Print/Download Cards"
                            </button>
                            <button class="btn btn-secondary" on:click=on_clear>
                                "Clear All"
                            </button>
                        </div>
                    </div>
                    <CardGrid session=session />
                </div>
            </Show>
        </div>
    }
}
