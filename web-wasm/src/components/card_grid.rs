//! カードプレビューコンポーネント
//!
//! 生成済みLabelItemを画面プレビュー用のカードとして描画する。
//! スキャン可能なQRの描画は印刷ウィンドウ側に委譲し、
//! プレビューではペイロード文字列を表示する。

use leptos::prelude::*;
use product_cards_common::export::cards_html::{
    COMPANY_ADDRESS, COMPANY_CONTACT, COMPANY_NAME, COMPANY_WEBSITE, FSSAI_LICENSE,
};
use product_cards_common::LabelSession;

use crate::app::today_ctx;

#[component]
pub fn CardGrid(session: RwSignal<LabelSession>) -> impl IntoView {
    let cards = move || {
        let ctx = today_ctx();
        session.with(|s| {
            s.items()
                .iter()
                .map(|item| {
                    let item = item.clone();
                    view! {
                        <div class="preview-card">
                            <div class="item-name">{item.item_name.clone()}</div>
                            <div class="info">{format!("Packed: {}", ctx.display())}</div>
                            <div class="info">{format!("Net Weight: {}", item.net_weight)}</div>
                            <div class="company">
                                <strong>{format!("Pkd By: {}", COMPANY_NAME)}</strong>
                            </div>
                            <div class="company-small">{COMPANY_ADDRESS}</div>
                            <div class="company-small">{format!("Contact: {}", COMPANY_CONTACT)}</div>
                            <div class="company-small">{format!("Website: {}", COMPANY_WEBSITE)}</div>
                            <div class="company-small">
                                {format!("FSSAI Lic No.: {}", FSSAI_LICENSE)}
                            </div>
                            <div class="side">
                                <div class="symbol-box">{item.symbol.clone()}</div>
                                <div class="day-box">{item.day_value.clone()}</div>
                                <div class="qr-payload">{item.qr_payload.clone()}</div>
                            </div>
                            <div class="code-line">
                                {format!("{} {}", item.item_code, ctx.display_slash())}
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! { <div class="card-grid">{cards}</div> }
}
