//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Product Card Generator with QR Codes"</h1>
            <p class="subtitle">
                "Upload an Excel file with product details to generate branded product cards"
            </p>
        </header>
    }
}
