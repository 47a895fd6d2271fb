//! 印刷ウィンドウ生成（WASM版）
//!
//! 共通ライブラリのカードHTMLをBlob化し、オブジェクトURLで新しい
//! ウィンドウに開く。QRコードはそのドキュメント内のスクリプトが描画する。

use product_cards_common::export::cards_html::render_print_document;
use product_cards_common::{DateContext, LabelItem};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// カードの印刷ウィンドウを開く
pub fn open_print_window(items: &[LabelItem], ctx: &DateContext) -> Result<(), String> {
    let html = render_print_document(items, ctx);

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&html));

    let options = BlobPropertyBag::new();
    options.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob creation failed: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Object URL creation failed: {:?}", e))?;

    let window = web_sys::window().ok_or("No window available")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?;

    Ok(())
}
