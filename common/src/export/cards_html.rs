//! 印刷用カードHTML生成（共通ライブラリ）
//!
//! CLIはファイルへ書き出し、WASMは印刷ウィンドウへ流し込む。
//! コアとの契約はLabelItemのフィールドだけで、カードの見た目と
//! 会社ブロックの定数はすべてこのモジュール（境界側）にある。
//! QRコードの描画はドキュメントに埋め込むqrcode-generatorスクリプトに
//! 委譲し、コアはペイロード文字列を渡すところまでを担う。

use crate::daydate::DateContext;
use crate::types::LabelItem;

/// 会社ブロック（全カード共通の定数）
pub const COMPANY_NAME: &str = "Villamart Pvt. Ltd";
pub const COMPANY_ADDRESS: &str = "Patrapada, Bhubaneswar-19";
pub const COMPANY_CONTACT: &str = "support@villamart.in, 8093123412";
pub const COMPANY_WEBSITE: &str = "www.villamart.in";
pub const FSSAI_LICENSE: &str = "12024033000159";

const QRCODE_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/qrcode-generator/1.4.4/qrcode.min.js";

/// HTMLテキストのエスケープ
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSのシングルクォート文字列リテラル用エスケープ
fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// QR描画スクリプトの変数名（idの英数字以外を落とす）
fn qr_var_name(id: &str) -> String {
    let sanitized: String = id.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("qr{}", sanitized)
}

/// カード1枚分のHTML
fn render_card(item: &LabelItem, ctx: &DateContext) -> String {
    format!(
        r#"<div class="card">
  <div class="card-body">
    <div class="item-name">{item_name}</div>
    <div class="info">Packed: {packed}</div>
    <div class="info">Net Weight: {net_weight}</div>
    <div class="company"><strong>Pkd By: {company}</strong></div>
    <div class="company-small">{address}</div>
    <div class="company-small">Contact: {contact}</div>
    <div class="company-small">Website: {website}</div>
    <div class="company-small">FSSAI Lic No.: {fssai}</div>
    <div class="side">
      <div class="symbol-box">{symbol}</div>
      <div class="day-box">{day_value}</div>
      <div class="qr" id="qr-{id}"></div>
    </div>
    <div class="code-line">{item_code} {date_slash}</div>
  </div>
</div>"#,
        item_name = escape_html(&item.item_name),
        packed = ctx.display(),
        net_weight = escape_html(&item.net_weight),
        company = COMPANY_NAME,
        address = COMPANY_ADDRESS,
        contact = COMPANY_CONTACT,
        website = COMPANY_WEBSITE,
        fssai = FSSAI_LICENSE,
        symbol = escape_html(&item.symbol),
        day_value = escape_html(&item.day_value),
        id = escape_html(&item.id),
        item_code = escape_html(&item.item_code),
        date_slash = ctx.display_slash(),
    )
}

/// 各カードのQRをdivへ描き込むスクリプト
fn render_qr_script(items: &[LabelItem]) -> String {
    let mut script = String::new();
    for item in items {
        let var = qr_var_name(&item.id);
        script.push_str(&format!(
            "var {var} = qrcode(0, 'M');\n{var}.addData('{payload}');\n{var}.make();\ndocument.getElementById('qr-{id}').innerHTML = {var}.createImgTag(2);\n",
            var = var,
            payload = escape_js(&item.qr_payload),
            id = escape_js(&item.id),
        ));
    }
    script
}

/// 印刷用ドキュメント全体を生成する
///
/// 同じitems・同じ日付に対しては常に同一の文字列を返す。
pub fn render_print_document(items: &[LabelItem], ctx: &DateContext) -> String {
    let cards: Vec<String> = items.iter().map(|item| render_card(item, ctx)).collect();

    format!(
        r#"<html>
  <head>
    <title>Product Cards</title>
    <script src="{qr_script}"></script>
    <style>
      body {{
        font-family: Arial, sans-serif;
        margin: 20px;
        background: #f5f5f5;
      }}
      .card {{
        display: inline-block;
        margin: 10px;
        border: 2px solid #8B4513;
        border-radius: 15px;
        width: 320px;
        height: 200px;
        background: linear-gradient(135deg, #F5E6D3 0%, #E8D5B8 100%);
        page-break-inside: avoid;
        position: relative;
      }}
      .card-body {{ padding: 15px; height: 170px; position: relative; }}
      .item-name {{ font-size: 18px; font-weight: bold; color: #654321; margin-bottom: 8px; }}
      .info {{ font-size: 14px; color: #8B4513; margin-bottom: 4px; }}
      .company {{ font-size: 12px; color: #8B4513; margin-bottom: 2px; }}
      .company-small {{ font-size: 11px; color: #8B4513; margin-bottom: 2px; }}
      .side {{ position: absolute; top: 15px; right: 15px; display: flex; flex-direction: column; align-items: center; }}
      .symbol-box {{
        width: 30px; height: 30px; border: 2px solid #654321;
        display: flex; align-items: center; justify-content: center;
        font-size: 18px; font-weight: bold; color: #654321;
        margin-bottom: 5px; background: rgba(255,255,255,0.7);
      }}
      .day-box {{
        width: 25px; height: 25px; border: 2px solid #654321;
        display: flex; align-items: center; justify-content: center;
        font-size: 14px; font-weight: bold; color: #654321;
        margin-bottom: 10px; background: rgba(255,255,255,0.7);
      }}
      .qr {{ background: white; padding: 2px; border-radius: 4px; }}
      .code-line {{ position: absolute; bottom: 5px; right: 15px; font-size: 9px; color: #654321; }}
      @media print {{
        body {{ margin: 0; background: white; }}
        .no-print {{ display: none; }}
      }}
    </style>
  </head>
  <body>
    <button class="no-print" onclick="window.print()" style="margin: 10px; padding: 10px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer;">Print Product Cards</button>
    <div>
{cards}
    </div>
    <script>
{qr_calls}
    </script>
  </body>
</html>
"#,
        qr_script = QRCODE_SCRIPT_URL,
        cards = cards.join("\n"),
        qr_calls = render_qr_script(items),
    )
}
