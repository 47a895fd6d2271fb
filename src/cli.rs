use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "product-cards")]
#[command(about = "Generate printable QR product cards from an Excel listing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ラベル1枚ごとの内訳を表示
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Excelを取り込んで印刷用カードHTMLを生成
    Generate {
        /// 入力Excelファイル (.xlsx / .xls)
        #[arg(required = true)]
        input: PathBuf,

        /// 出力HTMLファイル（デフォルト: 入力名.cards.html）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 生成日を固定する (YYYY-MM-DD、省略時は今日)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// 取り込み結果と行警告を表示する（ファイルは書かない）
    Inspect {
        /// 入力Excelファイル (.xlsx / .xls)
        #[arg(required = true)]
        input: PathBuf,

        /// LabelItem列をJSONで出力
        #[arg(long)]
        json: bool,

        /// 生成日を固定する (YYYY-MM-DD、省略時は今日)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// 期待する列構成のテンプレートExcelを書き出す
    Template {
        /// 出力Excelファイル
        #[arg(default_value = "product-cards-template.xlsx")]
        output: PathBuf,
    },
}
