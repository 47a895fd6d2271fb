use std::path::{Path, PathBuf};

use chrono::Datelike;
use clap::Parser;
use product_cards_common::{expand_all, export::cards_html, ingest, DateContext, Error as PipelineError};
use product_cards_rust::{cli, error, template};

use cli::{Cli, Commands};
use error::{ProductCardsError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            date,
        } => {
            println!("🏷  product-cards - card generation\n");

            let table = load_table(&input, false)?;
            let ctx = resolve_date(date.as_deref())?;

            // 2. 展開
            println!("[2/3] Expanding labels for {}...", ctx.weekday_name());
            let expansion = expand_all(&table.rows, &ctx);
            for warning in &expansion.warnings {
                println!("⚠ {}", warning);
            }
            expansion.check()?;
            println!(
                "✔ {} labels from {} rows\n",
                expansion.items.len(),
                table.rows.len()
            );

            if cli.verbose {
                for item in &expansion.items {
                    println!(
                        "  {} [{}/{}] {} ({})",
                        item.id, item.serial_number, item.total_count, item.item_name, item.qr_payload
                    );
                }
                println!();
            }

            // 3. カードHTML書き出し
            println!("[3/3] Writing cards...");
            let html = cards_html::render_print_document(&expansion.items, &ctx);
            let output = output.unwrap_or_else(|| default_output(&input));
            std::fs::write(&output, html)?;
            println!("✔ Cards written: {}", output.display());

            println!("\n✅ Done");
        }

        Commands::Inspect { input, json, date } => {
            if !json {
                println!("📋 product-cards - inspect\n");
            }
            let table = load_table(&input, json)?;
            let ctx = resolve_date(date.as_deref())?;
            let expansion = expand_all(&table.rows, &ctx);

            if json {
                println!("{}", serde_json::to_string_pretty(&expansion.items)?);
            } else {
                println!("Date: {} ({})", ctx.display(), ctx.weekday_name());
                println!("Columns: {}", table.headers.join(", "));
                println!("Rows: {}\n", table.rows.len());

                for warning in &expansion.warnings {
                    println!("⚠ {}", warning);
                }
                println!("\nLabels: {}", expansion.items.len());
                for item in &expansion.items {
                    println!(
                        "  {} [{}/{}] {} {} {} day={}",
                        item.id,
                        item.serial_number,
                        item.total_count,
                        item.item_name,
                        item.net_weight,
                        item.symbol,
                        item.day_value
                    );
                }
            }
            expansion.check()?;
        }

        Commands::Template { output } => {
            println!("📄 product-cards - template\n");
            template::write_template(&output)?;
            println!("✔ Template written: {}", output.display());
        }
    }

    Ok(())
}

/// 拡張子チェックと取り込み（[1/3]相当）
///
/// quietはJSON出力モード用（stdoutへ進捗を混ぜない）。
fn load_table(input: &Path, quiet: bool) -> Result<ingest::SheetTable> {
    check_extension(input)?;
    if !input.exists() {
        return Err(ProductCardsError::FileNotFound(
            input.display().to_string(),
        ));
    }

    if !quiet {
        println!("[1/3] Reading {}...", input.display());
    }
    let table = ingest::read_workbook(input)?;
    if table.rows.is_empty() {
        return Err(PipelineError::EmptyTable.into());
    }
    if !quiet {
        println!("✔ {} rows loaded\n", table.rows.len());
    }
    Ok(table)
}

fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("xlsx") | Some("xls") => Ok(()),
        _ => Err(ProductCardsError::InvalidExtension(
            path.display().to_string(),
        )),
    }
}

/// --dateで固定された日、省略時はローカルの今日
///
/// 生成パスごとにここで1回だけ計算し、以後は値として持ち回る。
fn resolve_date(date: Option<&str>) -> Result<DateContext> {
    match date {
        None => Ok(DateContext::today()),
        Some(s) => {
            let parsed = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ProductCardsError::InvalidDate(s.to_string()))?;
            DateContext::from_ymd(parsed.year(), parsed.month(), parsed.day())
                .ok_or_else(|| ProductCardsError::InvalidDate(s.to_string()))
        }
    }
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("product");
    input.with_file_name(format!("{stem}.cards.html"))
}
