//! Compile the embedded 8x8 font and print the packed records.

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use log::info;
use qmc_font::compile::{compile, CompileOptions, CompiledFont};
use qmc_font::table::{word_to_glyph, GlyphTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimize the font8x8 glyph table into sum-of-products rules")]
struct Cli {
    /// Reserved input bits, always don't-care (e.g. 0x80)
    #[arg(long, value_name = "MASK", default_value = "0x80", value_parser = parse_mask)]
    reserved_mask: u8,

    /// Minimize the output bits in parallel
    #[arg(long)]
    parallel: bool,

    /// Draw the glyph of this character decoded from the records (repeatable)
    #[arg(short, long, value_name = "CHAR")]
    glyph: Vec<char>,

    /// Log level
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn parse_mask(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid mask '{}': {}", s, e))
}

fn draw(font: &CompiledFont, c: char) -> Result<()> {
    if !c.is_ascii() {
        return Err(eyre!("Character {:?} is not in the 7-bit table", c));
    }
    let word = font.glyph(c as usize)?;
    println!("{:?} = {:#018x}", c, word);
    for row in word_to_glyph(word) {
        // The leftmost pixel is the least-significant bit.
        let line: String = (0..8)
            .map(|x| if (row >> x) & 1 == 1 { '#' } else { '.' })
            .collect();
        println!("{}", line);
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let options = CompileOptions {
        reserved_mask: cli.reserved_mask,
        parallel: cli.parallel,
    };
    let table = GlyphTable::font8x8_basic();
    let font = compile(&table, &options)?;
    info!(
        "{} records over {} bits, longest list has {} records",
        font.record_count(),
        font.bits().len(),
        font.max_records()
    );

    if !cli.glyph.is_empty() {
        for &c in &cli.glyph {
            draw(&font, c)?;
        }
        return Ok(());
    }

    for cover in font.bits() {
        let records: Vec<String> = cover.records.iter().map(|r| r.to_string()).collect();
        println!("{:02}: {}", cover.bit, records.join(","));
    }

    Ok(())
}
