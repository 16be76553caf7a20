use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use m2s_hal::console::console_divisor;
use m2s_hal::rcc::{derive, RegisterSnapshot, DEFAULT_SYSREF};
use m2s_hal::time::Hertz;

// The hal links against critical-section; this pulls in the std implementation.
use critical_section as _;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode SmartFusion2 MSS clock register dumps", long_about = None)]
struct Args {
    /// Hjson file with the register dump
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// SYSREF frequency in Hz
    #[arg(short, long, value_parser = parse_u32)]
    sysref: Option<u32>,

    /// MSSDDR_FACC1_CR value
    #[arg(long, value_parser = parse_u32)]
    facc1: Option<u32>,

    /// MSSDDR_PLL_STATUS_LOW_CR value
    #[arg(long, value_parser = parse_u32)]
    pll_low: Option<u32>,

    /// MSSDDR_PLL_STATUS_HIGH_CR value
    #[arg(long, value_parser = parse_u32)]
    pll_high: Option<u32>,

    /// Also print the console divisor latch for this baud rate
    #[arg(short, long)]
    baud: Option<u32>,
}

/// A register value, either a plain number or a `"0x..."` string.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum RegValue {
    Num(u64),
    Str(String),
}

impl RegValue {
    fn to_u32(&self) -> Result<u32> {
        match self {
            RegValue::Num(n) => u32::try_from(*n).map_err(|_| anyhow!("{n} does not fit 32 bits")),
            RegValue::Str(s) => parse_u32(s).map_err(|e| anyhow!(e)),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct Dump {
    sysref: Option<RegValue>,
    facc1_cr: Option<RegValue>,
    pll_status_low_cr: Option<RegValue>,
    pll_status_high_cr: Option<RegValue>,
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let s = s.trim().replace('_', "");
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|e| format!("invalid value '{s}': {e}"))
}

fn load_dump(path: &PathBuf) -> Result<Dump> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_hjson::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Command line values override the ones from the dump file.
fn pick(cli: Option<u32>, file: &Option<RegValue>, name: &str) -> Result<Option<u32>> {
    match (cli, file) {
        (Some(v), _) => Ok(Some(v)),
        (None, Some(v)) => v.to_u32().with_context(|| format!("bad value for {name}")).map(Some),
        (None, None) => Ok(None),
    }
}

fn require(value: Option<u32>, name: &str) -> Result<u32> {
    value.ok_or_else(|| anyhow!("missing {name}, pass --{name} or put it in the dump file"))
}

fn run(args: Args) -> Result<()> {
    let dump = match &args.file {
        Some(path) => load_dump(path)?,
        None => Dump::default(),
    };

    let sysref = pick(args.sysref, &dump.sysref, "sysref")?
        .map(Hertz)
        .unwrap_or(DEFAULT_SYSREF);
    let facc1 = require(pick(args.facc1, &dump.facc1_cr, "facc1")?, "facc1")?;
    let pll_low = require(pick(args.pll_low, &dump.pll_status_low_cr, "pll-low")?, "pll-low")?;
    let pll_high = require(pick(args.pll_high, &dump.pll_status_high_cr, "pll-high")?, "pll-high")?;

    let snapshot = RegisterSnapshot::from_bits(facc1, pll_low, pll_high);
    let clocks = derive(sysref, &snapshot);

    println!("SYSREF:  {sysref}");
    println!(
        "MPLL:    DIVR={} DIVF={} DIVQ={} FSE={}",
        snapshot.pll_low.divr(),
        snapshot.pll_low.divf(),
        snapshot.divq(),
        snapshot.pll_high.fse() as u8,
    );
    println!();
    for (domain, freq) in clocks.iter() {
        println!(
            "{:<8} {:>12} Hz  ({}.{:03} MHz)",
            domain.name(),
            freq.0,
            freq.0 / 1_000_000,
            freq.0 % 1_000_000 / 1_000
        );
    }

    if let Some(baud) = args.baud {
        let divisor = console_divisor(&clocks, baud)
            .map_err(|e| anyhow!("no console divisor for {baud} baud: {e:?}"))?;
        println!();
        println!("console divisor for {baud} baud: {divisor}");
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.file.is_none() && args.facc1.is_none() {
        bail!("nothing to decode, pass --file or the register values");
    }
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_u32("100000000"), Ok(100_000_000));
        assert_eq!(parse_u32("0x0000_0C0A"), Ok(0xC0A));
        assert_eq!(parse_u32("0XFF"), Ok(0xFF));
        assert!(parse_u32("0x1_0000_0000").is_err());
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn parses_hjson_dump() {
        let dump: Dump = serde_hjson::from_str(
            r#"{
                # captured after boot
                sysref: 100000000
                facc1_cr: "0x0000_0208"
                pll_status_low_cr: 0
                pll_status_high_cr: "0x8"
            }"#,
        )
        .unwrap();

        assert_eq!(pick(None, &dump.sysref, "sysref").unwrap(), Some(100_000_000));
        assert_eq!(pick(None, &dump.facc1_cr, "facc1").unwrap(), Some(0x208));
        assert_eq!(pick(None, &dump.pll_status_high_cr, "pll-high").unwrap(), Some(8));
        assert_eq!(pick(Some(4), &dump.pll_status_high_cr, "pll-high").unwrap(), Some(4));
    }

    #[test]
    fn missing_register_is_an_error() {
        let dump = Dump::default();
        let value = pick(None, &dump.facc1_cr, "facc1").unwrap();
        assert!(require(value, "facc1").is_err());
    }
}
