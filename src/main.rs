use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use ing2ofx::{convert_file, ofx};

/// Convert ING (www.ing.nl) CSV exports to OFX statements.
#[derive(Debug, Parser)]
#[command(name = "ing2ofx", version, about)]
struct Args {
    /// The ING CSV export to process
    csvfile: PathBuf,

    /// Write one OFX file per month
    #[arg(short, long)]
    split: bool,

    /// Output filename, defaults to the input filename with an .ofx extension
    #[arg(short, long)]
    outfile: Option<String>,

    /// Directory to store output in, created if absent
    #[arg(short, long, default_value = "ofx")]
    dir: PathBuf,
}

fn output_name(args: &Args, period: &str) -> String {
    let base = match &args.outfile {
        Some(name) => name.clone(),
        None => {
            let stem = args
                .csvfile
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "statement".to_string());
            format!("{stem}.ofx")
        }
    };

    if period.is_empty() {
        base
    } else {
        format!("{period}_{base}")
    }
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let batch = convert_file(&args.csvfile, args.split)
        .with_context(|| format!("could not convert {}", args.csvfile.display()))?;

    fs::create_dir_all(&args.dir)
        .with_context(|| format!("could not create output directory {}", args.dir.display()))?;

    let today = Local::now().date_naive();
    let mut written = Vec::new();

    for (period, transactions) in batch.iter() {
        let path = args.dir.join(output_name(args, period));
        let document = ofx::render(transactions, today);
        fs::write(&path, document)
            .with_context(|| format!("could not write {}", path.display()))?;
        written.push(path);
    }

    println!("Transactions: {}", batch.total());
    println!("Input:        {}", args.csvfile.display());
    println!(
        "Output(s):    {}",
        written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    Ok(written)
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(csvfile: &str, outfile: Option<&str>) -> Args {
        Args {
            csvfile: PathBuf::from(csvfile),
            split: false,
            outfile: outfile.map(String::from),
            dir: PathBuf::from("ofx"),
        }
    }

    #[test]
    fn test_output_name_from_input_stem() {
        let args = args("exports/NL20INGB0001234567_2017.csv", None);
        assert_eq!(output_name(&args, ""), "NL20INGB0001234567_2017.ofx");
    }

    #[test]
    fn test_output_name_with_period_prefix() {
        let args = args("export.csv", None);
        assert_eq!(output_name(&args, "201701"), "201701_export.ofx");
    }

    #[test]
    fn test_output_name_override() {
        let args = args("export.csv", Some("bank.ofx"));
        assert_eq!(output_name(&args, "201702"), "201702_bank.ofx");
        assert_eq!(output_name(&args, ""), "bank.ofx");
    }
}
