use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use math::PrimeField;
use shamir_recover::params::{default_field, DEFAULT_INPUT_FILES};
use shamir_recover::shamir::{Outcome, Reconstructor};

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(
    about = "Reconstruct Shamir secrets from JSON share files",
    long_about = None
)]
struct Cli {
    /// Share files to reconstruct (default: testcase1.json testcase2.json)
    files: Vec<PathBuf>,

    /// Field prime as a decimal integer (default: 2^521 - 1)
    #[arg(long, conflicts_with = "mersenne")]
    prime: Option<String>,

    /// Use the Mersenne prime 2^EXPONENT - 1 as the field prime
    #[arg(
        long,
        value_name = "EXPONENT",
        value_parser = value_parser!(u32)
            .range(2..=i64::from(PrimeField::MAX_MERSENNE_EXPONENT))
    )]
    mersenne: Option<u32>,

    /// Print one JSON object per file instead of plain text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn field(&self) -> Result<PrimeField> {
        if let Some(prime) = &self.prime {
            return prime
                .parse()
                .with_context(|| format!("invalid --prime {prime}"));
        }
        if let Some(exponent) = self.mersenne {
            return PrimeField::mersenne(exponent)
                .with_context(|| format!("invalid --mersenne {exponent}"));
        }
        Ok(default_field())
    }

    fn files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        }
    }
}

fn print_outcome(
    outcome: &Outcome,
    reconstructor: &Reconstructor,
    json: bool,
) -> Result<()> {
    if json {
        let report = outcome.to_report(reconstructor.field());
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    match &outcome.result {
        Ok(secret) => println!(
            "Reconstructed secret for {} is {}",
            outcome.source.display(),
            secret
        ),
        Err(err) => {
            eprintln!("Skipping {}: {}", outcome.source.display(), err)
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let reconstructor = Reconstructor::new(cli.field()?);

    let outcomes = reconstructor.reconstruct_files(&cli.files());
    for outcome in &outcomes {
        print_outcome(outcome, &reconstructor, cli.json)?;
    }

    if outcomes.iter().all(Outcome::is_ok) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
