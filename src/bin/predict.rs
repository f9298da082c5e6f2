use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use carpricer::params;

#[derive(Debug, Parser)]
#[command(
    name = "predict",
    about = "Estimate a car price from its mileage using fitted parameters",
    version
)]
struct Cli {
    /// Path to the fitted parameters
    #[arg(long, value_name = "PATH", default_value = "params.csv")]
    params: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let model = params::load_or_untrained(&cli.params);
    if !model.is_trained() {
        println!("Model is not trained yet");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match prompt_mileage(&mut stdin.lock(), &mut stdout)? {
        Some(mileage) => {
            let estimated_price = model.predict(mileage);
            if estimated_price < 0.0 {
                println!("The predicted price is below 0. You cannot sell your car.");
            } else {
                println!("Estimated price is: {estimated_price:.2}");
            }
        }
        None => tracing::debug!("input closed before a valid mileage was entered"),
    }

    Ok(())
}

/// Reads mileage values until a non-negative number is entered.
/// Returns `None` on end of input.
fn prompt_mileage(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<f64>> {
    loop {
        writeln!(output, "Insert a mileage to get an estimated car price:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<f64>() {
            Ok(mileage) if mileage >= 0.0 => return Ok(Some(mileage)),
            Ok(_) => {
                writeln!(output, "Mileage must be a positive number. Please try again.")?;
            }
            Err(_) => {
                writeln!(output, "Invalid input. Please enter a positive number.")?;
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CARPRICER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("carpricer=info,predict=info"));
    tracing_subscriber::fmt().with_env_filter(filter).without_time().init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_valid_mileage() {
        let mut input = Cursor::new("42000\n");
        let mut output = Vec::new();

        let mileage = prompt_mileage(&mut input, &mut output).unwrap();
        assert_eq!(mileage, Some(42000.0));
    }

    #[test]
    fn test_reprompts_on_negative_and_garbage() {
        let mut input = Cursor::new("-5\nabc\n100000\n");
        let mut output = Vec::new();

        let mileage = prompt_mileage(&mut input, &mut output).unwrap();
        assert_eq!(mileage, Some(100_000.0));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("must be a positive number"));
        assert!(transcript.contains("Invalid input"));
        assert_eq!(transcript.matches("Insert a mileage").count(), 3);
    }

    #[test]
    fn test_eof_yields_no_prediction() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let mileage = prompt_mileage(&mut input, &mut output).unwrap();
        assert_eq!(mileage, None);
    }
}
