use anyhow::Result;
use csvdate::convert;
use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let (input, output) = match gather_paths() {
        Ok(paths) => paths,
        Err(e) => {
            error!("could not read file paths: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match convert::convert_file(&input, &output) {
        Ok(summary) => {
            info!(
                column = %summary.date_column,
                rows = summary.rows,
                "CSV file successfully processed. Output saved to: {}",
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error processing CSV: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Take the two paths from argv when given, otherwise fall back to prompting
/// on stdin. Everything else lives in the library core.
fn gather_paths() -> Result<(PathBuf, PathBuf)> {
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(input), Some(output)) => Ok((input.into(), output.into())),
        _ => {
            let input = prompt("Enter the path to the input CSV file: ")?;
            let output = prompt("Enter the path for the output CSV file: ")?;
            Ok((input.into(), output.into()))
        }
    }
}

fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
