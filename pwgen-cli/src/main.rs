mod banner;
mod error;
mod prompt;

use clap::Parser;
use log::{info, LevelFilter};
use pwgen_lib::PasswordGenerator;

use crate::banner::write_banner;
use crate::error::CliError;
use crate::prompt::{parse_length, request_length};

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random password")]
struct Args {
    /// Password length, prompted for when omitted
    #[arg(short, long, value_name = "count", value_parser = parse_length)]
    length: Option<usize>,

    /// Increase log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let length = match args.length {
        Some(length) => length,
        None => {
            let mut input = std::io::stdin().lock();
            request_length(&mut input, &mut std::io::stdout())?
        }
    };

    let generator = PasswordGenerator::new();
    info!("shuffle strategy: {}", generator.strategy());

    let password = generator.generate(length)?;
    write_banner(&mut std::io::stdout().lock(), &password)?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    if let Err(error) = run(args) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}
