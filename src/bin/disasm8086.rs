use arch8086::cli::ConfigOption;
use arch8086::error::DriverError;
use arch8086::{disassemble_all, read_program};

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[clap(name = "disasm8086", about = "Disassemble an 8086 machine-code file")]
struct Cli {
    #[clap(flatten)]
    options: ConfigOption,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DriverError> {
    let cli = Cli::try_parse()
        .map_err(|_| DriverError::UsageError(env!("CARGO_BIN_NAME").to_string()))?;

    let bytes = read_program(&cli.options.input, cli.options.max_bytes)?;
    for line in disassemble_all(&bytes) {
        println!("{line}");
    }

    Ok(())
}
