use arch8086::cli::ConfigOption;
use arch8086::error::DriverError;
use arch8086::read_program;
use arch8086::Vm;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[clap(name = "sim8086", about = "Simulate an 8086 machine-code file")]
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
    let mut vm = Vm::new(&bytes);

    for report in vm.run() {
        let writes: Vec<String> = report
            .writes
            .iter()
            .map(|w| format!("{}: {} -> {}", w.register, w.old, w.new))
            .collect();

        println!("{} :: {}", report.instruction, writes.join(", "));
    }

    println!("{}", vm.dump_registers());
    println!("{}", vm.dump_flags());

    Ok(())
}
