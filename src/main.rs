use clap::Parser;
use ohmline::repl::Repl;
use std::io;

/// Interactive series-circuit resistor simulator
#[derive(Parser)]
#[command(name = "ohmline", version)]
struct Cli {
    /// Source voltage in volts (skips the startup prompt)
    #[arg(long)]
    voltage: Option<i64>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut repl = Repl::new(stdin, stdout);
    repl.run(cli.voltage).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
}
