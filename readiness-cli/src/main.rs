mod cli;
mod commands;
mod config;
mod error;
mod telemetry;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("application error: {:#}", anyhow::Error::from(err));
        std::process::exit(1);
    }
}
