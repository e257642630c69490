//! Demo shell entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use viewstate_app::{AppConfig, AppError, Command, CommandRegistry, Session};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting viewstate demo");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        CommandRegistry::print_all();
        return Ok(());
    }

    let config = match args.iter().position(|a| a == "--config") {
        Some(pos) => {
            let path = args
                .get(pos + 1)
                .map(PathBuf::from)
                .ok_or_else(|| AppError::MissingArgument("--config".to_string()))?;
            args.drain(pos..=pos + 1);
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };

    let mut session = Session::new(config)?;
    println!("{}", session.status());
    for arg in &args {
        let command = Command::parse(arg)?;
        session.execute(&command)?;
        println!("> {}\n{}", arg, session.status());
    }
    for line in session.hierarchy_lines() {
        println!("{}", line);
    }
    session.shutdown();
    Ok(())
}
