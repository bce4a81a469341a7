// Główny punkt wejścia dla narzędzi CLI
mod commands;

use std::env;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Użycie:");
    eprintln!("  {} show <plik-słownika.txt>", program);
    eprintln!("  {} demo [katalog]", program);
}

/// Instaluje logger; poziom z `RUST_LOG`, domyślnie `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Drugie wywołanie (np. w testach) zwraca błąd, który pomijamy.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ime-dict-cli");

    let result = match args.get(1).map(String::as_str) {
        Some("show") => match args.get(2) {
            Some(path) => commands::show::run(&PathBuf::from(path)),
            None => {
                print_usage(program);
                process::exit(1);
            }
        },
        Some("demo") => {
            let dir = args.get(2).map(PathBuf::from).unwrap_or_default();
            commands::demo::run(&dir)
        }
        _ => {
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("BŁĄD: {}", e);
        process::exit(1);
    }
}
