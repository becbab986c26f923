use std::{env, fs::read_to_string, path::Path, process::ExitCode, rc::Rc, time::Instant};

use clex::{display_error, errors::errors::Error, Scanner};

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map_or("clex", String::as_str));
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map_or_else(|| file_path.to_string(), |name| name.to_string_lossy().into_owned());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };

    let file = Rc::new(file_name);
    let start = Instant::now();
    let mut error_count = 0;

    for token in Scanner::new(&source).tokens() {
        match Error::from_token(&token, &source, Rc::clone(&file)) {
            Some(error) => {
                error_count += 1;
                display_error(&error, &source);
            }
            None => println!("{}", token),
        }
    }

    println!("Tokenized in {:?}", start.elapsed());

    if error_count > 0 {
        eprintln!("{} lexical error(s)", error_count);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
