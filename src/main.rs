use tracing::Level;

use marketeer::config::{self, Config, Invocation};

fn main() {
    let config = match Config::from_env().and_then(|c| c.with_args(std::env::args().skip(1))) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", config::usage());
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = marketeer::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
