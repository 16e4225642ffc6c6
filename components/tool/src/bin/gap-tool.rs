use std::path::Path;

use clap::Parser;
use tool::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ulog::init_log(cli.log.as_deref().map(Path::new)) {
        eprintln!("Failed to initialize log. Cause: {}", e);
        // Exit with errno set
        std::process::exit(2);
    }

    let stdout = std::io::stdout();
    if let Err(e) = tool::run(&cli, &mut stdout.lock()) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
