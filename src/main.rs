use std::io;

use clap::Parser;

use note::preview::Preview;
use note::{Cli, Config};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("note: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let config = Config::resolve(cli)?;
    if config.peek {
        let mut preview = Preview::new(
            io::stdout(),
            config.notes_path.clone(),
            config.heading_count,
            config.heading_level,
        );
        return preview.peek();
    }
    note::note::append(&config)
}
