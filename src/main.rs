//! kcount - count configuration resources by kind

use clap::Parser;
use console::Style;

use kcount::cli::Cli;
use kcount::commands;

fn main() {
    let cli = Cli::parse();
    kcount::logging::setup_logging(cli.verbose);

    let result = match cli.completions.as_deref() {
        Some(shell) => commands::completions::run(shell, &mut std::io::stdout().lock()),
        None => commands::count::run(&cli),
    };

    if let Err(e) = result {
        eprintln!("{} {}", Style::new().red().bold().for_stderr().apply_to("Error:"), e);
        std::process::exit(1);
    }
}
