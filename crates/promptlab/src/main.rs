mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            file,
            title,
            description,
            force,
        } => commands::new::run(file, title, description, force, cli.verbose),
        Commands::Show { file, json } => commands::show::run(file, json, cli.verbose),
        Commands::Fields { file, json } => commands::fields::run(file, json, cli.verbose),
        Commands::Render {
            file,
            values,
            set,
            output,
        } => commands::render::run(file, values, set, output, cli.verbose),
        Commands::Check { file, json } => commands::check::run(file, json, cli.verbose),
        Commands::List { dir, json } => commands::list::run(dir, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
