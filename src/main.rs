use std::collections::HashMap;
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use yoga_advisor::{AppError, EscapePolicy, ServeOptions};

#[derive(Parser)]
#[command(name = "yoga-advisor")]
#[command(version)]
#[command(
    about = "Yoga recommendations from body-metric form data, rendered as HTML",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    #[clap(visible_alias = "s")]
    Serve {
        /// Path to config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to listen on (overrides the config file)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Print the prompt a form submission would send to the model
    #[clap(visible_alias = "p")]
    Prompt {
        #[arg(long)]
        weight: String,
        #[arg(long)]
        height_feet: String,
        #[arg(long)]
        height_inches: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        health_issue: String,
    },
    /// Format a saved model reply as an HTML fragment
    #[clap(visible_alias = "f")]
    Format {
        /// Reply file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Embed reply text without HTML escaping
        #[arg(long)]
        raw: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Serve { config, bind } => yoga_advisor::serve(ServeOptions { config, bind }),
        Commands::Prompt { weight, height_feet, height_inches, age, gender, health_issue } => {
            let fields: HashMap<String, String> = [
                ("weight", weight),
                ("height_feet", height_feet),
                ("height_inches", height_inches),
                ("age", age),
                ("gender", gender),
                ("health_issue", health_issue),
            ]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

            yoga_advisor::preview_prompt(&fields).map(|prompt| println!("{}", prompt))
        }
        Commands::Format { file, raw } => read_reply(file).map(|reply| {
            let policy = if raw { EscapePolicy::Raw } else { EscapePolicy::Escape };
            println!("{}", yoga_advisor::format_reply(&reply, policy));
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_reply(file: Option<PathBuf>) -> Result<String, AppError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut reply = String::new();
            std::io::stdin().read_to_string(&mut reply)?;
            Ok(reply)
        }
    }
}
