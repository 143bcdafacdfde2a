//! `portfolio` - CLI for the portfolio site
//!
//! This binary runs the web server and provides a few maintenance commands
//! for reading the contact message log and checking configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use portfolio::cli::{Cli, Command, ConfigCommand, MessagesCommand, OutputFormat, ServeCommand};
use portfolio::{init_logging, server, Config, MessageLog, Portfolio};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Validation reports a broken file itself rather than failing at startup.
    if let Command::Config(ConfigCommand::Validate { file }) = &cli.command {
        return validate_config(file.clone().or_else(|| cli.config.clone()));
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Messages(messages_cmd) => handle_messages(&config, messages_cmd),
        Command::Stats(stats_cmd) => handle_stats(&config, stats_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    config.validate()?;

    let portfolio = Portfolio::builtin(&config.site);
    let log = MessageLog::open(config.messages_path());

    server::run(&config, portfolio, log)
        .await
        .context("running web server")
}

fn handle_messages(config: &Config, cmd: MessagesCommand) -> anyhow::Result<()> {
    let log = MessageLog::open(config.messages_path());

    match cmd {
        MessagesCommand::Count => {
            println!("{}", log.count()?);
        }
        MessagesCommand::List { last, format } => {
            let messages = match last {
                Some(n) => log.load_last(n)?,
                None => log.load_all()?,
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&messages)?),
                OutputFormat::Plain => {
                    if messages.is_empty() {
                        println!("No messages in {}", log.path().display());
                    }
                    for msg in &messages {
                        println!("{}", msg.to_plain());
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_stats(config: &Config, json: bool) -> anyhow::Result<()> {
    let stats = Portfolio::builtin(&config.site).stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Projects completed:  {}", stats.projects_completed);
        println!("Skills mastered:     {}", stats.skills_mastered);
        println!("Years experience:    {}", stats.years_experience);
        println!("Certifications:      {}", stats.certifications);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                match config.server.workers {
                    Some(n) => println!("  Workers:            {n}"),
                    None => println!("  Workers:            (one per core)"),
                }
                println!();
                println!("[Storage]");
                println!("  Messages file:      {}", config.messages_path().display());
                println!();
                println!("[Site]");
                println!("  Owner:              {}", config.site.owner);
                println!("  Years experience:   {}", config.site.years_experience);
                println!("  Certifications:     {}", config.site.certifications);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => return validate_config(file),
    }
    Ok(())
}

/// Check a configuration file, failing with a non-zero exit if it is invalid.
fn validate_config(file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path.clone()))
        .with_context(|| format!("{} is not a valid configuration", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}
