//! Nordisk CLI
//!
//! Command-line interface for operating the brand sites:
//! - Inspect the route table and resolved themes
//! - Generate a config file
//! - Submit a registration to the backend
//! - Talk to the remote chat service

use anyhow::Context;
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use nordisk_sites::backend::BackendClient;
use nordisk_sites::chat::{ChatBackend, ChatClient, ChatSession, Sender};
use nordisk_sites::config::{generate_default_config, Config};
use nordisk_sites::forms::is_checkable;
use nordisk_sites::forms::{EmailCheckDebouncer, EmailStatus, FormError, RegistrationForm, RegistrationInput};
use nordisk_sites::router::RouteTable;
use nordisk_sites::site::{SiteKey, SiteRegistry};
use nordisk_sites::theme::ThemeResolver;
use nordisk_sites::web::dto::ThemeResponse;

#[derive(Parser)]
#[command(name = "nordisk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operate the Nordisk brand sites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every page route
    Routes,

    /// Show the theme resolved for a path
    Theme {
        /// Request path, e.g. /itsupport/home
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Register a contact with the backend
    Submit {
        /// Contact email
        #[arg(long)]
        email: String,
        /// What the contact needs help with
        #[arg(long)]
        query: String,
        /// First name (new contacts only)
        #[arg(long, default_value = "")]
        first_name: String,
        /// Last name (new contacts only)
        #[arg(long, default_value = "")]
        last_name: String,
        /// Calling code of the mobile number
        #[arg(long, default_value = "+45")]
        country_code: String,
        /// Mobile number (optional)
        #[arg(long, default_value = "")]
        mobile: String,
        /// Brand the contact came from
        #[arg(long, default_value = "itsupport")]
        site: SiteKey,
    },

    /// Chat with the remote assistant
    Chat {
        /// Wait for whole replies instead of streaming them
        #[arg(long)]
        no_stream: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env(),
    };
    let registry = Arc::new(SiteRegistry::builtin());

    match cli.command {
        Commands::Routes => {
            let table = RouteTable::from_registry(&registry);
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&table.entries())?);
                return Ok(());
            }

            let base = config.server.public_url.trim_end_matches('/');
            println!("{:<12} {:<14} {}", "Site", "Page", "URL");
            println!("{}", "-".repeat(60));
            for entry in table.entries() {
                println!("{:<12} {:<14} {}{}", entry.site, entry.page, base, entry.path);
            }
            println!();
            println!("{} routes, / redirects to {}", table.len(), table.root_redirect());
        }

        Commands::Theme { path } => {
            let resolver = ThemeResolver::new(registry);
            let theme = resolver.resolve(&path);
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&ThemeResponse::from(&theme))?);
                return Ok(());
            }

            let fallback = if theme.matched { "" } else { " (fallback)" };
            println!("Site: {}{}", theme.key, fallback);
            println!("Name: {}", theme.config.name);
            println!();
            for (name, value) in theme.tokens.css_variables() {
                println!("  {:<16} {}", name, value);
            }
            println!();
            println!("Navigation:");
            for link in &theme.config.nav_links {
                println!("  {:<20} {}", link.label, theme.key.path(&link.href));
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::Submit {
            email,
            query,
            first_name,
            last_name,
            country_code,
            mobile,
            site,
        } => {
            let backend = Arc::new(BackendClient::new(
                config.backend.url.clone(),
                config.backend.timeout(),
            )?);

            // Same check the registration page runs while the email is typed
            let mut debouncer = EmailCheckDebouncer::new(backend.clone(), site.as_str());
            let mut status = debouncer.subscribe();
            debouncer.input(&email);

            let mut form = RegistrationForm::with_input(RegistrationInput {
                clientfname: first_name,
                clientlname: last_name,
                email: email.clone(),
                countrycode: country_code,
                mobile,
                query,
                website_source: site.to_string(),
            });

            if is_checkable(email.trim()) {
                let wait = config.backend.timeout() + Duration::from_secs(1);
                let settled = tokio::time::timeout(
                    wait,
                    status.wait_for(|s| !matches!(s, EmailStatus::Unknown | EmailStatus::Checking)),
                )
                .await;
                match settled {
                    Ok(Ok(result)) => form.apply_email_status(result.clone()),
                    _ => eprintln!("Email check did not finish; sending a full registration"),
                }
            }

            match form.email_status() {
                EmailStatus::Exists => println!("Known contact, sending a follow-up query"),
                EmailStatus::Failed(message) => eprintln!("{}", message),
                _ => {}
            }

            match form.submit(backend.as_ref()).await {
                Ok(notice) => println!("{}", notice.message),
                Err(FormError::Invalid(errors)) => {
                    eprintln!("Registration not sent:");
                    for (field, message) in errors.iter() {
                        eprintln!("  {}: {}", field, message);
                    }
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Chat { no_stream } => {
            let client = ChatClient::new(&config.chat.url, config.chat.timeout())?;
            run_chat(&client, !no_stream).await?;
        }
    }

    Ok(())
}

async fn run_chat(client: &ChatClient, stream: bool) -> anyhow::Result<()> {
    let mut session = ChatSession::opened();
    print_last(&session);
    println!("(type /quit to leave, /reset to start over)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" => break,
            "/reset" => {
                session.close();
                session.open();
                print_last(&session);
                continue;
            }
            _ => {}
        }

        let Some(pending) = session.begin_send(&line) else {
            continue;
        };

        if !stream {
            let reply = client.reply(&pending.text).await;
            session.complete(pending.generation, reply);
            print_last(&session);
            continue;
        }

        session.begin_stream_reply(pending.generation);
        print!("bot: ");
        let outcome = match client.reply_stream(&pending.text).await {
            Ok(mut chunks) => {
                let mut outcome = Ok(());
                while let Some(chunk) = chunks.next().await {
                    match chunk {
                        Ok(text) => {
                            session.push_chunk(pending.generation, &text);
                            print!("{}", text);
                            std::io::stdout().flush()?;
                        }
                        Err(e) => {
                            outcome = Err(e);
                            break;
                        }
                    }
                }
                outcome
            }
            Err(e) => Err(e),
        };

        let failed = outcome.is_err();
        session.finish_stream(pending.generation, outcome);
        println!();
        if failed {
            print_last(&session);
        }
    }

    Ok(())
}

fn print_last(session: &ChatSession) {
    if let Some(message) = session.messages().last() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        println!("{}: {}", who, message.text);
    }
}
