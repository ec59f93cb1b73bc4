use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use medibot_core::Catalogue;
use medibot_store::{CheckHistory, LocalCart};

mod ask;
mod auth;
mod chat;
mod completion;
mod completion_worker;
mod config;
mod logging;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "medibot",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MEDIBOT_BUILD_SHA"), ")"),
    about = "Symptom checker with OTC medicine suggestions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat (default)
    Chat,

    /// Run one symptom check, reading answers from stdin
    Ask {
        /// What is bothering you, e.g. "I have a headache"
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List the symptoms MediBot can check
    Symptoms,

    /// Inspect or edit the local cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommand>,
    },

    /// Show recent symptom checks
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Manage the OpenAI API key used for general questions
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Manage ~/.medibot/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CartCommand {
    /// Print cart contents and total
    List,
    /// Remove an item by name (case-insensitive)
    Remove {
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Paste an API key (stored in ~/.medibot/auth.json)
    PasteOpenaiApiKey,
    /// Show whether a key is configured
    Status,
    /// Forget the stored key
    Clear,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let cfg = config::load_config_or_default();
            tokio::task::block_in_place(|| chat::run_chat(&cfg))?;
        }

        Command::Ask { text } => {
            let cfg = config::load_config_or_default();
            let text = text.join(" ");
            if text.trim().is_empty() {
                bail!("Describe a symptom, e.g. medibot ask I have a headache");
            }
            ask::run_ask(&cfg, &text).await?;
        }

        Command::Symptoms => {
            for p in Catalogue::standard().iter() {
                println!("{:<14} {:<26} {} questions", p.key.as_str(), p.title, p.questions.len());
            }
        }

        Command::Cart { command } => {
            let cart = LocalCart::new(state::open_store()?);
            match command.unwrap_or(CartCommand::List) {
                CartCommand::List => println!("{}", cart.summary()?),
                CartCommand::Remove { name } => {
                    let name = name.join(" ");
                    if cart.remove(&name)? {
                        println!("Removed {name}.");
                    } else {
                        println!("{name} is not in your cart.");
                    }
                }
                CartCommand::Clear => {
                    cart.clear()?;
                    println!("Cart cleared.");
                }
            }
        }

        Command::History { limit } => {
            let checks = CheckHistory::new(state::open_store()?).recent(limit)?;
            if checks.is_empty() {
                println!("No symptom checks yet.");
            }
            for c in checks {
                let flag = if c.urgent { " ⚠️ see a doctor" } else { "" };
                println!(
                    "{}  {}{}",
                    c.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                    c.symptom,
                    flag
                );
                for m in &c.medicines {
                    println!("    - {m}");
                }
            }
        }

        Command::Auth { command } => match command {
            AuthCommand::PasteOpenaiApiKey => auth::openai_paste_api_key()?,
            AuthCommand::Status => auth::status()?,
            AuthCommand::Clear => auth::clear()?,
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["medibot", "ask", "I", "have", "a", "fever"]).unwrap();
        match cli.command {
            Some(Command::Ask { text }) => assert_eq!(text.join(" "), "I have a fever"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cart_remove_takes_unquoted_names() {
        let cli = Cli::try_parse_from(["medibot", "cart", "remove", "ibuprofen", "400"]).unwrap();
        match cli.command {
            Some(Command::Cart {
                command: Some(CartCommand::Remove { name }),
            }) => assert_eq!(name.join(" "), "ibuprofen 400"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bare_invocation_defaults_to_chat() {
        let cli = Cli::try_parse_from(["medibot"]).unwrap();
        assert!(cli.command.is_none());
    }
}
