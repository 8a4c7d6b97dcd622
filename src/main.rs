use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pixelfolio::Config;

mod cli;

use cli::prefs::Toggle;

#[derive(Parser)]
#[command(name = "pixelfolio")]
#[command(about = "Pixelfolio - level up by exploring a portfolio")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.pixelfolio/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP and achievements
    Status,

    /// Visit a section of the page
    Visit {
        /// Section id (about, projects, experience, contact)
        section: String,
    },

    /// Examine a project item
    Examine {
        /// Item id
        item: String,
    },

    /// Award XP directly
    Award {
        amount: u32,

        /// Reason shown with the XP popup
        #[arg(default_value = "Bonus")]
        reason: Vec<String>,
    },

    /// Unlock an achievement by id (e.g. konamiMaster)
    Unlock { id: String },

    /// Follow a social link
    Social,

    /// Follow a project's external link
    Link,

    /// Send a message through the contact form
    Message,

    /// Clear all progress
    Reset,

    /// Play dialogue lines with the typewriter effect
    Say {
        /// Lines to reveal, one after another. `<b>..</b>` emphasis is kept.
        #[arg(required = true)]
        texts: Vec<String>,

        /// Skip the animation
        #[arg(long)]
        fast: bool,
    },

    /// Press keys ("ArrowUp", "hola", ...) and watch for secrets
    Keys {
        keys: Vec<String>,

        /// Also click the companion sprite this many times
        #[arg(long, default_value_t = 0)]
        clicks: u32,
    },

    /// Show or change page preferences
    Prefs {
        #[arg(long, value_enum)]
        sound: Option<Toggle>,

        /// Reduced motion
        #[arg(long, value_enum)]
        motion: Option<Toggle>,

        #[arg(long, value_enum)]
        companion: Option<Toggle>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = Config::load_from(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Status) | None => {
            cli::status::status_command(&config).await?;
        }
        Some(Commands::Visit { section }) => {
            cli::progress::visit_command(&config, &section).await?;
        }
        Some(Commands::Examine { item }) => {
            cli::progress::examine_command(&config, &item).await?;
        }
        Some(Commands::Award { amount, reason }) => {
            cli::progress::award_command(&config, amount, &reason.join(" ")).await?;
        }
        Some(Commands::Unlock { id }) => {
            cli::progress::unlock_command(&config, &id).await?;
        }
        Some(Commands::Social) => {
            cli::progress::social_command(&config).await?;
        }
        Some(Commands::Link) => {
            cli::progress::link_command(&config).await?;
        }
        Some(Commands::Message) => {
            cli::progress::message_command(&config).await?;
        }
        Some(Commands::Reset) => {
            cli::progress::reset_command(&config).await?;
        }
        Some(Commands::Say { texts, fast }) => {
            cli::say::say_command(&config, texts, fast).await?;
        }
        Some(Commands::Keys { keys, clicks }) => {
            cli::keys::keys_command(&config, keys, clicks).await?;
        }
        Some(Commands::Prefs {
            sound,
            motion,
            companion,
        }) => {
            cli::prefs::prefs_command(&config, sound, motion, companion).await?;
        }
    }

    Ok(())
}
