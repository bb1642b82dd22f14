//! brewords CLI: vocabulary games in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use brewords_core::model::GameKind;

mod commands;

#[derive(Parser)]
#[command(name = "brewords", version, about = "Learn vocabulary with flashcards and quizzes")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Offline content pack to use instead of the backend
    #[arg(long)]
    pack: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and content pack
    Init,

    /// Create an account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user and learning progress
    Profile,

    /// List avatars, or pick one with --set
    Avatar {
        /// Avatar image URL to use
        #[arg(long)]
        set: Option<String>,
    },

    /// Languages, password and account details
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsCommand,
    },

    /// List topics
    Topics,

    /// Show one topic and its games
    Topic {
        /// Category ID
        id: String,
    },

    /// List your vocabulary
    Vocabulary {
        /// Filter by english word, translation or topic
        #[arg(long)]
        search: Option<String>,
    },

    /// Play a game
    Play {
        /// flashcards, guess-word or unscramble
        game: GameKind,

        /// Category ID
        #[arg(long)]
        category: String,
    },

    /// Validate a content pack
    Validate {
        /// Path to the pack file
        #[arg(long)]
        pack: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let directive = match "brewords=info".parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: invalid log directive: {e}");
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        config: cli.config,
        pack: cli.pack,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => commands::register::execute(&opts, name, email, password, confirm_password).await,
        Commands::Login { email, password } => {
            commands::login::execute(&opts, email, password).await
        }
        Commands::Logout => commands::logout::execute(&opts),
        Commands::Profile => commands::profile::execute(&opts).await,
        Commands::Avatar { set } => commands::avatar::execute(&opts, set).await,
        Commands::Settings { action } => commands::settings::execute(&opts, action).await,
        Commands::Topics => commands::topics::execute(&opts).await,
        Commands::Topic { id } => commands::topic::execute(&opts, id).await,
        Commands::Vocabulary { search } => commands::vocabulary::execute(&opts, search).await,
        Commands::Play { game, category } => commands::play::execute(&opts, game, category).await,
        Commands::Validate { pack } => commands::validate::execute(pack),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
