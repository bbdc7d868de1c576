use brai::config::{self, BraiConfig};
use brai::gateway::{self, AppState};
use brai::store::{ChatState, StateStore};
use brai::types::Personality;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brai")]
#[command(about = "A small conversational responder with persisted memory")]
#[command(version)]
struct Cli {
    /// Directory holding the memory and personality files
    #[arg(long, global = true, env = "BRAI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Run a single turn and print the reply
    Say {
        /// What to say
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show what is remembered
    Status,

    /// Write the default personality file for editing
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::load()?;
    if let Some(dir) = cli.data_dir {
        config.storage.dir = dir;
    }

    match cli.command {
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(bind) = bind {
                config.gateway.bind = bind;
            }
            gateway::run(config).await
        }
        Commands::Say { text } => say(&config, &text.join(" ")).await,
        Commands::Status => status(&config),
        Commands::Init => init(&config),
    }
}

async fn say(config: &BraiConfig, utterance: &str) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let mut chat = state.chat.lock().await;
    let turn = state.responder.respond(&mut chat, utterance).await?;
    println!("{}", turn.reply);
    Ok(())
}

fn status(config: &BraiConfig) -> anyhow::Result<()> {
    let chat = ChatState::open(StateStore::from_config(&config.storage))?;
    println!("brai v{}", env!("CARGO_PKG_VERSION"));
    println!("name: {}", chat.personality.display_name);
    let user = if chat.memory.user_name.is_empty() {
        "(unknown)"
    } else {
        chat.memory.user_name.as_str()
    };
    println!("user: {user}");
    println!("mood: {}", chat.memory.mood);
    println!("turns: {}", chat.memory.turn_count());
    println!("memory: {}", chat.store.memory_path().display());
    Ok(())
}

fn init(config: &BraiConfig) -> anyhow::Result<()> {
    let store = StateStore::from_config(&config.storage);
    let path = store.personality_path();
    if path.exists() {
        println!("{} already exists, leaving it alone", path.display());
        return Ok(());
    }
    store.save_personality(&Personality::default())?;
    println!("wrote {}", path.display());
    Ok(())
}
