use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use mstmeetings_command::application::errors::{AppError, ConfigError};
use mstmeetings_command::application::messaging::CommandDispatcher;
use mstmeetings_command::domain::entities::CommandInvocation;
use mstmeetings_command::domain::traits::ChatPlatform;
use mstmeetings_command::infrastructure::adapters::{ConsolePlatform, MattermostPlatform};
use mstmeetings_command::infrastructure::config::Config;
use mstmeetings_command::infrastructure::provider::MsTeamsProvider;
use mstmeetings_command::infrastructure::storage::MemoryStore;
use mstmeetings_command::infrastructure::telemetry::TracingTelemetry;

#[derive(Parser)]
#[command(name = "mstmeetings")]
#[command(about = "MS Teams Meetings slash command dispatcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read command lines from stdin against the console platform
    Run {
        /// Channel to invoke commands from
        #[arg(long)]
        channel: Option<String>,
    },
    /// Execute a single command line
    Exec {
        /// Invoking user (defaults to the console user)
        #[arg(long)]
        user_id: Option<String>,

        /// Invoking channel (defaults to the console channel)
        #[arg(long)]
        channel_id: Option<String>,

        /// The command line, e.g. /mstmeetings start
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Print the slash command registration as JSON
    Describe,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config);

    let result = match cli.command {
        Commands::Run { channel } => run_console(config, channel),
        Commands::Exec { user_id, channel_id, command } => run_exec(config, user_id, channel_id, command.join(" ")),
        Commands::Describe => describe(&config),
        Commands::Version => {
            println!("mstmeetings v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if !std::path::Path::new(config_path).exists() {
        return Config::load_env();
    }

    match Config::load(config_path) {
        Ok(mut config) => {
            config.apply_env();
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn block_on<F: std::future::Future<Output = Result<(), AppError>>>(future: F) -> Result<(), AppError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(future)
}

async fn build_dispatcher(config: &Config) -> Result<CommandDispatcher, AppError> {
    config.validate()?;

    let platform: Arc<dyn ChatPlatform> = if config.mattermost.enabled {
        let url = config.mattermost.url.clone()
            .ok_or_else(|| ConfigError::MissingField("mattermost.url".to_string()))?;
        let token = config.mattermost.token.clone()
            .ok_or_else(|| ConfigError::MissingField("mattermost.token".to_string()))?;
        tracing::info!("Using Mattermost server at {}", url);
        Arc::new(MattermostPlatform::new(url, token, config.mattermost_timeout())?)
    } else {
        tracing::info!("Using console platform (dev mode)");
        Arc::new(ConsolePlatform::seeded(&config.console.user_id, &config.plugin.bot_user_id).with_echo(true))
    };

    let provider = Arc::new(MsTeamsProvider::new(Arc::new(MemoryStore::new())));
    if config.console.connected {
        provider.register_session(&config.console.user_id, "console-session").await?;
    }

    let telemetry = Arc::new(TracingTelemetry::new(&config.plugin.id));

    Ok(CommandDispatcher::new(config.command_settings(), platform, provider, telemetry))
}

fn run_console(config: Config, channel: Option<String>) -> Result<(), AppError> {
    block_on(async move {
        let dispatcher = build_dispatcher(&config).await?;
        let user_id = config.console.user_id.clone();
        let mut channel_id = channel.unwrap_or_else(|| config.console.channel_id.clone());

        tracing::info!("Type {} commands, ':channel <id>' to switch channel, ':quit' to exit", dispatcher.definition().invocation());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if let Some(directive) = input.strip_prefix(':') {
                let mut parts = directive.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some("quit"), _) => break,
                    (Some("channel"), Some(id)) => {
                        channel_id = id.to_string();
                        println!("[console] now in #{}", channel_id);
                    }
                    _ => println!("[console] unknown directive: {}", input),
                }
                continue;
            }

            let invocation = CommandInvocation::new(input, &user_id, &channel_id);
            dispatcher.execute_command(&invocation).await;
        }

        Ok(())
    })
}

fn run_exec(config: Config, user_id: Option<String>, channel_id: Option<String>, command: String) -> Result<(), AppError> {
    block_on(async move {
        let dispatcher = build_dispatcher(&config).await?;
        let invocation = CommandInvocation::new(
            command,
            user_id.unwrap_or_else(|| config.console.user_id.clone()),
            channel_id.unwrap_or_else(|| config.console.channel_id.clone()),
        );

        dispatcher.execute_command(&invocation).await;
        tracing::debug!("Command acknowledged");
        Ok(())
    })
}

fn describe(config: &Config) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&config.command_definition())
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn init_config() -> Result<(), AppError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
