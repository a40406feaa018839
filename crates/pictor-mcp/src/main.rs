//! Pictor MCP Server — entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use pictor::GeminiClient;
use pictor_mcp::config::{resolve_api_key, resolve_image_model, resolve_text_model};
use pictor_mcp::protocol::ProtocolHandler;
use pictor_mcp::service::ImageService;
use pictor_mcp::tools::ToolRegistry;
use pictor_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "pictor-mcp",
    about = "MCP server for Pictor — image generation, editing, and analysis backed by Gemini",
    version
)]
struct Cli {
    /// Gemini API key.
    /// Also reads from GEMINI_API_KEY or GOOGLE_API_KEY env vars.
    #[arg(long)]
    api_key: Option<String>,

    /// Model used for image-producing tools.
    #[arg(long)]
    image_model: Option<String>,

    /// Model used for analysis and comparison tools.
    #[arg(long)]
    text_model: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve {
        /// Model used for image-producing tools.
        #[arg(long)]
        image_model: Option<String>,

        /// Model used for analysis and comparison tools.
        #[arg(long)]
        text_model: Option<String>,
    },

    /// Print server capabilities and tool list as JSON.
    Info,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    // Logs go to stderr; stdout belongs to the JSON-RPC transport.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        image_model: None,
        text_model: None,
    }) {
        Commands::Serve {
            image_model,
            text_model,
        } => {
            let api_key = resolve_api_key(cli.api_key.as_deref()).ok_or_else(|| {
                anyhow::anyhow!("GEMINI_API_KEY (or GOOGLE_API_KEY) must be set")
            })?;

            let image_model =
                resolve_image_model(image_model.or(cli.image_model).as_deref());
            let text_model = resolve_text_model(text_model.or(cli.text_model).as_deref());
            tracing::info!(%image_model, %text_model, "Pictor MCP server starting");

            let backend = Arc::new(GeminiClient::new(api_key));
            let service = Arc::new(ImageService::new(backend, image_model, text_model));
            let handler = ProtocolHandler::new(service);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Info => {
            let capabilities = pictor_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pictor-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
