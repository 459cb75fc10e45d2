use clap::{Parser, Subcommand};
use example_mcp_server::Result;
use example_mcp_server::commands::{call_tool, list_resources, list_tools, read_resource, serve};
use example_mcp_server::config::{Config, run_interactive_config, show_config};

#[derive(Parser)]
#[command(name = "example-mcp-server")]
#[command(about = "A minimal Model Context Protocol server with example tools and resources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server and print the startup summary
    Serve,
    /// List the tools this server advertises
    Tools,
    /// List the resources this server advertises
    Resources,
    /// Invoke a tool by name
    Call {
        /// Name of the tool to invoke
        name: String,
        /// Tool arguments as a JSON object, e.g. '{"text": "hi"}'
        #[arg(long)]
        arguments: Option<String>,
    },
    /// Read a resource by URI
    Read {
        /// URI of the resource to read
        uri: String,
    },
    /// Configure logging and other settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();

    let cli = Cli::parse();

    // Bare invocation behaves like `serve`
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            serve()?;
        }
        Commands::Tools => {
            list_tools()?;
        }
        Commands::Resources => {
            list_resources()?;
        }
        Commands::Call { name, arguments } => {
            call_tool(&name, arguments)?;
        }
        Commands::Read { uri } => {
            read_resource(&uri)?;
        }
        Commands::Config { show } => {
            if show {
                show_config()?;
            } else {
                run_interactive_config()?;
            }
        }
    }

    Ok(())
}
