//! Main CLI parser and top-level argument handling.

use brainnet_axum::{ServerConfig, Variant};
use brainnet_core::Settings;
use clap::{Args, Parser, Subcommand};

/// Run one of the Brain_Net HTTP services.
#[derive(Debug, Parser)]
#[command(name = "brainnet")]
#[command(about = "Run the Brain_Net API or LLM service")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the LLM service (chat, rag, agents, documents, models)
    Llm(ServeArgs),
    /// Serve the generic Brain_Net API
    Backend(ServeArgs),
}

/// Bind overrides shared by both services.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "HOST")]
    pub host: Option<String>,
    /// Port to serve on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
    /// Allow requests from any origin
    #[arg(long)]
    pub cors_any: bool,
}

impl Commands {
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Llm(_) => Variant::Llm,
            Self::Backend(_) => Variant::Backend,
        }
    }

    pub const fn args(&self) -> &ServeArgs {
        match self {
            Self::Llm(args) | Self::Backend(args) => args,
        }
    }

    /// Write flag overrides into `settings`, so validation sees the values
    /// the server will bind.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        let args = self.args();
        if let Some(host) = &args.host {
            settings.host.clone_from(host);
        }
        if let Some(port) = args.port {
            settings.port = port;
        }
        if args.cors_any {
            settings.cors_origins = vec!["*".to_string()];
        }
        settings
    }

    /// Server configuration for already-overridden settings.
    pub fn server_config(&self, settings: &Settings) -> ServerConfig {
        ServerConfig::from_settings(settings, self.variant())
    }
}
