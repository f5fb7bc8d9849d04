//! h5ai browser
//!
//! Command-line front-end over `H5aiSource`. Results go to stdout as JSON,
//! logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use h5ai_source::{
    logging, AppConfig, Container, ContentSource, Episode, H5aiSource,
};

#[derive(Parser, Debug)]
#[command(name = "h5ai-browse")]
#[command(about = "Browse media on an h5ai directory index", long_about = None)]
struct Args {
    /// Config file (TOML, YAML or JSON)
    #[arg(long, short, env = "H5AI_CONFIG")]
    config: Option<String>,

    /// Override the configured base URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List top-level series
    Popular {
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// List recently updated series
    Latest {
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Search series
    Search {
        query: String,
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Show metadata of a series
    Details { reference: String },
    /// List episodes of a series
    Episodes { reference: String },
    /// Resolve the playable streams of an episode
    Videos { reference: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn container(reference: String) -> Container {
    Container {
        title: String::new(),
        reference,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.source.base_url = base_url;
    }

    logging::init_logging(&config.logging)?;

    let source = H5aiSource::new(config.source)?;
    info!(source = source.name(), base_url = %source.client().base_url(), "h5ai source ready");

    match args.command {
        Command::Popular { page } => print_json(&source.popular(page).await?)?,
        Command::Latest { page } => print_json(&source.latest(page).await?)?,
        Command::Search { query, page } => print_json(&source.search(page, &query, &[]).await?)?,
        Command::Details { reference } => {
            print_json(&source.container_details(&container(reference)).await?)?;
        }
        Command::Episodes { reference } => {
            print_json(&source.episodes(&container(reference)).await?)?;
        }
        Command::Videos { reference } => {
            let episode = Episode {
                title: String::new(),
                ordinal: 0.0,
                reference,
            };
            print_json(&source.videos(&episode).await?)?;
        }
    }

    Ok(())
}
