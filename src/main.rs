use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use contact_directory::config::AppConfig;
use contact_directory::logging::init_logging;
use contact_directory::{ContactPatch, ContactStore, LatencySimulator, QueryOptions, SledStore};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts matching the given filters
    List {
        /// Search term
        #[arg(short, long)]
        q: Option<String>,

        /// Only favorites
        #[arg(short, long)]
        favorite: bool,

        /// Category filter ("all" for none)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: last, first, company, recent or favorite
        #[arg(short, long, default_value = "last")]
        sort: String,

        /// Tag substring filter
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show a single contact
    Show {
        /// Contact id
        id: String,
    },
    /// Create a blank contact
    New,
    /// Edit fields of a contact
    Edit {
        /// Contact id
        id: String,

        #[command(flatten)]
        fields: EditFields,
    },
    /// Mark or unmark a contact as favorite
    Favorite {
        /// Contact id
        id: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        off: bool,
    },
    /// Delete a contact
    Delete {
        /// Contact id
        id: String,
    },
    /// Show collection statistics
    Stats,
    /// Export all contacts as JSON
    Export {
        /// Output file (defaults to the configured export path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct EditFields {
    /// First name
    #[arg(long)]
    first: Option<String>,
    /// Last name
    #[arg(long)]
    last: Option<String>,
    /// Company
    #[arg(long)]
    company: Option<String>,
    /// Location
    #[arg(long)]
    location: Option<String>,
    /// Avatar URL
    #[arg(long)]
    avatar: Option<String>,
    /// Notes
    #[arg(long)]
    notes: Option<String>,
    /// Email
    #[arg(long)]
    email: Option<String>,
    /// Phone
    #[arg(long)]
    phone: Option<String>,
    /// Twitter handle
    #[arg(long)]
    twitter: Option<String>,
    /// Category
    #[arg(long)]
    category: Option<String>,
    /// Favorite ("true" or "1" to set)
    #[arg(long)]
    favorite: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
}

impl From<EditFields> for ContactPatch {
    fn from(fields: EditFields) -> Self {
        Self {
            first: fields.first,
            last: fields.last,
            company: fields.company,
            location: fields.location,
            avatar_url: fields.avatar,
            notes: fields.notes,
            email: fields.email,
            phone: fields.phone,
            twitter_handle: fields.twitter,
            category: fields.category,
            favorite: fields.favorite.map(Into::into),
            tags: fields.tags.as_deref().map(Into::into),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let _log_guard = init_logging(
        Some(&config.get_log_level()),
        config.logging.file_path.as_deref().map(Path::new),
        config.logging.format == "json",
    )?;

    let cli = Cli::parse();

    let kv = SledStore::open(Path::new(&config.storage.path), &config.storage.tree)
        .with_context(|| format!("Failed to open contact store at {}", config.storage.path))?;
    let latency = Arc::new(LatencySimulator::from_config(&config.latency));
    let store = ContactStore::new(Box::new(kv), latency);

    match cli.command {
        Commands::List {
            q,
            favorite,
            category,
            sort,
            tag,
        } => {
            let options = QueryOptions {
                q,
                favorite_only: Some(favorite.into()),
                category,
                sort_by: Some(sort),
                tag,
                ..QueryOptions::default()
            };
            print_json(&store.list(options).await?)?;
        },
        Commands::Show { id } => match store.get(&id).await? {
            Some(contact) => print_json(&contact)?,
            None => anyhow::bail!("No contact found for {id}"),
        },
        Commands::New => {
            let contact = store.create().await?;
            info!("Created contact {}", contact.id);
            print_json(&contact)?;
        },
        Commands::Edit { id, fields } => {
            print_json(&store.update(&id, fields.into()).await?)?;
        },
        Commands::Favorite { id, off } => {
            print_json(&store.set_favorite(&id, !off).await?)?;
        },
        Commands::Delete { id } => {
            if store.delete(&id).await? {
                info!("Deleted contact {}", id);
            } else {
                anyhow::bail!("No contact found for {id}");
            }
        },
        Commands::Stats => print_json(&store.stats().await?)?,
        Commands::Export { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&config.export.output_path));
            let count = store.export_json(&path).await?;
            info!("Exported {} contacts to {}", count, path.display());
        },
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
