//! Linkshelf terminal client.
//!
//! Talks to a running `linkshelf-server` through [`linkshelf::client::BookmarkClient`].
//! The API location comes from `--api-url` or `LINKSHELF_API_URL`.
//!
//! ```bash
//! linkshelf list --tag docs
//! linkshelf list --search react
//! linkshelf add https://www.rust-lang.org "Rust" -t lang -t docs
//! linkshelf edit <ID> https://www.rust-lang.org "Rust" -d "The Rust language"
//! linkshelf delete <ID>
//! ```

use std::process;

use clap::{Parser, Subcommand};

use linkshelf::client::{format_api_error, BookmarkClient};
use linkshelf::config::ClientConfig;
use linkshelf::services::search::filter_by_term;
use linkshelf::types::bookmark::{Bookmark, BookmarkInput};
use linkshelf::types::errors::ClientError;

#[derive(Parser)]
#[command(name = "linkshelf")]
#[command(about = "Manage saved links on a Linkshelf server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the API (overrides LINKSHELF_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookmarks
    List {
        /// Only bookmarks carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only bookmarks whose title or URL contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Save a new bookmark
    Add {
        url: String,
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Tag to attach (repeatable, up to 5)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },

    /// Replace every editable field of a bookmark
    Edit {
        id: String,
        url: String,
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a bookmark
    Delete { id: String },

    /// Check that the server is up
    Health,
}

fn build_input(url: String, title: String, description: Option<String>, tags: Vec<String>) -> BookmarkInput {
    let mut input = BookmarkInput::new(url, title).with_tags(tags);
    if let Some(description) = description {
        input = input.with_description(description);
    }
    input
}

fn print_bookmark(bookmark: &Bookmark) {
    println!("{}  {}", bookmark.id, bookmark.title);
    println!("    {}", bookmark.url);
    if !bookmark.description.is_empty() {
        println!("    {}", bookmark.description);
    }
    if !bookmark.tags.is_empty() {
        let tags: Vec<String> = bookmark.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("    {}", tags.join(" "));
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = match cli.api_url {
        Some(api_url) => ClientConfig { api_url },
        None => ClientConfig::from_env(),
    };
    let client = BookmarkClient::from_config(&config)?;

    match cli.command {
        Commands::List { tag, search } => {
            let bookmarks = client.fetch_bookmarks(tag.as_deref()).await?;
            let shown = filter_by_term(&bookmarks, search.as_deref().unwrap_or(""));
            if shown.is_empty() {
                println!("No bookmarks found.");
            }
            for bookmark in shown {
                print_bookmark(bookmark);
            }
        }
        Commands::Add {
            url,
            title,
            description,
            tags,
        } => {
            let created = client
                .create_bookmark(&build_input(url, title, description, tags))
                .await?;
            println!("Saved:");
            print_bookmark(&created);
        }
        Commands::Edit {
            id,
            url,
            title,
            description,
            tags,
        } => {
            let updated = client
                .update_bookmark(&id, &build_input(url, title, description, tags))
                .await?;
            println!("Updated:");
            print_bookmark(&updated);
        }
        Commands::Delete { id } => {
            let deleted = client.delete_bookmark(&id).await?;
            println!("{}: {}", deleted.message, deleted.bookmark.title);
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("{} ({})", health.status, client.base_url());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", format_api_error(Some(&e)));
        process::exit(1);
    }
}
