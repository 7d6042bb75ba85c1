//! CLI entry point for postdir

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postdir")]
#[command(version)]
#[command(about = "A minimal file-backed markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List all posts
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a post as HTML
    Show {
        slug: String,

        /// Print the markdown body instead of HTML
        #[arg(long)]
        raw: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        #[arg(short, long)]
        title: String,

        /// Slug of the new post (derived from the title when omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Markdown file to use as the body (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Replace an existing post with the same slug
        #[arg(long)]
        force: bool,
    },

    /// Edit an existing post
    Edit {
        /// Slug of the post to edit
        old_slug: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New slug
        #[arg(short, long)]
        slug: Option<String>,

        /// Markdown file with the new body
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Start the web server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postdir=debug,tower_http=debug,info"
    } else {
        "postdir=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            postdir::commands::init::init_blog(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::List { json } => {
            let blog = postdir::Blog::new(&base_dir)?;
            postdir::commands::list::run(&blog, json).await?;
        }

        Commands::Show { slug, raw, json } => {
            let blog = postdir::Blog::new(&base_dir)?;
            postdir::commands::show::run(&blog, &slug, raw, json).await?;
        }

        Commands::New {
            title,
            slug,
            file,
            force,
        } => {
            let blog = postdir::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            postdir::commands::new::run(&blog, &title, slug.as_deref(), file.as_deref(), force)
                .await?;
        }

        Commands::Edit {
            old_slug,
            title,
            slug,
            file,
        } => {
            let blog = postdir::Blog::new(&base_dir)?;
            tracing::info!("Editing post {}", old_slug);
            postdir::commands::edit::run(&blog, &old_slug, title, slug, file.as_deref()).await?;
        }

        Commands::Server { port, ip } => {
            let blog = postdir::Blog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            postdir::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("postdir version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
