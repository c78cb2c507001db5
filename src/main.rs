use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkhub::api::{self, AppState, ServerConfig};
use linkhub::directory::content;
use linkhub::routes::RouteTable;
use linkhub::sitemap;

#[derive(Parser)]
#[command(name = "linkhub")]
#[command(about = "Curated link directory server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the LinkHub server
    Serve {
        /// Port for HTTP
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Build the directory and validate it against the route table
    Check,
    /// Print the sitemap XML to stdout
    Sitemap {
        /// Absolute base URL for <loc> entries
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "linkhub=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await?,
        Some(Commands::Check) => {
            let directory = content::load()?;
            let routes = RouteTable::standard();
            routes.validate(&directory)?;
            println!(
                "directory ok: {} sections, {} routes",
                directory.all().len(),
                routes.static_routes().len()
            );
        }
        Some(Commands::Sitemap { base_url }) => {
            let directory = content::load()?;
            let routes = RouteTable::standard();
            routes.validate(&directory)?;
            print!("{}", sitemap::render(&base_url, &routes, content::revision()));
        }
        None => serve(3000).await?,
    }

    Ok(())
}

async fn serve(port: u16) -> anyhow::Result<()> {
    // Fail fast: the directory must be internally consistent before the
    // listener binds.
    let directory = content::load()?;
    let routes = RouteTable::standard();
    routes.validate(&directory)?;
    tracing::info!("directory loaded: {} sections", directory.all().len());

    let state = AppState::new(directory, routes, ServerConfig::from_env());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("LinkHub listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
