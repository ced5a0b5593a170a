//! PetPals Server - adoption marketplace API daemon
//!
//! A pure Rust HTTP server that exposes:
//! - /auth/*        registration, login, profile
//! - /pets          filtered listing plus CRUD
//! - /categories    browsing categories
//! - /favorites/*   the per-user favorites relation (bearer-guarded)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use petpals_core::Database;

mod api;
mod auth;
mod router;
mod state;

#[cfg(test)]
mod test_helpers;

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "petpals-server", about = "PetPals adoption marketplace API")]
struct Cli {
    /// Address to bind; pass 127.0.0.1 to restrict to loopback
    #[arg(long, env = "PETPALS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PETPALS_PORT", default_value_t = 3000)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, env = "PETPALS_DB", default_value = "petpals.db")]
    db: PathBuf,

    /// Use an in-memory database (data is lost on exit)
    #[arg(long)]
    ephemeral: bool,

    /// Populate demo data on startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    info!("🚀 PetPals Server starting on port {}...", cli.port);

    let db = if cli.ephemeral {
        info!("Using in-memory database");
        Database::open_in_memory()?
    } else {
        Database::open(&cli.db)?
    };
    if cli.seed || cli.ephemeral {
        db.seed()?;
    }

    let state = AppState::new(db);
    let app = router::build_router(state);

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🐾 API available at http://localhost:{}/pets", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_binds_all_interfaces_by_default() {
        let cli = Cli::parse_from(["petpals-server"]);
        assert_eq!(cli.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(cli.port, 3000);
    }

    #[test]
    fn test_cli_host_override() {
        let cli = Cli::parse_from(["petpals-server", "--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(SocketAddr::new(cli.host, cli.port), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }
}
