use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use userdesk_server::ServerConfig;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, env = "USERDESK_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, env = "USERDESK_PORT", default_value_t = 8000)]
    pub port: u16,

    #[command(flatten)]
    pub db: DbArgs,

    /// Title of the HTML shell page
    #[arg(long, env = "USERDESK_TITLE", default_value = "FastUI Demo")]
    pub title: String,

    /// Allow cross-origin requests from any origin
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip inserting the seed users on startup
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Path to the SQLite database file
    #[arg(long, env = "USERDESK_DB_PATH", default_value = "db.sqlite3")]
    pub db_path: PathBuf,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: SocketAddr::new(args.host, args.port),
            db_path: args.db.db_path,
            title: args.title,
            cors_permissive: args.cors_permissive,
            seed: !args.no_seed,
        }
    }
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from(args);
    let db_path = config.db_path.clone();
    tracing::info!(
        addr = %config.bind_addr,
        db = %db_path.display(),
        seed = config.seed,
        "starting userdesk server"
    );

    userdesk_server::run_server(config)
        .await
        .with_context(|| format!("server failed (database {})", db_path.display()))
}

pub async fn run_seed(args: DbArgs) -> Result<()> {
    let pool = userdesk_server::db::open(&args.db_path)
        .await
        .with_context(|| format!("failed to open database at {}", args.db_path.display()))?;

    let inserted = userdesk_server::db::seed_users(&pool)
        .await
        .context("failed to seed users")?;
    pool.close().await;
    tracing::info!(inserted, db = %args.db_path.display(), "database seeded");

    println!(
        "Seeded {} user(s) into {}",
        inserted,
        args.db_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[derive(Parser, Debug)]
    struct Wrapper {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_map_onto_server_config() {
        let wrapper = Wrapper::parse_from([
            "userdesk",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--db-path",
            "/tmp/users.db",
            "--no-seed",
        ]);
        let config = ServerConfig::from(wrapper.serve);

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, PathBuf::from("/tmp/users.db"));
        assert!(!config.seed);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn seed_logs_inserted_count() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let dir = tempfile::tempdir().unwrap();
        run_seed(DbArgs {
            db_path: dir.path().join("users.sqlite3"),
        })
        .await
        .unwrap();

        let text = logs.text();
        assert!(text.contains("database seeded"), "{text}");
        assert!(text.contains("inserted=4"), "{text}");
    }
}
