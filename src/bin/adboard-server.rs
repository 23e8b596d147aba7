use std::path::PathBuf;

use adboard::server::{AdStore, BoardHttpState, ServerConfig, router};

const USAGE: &str =
    "usage: adboard-server [config.toml] [--listen HOST:PORT] [--sqlite PATH] [--json-logs]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut listen: Option<String> = None;
    let mut sqlite: Option<PathBuf> = None;
    let mut json_logs = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--listen" | "--addr" => {
                listen = Some(args.next().ok_or("missing value for --listen/--addr")?);
            }
            "--sqlite" => {
                sqlite = Some(args.next().ok_or("missing value for --sqlite")?.into());
            }
            "--json-logs" => {
                json_logs = true;
            }
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown flag: {other}\n{USAGE}").into());
            }
            other => {
                if config_path.is_some() {
                    return Err(format!("unexpected argument: {other}\n{USAGE}").into());
                }
                config_path = Some(other.into());
            }
        }
    }

    init_tracing(json_logs);

    let mut config = match config_path {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::default(),
    };
    if listen.is_some() {
        config.listen = listen;
    }
    if sqlite.is_some() {
        config.sqlite = sqlite;
    }

    let listen = config
        .listen
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());
    let sqlite = config
        .sqlite
        .unwrap_or_else(|| PathBuf::from("adboard.sqlite"));

    let store = AdStore::new(&sqlite);
    store.init().await?;

    let app = router(BoardHttpState::new(store));
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    tracing::info!(%listen, sqlite = %sqlite.display(), "adboard server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(json_logs: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
