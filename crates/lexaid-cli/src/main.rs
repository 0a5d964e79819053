use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use lexaid_client::api::BackendClient;
use lexaid_client::api::DEFAULT_BASE_URL;
use lexaid_client::chat::run_chat;
use lexaid_client::upload::run_upload;
use lexaid_core::actions::SessionAction;
use lexaid_core::config::Config;
use lexaid_core::persistence::SessionSnapshotStore;
use lexaid_core::state::UserRole;
use lexaid_core::store::SessionStore;

mod render;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("lexaid {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "analyze" => cmd_analyze(args.collect()),
        "ask" => cmd_ask(args.collect()),
        "status" => cmd_status(),
        "details" => cmd_section(render::Section::KeyDetails),
        "report" => cmd_section(render::Section::Report),
        "checklist" => cmd_section(render::Section::Checklist),
        "history" => cmd_section(render::Section::History),
        "reset" => cmd_reset(),
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

fn cmd_analyze(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (file, role, timeout) = parse_analyze_args(args)?;
    let config = load_config();
    let mut store = open_store(&config)?;
    let client = BackendClient::new(resolve_base_url(&config));

    println!("Analyzing {} as {} ...", file.display(), role.label());
    println!("(press Ctrl-C to cancel)");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });
        if let Some(limit) = timeout {
            let trigger = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(limit).await;
                trigger.cancel();
            });
        }
        run_upload(&mut store, &client, &file, role, cancel).await
    })?;

    render::print_status(store.state());
    render::print_key_details(store.state());
    Ok(())
}

fn cmd_ask(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let question = args.join(" ");
    if question.trim().is_empty() {
        return Err("usage: lexaid ask <question>".into());
    }
    let config = load_config();
    let mut store = open_store(&config)?;
    let client = BackendClient::new(resolve_base_url(&config));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let reply = runtime.block_on(run_chat(&mut store, &client, &question))?;

    println!("assistant: {reply}");
    Ok(())
}

fn cmd_status() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let store = open_store(&config)?;
    render::print_status(store.state());
    Ok(())
}

fn cmd_section(section: render::Section) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let store = open_store(&config)?;
    render::print_section(store.state(), section);
    Ok(())
}

fn cmd_reset() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;
    store.dispatch(SessionAction::ClearState);
    println!("Session cleared.");
    Ok(())
}

fn parse_analyze_args(
    args: Vec<String>,
) -> Result<(PathBuf, UserRole, Option<Duration>), Box<dyn std::error::Error>> {
    let mut file = None;
    let mut role = None;
    let mut timeout = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--file requires a path".into());
                };
                file = Some(PathBuf::from(value));
                i += 2;
            }
            "--role" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--role requires plaintiff or defendant".into());
                };
                let Some(parsed) = UserRole::parse(value) else {
                    return Err(format!("invalid role: {value}").into());
                };
                role = Some(parsed);
                i += 2;
            }
            "--timeout" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--timeout requires a number of seconds".into());
                };
                let Ok(secs) = value.parse::<u64>() else {
                    return Err(format!("invalid timeout: {value}").into());
                };
                timeout = Some(Duration::from_secs(secs));
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    let Some(file) = file else {
        return Err("--file is required".into());
    };
    let Some(role) = role else {
        return Err("--role is required (plaintiff or defendant)".into());
    };
    Ok((file, role, timeout))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LEXAID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Config {
    let Some(path) = dirs::config_dir().map(|dir| dir.join("lexaid").join("config.toml")) else {
        return Config::default();
    };
    let Ok(raw) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
            Config::default()
        }
    }
}

fn resolve_base_url(config: &Config) -> String {
    if let Ok(url) = env::var("LEXAID_BACKEND_URL") {
        if !url.trim().is_empty() {
            return url;
        }
    }
    config
        .backend
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn open_store(config: &Config) -> Result<SessionStore, Box<dyn std::error::Error>> {
    let dir = match &config.storage.dir {
        Some(dir) => dir.clone(),
        None => dirs::data_dir()
            .map(|dir| dir.join("lexaid"))
            .unwrap_or_else(|| PathBuf::from(".lexaid")),
    };
    let snapshots = SessionSnapshotStore::open(dir)?;
    Ok(SessionStore::open(snapshots))
}

fn print_help() {
    println!("lexaid — analyze a legal document and ask questions about it");
    println!();
    println!("Usage:");
    println!("  lexaid analyze --file <path> --role <plaintiff|defendant> [--timeout <secs>]");
    println!("  lexaid ask <question>");
    println!("  lexaid status");
    println!("  lexaid details      key details of the analyzed document");
    println!("  lexaid report       textual analysis and clause breakdown");
    println!("  lexaid checklist    actionable checklist");
    println!("  lexaid history      chat transcript");
    println!("  lexaid reset        clear the session");
    println!();
    println!("Environment:");
    println!("  LEXAID_BACKEND_URL  override the analysis backend URL");
    println!("  LEXAID_LOG          tracing filter (default: warn)");
}
