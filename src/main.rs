mod config;
mod errors;
mod logging;
mod mcp;
mod repo;
mod security;
mod server;
mod stdio;
mod tools;


use crate::{config::Config, mcp::Dispatcher, repo::Repository};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transport { Stdio, Http }

const ABOUT: &str = "Preferences server: serves devcontainer templates and guides to AI assistants";
const USAGE: &str = "usage: prefs-server [--config <path>] [--transport stdio|http] [--host <addr>] [--port <port>]";

fn usage_exit(msg: &str) -> ! {
    eprintln!("{msg}");
    eprintln!("{USAGE}");
    std::process::exit(2);
}

fn help_text() -> String { format!("{ABOUT}\n{USAGE}") }

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut transport = Transport::Stdio;
    let mut host: Option<String> = None;
    let mut port: Option<u16> = None;
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i).cloned().unwrap_or_else(|| usage_exit(&format!("{flag} requires a value")))
        };
        match flag {
            "--config" => config_path = Some(PathBuf::from(value())),
            "--transport" => {
                transport = match value().as_str() {
                    "stdio" => Transport::Stdio,
                    "http" => Transport::Http,
                    other => usage_exit(&format!("unknown transport '{other}'")),
                }
            }
            "--host" => host = Some(value()),
            "--port" => {
                let raw = value();
                port = Some(raw.parse().unwrap_or_else(|_| usage_exit(&format!("invalid port '{raw}'"))));
            }
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            other => usage_exit(&format!("unknown argument '{other}'")),
        }
        i += 1;
    }

    let mut cfg = Config::load_or_default(config_path.as_deref()).context("loading config")?;
    if let Some(h) = host { cfg.server.bind_addr = h; }
    if let Some(p) = port { cfg.server.port = p; }
    cfg.validate().context("validating config")?;

    let root = cfg.repo_root().context("resolving repository root")?;
    let dispatcher = Dispatcher::new(Arc::new(Repository::new(root.clone())));

    info!(repository = %root.display(), transport = ?transport, tools = ?dispatcher.registry().list_names(), "prefs-server ready");

    match transport {
        Transport::Stdio => stdio::serve(dispatcher).await,
        Transport::Http => server::serve(cfg, dispatcher).await,
    }
}
