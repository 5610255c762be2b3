use std::sync::Arc;

use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::{
    cli::{load_builtins, run_analyze, CliArgs},
    state::NoxScriptLanguageServer,
};

const DEFAULT_LOG_FILTER: &str = "noxscript_lsp=info,noxscript_core=info";

pub async fn run() {
    let args = CliArgs::parse();

    let builtins = load_builtins(args.builtins.as_deref()).unwrap_or_else(|e| {
        eprintln!("noxscript-lsp: {e:#}");
        std::process::exit(2);
    });

    if let Some(path) = &args.analyze {
        match run_analyze(path, args.offset, &builtins) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("noxscript-lsp analyze error: {e:#}");
                std::process::exit(2);
            }
        }
        return;
    }

    init_tracing();
    info!("loaded {} builtin functions", builtins.len());

    let builtins = Arc::new(builtins);
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(move |client| NoxScriptLanguageServer::new(client, builtins.clone()));
    Server::new(stdin, stdout, socket).serve(service).await;
}

// stdout carries the protocol, so logs always go to stderr.
fn init_tracing() {
    let filter = std::env::var("NOXSCRIPT_LSP_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
