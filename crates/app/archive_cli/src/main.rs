// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Write;
use std::sync::Arc;

use archive_client::{ArchiveApi, Controller, HttpApi, Session, StubApi};
use clap::Parser;
use cli::Cli;
use log::info;
use repl::Repl;

mod cli;
mod command;
mod logging;
mod render;
mod repl;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let _logger = logging::init()?;

    let args = Cli::parse();

    if !args.download_dir.is_dir() {
        return Err(Error::Custom(format!(
            "download directory does not exist: {}",
            args.download_dir.display()
        )));
    }

    let api: Arc<dyn ArchiveApi> = if args.offline {
        info!("using in-process stub API");
        Arc::new(StubApi)
    } else {
        let api = HttpApi::new(&args.api_url)?;
        info!("using API at {}", api.base_url());
        Arc::new(api)
    };

    let session = Session::new();
    info!("Conversation ID: {}", session.conversation_id());

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "{} {} — conversation {}. Type `help` for commands.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        session.conversation_id()
    )?;

    let mut repl = Repl::new(Controller::new(api), session, args.download_dir);
    repl.run(std::io::stdin().lock(), &mut stdout).await
}
