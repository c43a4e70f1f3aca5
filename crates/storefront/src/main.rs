//! `maskshop` command-line entry point.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    use maskshop_storefront::cli::Cli;

    // `MASKSHOP_LOG_FORMAT=json` for machine-readable logs.
    match std::env::var("MASKSHOP_LOG_FORMAT").as_deref() {
        Ok("json") => maskshop_observability::init(),
        _ => maskshop_observability::init_pretty(),
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(cli: maskshop_storefront::cli::Cli) -> anyhow::Result<()> {
    use std::io;
    use std::path::PathBuf;

    use maskshop_storefront::cli::build_storefront;
    use maskshop_storefront::{RecordingNavigator, WriteNavigator};

    // Flags win over the environment.
    let catalog = cli
        .catalog
        .clone()
        .or_else(|| std::env::var("MASKSHOP_CATALOG_FILE").ok().map(PathBuf::from));
    let contact = cli
        .contact
        .clone()
        .or_else(|| std::env::var("MASKSHOP_CONTACT").ok());
    if let Some(contact) = &contact {
        tracing::warn!(contact = %contact, "all orders routed to override contact");
    }

    let store = build_storefront(catalog.as_deref(), contact.as_deref())?;
    tracing::info!(pages = store.pages().len(), "storefront ready");

    if cli.json {
        // The link is part of the JSON document; nothing is opened.
        maskshop_storefront::cli::run(&cli, &store, io::stdout(), RecordingNavigator::new())
    } else {
        maskshop_storefront::cli::run(&cli, &store, io::stdout(), WriteNavigator::new(io::stdout()))
    }
}

// The browser build starts from `frontend::main` via `wasm_bindgen(start)`.
#[cfg(target_arch = "wasm32")]
fn main() {}
