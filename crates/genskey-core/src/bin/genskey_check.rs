//! Checks the built-in dashboard catalog and resolves paths against it.
//!
//! ```text
//! genskey-check [PATH...]
//! ```
//!
//! Exits with status 1 when a sidebar label is untranslated in any language.

use std::process::ExitCode;

use genskey_core::logging::{self, LoggingConfig};
use genskey_core::{Language, RouteMatch, ShellConfig, catalog};
use tracing::{error, info};

fn main() -> ExitCode {
    let _guard = match logging::init(&LoggingConfig::auto()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    match run(std::env::args().skip(1).collect()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Check failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(paths: Vec<String>) -> genskey_core::Result<bool> {
    let config = ShellConfig::load()?;
    let shell = catalog::dashboard_shell(&config)?;
    let localization = shell.localization();
    let mut complete = true;

    for language in Language::ALL {
        let missing = localization.missing_keys(language);
        let missing_labels: Vec<&str> = shell
            .navigation()
            .label_keys()
            .into_iter()
            .filter(|key| !localization.has_key(language, key))
            .collect();

        info!(
            "{}: {} missing keys, {} missing sidebar labels",
            language,
            missing.len(),
            missing_labels.len()
        );
        for key in &missing {
            println!("missing [{language}] {key}");
        }
        for key in &missing_labels {
            println!("missing sidebar label [{language}] {key}");
        }
        complete &= missing_labels.is_empty();
    }

    for path in paths {
        match shell.routes().resolve(&path) {
            RouteMatch::Found {
                page,
                path: resolved,
                remainder,
                ..
            } => println!("{path} -> {page:?} ({resolved}, remainder '{remainder}')"),
            RouteMatch::NotFound { path: resolved } => println!("{path} -> not found ({resolved})"),
        }
    }

    Ok(complete)
}
