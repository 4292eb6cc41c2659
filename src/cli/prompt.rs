//! Operator prompts
//!
//! Anything not supplied on the command line is asked for interactively.
//! The prompts mirror the inputs a run needs: credentials, environment,
//! and the CSV file.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::run::RunArgs;
use crate::core::Environment;

/// Everything a run needs, fully resolved
#[derive(Debug)]
pub struct RunInput {
    pub org_id: String,
    pub app_id: String,
    pub app_secret: String,
    pub file: PathBuf,
    pub environment: Environment,
}

/// Fill in whatever the command line left out
pub fn complete_run_input(args: &RunArgs) -> Result<RunInput> {
    let theme = ColorfulTheme::default();

    let org_id = match &args.org_id {
        Some(value) => value.clone(),
        None => Input::with_theme(&theme)
            .with_prompt("orgId")
            .interact_text()
            .into_diagnostic()?,
    };

    let app_id = match &args.app_id {
        Some(value) => value.clone(),
        None => Input::with_theme(&theme)
            .with_prompt("appId")
            .interact_text()
            .into_diagnostic()?,
    };

    let app_secret = match &args.app_secret {
        Some(value) => value.clone(),
        None => Password::with_theme(&theme)
            .with_prompt("appSecret")
            .interact()
            .into_diagnostic()?,
    };

    let file = match &args.file {
        Some(value) => value.clone(),
        None => {
            let path: String = Input::with_theme(&theme)
                .with_prompt("CSV file")
                .interact_text()
                .into_diagnostic()?;
            PathBuf::from(path)
        }
    };

    let environment = match args.env {
        Some(value) => value,
        None => {
            let choices = Environment::all();
            let labels: Vec<String> = choices.iter().map(|e| e.to_string()).collect();
            let index = Select::with_theme(&theme)
                .with_prompt("Environment")
                .items(&labels)
                .default(1) // sandbox
                .interact()
                .into_diagnostic()?;
            choices[index]
        }
    };

    Ok(RunInput {
        org_id,
        app_id,
        app_secret,
        file,
        environment,
    })
}

/// Block until the operator says the app-linking flow is done
pub fn confirm_linked() -> Result<()> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Confirm once you have linked the app to the org")
        .default(true)
        .interact()
        .into_diagnostic()?;
    Ok(())
}
