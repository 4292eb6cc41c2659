//! `meritbulk run` command - the full ingestion workflow
//!
//! Validate the CSV, authenticate against the org (linking the app first if
//! needed), resolve every row against the remote catalog, then attach the
//! field settings. Validation happens before any network call; a validation
//! failure has no side effects.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::catalog::{AuthState, Authenticator, HttpCatalog};
use crate::cli::{prompt, GlobalOpts};
use crate::core::Environment;
use crate::entities::Template;
use crate::ingest::{attach, Pipeline};
use crate::sheet;

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Organization to act on (prompted for when omitted)
    #[arg(long)]
    pub org_id: Option<String>,

    /// Registered app id (prompted for when omitted)
    #[arg(long)]
    pub app_id: Option<String>,

    /// App secret (prompted for when omitted)
    #[arg(long, env = "MERIT_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// CSV file to ingest (prompted for when omitted)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Merit environment to target (prompted for when omitted)
    #[arg(long, value_enum)]
    pub env: Option<Environment>,
}

pub fn run(args: RunArgs, global: &GlobalOpts) -> Result<()> {
    let input = prompt::complete_run_input(&args)?;

    // Validation first: a bad file must abort before any network call.
    let records = sheet::load(&input.file)?;
    sheet::validate(&records)?;

    let mut rows: Vec<Template> = Vec::with_capacity(records.len().saturating_sub(1));
    for (index, record) in records.iter().enumerate().skip(1) {
        rows.push(sheet::row::decode(index + 1, record)?);
    }
    if !global.quiet {
        eprintln!(
            "{} CSV validated: {} template row(s)",
            style("✓").green(),
            rows.len()
        );
    }

    let authenticator = Authenticator::new(
        input.environment.base_url(),
        &input.org_id,
        &input.app_id,
        &input.app_secret,
    )?;
    let token = authenticate(&authenticator, global)?;
    if !global.quiet {
        eprintln!(
            "{} Authenticated against {} as app {}",
            style("✓").green(),
            input.environment,
            input.org_id
        );
    }

    let catalog = HttpCatalog::new(input.environment.base_url(), &input.org_id, &token)?;

    // Pass one: create-or-reuse templates and fields, row order preserved.
    let mut pipeline = Pipeline::new(&catalog, &input.org_id)?;
    if global.verbose {
        eprintln!(
            "  snapshot: {} existing template(s), {} existing field(s)",
            pipeline.known_templates(),
            pipeline.known_fields()
        );
    }

    let total = rows.len();
    let mut templates = Vec::with_capacity(total);
    for (index, row) in rows.into_iter().enumerate() {
        let template = pipeline.ingest(row)?;
        if !global.quiet {
            eprintln!(
                "{} [{}/{}] template `{}` ({} field(s))",
                style("✓").green(),
                index + 1,
                total,
                template.title,
                template.fields.len()
            );
        }
        templates.push(template);
    }

    // Pass two: attach field settings. Runs only after every row is
    // ingested, so templates can reference fields created by later rows.
    let setting_count = attach::total_settings(&templates);
    attach::attach_field_settings(&catalog, &templates, |done, total| {
        if !global.quiet {
            eprintln!("{} field setting {}/{}", style("→").blue(), done, total);
        }
    })?;

    println!(
        "{} Done: {} template(s) processed, {} field setting(s) attached",
        style("✓").green(),
        templates.len(),
        setting_count
    );
    Ok(())
}

/// Drive the auth handshake until a token comes back
///
/// Linking is human-in-the-loop: there is no retry limit and no backoff.
/// The operator can always abandon the run with Ctrl-C.
fn authenticate(authenticator: &Authenticator, global: &GlobalOpts) -> Result<String> {
    let mut state = AuthState::Unauthenticated;
    loop {
        state = match state {
            AuthState::Unauthenticated => authenticator.advance(AuthState::Unauthenticated)?,
            AuthState::AwaitingLink { link_url } => {
                eprintln!(
                    "{} This app is not linked to the org yet.",
                    style("!").yellow()
                );
                eprintln!("  Complete the linking flow at: {link_url}");
                if webbrowser::open(&link_url).is_err() && !global.quiet {
                    eprintln!("  (no browser available; open the URL manually)");
                }
                prompt::confirm_linked()?;
                authenticator.advance(AuthState::AwaitingLink { link_url })?
            }
            AuthState::Authenticated { token } => return Ok(token),
        };
    }
}
