//! Merit API environments
//!
//! The tool talks to one of three fixed Merit deployments. There is no
//! other configuration surface: the environment choice maps directly to a
//! base URL constant.

use clap::ValueEnum;

/// Merit deployment the run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    Staging,
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Base URL for this environment, with a trailing slash
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Staging => "https://qwebhjklr-api.merits.com/v2/",
            Environment::Sandbox => "https://sandbox-api.merits.com/v2/",
            Environment::Production => "https://api.merits.com/v2/",
        }
    }

    /// All environments, in the order they are offered to the operator
    pub fn all() -> [Environment; 3] {
        [
            Environment::Staging,
            Environment::Sandbox,
            Environment::Production,
        ]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Staging => write!(f, "staging"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}
