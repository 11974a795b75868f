use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "BIBSCREEN";

/// Report titles are cut to this many characters unless overridden.
pub const DEFAULT_TITLE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_title_chars")]
    pub title_chars: usize,
}

fn default_title_chars() -> usize {
    DEFAULT_TITLE_CHARS
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title_chars: DEFAULT_TITLE_CHARS,
        }
    }
}

impl Settings {
    /// Load from `BIBSCREEN_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::load(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load(env: Environment) -> Self {
        Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .unwrap_or_default()
    }
}
