//! Speech channel configuration.
use std::env;
use std::path::PathBuf;

use tracing::warn;

const LIBRARY_VAR: &str = "SPEECH_TOLK_LIBRARY";
const TRY_SAPI_VAR: &str = "SPEECH_TRY_SAPI";

/// Settings for locating and driving the screen reader provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechConfig {
    /// Library searched for at init. Relative paths resolve through the
    /// platform's normal library search order (game directory first on Windows).
    pub library_path: PathBuf,

    /// Ask the provider to fall back to its built-in synthesiser when no
    /// screen reader is running.
    pub try_fallback: bool,
}

impl SpeechConfig {
    pub const DEFAULT_LIBRARY: &'static str = "Tolk.dll";
    pub const DEFAULT_TRY_FALLBACK: bool = true;

    /// Construct speech configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SPEECH_TOLK_LIBRARY` - Provider library path (default: `Tolk.dll`,
    ///   also used when the variable is blank)
    /// - `SPEECH_TRY_SAPI` - Enable the SAPI fallback voice (default: true).
    ///   Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`; anything else
    ///   is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(LIBRARY_VAR).filter(|path| !path.trim().is_empty()) {
            config.library_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(TRY_SAPI_VAR) {
            match parse_flag(&value) {
                Some(try_fallback) => config.try_fallback = try_fallback,
                None => warn!(
                    var = TRY_SAPI_VAR,
                    value = %value,
                    "unrecognized flag value, keeping default"
                ),
            }
        }

        config
    }

    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = path.into();
        self
    }

    pub fn with_try_fallback(mut self, try_fallback: bool) -> Self {
        self.try_fallback = try_fallback;
        self
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(Self::DEFAULT_LIBRARY),
            try_fallback: Self::DEFAULT_TRY_FALLBACK,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
