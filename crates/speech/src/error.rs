//! Speech channel errors.
//!
//! Only initialization can fail. A missing provider is reported as a successful
//! init in inactive mode, and delivery failures are absorbed by
//! [`crate::SpeechOutput::speak`], so neither appears here.

/// Errors raised while bringing up the screen reader provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    /// The provider library was found but lacks a required entry point.
    ///
    /// The half-loaded library is released before this is returned and no
    /// further calls are made into it.
    #[error("speech provider is missing required entry point `{symbol}`")]
    MissingEntryPoint { symbol: &'static str },
}

impl SpeechError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEntryPoint { .. } => "SPEECH_MISSING_ENTRY_POINT",
        }
    }
}
