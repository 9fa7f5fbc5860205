//! Screen reader provider abstraction.
//!
//! The speech channel talks to the provider through two small traits:
//! [`ProviderLoader`] locates and binds a provider at init, and
//! [`ScreenReaderProvider`] is the bound capability set. Platforms without a
//! provider use [`NullLoader`], which always reports the provider as absent.

use crate::config::SpeechConfig;
use crate::error::SpeechError;

/// A bound screen reader provider.
///
/// Text handed to [`output`](Self::output) is already NUL-terminated UTF-16.
pub trait ScreenReaderProvider {
    /// Initializes the provider. Called once, right after binding.
    fn load(&mut self);

    /// Releases the provider. Called at most once per successful `load`.
    fn unload(&mut self);

    /// Delivers text. Returns `false` if the provider rejected it.
    fn output(&mut self, text: &[u16], interrupt: bool) -> bool;

    /// Name of the running screen reader, if the provider can detect one.
    fn detect_screen_reader(&self) -> Option<String>;

    /// Toggles the provider's built-in synthesiser for use when no screen
    /// reader is running. Returns `false` if the provider has no such engine.
    fn enable_fallback(&mut self, enable: bool) -> bool;
}

/// Locates and binds a provider.
pub trait ProviderLoader {
    type Provider: ScreenReaderProvider;

    /// Binds the provider.
    ///
    /// Returns `Ok(None)` if no provider is installed, which is the expected
    /// case on most machines.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::MissingEntryPoint`] if a provider was found but
    /// is unusable. Implementations must release whatever they opened before
    /// returning the error.
    fn open(&self) -> Result<Option<Self::Provider>, SpeechError>;
}

/// Provider type for builds without a screen reader backend. Never constructed.
#[derive(Debug)]
pub enum NullProvider {}

impl ScreenReaderProvider for NullProvider {
    fn load(&mut self) {
        match *self {}
    }

    fn unload(&mut self) {
        match *self {}
    }

    fn output(&mut self, _text: &[u16], _interrupt: bool) -> bool {
        match *self {}
    }

    fn detect_screen_reader(&self) -> Option<String> {
        match *self {}
    }

    fn enable_fallback(&mut self, _enable: bool) -> bool {
        match *self {}
    }
}

/// Loader that never finds a provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLoader;

impl NullLoader {
    pub fn from_config(_config: &SpeechConfig) -> Self {
        Self
    }
}

impl ProviderLoader for NullLoader {
    type Provider = NullProvider;

    fn open(&self) -> Result<Option<NullProvider>, SpeechError> {
        Ok(None)
    }
}

/// Loader used by [`crate::SpeechOutput::from_config`] on this platform.
#[cfg(windows)]
pub type DefaultLoader = crate::tolk::TolkLoader;

/// Loader used by [`crate::SpeechOutput::from_config`] on this platform.
#[cfg(not(windows))]
pub type DefaultLoader = NullLoader;
