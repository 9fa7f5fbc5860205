//! The speech channel and the delivery boundary exposed to the rest of the host.

use tracing::{debug, info, trace, warn};

use crate::config::SpeechConfig;
use crate::encoding::to_wide;
use crate::error::SpeechError;
use crate::provider::{DefaultLoader, ProviderLoader, ScreenReaderProvider};

/// Anything that can speak a short string to the player.
///
/// `interrupt = true` asks the provider to cancel speech in progress before
/// starting; `false` queues after it. Delivery is best-effort and never fails
/// from the caller's point of view.
pub trait SpeechSink {
    fn speak(&mut self, text: &str, interrupt: bool);
}

impl<S: SpeechSink + ?Sized> SpeechSink for &mut S {
    fn speak(&mut self, text: &str, interrupt: bool) {
        (**self).speak(text, interrupt);
    }
}

enum ChannelState<P> {
    Uninitialized,
    Active {
        provider: P,
        screen_reader: Option<String>,
    },
    Unavailable,
}

/// Screen reader channel with a load/unload lifecycle.
///
/// States: uninitialized, active (provider bound and loaded), unavailable
/// (no provider or a broken one). Only [`init`](Self::init) leaves the
/// unavailable state.
pub struct SpeechOutput<L: ProviderLoader = DefaultLoader> {
    loader: L,
    try_fallback: bool,
    state: ChannelState<L::Provider>,
}

impl SpeechOutput<DefaultLoader> {
    /// Creates an uninitialized channel using this platform's provider.
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(DefaultLoader::from_config(config), config.try_fallback)
    }
}

impl<L: ProviderLoader> SpeechOutput<L> {
    pub fn new(loader: L, try_fallback: bool) -> Self {
        Self {
            loader,
            try_fallback,
            state: ChannelState::Uninitialized,
        }
    }

    /// Locates and loads the provider.
    ///
    /// A missing provider is not an error: the channel becomes inactive and
    /// `Ok(())` is returned. Calling `init` again shuts down any active
    /// provider and retries from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::MissingEntryPoint`] if the provider exists but is
    /// unusable. The channel stays inactive.
    pub fn init(&mut self) -> Result<(), SpeechError> {
        self.shutdown();

        let mut provider = match self.loader.open() {
            Ok(Some(provider)) => provider,
            Ok(None) => {
                info!("no screen reader provider found, speech output disabled");
                self.state = ChannelState::Unavailable;
                return Ok(());
            }
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "screen reader provider unusable");
                self.state = ChannelState::Unavailable;
                return Err(err);
            }
        };

        provider.load();

        if self.try_fallback && provider.enable_fallback(true) {
            debug!("speech fallback engine enabled");
        }

        let screen_reader = provider.detect_screen_reader();
        match &screen_reader {
            Some(name) => info!(screen_reader = %name, "detected screen reader"),
            None => info!("no screen reader detected, using fallback voice if enabled"),
        }

        self.state = ChannelState::Active {
            provider,
            screen_reader,
        };
        info!("speech output initialized");
        Ok(())
    }

    /// Unloads the provider. Safe to call in any state, any number of times.
    pub fn shutdown(&mut self) {
        let previous = std::mem::replace(&mut self.state, ChannelState::Uninitialized);
        if let ChannelState::Active { mut provider, .. } = previous {
            provider.unload();
            info!("speech output shut down");
        }
    }

    /// Whether a provider is loaded and usable.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ChannelState::Active { .. })
    }

    /// Screen reader reported by the provider at init.
    pub fn screen_reader(&self) -> Option<&str> {
        match &self.state {
            ChannelState::Active { screen_reader, .. } => screen_reader.as_deref(),
            _ => None,
        }
    }
}

impl<L: ProviderLoader> SpeechSink for SpeechOutput<L> {
    fn speak(&mut self, text: &str, interrupt: bool) {
        let ChannelState::Active { provider, .. } = &mut self.state else {
            return;
        };
        if text.is_empty() {
            return;
        }

        let Some(wide) = to_wide(text) else {
            trace!(text, "dropping utterance that cannot be encoded");
            return;
        };

        debug!(text, interrupt, "speaking");
        if !provider.output(&wide, interrupt) {
            trace!(text, "speech provider rejected utterance");
        }
    }
}

impl<L: ProviderLoader> Drop for SpeechOutput<L> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
