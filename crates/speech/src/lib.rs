//! Screen reader output for non-visual players.
//!
//! `speech-output` hands short strings to whatever assistive technology the
//! host machine provides. The backing provider is optional: when it cannot be
//! found the channel initializes in an inert mode and every [`SpeechSink::speak`]
//! call becomes a no-op, so a missing dependency never interrupts gameplay.
//!
//! The channel is driven from the host's main loop only. Nothing here is
//! synchronized; callers must not share a [`SpeechOutput`] across threads.
pub mod config;
pub mod encoding;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod output;
pub mod provider;
#[cfg(windows)]
pub mod tolk;

pub use config::SpeechConfig;
pub use encoding::to_wide;
pub use error::SpeechError;
pub use output::{SpeechOutput, SpeechSink};
pub use provider::{
    DefaultLoader, NullLoader, NullProvider, ProviderLoader, ScreenReaderProvider,
};
#[cfg(windows)]
pub use tolk::{TolkLibrary, TolkLoader};
