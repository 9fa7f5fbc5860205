//! In-memory speech doubles for testing without a screen reader.

use std::sync::{Arc, Mutex};

use crate::error::SpeechError;
use crate::output::SpeechSink;
use crate::provider::{ProviderLoader, ScreenReaderProvider};

/// One call to [`SpeechSink::speak`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub interrupt: bool,
}

/// Sink that records everything it is asked to say.
#[derive(Clone, Debug, Default)]
pub struct RecordingSpeech {
    pub utterances: Vec<Utterance>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Utterance> {
        self.utterances.last()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last().map(|utterance| utterance.text.as_str())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.utterances.iter().map(|u| u.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.utterances.clear();
    }
}

impl SpeechSink for RecordingSpeech {
    fn speak(&mut self, text: &str, interrupt: bool) {
        self.utterances.push(Utterance {
            text: text.to_owned(),
            interrupt,
        });
    }
}

/// Lifecycle calls observed by a [`MockProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    Opened,
    Loaded,
    FallbackEnabled(bool),
    Output { text: String, interrupt: bool },
    Unloaded,
}

#[derive(Clone, Debug)]
enum MockBehavior {
    Absent,
    MissingEntryPoint(&'static str),
    Available {
        screen_reader: Option<String>,
        fallback_supported: bool,
        accepts_output: bool,
    },
}

/// Loader whose provider records every call into a shared log.
#[derive(Clone, Debug)]
pub struct MockLoader {
    behavior: MockBehavior,
    events: Arc<Mutex<Vec<ProviderEvent>>>,
}

impl MockLoader {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// No provider installed.
    pub fn absent() -> Self {
        Self::with_behavior(MockBehavior::Absent)
    }

    /// Provider installed but `symbol` cannot be resolved.
    pub fn missing_entry_point(symbol: &'static str) -> Self {
        Self::with_behavior(MockBehavior::MissingEntryPoint(symbol))
    }

    /// Working provider with a fallback engine.
    pub fn available(screen_reader: Option<&str>) -> Self {
        Self::with_behavior(MockBehavior::Available {
            screen_reader: screen_reader.map(str::to_owned),
            fallback_supported: true,
            accepts_output: true,
        })
    }

    /// Working provider that rejects every utterance.
    pub fn rejecting() -> Self {
        Self::with_behavior(MockBehavior::Available {
            screen_reader: None,
            fallback_supported: false,
            accepts_output: false,
        })
    }

    pub fn events(&self) -> Vec<ProviderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Text delivered to the provider, in order.
    pub fn spoken(&self) -> Vec<(String, bool)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProviderEvent::Output { text, interrupt } => Some((text, interrupt)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProviderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProviderLoader for MockLoader {
    type Provider = MockProvider;

    fn open(&self) -> Result<Option<MockProvider>, SpeechError> {
        match &self.behavior {
            MockBehavior::Absent => Ok(None),
            MockBehavior::MissingEntryPoint(symbol) => {
                Err(SpeechError::MissingEntryPoint { symbol: *symbol })
            }
            MockBehavior::Available {
                screen_reader,
                fallback_supported,
                accepts_output,
            } => {
                self.record(ProviderEvent::Opened);
                Ok(Some(MockProvider {
                    screen_reader: screen_reader.clone(),
                    fallback_supported: *fallback_supported,
                    accepts_output: *accepts_output,
                    events: Arc::clone(&self.events),
                }))
            }
        }
    }
}

/// Provider handed out by [`MockLoader`].
#[derive(Debug)]
pub struct MockProvider {
    screen_reader: Option<String>,
    fallback_supported: bool,
    accepts_output: bool,
    events: Arc<Mutex<Vec<ProviderEvent>>>,
}

impl MockProvider {
    fn record(&self, event: ProviderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ScreenReaderProvider for MockProvider {
    fn load(&mut self) {
        self.record(ProviderEvent::Loaded);
    }

    fn unload(&mut self) {
        self.record(ProviderEvent::Unloaded);
    }

    fn output(&mut self, text: &[u16], interrupt: bool) -> bool {
        let body = text.strip_suffix(&[0]).unwrap_or(text);
        self.record(ProviderEvent::Output {
            text: String::from_utf16_lossy(body),
            interrupt,
        });
        self.accepts_output
    }

    fn detect_screen_reader(&self) -> Option<String> {
        self.screen_reader.clone()
    }

    fn enable_fallback(&mut self, enable: bool) -> bool {
        if self.fallback_supported {
            self.record(ProviderEvent::FallbackEnabled(enable));
        }
        self.fallback_supported
    }
}
