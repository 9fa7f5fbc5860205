use arrayvec::ArrayString;

use crate::config::ExplorerConfig;

/// Result of offering one name to an [`AnnouncementBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The name was added.
    Appended,
    /// The name would not fit alongside the reserved suffix margin. Later,
    /// shorter names may still be appended.
    Skipped,
    /// The name was added, the item limit was hit, and the suffix was written.
    /// Nothing more is accepted.
    Truncated,
}

/// Fixed-capacity, comma-separated list of names.
///
/// Every append leaves at least [`ExplorerConfig::SUFFIX_MARGIN`] bytes free,
/// so [`ExplorerConfig::TRUNCATION_SUFFIX`] always fits when the item limit
/// is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementBuffer<const CAP: usize> {
    text: ArrayString<CAP>,
    count: usize,
    max_items: usize,
    truncated: bool,
}

impl<const CAP: usize> AnnouncementBuffer<CAP> {
    pub fn new(max_items: usize) -> Self {
        Self {
            text: ArrayString::new(),
            count: 0,
            max_items: max_items.max(1),
            truncated: false,
        }
    }

    pub fn push(&mut self, name: &str) -> PushOutcome {
        if self.truncated {
            return PushOutcome::Truncated;
        }

        let separator = if self.count > 0 {
            ExplorerConfig::NAME_SEPARATOR
        } else {
            ""
        };
        let needed = name.len() + separator.len() + ExplorerConfig::SUFFIX_MARGIN;
        if self.text.len() + needed >= CAP {
            return PushOutcome::Skipped;
        }

        // Room for both was checked above.
        self.text.push_str(separator);
        self.text.push_str(name);
        self.count += 1;

        if self.count >= self.max_items {
            self.text.push_str(ExplorerConfig::TRUNCATION_SUFFIX);
            self.truncated = true;
            return PushOutcome::Truncated;
        }

        PushOutcome::Appended
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Names appended so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }
}
