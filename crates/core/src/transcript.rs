//! Transcript-related types.

/// The speaker of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The assistant side of the conversation.
    Assistant,
    /// The candidate being screened.
    Candidate,
}

/// An entry in the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub(crate) speaker: Speaker,
    pub(crate) text: String,
}

impl Entry {
    /// Returns the speaker of this entry.
    #[inline]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the displayed text of this entry.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered log of displayed conversation turns.
///
/// The log is append-only, entries are never mutated after they are
/// pushed.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub(crate) fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(Entry {
            speaker,
            text: text.into(),
        });
    }

    /// Returns the entries in display order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the transcript has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
