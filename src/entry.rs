//! Dictionary entry records as delivered by the remote lookup.

use crate::grouping::Groupable;

/// A pitch accent pattern for one reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchAccent {
    /// The reading this pattern applies to
    pub reading: String,
    /// Mora positions of each downstep
    pub downsteps: Vec<u8>,
}

/// The fields that decide which entries belong in the same bag.
///
/// Two keys are equal when every field is structurally equal, with list
/// order significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermKey {
    /// Headword as written
    pub expression: String,
    /// Kana readings of the headword
    pub readings: Vec<String>,
    /// Pitch accent patterns
    pub pitch_accents: Vec<PitchAccent>,
    /// Deinflection chains that led from the looked-up text to the headword
    pub inflections: Vec<Vec<String>>,
}

impl TermKey {
    /// Creates a key with only the headword set.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Self::default()
        }
    }

    /// Appends a reading.
    #[must_use]
    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.readings.push(reading.into());
        self
    }

    /// Appends a pitch accent pattern.
    #[must_use]
    pub fn with_pitch_accent(mut self, reading: impl Into<String>, downsteps: Vec<u8>) -> Self {
        self.pitch_accents.push(PitchAccent {
            reading: reading.into(),
            downsteps,
        });
        self
    }

    /// Appends a deinflection chain.
    #[must_use]
    pub fn with_inflection<I, S>(mut self, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inflections
            .push(chain.into_iter().map(Into::into).collect());
        self
    }
}

/// One dictionary entry.
///
/// Only [`key`](Self::key) takes part in grouping; the remaining fields are
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictionaryEntry {
    /// Grouping key
    pub key: TermKey,
    /// Name of the dictionary the entry came from
    pub dictionary: String,
    /// Glossary lines
    pub definitions: Vec<String>,
    /// Part-of-speech and usage tags
    pub tags: Vec<String>,
}

impl DictionaryEntry {
    /// Creates an entry with no payload.
    #[must_use]
    pub fn new(key: TermKey, dictionary: impl Into<String>) -> Self {
        Self {
            key,
            dictionary: dictionary.into(),
            definitions: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Appends a definition.
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definitions.push(definition.into());
        self
    }

    /// Appends a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl Groupable for DictionaryEntry {
    type Key = TermKey;

    fn group_key(&self) -> &TermKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_compare_deeply() {
        let a = TermKey::new("見る")
            .with_reading("みる")
            .with_pitch_accent("みる", vec![1])
            .with_inflection(["past"]);
        let b = TermKey::new("見る")
            .with_reading("みる")
            .with_pitch_accent("みる", vec![1])
            .with_inflection(["past"]);
        assert_eq!(a, b);
    }

    #[test]
    fn list_order_matters() {
        let a = TermKey::new("x").with_reading("a").with_reading("b");
        let b = TermKey::new("x").with_reading("b").with_reading("a");
        assert_ne!(a, b);
    }

    #[test]
    fn nested_change_breaks_equality() {
        let a = TermKey::new("x").with_pitch_accent("y", vec![0]);
        let b = TermKey::new("x").with_pitch_accent("y", vec![2]);
        assert_ne!(a, b);
    }

    #[test]
    fn group_key_ignores_payload() {
        let entry = DictionaryEntry::new(TermKey::new("x"), "JMdict")
            .with_definition("thing")
            .with_tag("n");
        assert_eq!(entry.group_key(), &TermKey::new("x"));
    }
}
