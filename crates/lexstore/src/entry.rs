//! Dictionary entry value type

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One dictionary definition
///
/// Entries are immutable once built. The `word` is the lookup key and is
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    word: String,
    #[serde(rename = "partOfSpeech", alias = "part_of_speech")]
    part_of_speech: String,
    definition: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    example: Option<String>,
}

fn blank_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let example = Option::<String>::deserialize(deserializer)?;
    Ok(example.filter(|example| !example.trim().is_empty()))
}

impl Entry {
    /// Build an entry
    ///
    /// A blank example is stored as no example.
    pub fn new(
        word: impl Into<String>,
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
        example: Option<String>,
    ) -> Self {
        Self {
            word: word.into(),
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            example: example.filter(|example| !example.trim().is_empty()),
        }
    }

    /// Lookup key
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Part of speech, e.g. `noun`
    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    /// Definition text
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Usage example, if any
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Check that word, part of speech and definition are all present
    ///
    /// Returns the name of the first blank field on failure.
    pub fn check(&self) -> std::result::Result<(), &'static str> {
        if self.word.trim().is_empty() {
            return Err("word");
        }
        if self.part_of_speech.trim().is_empty() {
            return Err("partOfSpeech");
        }
        if self.definition.trim().is_empty() {
            return Err("definition");
        }
        Ok(())
    }

    /// True when [`Entry::check`] passes
    pub fn is_well_formed(&self) -> bool {
        self.check().is_ok()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word: {}", self.word)?;
        writeln!(f, "Part of speech: {}", self.part_of_speech)?;
        writeln!(f, "Definition: {}", self.definition)?;
        write!(f, "Example: {}", self.example.as_deref().unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let entry = Entry::new(
            "cat",
            "noun",
            "A small domesticated feline.",
            Some("The cat sat on the mat.".to_string()),
        );

        assert_eq!(
            entry.to_string(),
            "Word: cat\nPart of speech: noun\nDefinition: A small domesticated feline.\nExample: The cat sat on the mat."
        );
    }

    #[test]
    fn test_display_without_example() {
        let entry = Entry::new("run", "verb", "To move swiftly on foot.", None);
        assert!(entry.to_string().ends_with("Example: -"));
    }

    #[test]
    fn test_well_formed() {
        assert!(Entry::new("cat", "noun", "A feline.", None).is_well_formed());
        assert_eq!(Entry::new("  ", "noun", "A feline.", None).check(), Err("word"));
        assert_eq!(Entry::new("cat", "", "A feline.", None).check(), Err("partOfSpeech"));
        assert_eq!(Entry::new("cat", "noun", "\t", None).check(), Err("definition"));
    }

    #[test]
    fn test_deserialize_accepts_both_spellings() {
        let camel: Entry = serde_json::from_str(
            r#"{"word":"cat","partOfSpeech":"noun","definition":"A feline."}"#,
        )
        .unwrap();
        let snake: Entry = serde_json::from_str(
            r#"{"word":"cat","part_of_speech":"noun","definition":"A feline.","example":null}"#,
        )
        .unwrap();

        assert_eq!(camel, snake);
        assert_eq!(camel.example(), None);
    }

    #[test]
    fn test_blank_example_is_none() {
        let built = Entry::new("cat", "noun", "A feline.", Some(" ".to_string()));
        let parsed: Entry = serde_json::from_str(
            r#"{"word":"cat","partOfSpeech":"noun","definition":"A feline.","example":""}"#,
        )
        .unwrap();

        assert_eq!(built.example(), None);
        assert_eq!(parsed, built);
        assert!(parsed.to_string().ends_with("Example: -"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let entry = Entry::new("cat", "noun", "A feline.", Some("Here, kitty.".to_string()));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["partOfSpeech"], "noun");
        assert_eq!(json["example"], "Here, kitty.");
    }
}
