//! dict.rs - The dictionary entry model shared by all automatons.
//!
//! An [`Entry`] describes one banned fragment together with its category
//! bit-set, severity level and free-form tags. Entries are immutable once
//! handed to a build; the automatons take ownership of them.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category or level name cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNameError {
    #[error("unknown category name '{0}'")]
    Category(String),

    #[error("unknown level name '{0}'")]
    Level(String),
}

/// Category of a banned fragment, stored as a bit-flag set so a single
/// entry can belong to several categories at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Category(u32);

impl Category {
    /// Political content.
    pub const POLITICAL: Category = Category(1);
    /// Pornographic content.
    pub const PORNOGRAPHIC: Category = Category(1 << 1);
    /// Violence and gore.
    pub const VIOLENCE: Category = Category(1 << 2);
    /// Abusive and insulting words.
    pub const ABUSE: Category = Category(1 << 3);
    /// Advertisement and spam.
    pub const AD: Category = Category(1 << 4);
    /// Illegal activities.
    pub const ILLEGAL: Category = Category(1 << 5);
    /// Everything else.
    pub const OTHER: Category = Category(1 << 6);

    const ALL_NAMED: [(Category, &'static str); 7] = [
        (Category::POLITICAL, "political"),
        (Category::PORNOGRAPHIC, "pornographic"),
        (Category::VIOLENCE, "violence"),
        (Category::ABUSE, "abuse"),
        (Category::AD, "ad"),
        (Category::ILLEGAL, "illegal"),
        (Category::OTHER, "other"),
    ];

    /// The empty category set.
    pub const fn empty() -> Category {
        Category(0)
    }

    /// Returns true if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if any flag of `other` is also set on `self`.
    pub const fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true if every flag of `other` is set on `self`.
    pub const fn contains(self, other: Category) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the set with the flags of `other` removed.
    pub const fn without(self, other: Category) -> Category {
        Category(self.0 & !other.0)
    }

    /// The names of all flags set on this value, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        Self::ALL_NAMED
            .iter()
            .filter(|(flag, _)| self.intersects(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Category) {
        self.0 |= rhs.0;
    }
}

impl FromStr for Category {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_NAMED
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(flag, _)| *flag)
            .ok_or_else(|| ParseNameError::Category(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join("|"))
    }
}

// A single flag serializes as its name, a union as a list of names. Both
// shapes are accepted on input so dictionary files stay hand-editable.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        if names.len() == 1 {
            serializer.serialize_str(names[0])
        } else {
            let mut seq = serializer.serialize_seq(Some(names.len()))?;
            for name in names {
                seq.serialize_element(name)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            One(String),
            Many(Vec<String>),
        }

        let names = match Repr::deserialize(deserializer)? {
            Repr::One(name) => vec![name],
            Repr::Many(names) => names,
        };
        let mut category = Category::empty();
        for name in names {
            category |= name.parse().map_err(de::Error::custom)?;
        }
        Ok(category)
    }
}

/// Severity level of a banned fragment, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Level {
    /// The lowercase name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Critical => "critical",
        }
    }
}

impl FromStr for Level {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            "critical" => Ok(Level::Critical),
            other => Err(ParseNameError::Level(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One banned fragment with its metadata.
///
/// `text` must be non-empty; an empty-text entry is rejected at build
/// time. `tags` are opaque to the matching layer and only carried
/// through for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(default = "default_level")]
    pub level: Level,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

fn default_category() -> Category {
    Category::OTHER
}

fn default_level() -> Level {
    Level::Medium
}

impl Entry {
    /// Creates an entry with the default `other` category and `medium` level.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: Category::OTHER,
            level: Level::Medium,
            tags: Vec::new(),
        }
    }

    /// Sets the category, consuming and returning the entry.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the severity level, consuming and returning the entry.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_bit_operations() {
        let c = Category::POLITICAL | Category::ABUSE;
        assert!(c.intersects(Category::ABUSE));
        assert!(!c.intersects(Category::AD));
        assert!(c.contains(Category::POLITICAL | Category::ABUSE));
        assert!(!c.contains(Category::POLITICAL | Category::AD));
        assert_eq!(c.without(Category::ABUSE), Category::POLITICAL);
    }

    #[test]
    fn category_serde_single_and_union() {
        let single: Category = serde_json::from_str("\"violence\"").unwrap();
        assert_eq!(single, Category::VIOLENCE);

        let union: Category = serde_json::from_str("[\"ad\", \"illegal\"]").unwrap();
        assert_eq!(union, Category::AD | Category::ILLEGAL);

        assert_eq!(serde_json::to_string(&single).unwrap(), "\"violence\"");
        assert_eq!(serde_json::to_string(&union).unwrap(), "[\"ad\",\"illegal\"]");
    }

    #[test]
    fn category_unknown_name_fails() {
        let err = serde_json::from_str::<Category>("\"gossip\"").unwrap_err();
        assert!(err.to_string().contains("gossip"));
        assert_eq!(
            "gossip".parse::<Category>(),
            Err(ParseNameError::Category("gossip".to_string()))
        );
    }

    #[test]
    fn level_is_ordered() {
        assert!(Level::Low < Level::Medium);
        assert!(Level::High < Level::Critical);
        assert_eq!("critical".parse::<Level>(), Ok(Level::Critical));
    }

    #[test]
    fn entry_defaults_apply_on_deserialize() {
        let entry: Entry = serde_json::from_str("{\"text\": \"spam\"}").unwrap();
        assert_eq!(entry.category, Category::OTHER);
        assert_eq!(entry.level, Level::Medium);
        assert!(entry.tags.is_empty());
    }
}
