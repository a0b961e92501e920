//! Password generation configuration.

mod file;

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

pub use file::{load, load_from, path, save, save_to};

/// Shortest random-character password.
pub const MIN_LENGTH: u32 = 10;
/// Longest random-character password.
pub const MAX_LENGTH: u32 = 50;

const DEFAULT_LENGTH: u32 = 16;
const DEFAULT_WORD_COUNT: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Characters,
    Words,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Characters => "characters",
            Mode::Words => "words",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "characters" => Ok(Mode::Characters),
            "words" => Ok(Mode::Words),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// A named group of characters that can be enabled for random passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterSet {
    Uppercase,
    Lowercase,
    Digits,
    Space,
    UnderscoreDash,
    Symbols,
}

impl CharacterSet {
    /// Every recognised set, in display order.
    pub const ALL: [CharacterSet; 6] = [
        CharacterSet::Uppercase,
        CharacterSet::Lowercase,
        CharacterSet::Digits,
        CharacterSet::Space,
        CharacterSet::UnderscoreDash,
        CharacterSet::Symbols,
    ];

    /// Canonical name, e.g. `UNDERSCORE_DASH`.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterSet::Uppercase => "UPPERCASE",
            CharacterSet::Lowercase => "LOWERCASE",
            CharacterSet::Digits => "DIGITS",
            CharacterSet::Space => "SPACE",
            CharacterSet::UnderscoreDash => "UNDERSCORE_DASH",
            CharacterSet::Symbols => "SYMBOLS",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CharacterSet::Uppercase => "Uppercase Letters",
            CharacterSet::Lowercase => "Lowercase Letters",
            CharacterSet::Digits => "Digits",
            CharacterSet::Space => "Space",
            CharacterSet::UnderscoreDash => "Underscore & Dash",
            CharacterSet::Symbols => "Symbols",
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterSet::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| Error::UnknownCharacterSet(s.to_string()))
    }
}

/// Enabled character sets. Membership is toggled, never appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterSets(BTreeSet<CharacterSet>);

impl CharacterSets {
    pub fn contains(&self, set: CharacterSet) -> bool {
        self.0.contains(&set)
    }

    /// Flip membership of `set`. Returns whether it is enabled afterwards.
    pub fn toggle(&mut self, set: CharacterSet) -> bool {
        if self.0.remove(&set) {
            false
        } else {
            self.0.insert(set);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterSet> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CharacterSet> for CharacterSets {
    fn from_iter<I: IntoIterator<Item = CharacterSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Password length, always within `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Length(u32);

impl Length {
    pub fn new(value: i64) -> Result<Self, Error> {
        if (i64::from(MIN_LENGTH)..=i64::from(MAX_LENGTH)).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(Error::LengthOutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Length {
    fn default() -> Self {
        Self(DEFAULT_LENGTH)
    }
}

impl TryFrom<i64> for Length {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Length::new(value)
    }
}

impl From<Length> for u32 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidLength(s.to_string()))?;
        Length::new(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Settings for random-character passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomCharacters {
    pub length: Length,
    pub enabled_character_sets: CharacterSets,
}

impl Default for RandomCharacters {
    fn default() -> Self {
        Self {
            length: Length::default(),
            enabled_character_sets: [
                CharacterSet::Uppercase,
                CharacterSet::Lowercase,
                CharacterSet::Digits,
            ]
            .into_iter()
            .collect(),
        }
    }
}

/// Settings for word passphrases. Only the generator reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub count: NonZeroUsize,
    pub separator: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_WORD_COUNT,
            separator: String::from(" "),
        }
    }
}

/// The complete configuration handed to a generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub mode: Mode,
    pub random_characters: RandomCharacters,
    pub words: WordsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.mode, Mode::Characters);
        assert_eq!(config.random_characters.length.get(), 16);
        let sets: Vec<_> = config.random_characters.enabled_character_sets.iter().collect();
        assert_eq!(
            sets,
            vec![CharacterSet::Uppercase, CharacterSet::Lowercase, CharacterSet::Digits]
        );
        assert_eq!(config.words.count.get(), 4);
    }

    #[test]
    fn length_bounds() {
        assert!(matches!(Length::new(9), Err(Error::LengthOutOfRange(9))));
        assert!(matches!(Length::new(51), Err(Error::LengthOutOfRange(51))));
        assert_eq!(Length::new(10).unwrap().get(), 10);
        assert_eq!(Length::new(50).unwrap().get(), 50);
    }

    #[test]
    fn length_parse() {
        assert_eq!(" 20 ".parse::<Length>().unwrap().get(), 20);
        assert!(matches!("abc".parse::<Length>(), Err(Error::InvalidLength(_))));
        assert!(matches!("".parse::<Length>(), Err(Error::InvalidLength(_))));
        assert!(matches!("-3".parse::<Length>(), Err(Error::LengthOutOfRange(-3))));
    }

    #[test]
    fn character_set_names() {
        for set in CharacterSet::ALL {
            assert_eq!(set.name().parse::<CharacterSet>().unwrap(), set);
        }
        assert!(matches!(
            "symbols".parse::<CharacterSet>(),
            Err(Error::UnknownCharacterSet(name)) if name == "symbols"
        ));
    }

    #[test]
    fn mode_names() {
        assert_eq!("words".parse::<Mode>().unwrap(), Mode::Words);
        assert!(matches!("pin".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn toggle_twice_restores() {
        let mut sets = RandomCharacters::default().enabled_character_sets;
        let before = sets.clone();
        assert!(sets.toggle(CharacterSet::Symbols));
        assert!(!sets.toggle(CharacterSet::Symbols));
        assert_eq!(sets, before);
    }

    #[test]
    fn serializes_canonical_names() {
        let config = GenerationConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("mode = \"characters\""));
        assert!(text.contains("\"UPPERCASE\""));
        assert!(text.contains("length = 16"));
    }

    #[test]
    fn rejects_out_of_range_length_in_file() {
        let text = "[random_characters]\nlength = 60\n";
        assert!(toml::from_str::<GenerationConfig>(text).is_err());
    }

    fn any_set() -> impl Strategy<Value = CharacterSet> {
        prop::sample::select(CharacterSet::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn toggles_never_duplicate(toggles in prop::collection::vec(any_set(), 0..64)) {
            let mut sets = CharacterSets::default();
            for set in &toggles {
                sets.toggle(*set);
            }
            let listed: Vec<_> = sets.iter().collect();
            let mut deduped = listed.clone();
            deduped.dedup();
            prop_assert_eq!(&listed, &deduped);
            prop_assert!(sets.len() <= CharacterSet::ALL.len());
            for set in CharacterSet::ALL {
                let flips = toggles.iter().filter(|t| **t == set).count();
                prop_assert_eq!(sets.contains(set), flips % 2 == 1);
            }
        }
    }
}
