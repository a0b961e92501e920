//! Character set contents for random-character passwords.

use crate::config::{CharacterSet, CharacterSets};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPACE: &str = " ";
const UNDERSCORE_DASH: &str = "_-";
const SYMBOLS: &str = "!@#$%^&*()+=?<>.,/\\~`'\";:[]{}|";

/// Characters belonging to `set`.
pub fn chars(set: CharacterSet) -> &'static str {
    match set {
        CharacterSet::Uppercase => UPPERCASE,
        CharacterSet::Lowercase => LOWERCASE,
        CharacterSet::Digits => DIGITS,
        CharacterSet::Space => SPACE,
        CharacterSet::UnderscoreDash => UNDERSCORE_DASH,
        CharacterSet::Symbols => SYMBOLS,
    }
}

/// Build the character pool from the enabled sets.
pub fn build(sets: &CharacterSets) -> Vec<char> {
    sets.iter().flat_map(|set| chars(set).chars()).collect()
}

/// Size of the pool `build` would return.
pub fn size(sets: &CharacterSets) -> usize {
    sets.iter().map(|set| chars(set).len()).sum()
}

/// True when every enabled set is represented in `password`.
pub fn covers(password: &[char], sets: &CharacterSets) -> bool {
    sets.iter()
        .all(|set| password.iter().any(|c| chars(set).contains(*c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_are_disjoint() {
        for a in CharacterSet::ALL {
            for b in CharacterSet::ALL {
                if a != b {
                    assert!(!chars(a).chars().any(|c| chars(b).contains(c)), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn pool_matches_size() {
        let sets: CharacterSets = CharacterSet::ALL.into_iter().collect();
        let pool = build(&sets);
        assert_eq!(pool.len(), size(&sets));
        assert_eq!(pool.len(), 26 + 26 + 10 + 1 + 2 + SYMBOLS.len());
    }

    #[test]
    fn empty_pool() {
        assert!(build(&CharacterSets::default()).is_empty());
        assert_eq!(size(&CharacterSets::default()), 0);
    }

    #[test]
    fn coverage() {
        let sets: CharacterSets = [CharacterSet::Digits, CharacterSet::UnderscoreDash]
            .into_iter()
            .collect();
        assert!(covers(&['1', '-', 'x'], &sets));
        assert!(!covers(&['1', '2', '3'], &sets));
        assert!(covers(&[], &CharacterSets::default()));
    }
}
