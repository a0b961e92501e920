//! Entropy estimates for a configuration.

use super::charset;
use crate::config::{GenerationConfig, Mode};

/// Words in the EFF large list used for passphrases.
pub const WORD_LIST_SIZE: usize = 7776;

/// Estimated entropy in bits of a password generated from `config`.
pub fn bits(config: &GenerationConfig) -> f64 {
    match config.mode {
        Mode::Characters => {
            let options = &config.random_characters;
            calculate(
                options.length.get() as usize,
                charset::size(&options.enabled_character_sets),
            )
        }
        Mode::Words => calculate(config.words.count.get(), WORD_LIST_SIZE),
    }
}

/// `symbols * log2(alphabet)`, zero for an empty alphabet.
pub fn calculate(symbols: usize, alphabet: usize) -> f64 {
    if alphabet == 0 {
        return 0.0;
    }
    symbols as f64 * (alphabet as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharacterSets;

    #[test]
    fn default_config_is_strong() {
        let bits = bits(&GenerationConfig::default());
        // 16 * log2(62)
        assert!((bits - 95.27).abs() < 0.01, "{bits}");
        assert_eq!(strength(bits), "Strong");
    }

    #[test]
    fn empty_sets_have_no_entropy() {
        let mut config = GenerationConfig::default();
        config.random_characters.enabled_character_sets = CharacterSets::default();
        assert_eq!(bits(&config), 0.0);
        assert_eq!(strength(0.0), "Weak");
    }

    #[test]
    fn words_use_list_size() {
        let mut config = GenerationConfig::default();
        config.mode = Mode::Words;
        let bits = bits(&config);
        assert!((bits - 51.7).abs() < 0.01, "{bits}");
        assert_eq!(strength(bits), "Fair");
    }
}
