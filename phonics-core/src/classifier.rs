//! Letter classification for phonics segmentation

/// Classification of a letter at a position in a word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    /// Functions as a vowel in this position
    Vowel,
    /// Functions as a consonant in this position
    Consonant,
    /// Not an ASCII letter (digits, punctuation, non-Latin text)
    Other,
}

/// Positional letter classification
///
/// Classification is context dependent: the letter `y` is a vowel or a
/// consonant depending on its neighbours, so implementations receive the
/// whole word and an index rather than a single character.
pub trait LetterClassifier: Send + Sync {
    /// Classify the byte at `i`; out-of-range indices are [`LetterClass::Other`]
    fn classify_at(&self, word: &[u8], i: usize) -> LetterClass;

    /// Check if the letter at `i` functions as a vowel
    fn is_vowel_at(&self, word: &[u8], i: usize) -> bool {
        matches!(self.classify_at(word, i), LetterClass::Vowel)
    }

    /// Check if the letter at `i` functions as a consonant
    fn is_consonant_at(&self, word: &[u8], i: usize) -> bool {
        matches!(self.classify_at(word, i), LetterClass::Consonant)
    }

    /// Check if any letter in `word[start..end]` functions as a vowel
    ///
    /// Classification still sees the full word, so a `y` at the end of the
    /// range is judged by its real right-hand neighbour.
    fn has_vowel_in(&self, word: &[u8], start: usize, end: usize) -> bool {
        (start..end.min(word.len())).any(|i| self.is_vowel_at(word, i))
    }
}

/// English orthographic classifier
///
/// - `a e i o u` are always vowels
/// - `y` is a vowel when word-final, or when neither neighbour is a vowel
/// - every other ASCII letter, `w` included, is a consonant
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishClassifier;

#[inline]
fn is_base_vowel(byte: u8) -> bool {
    matches!(
        byte.to_ascii_lowercase(),
        b'a' | b'e' | b'i' | b'o' | b'u'
    )
}

impl LetterClassifier for EnglishClassifier {
    fn classify_at(&self, word: &[u8], i: usize) -> LetterClass {
        let Some(&byte) = word.get(i) else {
            return LetterClass::Other;
        };

        match byte.to_ascii_lowercase() {
            b'a' | b'e' | b'i' | b'o' | b'u' => LetterClass::Vowel,
            b'y' => {
                let word_final = !word.get(i + 1).is_some_and(u8::is_ascii_alphabetic);
                let prev_vowel = i > 0 && is_base_vowel(word[i - 1]);
                let next_vowel = word.get(i + 1).is_some_and(|&b| is_base_vowel(b));

                if word_final || (!prev_vowel && !next_vowel) {
                    LetterClass::Vowel
                } else {
                    LetterClass::Consonant
                }
            }
            b if b.is_ascii_lowercase() => LetterClass::Consonant,
            _ => LetterClass::Other,
        }
    }
}

/// Check if the letter at byte index `i` of `word` functions as a vowel
pub fn is_vowel_at(word: &str, i: usize) -> bool {
    EnglishClassifier.is_vowel_at(word.as_bytes(), i)
}

/// Check if the letter at byte index `i` of `word` functions as a consonant
pub fn is_consonant_at(word: &str, i: usize) -> bool {
    EnglishClassifier.is_consonant_at(word.as_bytes(), i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vowels_and_consonants() {
        for (i, _) in "aeiou".char_indices() {
            assert!(is_vowel_at("aeiou", i));
        }
        for (i, _) in "bcdfghjklmnpqrstvwxz".char_indices() {
            assert!(is_consonant_at("bcdfghjklmnpqrstvwxz", i));
        }
    }

    #[test]
    fn test_y_is_context_dependent() {
        // Initial y before a vowel
        assert!(is_consonant_at("yellow", 0));
        // Word-final y
        assert!(is_vowel_at("baby", 3));
        // Between consonants
        assert!(is_vowel_at("gym", 1));
        // Between vowels
        assert!(is_consonant_at("crayon", 3));
        // Final y after a vowel is still word-final
        assert!(is_vowel_at("boy", 2));
    }

    #[test]
    fn test_w_is_always_consonant() {
        assert!(is_consonant_at("cow", 2));
        assert!(is_consonant_at("water", 0));
    }

    #[test]
    fn test_uppercase_is_classified() {
        assert!(is_vowel_at("Apple", 0));
        assert!(is_consonant_at("Apple", 1));
        assert!(is_vowel_at("BABY", 3));
    }

    #[test]
    fn test_out_of_range_and_non_letters() {
        assert!(!is_vowel_at("cat", 3));
        assert!(!is_consonant_at("cat", 99));
        assert!(!is_vowel_at("", 0));
        assert_eq!(EnglishClassifier.classify_at(b"a-b", 1), LetterClass::Other);
        assert_eq!(EnglishClassifier.classify_at(b"3d", 0), LetterClass::Other);
    }

    #[test]
    fn test_every_index_is_defined() {
        let word = b"rhythmically";
        for i in 0..word.len() {
            let class = EnglishClassifier.classify_at(word, i);
            assert_ne!(class, LetterClass::Other, "index {i}");
        }
    }

    #[test]
    fn test_has_vowel_in_range() {
        let c = EnglishClassifier;
        assert!(c.has_vowel_in(b"street", 0, 6));
        assert!(!c.has_vowel_in(b"street", 0, 3));
        // "y" in "sky" is word-final even when the range stops before the end
        assert!(c.has_vowel_in(b"sky", 0, 3));
        assert!(!c.has_vowel_in(b"sky", 0, 2));
        assert!(!c.has_vowel_in(b"ab", 2, 10));
    }
}
