//! Short key generation.
//!
//! Keys are fixed-length random tokens drawn from a restricted alphabet that
//! excludes visually ambiguous characters (`0`, `O`, `1`, `I`, `l`, `o`).

use rand::Rng;

/// Alphabet for generated keys: 56 characters, no look-alikes.
pub const KEY_ALPHABET: &[u8; 56] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

/// Length of every generated key.
pub const KEY_LENGTH: usize = 8;

/// Generates a random short key.
///
/// Each of the [`KEY_LENGTH`] characters is drawn independently and uniformly
/// from [`KEY_ALPHABET`], giving a keyspace of 56^8 (~9.1e13). Collisions are
/// handled by the caller's retry loop, not here.
///
/// # Examples
///
/// ```
/// use shortkey::utils::key_generator::{KEY_LENGTH, generate_key, is_valid_key};
///
/// let key = generate_key();
/// assert_eq!(key.len(), KEY_LENGTH);
/// assert!(is_valid_key(&key));
/// ```
pub fn generate_key() -> String {
    let mut rng = rand::rng();

    (0..KEY_LENGTH)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `key` has the shape of a generated key.
pub fn is_valid_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| KEY_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_56_unique_characters() {
        let unique: HashSet<u8> = KEY_ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 56);
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        for ambiguous in [b'0', b'O', b'1', b'I', b'l', b'o'] {
            assert!(!KEY_ALPHABET.contains(&ambiguous));
        }
    }

    #[test]
    fn test_generate_key_has_correct_length() {
        let key = generate_key();
        assert_eq!(key.len(), KEY_LENGTH);
    }

    #[test]
    fn test_generate_key_uses_alphabet_only() {
        for _ in 0..100 {
            let key = generate_key();
            assert!(
                key.bytes().all(|b| KEY_ALPHABET.contains(&b)),
                "unexpected character in key {key:?}"
            );
        }
    }

    #[test]
    fn test_generate_key_produces_distinct_keys() {
        let mut keys = HashSet::new();

        for _ in 0..1000 {
            keys.insert(generate_key());
        }

        // 56^8 keyspace: 1000 draws colliding would indicate a broken RNG.
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("23456789"));
        assert!(is_valid_key("AbCdEfGh"));

        assert!(!is_valid_key("short"));
        assert!(!is_valid_key("toolongkey"));
        assert!(!is_valid_key("O0lI1ooo"));
        assert!(!is_valid_key("with spc"));
    }
}
