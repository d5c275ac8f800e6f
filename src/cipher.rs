//! Vigenère encryption and decryption over the 26-letter alphabet.
//!
//! Both directions normalize their inputs first, so any non-letter is dropped
//! and the output is always uppercase letters only.

use crate::error::{CipherError, Result};
use crate::text::NormalizedText;
use crate::types::{letter_at, letter_index, ALPHABET_LEN};

/// Direction a key is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for CipherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherMode::Encrypt => f.write_str("encrypt"),
            CipherMode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// A normalized, non-empty Vigenère key stored as shifts (A = 0 .. Z = 25)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Normalize a key; fails with [`CipherError::InvalidKey`] when no letter remains
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = NormalizedText::new(raw);
        let shifts: Vec<u8> = normalized
            .as_bytes()
            .iter()
            .filter_map(|&b| letter_index(b))
            .map(|i| i as u8)
            .collect();

        if shifts.is_empty() {
            return Err(CipherError::InvalidKey);
        }

        Ok(Self { shifts })
    }

    /// Build a key from shift values, reduced mod 26
    pub fn from_shifts(shifts: &[u8]) -> Result<Self> {
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        Ok(Self {
            shifts: shifts.iter().map(|&s| s % ALPHABET_LEN as u8).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false: an empty key cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// The key rotated left by `n` positions
    pub fn rotated(&self, n: usize) -> Self {
        let mut shifts = self.shifts.clone();
        let len = shifts.len();
        shifts.rotate_left(n % len);
        Self { shifts }
    }

    /// Apply the key to already-normalized text
    pub fn apply(&self, text: &NormalizedText, mode: CipherMode) -> String {
        let key_len = self.shifts.len();
        text.as_bytes()
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| letter_index(b).map(|index| (i, index)))
            .map(|(i, index)| {
                let shift = self.shifts[i % key_len] as usize;
                let out = match mode {
                    CipherMode::Encrypt => index + shift,
                    CipherMode::Decrypt => index + ALPHABET_LEN - shift,
                };
                char::from(letter_at(out))
            })
            .collect()
    }

    pub fn encrypt(&self, plaintext: &NormalizedText) -> String {
        self.apply(plaintext, CipherMode::Encrypt)
    }

    pub fn decrypt(&self, ciphertext: &NormalizedText) -> String {
        self.apply(ciphertext, CipherMode::Decrypt)
    }
}

impl std::fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &shift in &self.shifts {
            write!(f, "{}", char::from(letter_at(shift as usize)))?;
        }
        Ok(())
    }
}

/// Encrypt or decrypt raw text with a raw key
pub fn transform(text: &str, key: &str, mode: CipherMode) -> Result<String> {
    let key = VigenereKey::parse(key)?;
    Ok(key.apply(&NormalizedText::new(text), mode))
}

/// `C = (P + K) mod 26`, letter by letter, key repeating
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    transform(plaintext, key, CipherMode::Encrypt)
}

/// `P = (C - K + 26) mod 26`, letter by letter, key repeating
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    transform(ciphertext, key, CipherMode::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(encrypt("HELLOWORLD", "KEY").unwrap(), "RIJVSUYVJN");
    }

    #[test]
    fn test_decrypt_known_vector() {
        assert_eq!(decrypt("RIJVSUYVJN", "KEY").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_encrypt_ignores_non_letters() {
        assert_eq!(encrypt("Hello, World! 123", "KEY").unwrap(), "RIJVSUYVJN");
    }

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(encrypt("HELLOWORLD", "k E y").unwrap(), "RIJVSUYVJN");
        assert_eq!(VigenereKey::parse("k-e-y!").unwrap().to_string(), "KEY");
        assert_eq!(VigenereKey::parse("ße").unwrap().to_string(), "SSE");
        assert_eq!(encrypt("straße", "ı").unwrap(), encrypt("STRASSE", "I").unwrap());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(encrypt("ANYTEXT", "123"), Err(CipherError::InvalidKey)));
        assert!(matches!(encrypt("ANYTEXT", ""), Err(CipherError::InvalidKey)));
        assert!(matches!(decrypt("ANYTEXT", "123 !"), Err(CipherError::InvalidKey)));
        assert!(VigenereKey::from_shifts(&[]).is_err());
    }

    #[test]
    fn test_roundtrip_various_keys() {
        let plaintext = "Attack at dawn; retreat at dusk, then regroup by the river.";
        let expected = NormalizedText::new(plaintext).into_string();
        for key in ["A", "Z", "LEMON", "abcdefghijklmnopqrstuvwxyz", "Key With Spaces"] {
            let ciphertext = encrypt(plaintext, key).unwrap();
            assert_eq!(ciphertext.len(), expected.len());
            assert_eq!(decrypt(&ciphertext, key).unwrap(), expected);
        }
    }

    #[test]
    fn test_key_a_is_identity() {
        assert_eq!(encrypt("the quick brown fox", "A").unwrap(), "THEQUICKBROWNFOX");
    }

    #[test]
    fn test_empty_plaintext() {
        assert_eq!(encrypt("  42 ", "KEY").unwrap(), "");
    }

    #[test]
    fn test_rotated_key_realigned_ciphertext() {
        let plaintext = NormalizedText::new("WE ARE DISCOVERED SAVE YOURSELF");
        let key = VigenereKey::parse("LEMON").unwrap();
        let ciphertext = key.encrypt(&plaintext);

        for n in 0..key.len() * 2 {
            let shifted = NormalizedText::new(&ciphertext[n..]);
            let recovered = key.rotated(n).decrypt(&shifted);
            assert_eq!(recovered, &plaintext.as_str()[n..]);
        }
    }

    #[test]
    fn test_from_shifts_wraps() {
        let key = VigenereKey::from_shifts(&[0, 25, 27]).unwrap();
        assert_eq!(key.to_string(), "AZB");
        assert_eq!(key.len(), 3);
    }
}
