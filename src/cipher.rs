//! Caesar cipher keyed by a sifted bit string.
//!
//! A toy cipher for demonstrating that a reconciled key is usable: the
//! shift is the number of set bits in the key modulo the alphabet size.
//! Only ASCII letters are shifted; every other character passes through.

const ALPHABET_LEN: u8 = 26;

/// Derive the Caesar shift from a key: the count of set bits mod 26.
pub fn key_shift(key_bits: &[bool]) -> u8 {
    (key_bits.iter().filter(|&&b| b).count() % ALPHABET_LEN as usize) as u8
}

fn shift_char(c: char, shift: u8) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN;
    (base + offset) as char
}

/// Encrypt a message with the shift derived from `key_bits`.
pub fn encrypt(plaintext: &str, key_bits: &[bool]) -> String {
    let shift = key_shift(key_bits);
    plaintext.chars().map(|c| shift_char(c, shift)).collect()
}

/// Decrypt a message with the shift derived from `key_bits`.
///
/// Inverts [`encrypt`] when both sides derived the same key.
pub fn decrypt(ciphertext: &str, key_bits: &[bool]) -> String {
    let shift = (ALPHABET_LEN - key_shift(key_bits)) % ALPHABET_LEN;
    ciphertext.chars().map(|c| shift_char(c, shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_counts_set_bits_mod_twenty_six() {
        assert_eq!(key_shift(&[]), 0);
        assert_eq!(key_shift(&[false, false]), 0);
        assert_eq!(key_shift(&[true, false, true, true]), 3);
        assert_eq!(key_shift(&[true; 26]), 0);
        assert_eq!(key_shift(&[true; 29]), 3);
    }

    #[test]
    fn known_shift_of_three() {
        let key = [true, true, true];
        assert_eq!(encrypt("abc", &key), "def");
        assert_eq!(encrypt("XYZ", &key), "ABC");
        assert_eq!(decrypt("def", &key), "abc");
        assert_eq!(decrypt("ABC", &key), "XYZ");
    }

    #[test]
    fn empty_key_is_identity() {
        let message = "Attack at dawn!";
        assert_eq!(encrypt(message, &[]), message);
        assert_eq!(decrypt(message, &[]), message);
    }

    #[test]
    fn non_letters_pass_through() {
        let key = [true, true, true, true, true];
        assert_eq!(encrypt("a-b c3!", &key), "f-g h3!");
    }

    #[test]
    fn round_trip_preserves_case_and_punctuation() {
        let key = [true, false, true, true, false, true, true];
        let message = "Quantum Key: 25% QBER, abort?";
        assert_eq!(decrypt(&encrypt(message, &key), &key), message);
    }

    #[test]
    fn mismatched_keys_garble_the_message() {
        let alice_key = [true, true, true];
        let bob_key = [true, true, true, true, true];
        let garbled = decrypt(&encrypt("secret", &alice_key), &bob_key);
        assert_ne!(garbled, "secret");
    }
}
