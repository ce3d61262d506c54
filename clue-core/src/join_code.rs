use rand::Rng;

/// Characters a join code may contain. 0/O and 1/I are left out so codes
/// survive being read aloud or scribbled on paper.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const CODE_LENGTH: usize = 6;

/// Generate a shareable group join code. Uniqueness against existing groups
/// is the database's concern (unique index on the code column); with this
/// alphabet and length a collision is astronomically rare.
pub fn generate_join_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_join_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_code_uses_unambiguous_alphabet() {
        for _ in 0..100 {
            let code = generate_join_code();
            for ch in code.bytes() {
                assert!(
                    CODE_ALPHABET.contains(&ch),
                    "unexpected character {} in code {}",
                    ch as char,
                    code
                );
            }
            assert!(!code.contains('0'));
            assert!(!code.contains('O'));
            assert!(!code.contains('1'));
            assert!(!code.contains('I'));
        }
    }

    #[test]
    fn test_codes_vary() {
        // Not a uniqueness guarantee, but 20 identical draws would mean the
        // RNG is not being used at all.
        let codes: std::collections::HashSet<String> =
            (0..20).map(|_| generate_join_code()).collect();
        assert!(codes.len() > 1);
    }
}
