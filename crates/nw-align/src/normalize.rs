//! Preparing raw sequences for alignment.

/// Returns the sequence with every ASCII letter in upper case.
#[must_use]
pub fn uppercase(sequence: &[u8]) -> Vec<u8> {
    sequence.to_ascii_uppercase()
}

/// Returns the sequence with every symbol outside `alphabet` removed, e.g. gaps and ambiguity codes left over from an existing alignment.
#[must_use]
pub fn clean(sequence: &[u8], alphabet: &[u8]) -> Vec<u8> {
    sequence.iter().copied().filter(|b| alphabet.contains(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::{clean, uppercase};

    #[test]
    fn normalize() {
        assert_eq!(uppercase(b"acGt-n"), b"ACGT-N".to_vec());
        assert_eq!(clean(b"AC-GTN.A", b"ACGT"), b"ACGTA".to_vec());
        assert_eq!(clean(&uppercase(b"ac-gt"), b"ACGT"), b"ACGT".to_vec());
    }
}
