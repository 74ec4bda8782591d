pub mod genetic_code;

pub use genetic_code::{GeneticCode, Translator};

/// Borrowed three-base window into a nucleotide sequence.
pub type Codon<'a> = &'a [u8; 3];

/// Splits `seq` into consecutive, non-overlapping codons starting at
/// `offset`. A trailing partial codon is dropped, so a short or empty
/// sequence simply yields nothing.
pub fn extract_codons(seq: &[u8], offset: usize) -> Vec<Codon<'_>> {
    seq.get(offset..)
        .unwrap_or(&[])
        .chunks_exact(3)
        .filter_map(|chunk| chunk.try_into().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_whole_codons_only() {
        let codons = extract_codons(b"ATGATCAT", 0);
        assert_eq!(codons, vec![b"ATG", b"ATC"]);
    }

    #[test]
    fn honours_frame_offset() {
        let seq = b"AATGCCCGG";
        assert_eq!(extract_codons(seq, 1), vec![b"ATG", b"CCC"]);
        assert_eq!(extract_codons(seq, 2), vec![b"TGC", b"CCG"]);
    }

    #[test]
    fn length_matches_floor_formula() {
        let seq = b"ACGTACGTACGTAC";
        for len in 0..=seq.len() {
            for offset in 0..3 {
                let expected = len.saturating_sub(offset) / 3;
                let codons = extract_codons(&seq[..len], offset);
                assert_eq!(codons.len(), expected, "len={} offset={}", len, offset);
            }
        }
    }

    #[test]
    fn offset_past_end_is_empty() {
        assert!(extract_codons(b"AT", 5).is_empty());
        assert!(extract_codons(b"", 0).is_empty());
    }
}
