pub mod mate;
pub mod xmfa;

pub use mate::MateMap;
pub use xmfa::{count_alignments, XmfaReader};

/// Separator placed between the two genome names of a pair ID.
pub const PAIR_SEPARATOR: &str = "_vs_";

/// One aligned nucleotide sequence. The identifier is the full FASTA header
/// (`"<geneName> <genomeName> ..."`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub seq: Vec<u8>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }

    /// First whitespace token of the header.
    pub fn gene_name(&self) -> &str {
        self.id.split_whitespace().next().unwrap_or("")
    }

    /// Second whitespace token of the header, falling back to the gene name
    /// when the header has a single token.
    pub fn genome_name(&self) -> &str {
        let mut tokens = self.id.split_whitespace();
        let gene = tokens.next().unwrap_or("");
        tokens.next().unwrap_or(gene)
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Equal-length sequences of one coding region across several genomes.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub id: String,
    pub sequences: Vec<Sequence>,
}

impl Alignment {
    /// Builds a block, naming it after the first sequence's gene.
    /// Returns `None` for an empty block.
    pub fn from_sequences(sequences: Vec<Sequence>) -> Option<Self> {
        let id = sequences.first()?.gene_name().to_string();
        Some(Self { id, sequences })
    }

    /// Key used to look up the mate sequence for this block.
    pub fn gene_id(&self) -> &str {
        self.sequences
            .first()
            .map(|s| s.gene_name())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Order-independent identifier for a pair of genomes.
pub fn pair_id(a: &Sequence, b: &Sequence) -> String {
    let (first, second) = {
        let (x, y) = (a.genome_name(), b.genome_name());
        if x <= y {
            (x, y)
        } else {
            (y, x)
        }
    };
    format!("{}{}{}", first, PAIR_SEPARATOR, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_tokens() {
        let s = Sequence::new("geneA genome_1 extra words", b"ATG".to_vec());
        assert_eq!(s.gene_name(), "geneA");
        assert_eq!(s.genome_name(), "genome_1");

        let single = Sequence::new("lonely", b"ATG".to_vec());
        assert_eq!(single.genome_name(), "lonely");
    }

    #[test]
    fn pair_id_is_symmetric() {
        let a = Sequence::new("g1 zeta", b"".to_vec());
        let b = Sequence::new("g1 alpha", b"".to_vec());
        assert_eq!(pair_id(&a, &b), "alpha_vs_zeta");
        assert_eq!(pair_id(&a, &b), pair_id(&b, &a));
    }

    #[test]
    fn block_id_comes_from_first_gene() {
        let aln = Alignment::from_sequences(vec![
            Sequence::new("geneX g1", b"AAA".to_vec()),
            Sequence::new("geneY g2", b"AAA".to_vec()),
        ])
        .unwrap();
        assert_eq!(aln.id, "geneX");
        assert_eq!(aln.gene_id(), "geneX");
        assert!(Alignment::from_sequences(Vec::new()).is_none());
    }
}
