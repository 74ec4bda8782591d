use super::{CorrResult, CorrResults, StatisticType};
use crate::alignment::{pair_id, Alignment, Sequence};
use crate::codon::{extract_codons, Codon, Translator};

const ALL_POSITIONS: [usize; 3] = [0, 1, 2];

/// Which nucleotide(s) of a codon are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonSite {
    Single(usize),
    All,
}

impl CodonSite {
    pub fn positions(&self) -> &'static [usize] {
        match *self {
            CodonSite::Single(p) if p < 3 => &ALL_POSITIONS[p..=p],
            _ => &ALL_POSITIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P2Params {
    /// Reading-frame offset of the first codon.
    pub codon_offset: usize,
    /// Number of lags, in codons.
    pub max_lag: usize,
    pub synonymous: bool,
    pub site: CodonSite,
}

impl Default for P2Params {
    fn default() -> Self {
        Self {
            codon_offset: 0,
            max_lag: 100,
            synonymous: true,
            site: CodonSite::Single(2),
        }
    }
}

/// Computes P2 for the pairs of one alignment block.
///
/// With a mate sequence, only (mate, block sequence) pairs are formed;
/// otherwise every unordered pair of block sequences is.
pub fn calc_p2_coding<T: Translator + ?Sized>(
    aln: &Alignment,
    params: &P2Params,
    code: &T,
    mate: Option<&Sequence>,
) -> Vec<CorrResults> {
    let sequences: Vec<&Sequence> = mate.into_iter().chain(aln.sequences.iter()).collect();
    let codon_sequences: Vec<Vec<Codon>> = sequences
        .iter()
        .map(|s| extract_codons(&s.seq, params.codon_offset))
        .collect();

    let anchors = if mate.is_some() {
        1.min(sequences.len())
    } else {
        sequences.len()
    };

    let mut results = Vec::new();
    for i in 0..anchors {
        for j in (i + 1)..sequences.len() {
            let id = pair_id(sequences[i], sequences[j]);
            results.push(correlate_pair(
                id,
                &codon_sequences[i],
                &codon_sequences[j],
                params,
                code,
            ));
        }
    }
    results
}

fn correlate_pair<T: Translator + ?Sized>(
    pair_id: String,
    seq1: &[Codon],
    seq2: &[Codon],
    params: &P2Params,
    code: &T,
) -> CorrResults {
    let positions = params.site.positions();
    let span = seq1.len().min(seq2.len());
    let mut corr = CorrResults::new(pair_id);

    for l in 0..params.max_lag {
        let mut d = 0usize;
        let mut t = 0usize;

        for k in 0..span.saturating_sub(l) {
            let (c1, c2) = (seq1[k], seq2[k]);
            if !code.same_amino_acid(c1, c2) {
                continue;
            }
            // The synonymous filter re-tests the reference codons, not b1/b2.
            if params.synonymous && !code.same_amino_acid(c1, c2) {
                continue;
            }

            let (b1, b2) = (seq1[k + l], seq2[k + l]);
            for &p in positions {
                if c1[p] != c2[p] && b1[p] != b2[p] {
                    d += 1;
                }
                t += 1;
            }
        }

        corr.results.push(CorrResult {
            lag: l * 3,
            mean: if t > 0 { d as f64 / t as f64 } else { f64::NAN },
            n: t,
            kind: StatisticType::P2,
        });
    }

    corr
}

/// A calculator bound to one parameter set and translation table, shared
/// by the pipeline workers.
pub struct P2Calculator {
    params: P2Params,
    code: Box<dyn Translator>,
}

impl P2Calculator {
    pub fn new(params: P2Params, code: Box<dyn Translator>) -> Self {
        Self { params, code }
    }

    pub fn calculate(&self, aln: &Alignment, mate: Option<&Sequence>) -> Vec<CorrResults> {
        calc_p2_coding(aln, &self.params, self.code.as_ref(), mate)
    }
}
