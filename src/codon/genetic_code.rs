use crate::error::ConfigError;

/// Looks up the amino acid a codon encodes.
pub trait Translator: Send + Sync {
    /// `None` when the codon is not in the table.
    fn translate(&self, codon: &[u8]) -> Option<u8>;

    /// True when both codons are known and encode the same amino acid.
    fn same_amino_acid(&self, a: &[u8], b: &[u8]) -> bool {
        match (self.translate(a), self.translate(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

// NCBI translation tables, amino acids listed in TCAG codon order.
const STANDARD: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const MOLD_MYCOPLASMA: &str = "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

#[derive(Debug, Clone)]
pub struct GeneticCode {
    id: String,
    name: &'static str,
    table: [u8; 64],
}

impl GeneticCode {
    /// Supported NCBI tables: 1, 4 and 11.
    pub fn by_id(id: &str) -> Result<Self, ConfigError> {
        let (name, amino_acids) = match id {
            "1" => ("Standard", STANDARD),
            "4" => ("Mold, Protozoan, and Coelenterate Mitochondrial; Mycoplasma; Spiroplasma", MOLD_MYCOPLASMA),
            // Table 11 only differs from the standard code in its start codons.
            "11" => ("Bacterial, Archaeal and Plant Plastid", STANDARD),
            other => return Err(ConfigError::UnknownGeneticCode(other.to_string())),
        };

        Ok(Self::build(id, name, amino_acids))
    }

    /// The bacterial code used unless configured otherwise.
    pub fn bacterial() -> Self {
        Self::build("11", "Bacterial, Archaeal and Plant Plastid", STANDARD)
    }

    fn build(id: &str, name: &'static str, amino_acids: &str) -> Self {
        let mut table = [0u8; 64];
        table.copy_from_slice(amino_acids.as_bytes());
        Self {
            id: id.to_string(),
            name,
            table,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

impl Translator for GeneticCode {
    fn translate(&self, codon: &[u8]) -> Option<u8> {
        if codon.len() != 3 {
            return None;
        }
        let i = base_index(codon[0])?;
        let j = base_index(codon[1])?;
        let k = base_index(codon[2])?;
        Some(self.table[i * 16 + j * 4 + k])
    }
}
