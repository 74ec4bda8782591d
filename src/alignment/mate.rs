use super::{Sequence, XmfaReader};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Sequences from a second alignment file, keyed by gene name.
///
/// Built once before the pipeline starts and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct MateMap {
    mates: HashMap<String, Sequence>,
}

impl MateMap {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = XmfaReader::from_path(path)?;
        let mut map = MateMap::default();
        for block in reader {
            let block = block
                .with_context(|| format!("Failed to read mate alignment {}", path.display()))?;
            for sequence in block.sequences {
                map.insert(sequence);
            }
        }
        log::info!(
            "Loaded {} mate sequences from {}",
            map.len(),
            path.display()
        );
        Ok(map)
    }

    /// Later sequences replace earlier ones with the same gene name.
    pub fn insert(&mut self, sequence: Sequence) {
        self.mates
            .insert(sequence.gene_name().to_string(), sequence);
    }

    pub fn get(&self, gene_id: &str) -> Option<&Sequence> {
        self.mates.get(gene_id)
    }

    pub fn len(&self) -> usize {
        self.mates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mates.is_empty()
    }
}

impl FromIterator<Sequence> for MateMap {
    fn from_iter<T: IntoIterator<Item = Sequence>>(iter: T) -> Self {
        let mut map = MateMap::default();
        for sequence in iter {
            map.insert(sequence);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_by_gene_name_last_wins() {
        let map: MateMap = vec![
            Sequence::new("geneA ref", b"AAA".to_vec()),
            Sequence::new("geneB ref", b"CCC".to_vec()),
            Sequence::new("geneA other", b"GGG".to_vec()),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("geneA").unwrap().seq, b"GGG".to_vec());
        assert!(map.get("geneC").is_none());
    }
}
