use crate::corr::CodonSite;
use crate::error::ConfigError;

/// Upper bound for `--max-corr-length`, in base pairs. Every pair result
/// carries one record per codon lag.
pub const MAX_CORR_LENGTH: usize = 1_000_000;

/// The `--codon-position` selector: 1-3 pick a codon position, 4 means
/// synonymous sites at the third position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonSelector {
    pub synonymous: bool,
    pub site: CodonSite,
}

impl CodonSelector {
    pub fn from_position(position: u8) -> Result<Self, ConfigError> {
        let (synonymous, index) = match position {
            1..=3 => (false, position - 1),
            4 => (true, 2),
            other => return Err(ConfigError::InvalidCodonPosition(other)),
        };
        Ok(Self {
            synonymous,
            site: CodonSite::Single(index as usize),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_selector_to_core_parameters() {
        let first = CodonSelector::from_position(1).unwrap();
        assert_eq!(first.site, CodonSite::Single(0));
        assert!(!first.synonymous);

        let syn = CodonSelector::from_position(4).unwrap();
        assert_eq!(syn.site, CodonSite::Single(2));
        assert!(syn.synonymous);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            CodonSelector::from_position(0),
            Err(ConfigError::InvalidCodonPosition(0))
        );
        assert_eq!(
            CodonSelector::from_position(5),
            Err(ConfigError::InvalidCodonPosition(5))
        );
    }
}
