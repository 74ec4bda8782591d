use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Mutational correlation for each pair of isolates", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate P2 correlation profiles for every pair of genomes
    Pair {
        /// Alignment file in XMFA format
        input: PathBuf,

        /// Output file in CSV format
        output: PathBuf,

        /// Second alignment file in XMFA format; its sequences are compared
        /// against every sequence of the matching gene
        #[arg(long = "second-alignment")]
        second_alignment: Option<PathBuf>,

        /// Maximum length of correlation in base pairs (default: 300)
        #[arg(long = "max-corr-length")]
        max_corr_length: Option<usize>,

        /// Number of worker threads (default: all available cores)
        #[arg(long = "num-cpu")]
        num_cpu: Option<usize>,

        /// Number of bootstrap replicates over genes (default: 1000)
        #[arg(long = "num-boot")]
        num_boot: Option<usize>,

        /// Codon position (1: first; 2: second; 3: third; 4: synonymous at third) (default: 4)
        #[arg(long = "codon-position")]
        codon_position: Option<u8>,

        /// NCBI genetic code table: 1, 4 or 11 (default: 11)
        #[arg(long = "genetic-code")]
        genetic_code: Option<String>,

        /// Seed for bootstrap resampling (default: 1)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Count the alignment blocks of an XMFA file
    Count {
        /// Alignment file in XMFA format
        input: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pair_command() {
        let args = Args::try_parse_from([
            "mcorr-pair",
            "-vv",
            "pair",
            "in.xmfa",
            "out.csv",
            "--codon-position",
            "3",
            "--num-cpu",
            "2",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Pair {
                input,
                codon_position,
                num_cpu,
                second_alignment,
                ..
            } => {
                assert_eq!(input, PathBuf::from("in.xmfa"));
                assert_eq!(codon_position, Some(3));
                assert_eq!(num_cpu, Some(2));
                assert!(second_alignment.is_none());
            }
            _ => panic!("expected pair command"),
        }
    }
}
