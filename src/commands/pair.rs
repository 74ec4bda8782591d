use crate::alignment::{MateMap, XmfaReader};
use crate::codon::GeneticCode;
use crate::config::Config;
use crate::corr::{P2Calculator, P2Params};
use crate::pipeline::{Pipeline, PipelineConfig, PipelineStats};
use crate::report::{self, ReportOptions};
use crate::error::ConfigError;
use crate::types::{CodonSelector, MAX_CORR_LENGTH};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Fully resolved settings of one `pair` run.
#[derive(Debug, Clone)]
pub struct PairOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub second_alignment: Option<PathBuf>,
    pub max_corr_length: usize,
    pub num_cpu: usize,
    pub num_boot: usize,
    pub codon_position: u8,
    pub genetic_code: String,
    pub seed: u64,
    pub channel_capacity: usize,
}

impl PairOptions {
    pub fn from_config(input: PathBuf, output: PathBuf, config: &Config) -> Self {
        Self {
            input,
            output,
            second_alignment: None,
            max_corr_length: config.max_corr_length,
            num_cpu: config.num_cpu,
            num_boot: config.num_boot,
            codon_position: config.codon_position,
            genetic_code: config.genetic_code.clone(),
            seed: config.seed,
            channel_capacity: config.channel_capacity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PairSummary {
    pub pipeline: PipelineStats,
    pub pairs: usize,
    pub rows: usize,
}

pub fn run(options: PairOptions) -> Result<PairSummary> {
    // Configuration problems are reported before any input is touched.
    let selector = CodonSelector::from_position(options.codon_position)?;
    let code = GeneticCode::by_id(&options.genetic_code)?;
    if options.max_corr_length > MAX_CORR_LENGTH {
        return Err(ConfigError::MaxCorrLengthTooLarge(options.max_corr_length).into());
    }
    let params = P2Params {
        codon_offset: 0,
        max_lag: options.max_corr_length / 3,
        synonymous: selector.synonymous,
        site: selector.site,
    };
    if params.max_lag == 0 {
        log::warn!(
            "--max-corr-length {} is shorter than one codon; no lags will be computed",
            options.max_corr_length
        );
    }
    let pipeline_config = PipelineConfig::from_requested(Some(options.num_cpu))
        .with_channel_capacity(options.channel_capacity);

    log::info!(
        "Genetic code {} ({}), {} lags, {} workers",
        code.id(),
        code.name(),
        params.max_lag,
        pipeline_config.num_workers
    );

    let mates = match &options.second_alignment {
        Some(path) => Some(Arc::new(MateMap::from_path(path)?)),
        None => None,
    };

    let source = XmfaReader::from_path(&options.input)?;
    let calculator = Arc::new(P2Calculator::new(params, Box::new(code)));
    let pipeline = Pipeline::start(source, calculator, mates, &pipeline_config)?;

    let collection = report::collect(pipeline.results())?;
    let stats = pipeline.finish()?;
    log::info!(
        "Processed {} alignments ({} results, {} with a mate sequence)",
        stats.blocks_processed,
        stats.results_emitted,
        stats.mates_found
    );

    let pairs = collection.num_pairs();
    let report_options = ReportOptions {
        num_boot: options.num_boot,
        seed: options.seed,
    };
    let rows = report::write_report(collection, &options.output, &report_options)?;

    Ok(PairSummary {
        pipeline: stats,
        pairs,
        rows,
    })
}
