use clap::Parser;
use mcorr_pair::cli::{Args, Commands};
use mcorr_pair::commands;
use mcorr_pair::commands::pair::PairOptions;
use mcorr_pair::config::Config;
use mcorr_pair::utils::progress_bar_builder::hide_progress;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    hide_progress(args.quiet);

    let config = Config::load();

    let result = match args.command {
        Commands::Pair {
            input,
            output,
            second_alignment,
            max_corr_length,
            num_cpu,
            num_boot,
            codon_position,
            genetic_code,
            seed,
        } => {
            let mut options = PairOptions::from_config(input, output, &config);
            options.second_alignment = second_alignment;
            if let Some(v) = max_corr_length {
                options.max_corr_length = v;
            }
            if let Some(v) = num_cpu {
                options.num_cpu = v;
            }
            if let Some(v) = num_boot {
                options.num_boot = v;
            }
            if let Some(v) = codon_position {
                options.codon_position = v;
            }
            if let Some(v) = genetic_code {
                options.genetic_code = v;
            }
            if let Some(v) = seed {
                options.seed = v;
            }
            commands::pair::run(options).map(|summary| {
                log::info!(
                    "Wrote {} rows for {} genome pairs",
                    summary.rows,
                    summary.pairs
                );
            })
        }
        Commands::Count { input } => commands::count::run(&input).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
