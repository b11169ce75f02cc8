use clap::Parser;
use log::LevelFilter;
use orf_tools::cli::{self, Commands};
use orf_tools::commands;
use orf_tools::config::Config;
use orf_tools::OrfError;
use simple_logger::SimpleLogger;

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };
    if let Err(e) = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .env()
        .init()
    {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = Config::load();
    let options = commands::base_options(&config, args.skip_invalid);
    let show_progress = !args.quiet;

    let result = match args.command {
        Commands::Extract {
            intervals,
            reference,
        } => commands::extract::run(&intervals, &reference, show_progress),
        Commands::Trim { input, scan, frame } => {
            commands::trim::run(input.as_deref(), scan, frame as usize, options)
        }
        Commands::Resolve { input, unmatched } => {
            commands::resolve::run(input.as_deref(), unmatched, config.name_table(), options)
        }
        Commands::Translate { input, frame, rna } => {
            commands::translate::run(input.as_deref(), frame as usize, rna, options)
        }
        Commands::Run {
            intervals,
            reference,
            scan,
            unmatched,
        } => commands::pipeline::run(
            &intervals,
            &reference,
            scan,
            unmatched,
            config.name_table(),
            options,
            show_progress,
        ),
        Commands::InitConfig { force } => commands::init_config::run(force),
    };

    if let Err(e) = result {
        match e.downcast_ref::<OrfError>() {
            Some(orf_error) => eprintln!("Error [{}]: {:#}", orf_error.kind(), e),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
