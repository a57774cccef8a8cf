use std::process::ExitCode;

use clap::Parser;

use nn_tour::constructive::nearest_neighbor_with;
use nn_tour::distance::Rounding;
use nn_tour::evaluation::TourEvaluator;
use nn_tour::io::read_nodes;
use nn_tour::logging::init_logger;
use nn_tour::options::{Options, OutputFormat};

fn run(options: &Options) -> nn_tour::Result<String> {
    let nodes = read_nodes(&options.file)?;
    let rounding = Rounding::from(options.rounding);

    let tour = nearest_neighbor_with(&nodes, options.start, rounding)?;

    let evaluator = TourEvaluator::new(&nodes, rounding);
    let (_, mut violations) = evaluator.evaluate(&tour, options.start);
    violations.extend(evaluator.greedy_violations(&tour));
    for v in &violations {
        log::warn!("tour check: {:?}", v.kind);
    }

    Ok(match options.format {
        OutputFormat::Text => tour.to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&tour)?;
            json.push('\n');
            json
        }
    })
}

fn main() -> ExitCode {
    let options = Options::parse();
    if let Err(e) = init_logger(&options) {
        eprintln!("{e}");
    }

    match run(&options) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
