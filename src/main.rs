use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use transportation::models::transportation::model::{SolveError, TransportationSolver};
use transportation::problem::Problem;
use transportation::report;
use transportation::scenario;

/// Computes the cost minimizing shipment plan for a transportation scenario
#[derive(Parser)]
struct Args {
    /// Path to a scenario in JSON. The bundled orange growers scenario is
    /// used when omitted
    scenario: Option<PathBuf>,

    /// Also report the shadow prices of the supply and demand constraints
    #[clap(long)]
    sensitivity: bool,
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();

    let problem = match load_problem(&args) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("invalid scenario: {}", err);
            std::process::exit(1);
        }
    };

    info!(
        "scenario with {} regions (supply {}) and {} hubs (demand {})",
        problem.regions().len(),
        problem.total_supply(),
        problem.hubs().len(),
        problem.total_demand()
    );

    println!("{}", report::cost_table(&problem));
    println!();

    if args.sensitivity {
        let (result, prices) =
            TransportationSolver::solve_with_sensitivity(&problem).unwrap_or_else(|err| fail(err));

        println!("{}", report::shipment_table(&problem, &result));
        println!();
        println!("{}", report::total_cost_line(&result));
        println!();
        println!("{}", report::supply_shadow_price_table(&problem, &prices));
        println!();
        println!("{}", report::demand_shadow_price_table(&problem, &prices));
    } else {
        let result = TransportationSolver::solve(&problem).unwrap_or_else(|err| fail(err));

        println!("{}", report::shipment_table(&problem, &result));
        println!();
        println!("{}", report::total_cost_line(&result));
    }
}

fn load_problem(args: &Args) -> Result<Problem, Box<dyn std::error::Error>> {
    let problem = match &args.scenario {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let problem: Problem = serde_json::from_reader(BufReader::new(file))?;
            problem.validate()?;
            problem
        }
        None => scenario::orange_growers(),
    };

    Ok(problem)
}

fn fail(err: SolveError) -> ! {
    eprintln!("{}", err);
    std::process::exit(1)
}
