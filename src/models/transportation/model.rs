use derive_more::Display;
use highs::{Col, HighsModelStatus, RowProblem, Sense, SolvedModel};
use itertools::iproduct;
use log::{debug, trace};
use typed_index_collections::TiVec;

use super::sets_and_parameters::{Parameters, Sets};
use crate::problem::{Cost, HubIndex, Problem, Quantity, RegionIndex};

/// Errors that may occur when solving a transportation problem
#[derive(Debug, Display)]
pub enum SolveError {
    /// The solver stopped without an optimal solution. Happens when the
    /// problem is infeasible (total demand exceeding total supply) or
    /// unbounded; in either case there is no shipment plan to read.
    #[display(fmt = "optimization failed: solver finished with status {:?}", _0)]
    OptimizationFailed(HighsModelStatus),
}

impl std::error::Error for SolveError {}

pub struct TransportationSolver {}

impl TransportationSolver {
    /// builds the transportation model
    fn build(sets: &Sets, parameters: &Parameters) -> RowProblem {
        trace!(
            "building transportation model ({} regions, {} hubs)",
            sets.R.len(),
            sets.H.len()
        );

        let mut model = RowProblem::default();

        // quantity shipped from region r to hub h. One non-negative column
        // per pair, added in the order given by `Sets::column`
        let x: TiVec<RegionIndex, TiVec<HubIndex, Col>> = sets
            .R
            .iter()
            .map(|&r| {
                sets.H
                    .iter()
                    .map(|&h| model.add_column(parameters.C[r][h], 0.0..))
                    .collect::<Vec<Col>>()
                    .into()
            })
            .collect::<Vec<TiVec<HubIndex, Col>>>()
            .into();

        // the shipments out of a region may not exceed its supply
        for &r in &sets.R {
            let row: Vec<(Col, f64)> = sets.H.iter().map(|&h| (x[r][h], 1.0)).collect();
            model.add_row(..=parameters.S[r], row);
        }

        // the shipments into a hub must meet its demand exactly
        for &h in &sets.H {
            let row: Vec<(Col, f64)> = sets.R.iter().map(|&r| (x[r][h], 1.0)).collect();
            model.add_row(parameters.D[h]..=parameters.D[h], row);
        }

        model
    }

    fn optimize(problem: &Problem) -> Result<(Sets, Parameters, SolvedModel), SolveError> {
        let sets = Sets::new(problem);
        let parameters = Parameters::new(problem);

        let mut model = Self::build(&sets, &parameters).optimise(Sense::Minimise);
        model.set_option("output_flag", false);

        let solved = model.solve();
        match solved.status() {
            HighsModelStatus::Optimal => Ok((sets, parameters, solved)),
            status => {
                debug!("solver finished with non-optimal status {:?}", status);
                Err(SolveError::OptimizationFailed(status))
            }
        }
    }

    /// Computes the cost minimizing shipment plan for `problem`.
    pub fn solve(problem: &Problem) -> Result<TransportationResult, SolveError> {
        let (sets, parameters, solved) = Self::optimize(problem)?;
        let result = TransportationResult::new(&sets, &parameters, &solved.get_solution());
        debug!("optimal plan found with total cost {}", result.total_cost);

        Ok(result)
    }

    /// Computes the cost minimizing shipment plan together with the shadow
    /// prices of the supply and demand constraints.
    pub fn solve_with_sensitivity(
        problem: &Problem,
    ) -> Result<(TransportationResult, ShadowPrices), SolveError> {
        let (sets, parameters, solved) = Self::optimize(problem)?;
        let solution = solved.get_solution();

        let result = TransportationResult::new(&sets, &parameters, &solution);
        let prices = ShadowPrices::new(sets.R.len(), solution.dual_rows());
        debug!("optimal plan found with total cost {}", result.total_cost);

        Ok((result, prices))
    }
}

/// The cost minimizing shipment plan of a solved transportation problem.
#[derive(Debug)]
pub struct TransportationResult {
    /// quantity shipped from region r to hub h
    pub x: TiVec<RegionIndex, TiVec<HubIndex, Quantity>>,
    /// cost of the entire plan
    pub total_cost: Cost,
}

impl TransportationResult {
    fn new(
        sets: &Sets,
        parameters: &Parameters,
        solution: &highs::Solution,
    ) -> TransportationResult {
        let values = solution.columns();

        let x: TiVec<RegionIndex, TiVec<HubIndex, Quantity>> = sets
            .R
            .iter()
            .map(|&r| {
                sets.H
                    .iter()
                    .map(|&h| values[sets.column(r, h)])
                    .collect::<Vec<Quantity>>()
                    .into()
            })
            .collect::<Vec<TiVec<HubIndex, Quantity>>>()
            .into();

        let total_cost = iproduct!(&sets.R, &sets.H)
            .map(|(&r, &h)| parameters.C[r][h] * x[r][h])
            .sum();

        TransportationResult { x, total_cost }
    }
}

/// Dual values of the supply and demand constraints at the optimum.
///
/// Reported in the solver's own convention: the marginal change of the
/// optimal total cost per unit increase of the constraint's right hand
/// side. One extra unit of capacity can only lower the cost, so supply
/// prices are non-positive; one extra unit of required demand raises it,
/// so demand prices are typically non-negative. At a degenerate optimum
/// several price vectors are valid and the solver returns one of them.
pub struct ShadowPrices {
    /// Shadow price of the supply constraint of region r
    pub supply: TiVec<RegionIndex, f64>,
    /// Shadow price of the demand constraint of hub h
    pub demand: TiVec<HubIndex, f64>,
}

impl ShadowPrices {
    /// Rows were added supply constraints first, so the first `regions`
    /// duals belong to the regions and the remainder to the hubs.
    fn new(regions: usize, duals: &[f64]) -> ShadowPrices {
        let (supply, demand) = duals.split_at(regions);

        ShadowPrices {
            supply: supply.to_vec().into(),
            demand: demand.to_vec().into(),
        }
    }
}
