use typed_index_collections::TiVec;

use crate::problem::{Cost, HubIndex, Problem, Quantity, RegionIndex};

/// sets for the transportation model
#[allow(non_snake_case)]
pub struct Sets {
    /// Set of origin regions
    pub R: Vec<RegionIndex>,
    /// Set of destination hubs
    pub H: Vec<HubIndex>,
}

/// parameters for the transportation model
#[allow(non_snake_case)]
pub struct Parameters {
    /// Supply capacity of region r
    pub S: TiVec<RegionIndex, Quantity>,
    /// Demand requirement of hub h
    pub D: TiVec<HubIndex, Quantity>,
    /// Cost of shipping one unit from region r to hub h
    pub C: TiVec<RegionIndex, TiVec<HubIndex, Cost>>,
}

impl Sets {
    pub fn new(problem: &Problem) -> Sets {
        Sets {
            R: (0..problem.regions().len()).map(RegionIndex::from).collect(),
            H: (0..problem.hubs().len()).map(HubIndex::from).collect(),
        }
    }

    /// The LP column of the shipment variable for `(r, h)`. Columns are laid
    /// out row-major: all hubs of region 0, then all hubs of region 1, etc.
    /// This order must agree with how `build` adds columns and with how the
    /// solution vector is reshaped back into a matrix.
    pub fn column(&self, r: RegionIndex, h: HubIndex) -> usize {
        usize::from(r) * self.H.len() + usize::from(h)
    }
}

impl Parameters {
    pub fn new(problem: &Problem) -> Parameters {
        let sets = Sets::new(problem);

        let supplies: Vec<Quantity> = problem.regions().iter().map(|r| r.supply()).collect();
        let demands: Vec<Quantity> = problem.hubs().iter().map(|h| h.demand()).collect();
        let costs: Vec<TiVec<HubIndex, Cost>> = sets
            .R
            .iter()
            .map(|&r| {
                sets.H
                    .iter()
                    .map(|&h| problem.cost(r, h))
                    .collect::<Vec<Cost>>()
                    .into()
            })
            .collect();

        Parameters {
            S: supplies.into(),
            D: demands.into(),
            C: costs.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;
    use itertools::iproduct;

    #[test]
    fn sets_enumerate_regions_and_hubs_in_order() {
        let problem = scenario::orange_growers();
        let sets = Sets::new(&problem);

        assert_eq!(sets.R.len(), 3);
        assert_eq!(sets.H.len(), 4);
        assert_eq!(usize::from(sets.R[2]), 2);
        assert_eq!(usize::from(sets.H[3]), 3);
    }

    #[test]
    fn columns_are_flattened_row_major() {
        let problem = scenario::orange_growers();
        let sets = Sets::new(&problem);

        let columns: Vec<usize> = iproduct!(&sets.R, &sets.H)
            .map(|(&r, &h)| sets.column(r, h))
            .collect();

        // every (r, h) pair gets its own column, in declaration order
        assert_eq!(columns, (0..12).collect::<Vec<usize>>());
    }

    #[test]
    fn parameters_mirror_the_problem_data() {
        let problem = scenario::orange_growers();
        let sets = Sets::new(&problem);
        let parameters = Parameters::new(&problem);

        assert_eq!(parameters.S.len(), 3);
        assert_eq!(parameters.D.len(), 4);

        for (&r, region) in sets.R.iter().zip(problem.regions()) {
            assert_eq!(parameters.S[r], region.supply());
        }
        for (&h, hub) in sets.H.iter().zip(problem.hubs()) {
            assert_eq!(parameters.D[h], hub.demand());
        }
        for &r in &sets.R {
            for &h in &sets.H {
                assert_eq!(parameters.C[r][h], problem.cost(r, h));
            }
        }
    }
}
