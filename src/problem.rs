use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// The type used for supply, demand and shipped quantities
pub type Quantity = f64;
/// The type used for cost
pub type Cost = f64;

#[derive(Deref, Debug, PartialEq, Eq, PartialOrd, From, Into, Clone, Copy, Hash)]
pub struct RegionIndex(usize);

#[derive(Deref, Debug, PartialEq, Eq, PartialOrd, From, Into, Clone, Copy, Hash)]
pub struct HubIndex(usize);

/// An origin region with a fixed supply capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Display name of the region
    name: String,
    /// The quantity available for shipping out of this region
    supply: Quantity,
}

impl Region {
    pub fn new(name: &str, supply: Quantity) -> Region {
        Region {
            name: name.to_string(),
            supply,
        }
    }

    /// Display name of the region
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The quantity available for shipping out of this region
    pub fn supply(&self) -> Quantity {
        self.supply
    }
}

/// A destination hub with a fixed demand requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    /// Display name of the hub
    name: String,
    /// The quantity that must be delivered to this hub
    demand: Quantity,
}

impl Hub {
    pub fn new(name: &str, demand: Quantity) -> Hub {
        Hub {
            name: name.to_string(),
            demand,
        }
    }

    /// Display name of the hub
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The quantity that must be delivered to this hub
    pub fn demand(&self) -> Quantity {
        self.demand
    }
}

/// A transportation problem: ship from regions with limited supply to hubs
/// with fixed demand, at a per-unit cost for each region-hub pair.
///
/// Immutable after construction. One `Problem` describes one scenario; a
/// solve never modifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// The origin regions. Assumed to be ordered by index
    regions: Vec<Region>,
    /// The destination hubs. Assumed to be ordered by index
    hubs: Vec<Hub>,
    /// Per-unit shipping cost, indexed `[region][hub]`
    costs: Vec<Vec<Cost>>,
}

#[derive(Debug, Display)]
pub enum ProblemConstructionError {
    /// The size of the cost matrix is not as expected
    #[display(
        fmt = "cost matrix size mismatch: expected {:?}, actual {:?}",
        expected,
        actual
    )]
    CostSizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// There must be at least one region
    NoRegions,
    /// There must be at least one hub
    NoHubs,
    /// The supply of a region must be finite and non-negative
    #[display(fmt = "invalid supply {} at region {}", supply, name)]
    InvalidSupply { name: String, supply: Quantity },
    /// The demand of a hub must be finite and non-negative
    #[display(fmt = "invalid demand {} at hub {}", demand, name)]
    InvalidDemand { name: String, demand: Quantity },
    /// Every unit cost must be finite and non-negative
    #[display(fmt = "invalid cost {} from {} to {}", cost, region, hub)]
    InvalidCost {
        region: String,
        hub: String,
        cost: Cost,
    },
}

impl std::error::Error for ProblemConstructionError {}

impl Problem {
    pub fn new(
        regions: Vec<Region>,
        hubs: Vec<Hub>,
        costs: Vec<Vec<Cost>>,
    ) -> Result<Problem, ProblemConstructionError> {
        let problem = Problem {
            regions,
            hubs,
            costs,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// Checks that the problem data is well formed. Deserialized problems
    /// should be validated before they are handed to a solver.
    pub fn validate(&self) -> Result<(), ProblemConstructionError> {
        use ProblemConstructionError::*;

        if self.regions.is_empty() {
            return Err(NoRegions);
        }

        if self.hubs.is_empty() {
            return Err(NoHubs);
        }

        let expected = (self.regions.len(), self.hubs.len());
        if self.costs.len() != self.regions.len() {
            return Err(CostSizeMismatch {
                expected,
                actual: (self.costs.len(), self.hubs.len()),
            });
        }
        for row in &self.costs {
            if row.len() != self.hubs.len() {
                return Err(CostSizeMismatch {
                    expected,
                    actual: (self.costs.len(), row.len()),
                });
            }
        }

        for region in &self.regions {
            if !region.supply.is_finite() || region.supply < 0.0 {
                return Err(InvalidSupply {
                    name: region.name.clone(),
                    supply: region.supply,
                });
            }
        }

        for hub in &self.hubs {
            if !hub.demand.is_finite() || hub.demand < 0.0 {
                return Err(InvalidDemand {
                    name: hub.name.clone(),
                    demand: hub.demand,
                });
            }
        }

        for (r, row) in self.costs.iter().enumerate() {
            for (h, &cost) in row.iter().enumerate() {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(InvalidCost {
                        region: self.regions[r].name.clone(),
                        hub: self.hubs[h].name.clone(),
                        cost,
                    });
                }
            }
        }

        Ok(())
    }

    /// The origin regions. Ordered by index (continuous, starting at 0)
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The destination hubs. Ordered by index (continuous, starting at 0)
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// The per-unit cost of shipping from `region` to `hub`
    pub fn cost(&self, region: RegionIndex, hub: HubIndex) -> Cost {
        self.costs[usize::from(region)][usize::from(hub)]
    }

    /// The combined supply capacity of all regions
    pub fn total_supply(&self) -> Quantity {
        self.regions.iter().map(Region::supply).sum()
    }

    /// The combined demand requirement of all hubs
    pub fn total_demand(&self) -> Quantity {
        self.hubs.iter().map(Hub::demand).sum()
    }
}
