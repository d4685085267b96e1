//! Plain-text rendering of problem inputs and solver outputs. Everything in
//! here is pure string formatting so that solves can be tested and reused
//! without dragging in any presentation concerns.

use itertools::Itertools;

use crate::models::transportation::model::{ShadowPrices, TransportationResult};
use crate::problem::{HubIndex, Problem, RegionIndex};
use crate::utils::EPSILON;

/// The input grid: unit costs per region-hub pair, with the supply of each
/// region as the last column and the demand of each hub as the last row.
pub fn cost_table(problem: &Problem) -> String {
    let mut rows = Vec::new();

    let mut header = vec![String::new()];
    header.extend(problem.hubs().iter().map(|hub| hub.name().to_string()));
    header.push("Supply".to_string());
    rows.push(header);

    for (r, region) in problem.regions().iter().enumerate() {
        let mut row = vec![region.name().to_string()];
        row.extend((0..problem.hubs().len()).map(|h| fmt(problem.cost(r.into(), h.into()))));
        row.push(fmt(region.supply()));
        rows.push(row);
    }

    let mut demand = vec!["Demand".to_string()];
    demand.extend(problem.hubs().iter().map(|hub| fmt(hub.demand())));
    rows.push(demand);

    render(&rows)
}

/// The optimal shipment plan as a region × hub grid.
pub fn shipment_table(problem: &Problem, result: &TransportationResult) -> String {
    let mut rows = Vec::new();

    let mut header = vec![String::new()];
    header.extend(problem.hubs().iter().map(|hub| hub.name().to_string()));
    rows.push(header);

    for (r, region) in problem.regions().iter().enumerate() {
        let mut row = vec![region.name().to_string()];
        row.extend(
            (0..problem.hubs().len())
                .map(|h| fmt(result.x[RegionIndex::from(r)][HubIndex::from(h)])),
        );
        rows.push(row);
    }

    render(&rows)
}

/// Shadow prices of the supply constraints, one row per region.
pub fn supply_shadow_price_table(problem: &Problem, prices: &ShadowPrices) -> String {
    let mut rows = vec![vec![String::new(), "Supply shadow price".to_string()]];
    for (r, region) in problem.regions().iter().enumerate() {
        rows.push(vec![
            region.name().to_string(),
            fmt(prices.supply[RegionIndex::from(r)]),
        ]);
    }

    render(&rows)
}

/// Shadow prices of the demand constraints, one row per hub.
pub fn demand_shadow_price_table(problem: &Problem, prices: &ShadowPrices) -> String {
    let mut rows = vec![vec![String::new(), "Demand shadow price".to_string()]];
    for (h, hub) in problem.hubs().iter().enumerate() {
        rows.push(vec![
            hub.name().to_string(),
            fmt(prices.demand[HubIndex::from(h)]),
        ]);
    }

    render(&rows)
}

pub fn total_cost_line(result: &TransportationResult) -> String {
    format!("Total cost: ${:.2}", result.total_cost)
}

fn fmt(value: f64) -> String {
    if value.fract().abs() < EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Aligns the first column to the left and every other column to the right.
fn render(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| {
                    if c == 0 {
                        format!("{:<width$}", cell, width = widths[c])
                    } else {
                        format!("{:>width$}", cell, width = widths[c])
                    }
                })
                .join("  ")
                .trim_end()
                .to_string()
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;
    use typed_index_collections::TiVec;

    fn result() -> TransportationResult {
        let x: Vec<TiVec<_, f64>> = vec![
            vec![90.0, 60.0, 0.0, 0.0].into(),
            vec![50.0, 0.0, 120.0, 0.0].into(),
            vec![0.0, 70.0, 0.0, 130.0].into(),
        ];

        TransportationResult {
            x: x.into(),
            total_cost: 254500.0,
        }
    }

    fn prices() -> ShadowPrices {
        ShadowPrices {
            supply: vec![-150.0, -250.0, 0.0].into(),
            demand: vec![650.0, 850.0, 550.0, 400.0].into(),
        }
    }

    #[test]
    fn cost_table_shows_costs_supply_and_demand() {
        let table = cost_table(&scenario::orange_growers());

        assert!(table.contains("Atlanta, GA"));
        assert!(table.contains("Supply"));
        assert!(table.contains("Demand"));
        assert!(table.contains("1200"));
        assert!(table.contains("150"));
        assert!(table.contains("130"));
    }

    #[test]
    fn shipment_table_has_one_row_per_region() {
        let table = shipment_table(&scenario::orange_growers(), &result());

        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("Indian River, FL"));
        assert!(table.contains("120"));
    }

    #[test]
    fn shadow_price_tables_pair_names_with_prices() {
        let problem = scenario::orange_growers();

        let supply = supply_shadow_price_table(&problem, &prices());
        assert!(supply.contains("Rio Grande Valley, TX"));
        assert!(supply.contains("-250"));

        let demand = demand_shadow_price_table(&problem, &prices());
        assert!(demand.contains("Los Angeles, CA"));
        assert!(demand.contains("400"));
    }

    #[test]
    fn total_cost_is_formatted_as_an_amount() {
        assert_eq!(total_cost_line(&result()), "Total cost: $254500.00");
    }

    #[test]
    fn tables_align_their_columns() {
        let table = cost_table(&scenario::orange_growers());
        let lines: Vec<&str> = table.lines().collect();

        // the supply column ends at the same offset in every region row
        let supply_end = lines[1].len();
        assert_eq!(lines[2].len(), supply_end);
        assert_eq!(lines[3].len(), supply_end);
    }
}
