//! The bundled distribution scenario: orange growers in three regions
//! shipping to four regional distribution centers.

use crate::problem::{Hub, Problem, Region};

/// The orange growers scenario. Supply totals 520 and demand totals 520,
/// so the instance is balanced.
pub fn orange_growers() -> Problem {
    Problem::new(
        vec![
            Region::new("Indian River, FL", 150.0),
            Region::new("Rio Grande Valley, TX", 170.0),
            Region::new("Central Valley, CA", 200.0),
        ],
        vec![
            Hub::new("Atlanta, GA", 140.0),
            Hub::new("Chicago, IL", 130.0),
            Hub::new("Dallas, TX", 120.0),
            Hub::new("Los Angeles, CA", 130.0),
        ],
        vec![
            vec![500.0, 700.0, 800.0, 1200.0],
            vec![400.0, 600.0, 300.0, 1000.0],
            vec![900.0, 850.0, 650.0, 400.0],
        ],
    )
    .expect("the bundled scenario is well formed")
}
