//! Transportation cost minimization: build a balanced transportation LP
//! from a problem description, solve it, and optionally read back the
//! shadow prices of the supply and demand constraints.

pub mod models;
pub mod problem;
pub mod report;
pub mod scenario;
pub mod utils;
