pub mod transportation;

pub use self::transportation::model::TransportationSolver;
