pub const EPSILON: f64 = 1e-5;
