pub mod math;
pub mod vault;
