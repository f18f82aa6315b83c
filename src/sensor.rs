pub mod simulated;
pub mod viewport;
