pub mod ease;
pub mod length;
pub mod range;
