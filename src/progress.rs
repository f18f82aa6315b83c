pub mod offset;
pub mod source;
