pub mod mapper;
pub mod policy;
