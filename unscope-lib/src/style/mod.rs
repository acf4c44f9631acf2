pub mod flat;
pub mod mapper;
pub mod scss;
