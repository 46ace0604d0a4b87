pub mod status;
pub mod target;
