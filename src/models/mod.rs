pub mod errors;
pub mod versions;
