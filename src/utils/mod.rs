pub mod cmd;
pub mod constants;
pub mod net;
pub mod versions;
