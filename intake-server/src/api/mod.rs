pub mod error;
pub mod submissions;
