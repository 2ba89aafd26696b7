mod cli;
pub mod domain;
pub mod infra;
mod run;
mod util;

pub use self::run::start;
