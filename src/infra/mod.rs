pub mod blockchain;
pub mod config;
pub mod exchange;
pub mod observe;

pub use self::{
    blockchain::Node,
    exchange::{Exchange, Kind},
};
