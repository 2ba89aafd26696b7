pub mod account;
pub mod eth;
pub mod exchange;
pub mod purchase;
pub mod token;

pub use self::{
    account::Account,
    exchange::{Metadata, TransactionCosts},
    token::{EthereumAmount, TokenAmount, TokenTicker},
};
