use crate::infra::exchange;

pub mod file;

#[derive(Clone, Debug)]
pub struct Config {
    /// The JSON RPC endpoint of the Ethereum node.
    pub node_url: reqwest::Url,
    /// The exchanges to consider, in the order they are quoted.
    pub exchanges: Vec<exchange::Kind>,
}
