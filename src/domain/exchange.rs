//! Types describing what buying a token on an exchange costs.

use crate::domain::{eth, token::EthereumAmount};

/// The estimated costs of buying a token amount on an exchange.
///
/// Estimates are computed from live on-chain state on every request and are
/// only ever handed out fully populated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCosts {
    /// The price paid per unit of gas.
    pub gas_price: EthereumAmount,
    /// The estimated gas limit of the swap transaction.
    pub gas: eth::Gas,
    /// The ether exchanged for the tokens.
    pub eth_sold: EthereumAmount,
    /// The ether required in total: gas costs plus ether sold.
    pub total: EthereumAmount,
    /// The exchange rate the estimate was derived from. Its meaning is
    /// exchange specific, see the individual exchanges.
    pub exchange_rate: EthereumAmount,
}

impl TransactionCosts {
    /// The ether spent on gas.
    pub fn gas_cost(&self) -> EthereumAmount {
        EthereumAmount::from_wei(eth::U256::from(self.gas.0) * self.gas_price.as_wei())
    }
}

/// Static information about an exchange.
#[derive(Debug)]
pub struct Metadata {
    /// The gas a swap on the exchange requires.
    pub gas_required: u64,
    /// The networks the exchange operates on.
    pub supported_networks: &'static [eth::Network],
    /// The fee charged on every swap, in basis points, if the exchange
    /// publishes a fixed one.
    pub exchange_fee_bps: Option<u32>,
    pub main_website_url: Option<&'static str>,
    pub transfer_website_url: Option<&'static str>,
    pub terms_of_service_url: Option<&'static str>,
}

impl Metadata {
    pub fn supports(&self, network: eth::Network) -> bool {
        self.supported_networks.contains(&network)
    }
}
