//! Uniswap V1 exchange bindings and deployments.
//!
//! Uniswap V1 deploys one exchange contract per token. The exchanges this
//! crate trades on are listed per token, keyed by network.

use {
    crate::domain::{TokenTicker, eth},
    alloy::{primitives::address, sol},
};

sol! {
    /// The parts of a Uniswap V1 exchange used for buying tokens with ether.
    interface UniswapExchange {
        function getEthToTokenOutputPrice(uint256 tokens_bought)
            external
            view
            returns (uint256);

        function ethToTokenSwapOutput(uint256 tokens_bought, uint256 deadline)
            external
            payable
            returns (uint256);
    }
}

const RAIDEN_EXCHANGE_ADDRESSES: &[(eth::Network, eth::Address)] = &[(
    eth::Network::Mainnet,
    address!("0x7D03CeCb36820b4666F45E1b4cA2538724Db271C"),
)];

const SAI_EXCHANGE_ADDRESSES: &[(eth::Network, eth::Address)] = &[
    (
        eth::Network::Kovan,
        address!("0x8779C708e2C3b1067de9Cd63698E4334866c691C"),
    ),
    (
        eth::Network::Rinkeby,
        address!("0x77dB9C915809e7BE439D2AB21032B1b8B58F6891"),
    ),
];

/// The exchange contract for `ticker` on `network`.
pub fn exchange_address(ticker: &TokenTicker, network: eth::Network) -> Option<eth::Address> {
    let exchanges = match ticker.as_str() {
        "RDN" => RAIDEN_EXCHANGE_ADDRESSES,
        "SAI" => SAI_EXCHANGE_ADDRESSES,
        _ => return None,
    };
    exchanges
        .iter()
        .find(|(deployment, _)| *deployment == network)
        .map(|(_, address)| *address)
}
