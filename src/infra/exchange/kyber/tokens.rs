//! The token registry Kyber reserves trade, keyed by chain ID.

use {
    crate::domain::{TokenTicker, eth},
    alloy::primitives::address,
};

/// Kyber's placeholder address for ether.
const ETH: eth::Address = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

const MAINNET: &[(&str, eth::Address)] = &[
    ("ETH", ETH),
    ("DAI", address!("0x6B175474E89094C44Da98b954EedeAC495271d0F")),
    ("KNC", address!("0xdd974D5C2e2928deA5F71b9825b8b646686BD200")),
    ("RDN", address!("0x255Aa6DF07540Cb5d3d297f0D0D4D84cb52bc8e6")),
    ("SAI", address!("0x89d24A6b4CcB1B6fAA2625fE562bDD9a23260359")),
];

const ROPSTEN: &[(&str, eth::Address)] = &[
    ("ETH", ETH),
    ("KNC", address!("0x7b2810576aa1cce68f2b118cef1f36467c648f92")),
];

/// The address Kyber uses for `ticker` on the chain with the given ID.
pub fn token_network_address(chain_id: u64, ticker: &TokenTicker) -> Option<eth::Address> {
    let tokens = match eth::Network::from_chain_id(chain_id).ok()? {
        eth::Network::Mainnet => MAINNET,
        eth::Network::Ropsten => ROPSTEN,
        _ => return None,
    };
    tokens
        .iter()
        .find(|(symbol, _)| *symbol == ticker.as_str())
        .map(|(_, address)| *address)
}
