//! Kyber network proxy bindings and deployments.

use {
    crate::domain::eth,
    alloy::{primitives::address, sol},
};

sol! {
    /// The parts of the Kyber network proxy used for buying tokens with ether.
    interface KyberNetworkProxy {
        function getExpectedRate(address src, address dest, uint256 srcQty)
            external
            view
            returns (uint256 expectedRate, uint256 slippageRate);

        function maxGasPrice() external view returns (uint256);

        function swapEtherToToken(address token, uint256 minConversionRate)
            external
            payable
            returns (uint256);
    }
}

/// The network proxy deployed on `network`, if Kyber operates there.
pub fn network_proxy(network: eth::Network) -> Option<eth::Address> {
    match network {
        eth::Network::Mainnet | eth::Network::Ropsten => {
            Some(address!("0x818E6FECD516Ecc3849DAf6845e3EC868087B755"))
        }
        _ => None,
    }
}
