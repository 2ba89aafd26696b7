use {
    crate::{
        infra::{
            blockchain::MockNode,
            exchange::{Exchange, Uniswap},
        },
        tests::{UNISWAP_RDN, mock},
    },
    alloy::primitives::U256,
    std::sync::Arc,
};

mod costs;
mod rate;

pub use crate::infra::exchange::uniswap::contracts::UniswapExchange;

/// A mainnet node where buying any amount of RDN on Uniswap costs `price` wei.
pub fn mainnet(price: u128) -> MockNode {
    let mut node = mock::node::on_network(1);
    mock::node::returns::<UniswapExchange::getEthToTokenOutputPriceCall>(
        &mut node,
        UNISWAP_RDN,
        U256::from(price),
    );
    node
}

pub fn uniswap(node: MockNode) -> Uniswap {
    Uniswap::new(Arc::new(node))
}

#[tokio::test]
async fn describes_itself() {
    let uniswap = uniswap(mock::node::on_network(4));

    assert_eq!(uniswap.name(), "Uniswap");
    assert_eq!(uniswap.metadata().gas_required, 75_000);
    assert_eq!(uniswap.metadata().exchange_fee_bps, Some(30));
    assert!(!uniswap.is_mainnet().await.unwrap());
}
