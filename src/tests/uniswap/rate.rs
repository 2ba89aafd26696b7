//! Uniswap prices exact output amounts, so the rate of a single token is the
//! price of the whole amount divided by the amount.

use {
    super::UniswapExchange,
    crate::{
        domain::EthereumAmount,
        infra::exchange::{Error, Exchange},
        tests::{self, UNISWAP_RDN, mock},
    },
    alloy::{
        primitives::U256,
        sol_types::{SolCall, SolValue},
    },
};

const ETHER: u128 = 1_000_000_000_000_000_000;

#[tokio::test]
async fn divides_the_price_by_the_amount() {
    let uniswap = super::uniswap(super::mainnet(2 * ETHER));

    let rate = uniswap
        .get_current_rate(&tests::tokens("4", "RDN"))
        .await
        .unwrap();

    assert_eq!(rate, EthereumAmount::new("0.5".parse().unwrap()));
}

#[tokio::test]
async fn prices_the_amount_in_token_units() {
    let mut node = mock::node::on_network(1);
    node.expect_call()
        .withf(|call| {
            let Ok(args) =
                UniswapExchange::getEthToTokenOutputPriceCall::abi_decode(&call.calldata)
            else {
                return false;
            };
            call.to == UNISWAP_RDN && args.tokens_bought == U256::from(1_500_000_000_000_000_u128)
        })
        .times(1)
        .returning(|_| Ok(U256::from(ETHER).abi_encode()));
    let uniswap = super::uniswap(node);

    uniswap
        .get_current_rate(&tests::tokens("0.0015", "RDN"))
        .await
        .unwrap();
}

#[tokio::test]
async fn rejects_empty_amounts() {
    let mut node = mock::node::on_network(1);
    node.expect_call().never();
    let uniswap = super::uniswap(node);

    let result = uniswap.get_current_rate(&tests::tokens("0", "RDN")).await;

    assert!(matches!(result, Err(Error::InvalidAmount)));
}

#[tokio::test]
async fn zero_prices_mean_no_liquidity() {
    let uniswap = super::uniswap(super::mainnet(0));

    let result = uniswap.get_current_rate(&tests::tokens("4", "RDN")).await;

    assert!(matches!(result, Err(Error::NoLiquidity)));
}

#[tokio::test]
async fn only_lists_tokens_with_a_known_exchange() {
    let uniswap = super::uniswap(super::mainnet(ETHER));
    assert!(uniswap.is_listing_token(&"rdn".parse().unwrap()).await.unwrap());
    assert!(!uniswap.is_listing_token(&"SAI".parse().unwrap()).await.unwrap());

    let uniswap = super::uniswap(mock::node::on_network(1337));
    assert!(!uniswap.is_listing_token(&"RDN".parse().unwrap()).await.unwrap());
    let result = uniswap.get_current_rate(&tests::tokens("1", "RDN")).await;
    assert!(matches!(result, Err(Error::NotListed { exchange: "Uniswap", .. })));
}
