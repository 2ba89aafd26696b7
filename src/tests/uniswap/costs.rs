use {
    super::UniswapExchange,
    crate::{
        domain::{EthereumAmount, eth},
        infra::exchange::{Exchange, Uniswap},
        tests::{self, UNISWAP_RDN, mock},
    },
    alloy::{primitives::U256, sol_types::SolCall},
};

const ETHER: u128 = 1_000_000_000_000_000_000;
const GWEI: u64 = 1_000_000_000;

#[tokio::test]
async fn sells_the_quoted_price() {
    let mut node = super::mainnet(2 * ETHER);
    mock::node::gas_price(&mut node, 10 * GWEI);
    mock::node::blocks(&mut node, 1_700_000_000);
    node.expect_estimate_gas()
        .withf(|tx| tx.to == UNISWAP_RDN && tx.value == U256::from(2 * ETHER))
        .times(1)
        .returning(|_| Ok(eth::Gas(60_000)));
    let uniswap = super::uniswap(node);

    let costs = uniswap
        .calculate_transaction_costs(&tests::tokens("4", "RDN"), &tests::account())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(costs.exchange_rate, EthereumAmount::new("0.5".parse().unwrap()));
    assert_eq!(costs.eth_sold.as_wei(), U256::from(2 * ETHER));
    assert_eq!(costs.gas, eth::Gas(60_000));
    assert_eq!(costs.gas_price.as_wei(), U256::from(10 * GWEI));
    assert_eq!(
        costs.total.as_wei(),
        U256::from(2 * ETHER + u128::from(60_000 * 10 * GWEI))
    );
}

#[tokio::test]
async fn sells_the_exact_price_when_the_amount_does_not_divide_it() {
    let mut node = super::mainnet(1000);
    mock::node::gas_price(&mut node, GWEI);
    mock::node::blocks(&mut node, 1_700_000_000);
    node.expect_estimate_gas()
        .withf(|tx| tx.value == U256::from(1000))
        .times(1)
        .returning(|_| Ok(eth::Gas(60_000)));
    let uniswap = super::uniswap(node);

    let costs = uniswap
        .calculate_transaction_costs(&tests::tokens("3", "RDN"), &tests::account())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(costs.eth_sold.as_wei(), U256::from(1000));
    assert_eq!(
        costs.total.as_wei(),
        U256::from(1000 + 60_000 * u128::from(GWEI))
    );
}

#[tokio::test]
async fn swaps_expire_after_twenty_minutes() {
    let mut node = super::mainnet(ETHER);
    mock::node::gas_price(&mut node, GWEI);
    mock::node::blocks(&mut node, 1_700_000_000);
    node.expect_estimate_gas()
        .withf(|tx| {
            UniswapExchange::ethToTokenSwapOutputCall::abi_decode(&tx.calldata)
                .is_ok_and(|swap| {
                    swap.deadline == U256::from(1_700_000_000 + Uniswap::EXCHANGE_TIMEOUT)
                        && swap.tokens_bought == U256::from(ETHER)
                })
        })
        .times(1)
        .returning(|_| Ok(eth::Gas(60_000)));
    let uniswap = super::uniswap(node);

    uniswap
        .calculate_transaction_costs(&tests::tokens("1", "RDN"), &tests::account())
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn does_not_apply_to_unlisted_tokens() {
    let mut node = mock::node::on_network(1);
    node.expect_call().never();
    node.expect_estimate_gas().never();
    let uniswap = super::uniswap(node);

    let costs = uniswap
        .calculate_transaction_costs(&tests::tokens("1", "SAI"), &tests::account())
        .await
        .unwrap();

    assert!(costs.is_none());
}
