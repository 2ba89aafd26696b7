use {
    super::KyberNetworkProxy,
    crate::{
        domain::{EthereumAmount, eth},
        infra::exchange::Exchange,
        tests::{self, KYBER_PROXY, mock},
    },
    alloy::primitives::U256,
};

const GWEI: u64 = 1_000_000_000;

#[tokio::test]
async fn estimates_costs_of_buying_tokens() {
    let mut node = super::mainnet(5, 7);
    mock::node::returns::<KyberNetworkProxy::maxGasPriceCall>(
        &mut node,
        KYBER_PROXY,
        U256::from(50 * GWEI),
    );
    mock::node::gas_price(&mut node, 20 * GWEI);
    node.expect_estimate_gas()
        .withf(|tx| tx.to == KYBER_PROXY && tx.value == U256::from(700))
        .times(1)
        .returning(|_| Ok(eth::Gas(300_000)));
    let kyber = super::kyber(node).await;

    let costs = kyber
        .calculate_transaction_costs(&tests::tokens("100", "RDN"), &tests::account())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(costs.exchange_rate.as_wei(), U256::from(7));
    assert_eq!(costs.eth_sold.as_wei(), U256::from(700));
    assert_eq!(costs.gas, eth::Gas(300_000));
    assert_eq!(costs.gas_price.as_wei(), U256::from(20 * GWEI));
    assert_eq!(
        costs.total,
        EthereumAmount::from_wei(U256::from(700 + 300_000 * 20 * GWEI)),
    );
    assert_eq!(
        costs.gas_cost().as_wei(),
        U256::from(300_000 * 20 * GWEI)
    );
}

#[tokio::test]
async fn caps_the_gas_price() {
    let mut node = super::mainnet(5, 7);
    mock::node::returns::<KyberNetworkProxy::maxGasPriceCall>(
        &mut node,
        KYBER_PROXY,
        U256::from(50 * GWEI),
    );
    mock::node::gas_price(&mut node, 100 * GWEI);
    node.expect_estimate_gas()
        .returning(|_| Ok(eth::Gas(300_000)));
    let kyber = super::kyber(node).await;

    let costs = kyber
        .calculate_transaction_costs(&tests::tokens("100", "RDN"), &tests::account())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(costs.gas_price.as_wei(), U256::from(50 * GWEI));
}

#[tokio::test]
async fn does_not_apply_to_unlisted_tokens_or_empty_amounts() {
    for amount in [
        tests::tokens("1", "XYZ"),
        tests::tokens("0", "RDN"),
        tests::tokens("-3", "RDN"),
    ] {
        let mut node = mock::node::on_network(1);
        node.expect_call().never();
        node.expect_estimate_gas().never();
        let kyber = super::kyber(node).await;

        let costs = kyber
            .calculate_transaction_costs(&amount, &tests::account())
            .await
            .unwrap();

        assert!(costs.is_none(), "{amount}");
    }
}

#[tokio::test]
async fn only_lists_ether_and_kyber_on_ropsten() {
    let mut node = mock::node::on_network(3);
    node.expect_estimate_gas().never();
    let kyber = super::kyber(node).await;

    assert!(
        kyber
            .calculate_transaction_costs(&tests::tokens("100", "RDN"), &tests::account())
            .await
            .unwrap()
            .is_none()
    );
    assert!(kyber.is_listing_token(&"KNC".parse().unwrap()).await.unwrap());
}
