use {
    super::KyberNetworkProxy,
    crate::{
        domain::eth,
        infra::exchange::{Error, Exchange},
        tests::{self, KYBER_PROXY, RDN, mock},
    },
    alloy::{primitives::U256, sol_types::SolCall},
};

const GWEI: u64 = 1_000_000_000;

#[tokio::test]
async fn buys_with_the_ether_sold() {
    let mut node = super::mainnet(5, 7);
    mock::node::returns::<KyberNetworkProxy::maxGasPriceCall>(
        &mut node,
        KYBER_PROXY,
        U256::from(50 * GWEI),
    );
    mock::node::gas_price(&mut node, 100 * GWEI);
    node.expect_estimate_gas()
        .returning(|_| Ok(eth::Gas(300_000)));
    let account = tests::account();
    let from = account.address();
    node.expect_send_transaction()
        .withf(move |account, tx| {
            let Ok(swap) = KyberNetworkProxy::swapEtherToTokenCall::abi_decode(&tx.calldata)
            else {
                return false;
            };
            account.address() == from
                && tx.from == from
                && tx.to == KYBER_PROXY
                && tx.value == U256::from(700)
                && tx.gas == Some(eth::Gas(300_000))
                && tx.gas_price == Some(U256::from(50 * GWEI))
                && swap.token == RDN
                && swap.minConversionRate == U256::from(7)
        })
        .times(1)
        .returning(|_, _| Ok(eth::TxHash::repeat_byte(0x42)));
    let kyber = super::kyber(node).await;

    let hash = kyber
        .buy_tokens(&account, &tests::tokens("100", "RDN"))
        .await
        .unwrap();

    assert_eq!(hash, eth::TxHash::repeat_byte(0x42));
}

#[tokio::test]
async fn refuses_to_buy_on_unsupported_networks() {
    let mut node = mock::node::on_network(42);
    node.expect_send_transaction().never();
    let kyber = super::kyber(node).await;

    let result = kyber
        .buy_tokens(&tests::account(), &tests::tokens("100", "RDN"))
        .await;

    let Err(Error::UnsupportedNetwork {
        exchange,
        ticker,
        network,
    }) = result
    else {
        panic!("unexpected result {result:?}");
    };
    assert_eq!(exchange, "Kyber");
    assert_eq!(ticker.as_str(), "RDN");
    assert_eq!(network, "kovan");
}

#[tokio::test]
async fn does_not_buy_tokens_it_cannot_price() {
    let mut node = mock::node::on_network(1);
    node.expect_send_transaction().never();
    let kyber = super::kyber(node).await;

    let result = kyber
        .buy_tokens(&tests::account(), &tests::tokens("100", "XYZ"))
        .await;

    assert!(matches!(result, Err(Error::MissingCosts)));
}
