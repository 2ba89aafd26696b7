//! Gas estimation and submission of contract calls on behalf of an account.

use {
    super::{Error, Node},
    crate::domain::{Account, eth},
};

/// Transaction parameters besides the sender and the call itself.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params {
    /// Ether sent along with the call, in wei.
    pub value: eth::U256,
    pub gas: Option<eth::Gas>,
    /// Gas price in wei.
    pub gas_price: Option<eth::U256>,
}

fn transaction(account: &Account, call: eth::Call, params: Params) -> eth::Transaction {
    eth::Transaction {
        from: account.address(),
        to: call.to,
        calldata: call.calldata,
        value: params.value,
        gas: params.gas,
        gas_price: params.gas_price,
    }
}

/// Estimates the gas needed for `account` to execute `call`.
pub async fn estimate_gas(
    node: &dyn Node,
    account: &Account,
    call: eth::Call,
    params: Params,
) -> Result<eth::Gas, Error> {
    node.estimate_gas(&transaction(account, call, params)).await
}

/// Signs and broadcasts `call` from `account`. Returns the transaction hash.
///
/// Submissions are never retried: a retry after an ambiguous failure could
/// buy twice.
pub async fn send_raw_transaction(
    node: &dyn Node,
    account: &Account,
    call: eth::Call,
    params: Params,
) -> Result<eth::TxHash, Error> {
    let tx = transaction(account, call, params);
    tracing::info!(
        from = ?tx.from,
        to = ?tx.to,
        value = %tx.value,
        gas = ?tx.gas,
        gas_price = ?tx.gas_price,
        "submitting transaction"
    );
    let hash = node.send_transaction(account, &tx).await?;
    tracing::info!(?hash, "transaction submitted");
    Ok(hash)
}
