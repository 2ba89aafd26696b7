//! Access to an Ethereum node.
//!
//! Exchanges only talk to the chain through the [`Node`] trait, which covers
//! the handful of JSON RPC requests they need. [`Rpc`] implements it on top of
//! an HTTP provider.

use {
    crate::domain::{Account, eth},
    alloy::{
        eips::{BlockNumberOrTag, eip2718::Encodable2718},
        network::{EthereumWallet, TransactionBuilder},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
    },
};

pub mod submit;

/// The chain client exchanges are bound to.
///
/// Every method is a single round trip to the node. Nothing is cached, so
/// repeated calls observe the latest chain state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Node: Send + Sync {
    /// The network ID the node reports (`net_version`).
    async fn network_id(&self) -> Result<u64, Error>;

    /// The node's suggested gas price in wei.
    async fn gas_price(&self) -> Result<eth::U256, Error>;

    async fn latest_block(&self) -> Result<eth::Block, Error>;

    /// Executes a read-only contract call against the latest block and returns
    /// the raw return data.
    async fn call(&self, call: &eth::Call) -> Result<Vec<u8>, Error>;

    /// Simulates the transaction and returns the gas it uses.
    async fn estimate_gas(&self, tx: &eth::Transaction) -> Result<eth::Gas, Error>;

    /// Signs the transaction with the account's key and broadcasts it.
    async fn send_transaction(
        &self,
        account: &Account,
        tx: &eth::Transaction,
    ) -> Result<eth::TxHash, Error>;
}

/// Creates a node client for the JSON RPC endpoint at `url`.
pub fn rpc(url: &reqwest::Url) -> Rpc {
    Rpc {
        provider: ProviderBuilder::new().connect_http(url.clone()).erased(),
    }
}

/// A [`Node`] backed by an HTTP JSON RPC provider.
#[derive(Clone, Debug)]
pub struct Rpc {
    provider: DynProvider,
}

impl Rpc {
    fn request(tx: &eth::Transaction) -> Result<TransactionRequest, Error> {
        let mut request = TransactionRequest::default()
            .with_from(tx.from)
            .with_to(tx.to)
            .with_input(tx.calldata.clone())
            .with_value(tx.value);
        if let Some(gas) = tx.gas {
            request = request.with_gas_limit(gas.0);
        }
        if let Some(gas_price) = tx.gas_price {
            let gas_price =
                u128::try_from(gas_price).map_err(|_| Error::GasPriceOverflow(gas_price))?;
            request = request.with_gas_price(gas_price);
        }
        Ok(request)
    }
}

#[async_trait::async_trait]
impl Node for Rpc {
    async fn network_id(&self) -> Result<u64, Error> {
        Ok(self.provider.get_net_version().await?)
    }

    async fn gas_price(&self) -> Result<eth::U256, Error> {
        Ok(eth::U256::from(self.provider.get_gas_price().await?))
    }

    async fn latest_block(&self) -> Result<eth::Block, Error> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or(Error::MissingBlock)?;
        Ok(eth::Block {
            timestamp: block.header.timestamp,
        })
    }

    async fn call(&self, call: &eth::Call) -> Result<Vec<u8>, Error> {
        let request = TransactionRequest::default()
            .with_to(call.to)
            .with_input(call.calldata.clone());
        Ok(self.provider.call(request).await?.to_vec())
    }

    async fn estimate_gas(&self, tx: &eth::Transaction) -> Result<eth::Gas, Error> {
        let gas = self.provider.estimate_gas(Self::request(tx)?).await?;
        Ok(eth::Gas(gas))
    }

    async fn send_transaction(
        &self,
        account: &Account,
        tx: &eth::Transaction,
    ) -> Result<eth::TxHash, Error> {
        let mut request = Self::request(tx)?
            .with_nonce(self.provider.get_transaction_count(tx.from).await?)
            .with_chain_id(self.provider.get_chain_id().await?);
        if tx.gas.is_none() {
            let gas = self.provider.estimate_gas(request.clone()).await?;
            request = request.with_gas_limit(gas);
        }
        if tx.gas_price.is_none() {
            request = request.with_gas_price(self.provider.get_gas_price().await?);
        }

        let wallet = EthereumWallet::from(account.signer().clone());
        let envelope = request
            .build(&wallet)
            .await
            .map_err(|err| Error::Signing(err.to_string()))?;
        let pending = self
            .provider
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;
        Ok(*pending.tx_hash())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("node request failed: {0}")]
    Rpc(#[from] alloy::transports::TransportError),
    #[error("node did not return the latest block")]
    MissingBlock,
    #[error("gas price {0} does not fit into 128 bits")]
    GasPriceOverflow(eth::U256),
    #[error("failed to sign transaction: {0}")]
    Signing(String),
}
