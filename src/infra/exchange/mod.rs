//! On-chain exchanges that sell tokens for ether.
//!
//! Every exchange implements the [`Exchange`] trait, which normalizes rate
//! lookups, cost estimates and purchases across protocols with very different
//! contract interfaces. [`Kind`] names the supported exchanges and connects
//! them to a node.

use {
    crate::{
        domain::{
            Account,
            EthereumAmount,
            Metadata,
            TokenAmount,
            TokenTicker,
            TransactionCosts,
            eth,
        },
        infra::blockchain::{self, Node},
    },
    alloy::sol_types::SolCall,
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
        sync::Arc,
    },
};

pub mod kyber;
pub mod uniswap;

pub use self::{kyber::Kyber, uniswap::Uniswap};

/// An exchange for buying tokens with ether.
#[async_trait::async_trait]
pub trait Exchange: Send + Sync {
    fn kind(&self) -> Kind;

    /// The chain client the exchange is bound to.
    fn client(&self) -> &Client;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn metadata(&self) -> &'static Metadata {
        self.kind().metadata()
    }

    /// The network ID of the bound chain.
    async fn chain_id(&self) -> Result<u64, Error> {
        self.client().chain_id().await
    }

    async fn network(&self) -> Result<eth::Network, Error> {
        self.client().network().await
    }

    async fn is_mainnet(&self) -> Result<bool, Error> {
        match self.network().await {
            Ok(network) => Ok(network == eth::Network::Mainnet),
            Err(Error::UnsupportedChain(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Whether the exchange can trade `ticker` on the bound network.
    async fn is_listing_token(&self, _ticker: &TokenTicker) -> Result<bool, Error> {
        Ok(false)
    }

    /// The current exchange rate for buying `amount`.
    async fn get_current_rate(&self, amount: &TokenAmount) -> Result<EthereumAmount, Error>;

    /// Estimates what buying `amount` from `account` costs right now.
    ///
    /// Returns `None` when the exchange doesn't apply: the token isn't listed
    /// or the amount isn't positive.
    async fn calculate_transaction_costs(
        &self,
        amount: &TokenAmount,
        account: &Account,
    ) -> Result<Option<TransactionCosts>, Error> {
        if amount.as_wei().is_zero() || !self.is_listing_token(&amount.ticker).await? {
            return Ok(None);
        }
        self.estimate_transaction_costs(amount, account)
            .await
            .map(Some)
    }

    /// The exchange specific cost estimate behind
    /// [`Exchange::calculate_transaction_costs`]. Callers are expected to have
    /// checked that the exchange applies.
    async fn estimate_transaction_costs(
        &self,
        amount: &TokenAmount,
        account: &Account,
    ) -> Result<TransactionCosts, Error>;

    /// Buys `amount` for `account`. Costs are estimated again right before
    /// submission, so a previous estimate never gets reused.
    async fn buy_tokens(
        &self,
        account: &Account,
        amount: &TokenAmount,
    ) -> Result<eth::TxHash, Error>;
}

/// Shared chain access for exchange implementations.
#[derive(Clone)]
pub struct Client {
    node: Arc<dyn Node>,
}

impl Client {
    pub fn new(node: Arc<dyn Node>) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &dyn Node {
        self.node.as_ref()
    }

    pub async fn chain_id(&self) -> Result<u64, Error> {
        Ok(self.node.network_id().await?)
    }

    pub async fn network(&self) -> Result<eth::Network, Error> {
        Ok(eth::Network::from_chain_id(self.chain_id().await?)?)
    }

    pub async fn gas_price(&self) -> Result<EthereumAmount, Error> {
        Ok(EthereumAmount::from_wei(self.node.gas_price().await?))
    }

    /// Executes a read-only contract call and decodes its return value.
    pub async fn call<C: SolCall + Send + Sync>(
        &self,
        to: eth::Address,
        call: &C,
    ) -> Result<C::Return, Error> {
        let data = self
            .node
            .call(&eth::Call {
                to,
                calldata: call.abi_encode(),
            })
            .await?;
        Ok(C::abi_decode_returns(&data)?)
    }

    /// The on-chain time limit for a swap submitted now: the latest block's
    /// timestamp plus `window` seconds.
    pub async fn deadline(&self, window: u64) -> Result<eth::U256, Error> {
        let block = self.node.latest_block().await?;
        Ok(eth::U256::from(block.timestamp + window))
    }
}

/// The supported exchanges.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Kyber,
    Uniswap,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Kyber, Kind::Uniswap];

    pub fn name(self) -> &'static str {
        match self {
            Kind::Kyber => "Kyber",
            Kind::Uniswap => "Uniswap",
        }
    }

    pub fn metadata(self) -> &'static Metadata {
        match self {
            Kind::Kyber => &Kyber::METADATA,
            Kind::Uniswap => &Uniswap::METADATA,
        }
    }

    /// Creates the exchange bound to `node`.
    pub async fn connect(self, node: Arc<dyn Node>) -> Result<Box<dyn Exchange>, Error> {
        Ok(match self {
            Kind::Kyber => Box::new(Kyber::new(node).await?),
            Kind::Uniswap => Box::new(Uniswap::new(node)),
        })
    }
}

impl FromStr for Kind {
    type Err = UnknownExchange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kyber" => Ok(Kind::Kyber),
            "uniswap" => Ok(Kind::Uniswap),
            _ => Err(UnknownExchange(s.to_owned())),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves an exchange by name, ignoring case.
pub fn get_by_name(name: &str) -> Result<Kind, UnknownExchange> {
    name.parse()
}

#[derive(Debug, thiserror::Error)]
#[error("unknown exchange {0:?}")]
pub struct UnknownExchange(pub String);

/// Errors of all exchanges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{exchange} does not have a listed exchange for {ticker}")]
    NotListed {
        exchange: &'static str,
        ticker: TokenTicker,
    },
    #[error("{exchange} does not list {ticker} on {network}")]
    UnsupportedNetwork {
        exchange: &'static str,
        ticker: TokenTicker,
        network: String,
    },
    #[error("trade not possible at the moment due to lack of liquidity")]
    NoLiquidity,
    #[error("token amount must be positive")]
    InvalidAmount,
    #[error("failed to get transaction costs")]
    MissingCosts,
    #[error(transparent)]
    UnsupportedChain(#[from] eth::UnsupportedChain),
    #[error(transparent)]
    Node(#[from] blockchain::Error),
    #[error("invalid contract return data: {0}")]
    Decode(#[from] alloy::sol_types::Error),
}
