use {
    super::{Client, Error, Exchange, Kind},
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
        infra::blockchain::{Node, submit},
    },
    alloy::sol_types::SolCall,
    std::sync::Arc,
};

pub(crate) mod contracts;
mod tokens;

use self::contracts::KyberNetworkProxy;

/// Kyber Network, which routes every trade through a single network proxy
/// contract.
pub struct Kyber {
    client: Client,
    /// The network proxy of the network the node was on when the exchange
    /// was created.
    network_proxy: Option<eth::Address>,
}

impl Kyber {
    pub const METADATA: Metadata = Metadata {
        gas_required: 500_000,
        supported_networks: &[eth::Network::Ropsten, eth::Network::Mainnet],
        exchange_fee_bps: None,
        main_website_url: Some("https://kyber.network"),
        transfer_website_url: Some("https://kyberswap.com/transfer/eth"),
        terms_of_service_url: Some("https://kyber.network/terms-and-conditions"),
    };

    pub async fn new(node: Arc<dyn Node>) -> Result<Self, Error> {
        let client = Client::new(node);
        let network_proxy = match client.network().await {
            Ok(network) => contracts::network_proxy(network),
            Err(Error::UnsupportedChain(_)) => None,
            Err(err) => return Err(err),
        };
        tracing::debug!(?network_proxy, "resolved kyber network proxy");
        Ok(Self {
            client,
            network_proxy,
        })
    }

    /// The address Kyber trades `ticker` under on the bound chain.
    async fn token_network_address(
        &self,
        ticker: &TokenTicker,
    ) -> Result<Option<eth::Address>, Error> {
        let chain_id = self.client.chain_id().await?;
        Ok(tokens::token_network_address(chain_id, ticker))
    }

    async fn listed_address(&self, ticker: &TokenTicker) -> Result<eth::Address, Error> {
        self.token_network_address(ticker)
            .await?
            .ok_or_else(|| Error::NotListed {
                exchange: self.name(),
                ticker: ticker.clone(),
            })
    }

    async fn proxy(&self, ticker: &TokenTicker) -> Result<eth::Address, Error> {
        match self.network_proxy {
            Some(address) => Ok(address),
            None => Err(self.unsupported_network(ticker).await),
        }
    }

    async fn unsupported_network(&self, ticker: &TokenTicker) -> Error {
        let network = match self.client.chain_id().await {
            Ok(chain_id) => eth::Network::from_chain_id(chain_id)
                .map(|network| network.to_string())
                .unwrap_or_else(|_| format!("chain {chain_id}")),
            Err(err) => return err,
        };
        Error::UnsupportedNetwork {
            exchange: self.name(),
            ticker: ticker.clone(),
            network,
        }
    }

    fn swap_call(
        network_proxy: eth::Address,
        token: eth::Address,
        exchange_rate: &EthereumAmount,
    ) -> eth::Call {
        let call = KyberNetworkProxy::swapEtherToTokenCall {
            token,
            minConversionRate: exchange_rate.as_wei(),
        };
        eth::Call {
            to: network_proxy,
            calldata: call.abi_encode(),
        }
    }
}

#[async_trait::async_trait]
impl Exchange for Kyber {
    fn kind(&self) -> Kind {
        Kind::Kyber
    }

    fn client(&self) -> &Client {
        &self.client
    }

    async fn is_listing_token(&self, ticker: &TokenTicker) -> Result<bool, Error> {
        Ok(self.token_network_address(ticker).await?.is_some())
    }

    /// Returns the rate Kyber quotes for `amount`, in wei per token. Of the
    /// expected and the slippage rate, the larger one is used.
    async fn get_current_rate(&self, amount: &TokenAmount) -> Result<EthereumAmount, Error> {
        let network_proxy = self.proxy(&amount.ticker).await?;
        let eth = self.listed_address(&TokenTicker::eth()).await?;
        let token = self.listed_address(&amount.ticker).await?;

        let rates = self
            .client
            .call(
                network_proxy,
                &KyberNetworkProxy::getExpectedRateCall {
                    src: token,
                    dest: eth,
                    srcQty: amount.as_wei(),
                },
            )
            .await?;
        tracing::debug!(
            expected = %rates.expectedRate,
            slippage = %rates.slippageRate,
            "kyber rates"
        );

        if rates.expectedRate.is_zero() || rates.slippageRate.is_zero() {
            return Err(Error::NoLiquidity);
        }
        Ok(EthereumAmount::from_wei(
            rates.expectedRate.max(rates.slippageRate),
        ))
    }

    async fn estimate_transaction_costs(
        &self,
        amount: &TokenAmount,
        account: &Account,
    ) -> Result<TransactionCosts, Error> {
        let exchange_rate = self.get_current_rate(amount).await?;
        let eth_sold = EthereumAmount::new(&amount.value * &exchange_rate.value);

        let network_proxy = self.proxy(&amount.ticker).await?;
        let max_gas_price = self
            .client
            .call(network_proxy, &KyberNetworkProxy::maxGasPriceCall {})
            .await?;
        let node_gas_price = self.client.node().gas_price().await?;
        tracing::debug!(%node_gas_price, %max_gas_price, "kyber gas prices");
        let gas_price = EthereumAmount::from_wei(node_gas_price.min(max_gas_price));

        let token = self.listed_address(&amount.ticker).await?;
        let gas = submit::estimate_gas(
            self.client.node(),
            account,
            Self::swap_call(network_proxy, token, &exchange_rate),
            submit::Params {
                value: eth_sold.as_wei(),
                ..Default::default()
            },
        )
        .await?;

        let gas_cost = EthereumAmount::from_wei(eth::U256::from(gas.0) * gas_price.as_wei());
        Ok(TransactionCosts {
            gas_price,
            gas,
            total: gas_cost + eth_sold.clone(),
            eth_sold,
            exchange_rate,
        })
    }

    async fn buy_tokens(
        &self,
        account: &Account,
        amount: &TokenAmount,
    ) -> Result<eth::TxHash, Error> {
        let supported = match self.network().await {
            Ok(network) => Self::METADATA.supports(network),
            Err(Error::UnsupportedChain(_)) => false,
            Err(err) => return Err(err),
        };
        if !supported {
            return Err(self.unsupported_network(&amount.ticker).await);
        }

        let costs = self
            .calculate_transaction_costs(amount, account)
            .await?
            .ok_or(Error::MissingCosts)?;

        let network_proxy = self.proxy(&amount.ticker).await?;
        let token = self.listed_address(&amount.ticker).await?;
        Ok(submit::send_raw_transaction(
            self.client.node(),
            account,
            Self::swap_call(network_proxy, token, &costs.exchange_rate),
            submit::Params {
                value: costs.eth_sold.as_wei(),
                gas: Some(costs.gas),
                gas_price: Some(costs.gas_price.as_wei()),
            },
        )
        .await?)
    }
}
