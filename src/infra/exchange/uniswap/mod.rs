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

use self::contracts::UniswapExchange;

/// Uniswap V1, with one exchange contract per token.
pub struct Uniswap {
    client: Client,
}

impl Uniswap {
    /// The supported networks are the ones the exchange address tables cover.
    pub const METADATA: Metadata = Metadata {
        gas_required: 75_000,
        supported_networks: &[
            eth::Network::Mainnet,
            eth::Network::Kovan,
            eth::Network::Rinkeby,
        ],
        exchange_fee_bps: Some(30),
        main_website_url: Some("https://uniswap.io"),
        transfer_website_url: Some("https://uniswap.ninja/send"),
        terms_of_service_url: Some("https://uniswap.io"),
    };

    /// Seconds a submitted swap stays valid, counted from the latest block.
    pub const EXCHANGE_TIMEOUT: u64 = 20 * 60;

    pub fn new(node: Arc<dyn Node>) -> Self {
        Self {
            client: Client::new(node),
        }
    }

    /// The exchange contract trading `ticker` on the bound network.
    async fn exchange_address(&self, ticker: &TokenTicker) -> Result<eth::Address, Error> {
        let network = match self.client.network().await {
            Ok(network) => Some(network),
            Err(Error::UnsupportedChain(_)) => None,
            Err(err) => return Err(err),
        };
        network
            .and_then(|network| contracts::exchange_address(ticker, network))
            .ok_or_else(|| Error::NotListed {
                exchange: self.name(),
                ticker: ticker.clone(),
            })
    }

    /// The ether it takes to buy exactly `amount`.
    async fn output_price(&self, amount: &TokenAmount) -> Result<EthereumAmount, Error> {
        let exchange = self.exchange_address(&amount.ticker).await?;
        let tokens_bought = amount.as_wei();
        if tokens_bought.is_zero() {
            return Err(Error::InvalidAmount);
        }

        let price = self
            .client
            .call(
                exchange,
                &UniswapExchange::getEthToTokenOutputPriceCall { tokens_bought },
            )
            .await?;
        tracing::debug!(%price, %tokens_bought, "uniswap output price");
        if price.is_zero() {
            return Err(Error::NoLiquidity);
        }
        Ok(EthereumAmount::from_wei(price))
    }

    fn unit_rate(price: &EthereumAmount, amount: &TokenAmount) -> EthereumAmount {
        EthereumAmount::new(&price.value / &amount.value)
    }

    /// Builds the swap for exactly `amount` tokens. The deadline is read from
    /// the chain on every call.
    async fn swap_call(&self, amount: &TokenAmount) -> Result<eth::Call, Error> {
        let exchange = self.exchange_address(&amount.ticker).await?;
        let deadline = self.client.deadline(Self::EXCHANGE_TIMEOUT).await?;
        let call = UniswapExchange::ethToTokenSwapOutputCall {
            tokens_bought: amount.as_wei(),
            deadline,
        };
        Ok(eth::Call {
            to: exchange,
            calldata: call.abi_encode(),
        })
    }
}

#[async_trait::async_trait]
impl Exchange for Uniswap {
    fn kind(&self) -> Kind {
        Kind::Uniswap
    }

    fn client(&self) -> &Client {
        &self.client
    }

    async fn is_listing_token(&self, ticker: &TokenTicker) -> Result<bool, Error> {
        match self.exchange_address(ticker).await {
            Ok(_) => Ok(true),
            Err(Error::NotListed { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Returns the price of a single token in ether, derived from the price of
    /// buying exactly `amount`.
    async fn get_current_rate(&self, amount: &TokenAmount) -> Result<EthereumAmount, Error> {
        let price = self.output_price(amount).await?;
        Ok(Self::unit_rate(&price, amount))
    }

    async fn estimate_transaction_costs(
        &self,
        amount: &TokenAmount,
        account: &Account,
    ) -> Result<TransactionCosts, Error> {
        // The unit rate times the amount can fall short of the exact output
        // price by a wei, so the price is sold as quoted.
        let eth_sold = self.output_price(amount).await?;
        let exchange_rate = Self::unit_rate(&eth_sold, amount);
        let gas_price = self.client.gas_price().await?;

        let gas = submit::estimate_gas(
            self.client.node(),
            account,
            self.swap_call(amount).await?,
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

    /// Buys `amount` with twice the estimated gas, as the estimate falls short
    /// for these exchanges every now and then. The transaction value covers
    /// the full estimated total, gas costs included.
    async fn buy_tokens(
        &self,
        account: &Account,
        amount: &TokenAmount,
    ) -> Result<eth::TxHash, Error> {
        let costs = self
            .calculate_transaction_costs(amount, account)
            .await?
            .ok_or(Error::MissingCosts)?;

        Ok(submit::send_raw_transaction(
            self.client.node(),
            account,
            self.swap_call(amount).await?,
            submit::Params {
                value: costs.total.as_wei(),
                gas: Some(costs.gas * 2),
                gas_price: Some(costs.gas_price.as_wei()),
            },
        )
        .await?)
    }
}
