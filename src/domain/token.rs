//! Token tickers and amounts.
//!
//! Amounts are decimal values in whole units (e.g. `1.5` ETH) that convert to
//! and from the chain's smallest integer unit on demand.

use {
    crate::{domain::eth, util::conv},
    bigdecimal::BigDecimal,
    std::{
        convert::Infallible,
        fmt::{self, Display, Formatter},
        ops::Add,
        str::FromStr,
    },
};

/// Number of decimals of ether and of tokens that don't specify otherwise.
pub const DEFAULT_DECIMALS: u32 = 18;

/// A token symbol. Tickers are case-insensitive and stored upper-cased.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TokenTicker(String);

impl TokenTicker {
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Self(symbol.as_ref().trim().to_uppercase())
    }

    /// The ticker of the chain's native currency.
    pub fn eth() -> Self {
        Self::new("ETH")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenTicker {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Display for TokenTicker {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A quantity of a token.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenAmount {
    pub value: BigDecimal,
    pub ticker: TokenTicker,
    pub decimals: u32,
}

impl TokenAmount {
    pub fn new(value: BigDecimal, ticker: TokenTicker) -> Self {
        Self::with_decimals(value, ticker, DEFAULT_DECIMALS)
    }

    pub fn with_decimals(value: BigDecimal, ticker: TokenTicker, decimals: u32) -> Self {
        Self {
            value,
            ticker,
            decimals,
        }
    }

    /// The amount in the token's smallest unit. Negative amounts and amounts
    /// that don't fit into 256 bits convert to zero.
    pub fn as_wei(&self) -> eth::U256 {
        conv::decimal_to_wei(&self.value, self.decimals).unwrap_or_default()
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.value.normalized(), self.ticker)
    }
}

/// A quantity of ether.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EthereumAmount {
    pub value: BigDecimal,
}

impl EthereumAmount {
    pub fn new(value: BigDecimal) -> Self {
        Self { value }
    }

    pub fn from_wei(wei: eth::U256) -> Self {
        Self::new(conv::wei_to_decimal(&wei, DEFAULT_DECIMALS))
    }

    /// The amount in wei. Negative amounts and amounts that don't fit into 256
    /// bits convert to zero.
    pub fn as_wei(&self) -> eth::U256 {
        conv::decimal_to_wei(&self.value, DEFAULT_DECIMALS).unwrap_or_default()
    }
}

impl Add for EthereumAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl Display for EthereumAmount {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ETH", self.value.normalized())
    }
}
