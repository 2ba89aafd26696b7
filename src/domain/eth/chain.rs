use std::fmt::{self, Display, Formatter};

/// A supported Ethereum network, identified by the network ID reported by the
/// node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Network {
    Mainnet = 1,
    Ropsten = 3,
    Rinkeby = 4,
    Goerli = 5,
    Kovan = 42,
}

impl Network {
    pub fn from_chain_id(value: u64) -> Result<Self, UnsupportedChain> {
        match value {
            1 => Ok(Self::Mainnet),
            3 => Ok(Self::Ropsten),
            4 => Ok(Self::Rinkeby),
            5 => Ok(Self::Goerli),
            42 => Ok(Self::Kovan),
            _ => Err(UnsupportedChain(value)),
        }
    }

    /// Returns the lowercase network name, as used by the exchange address
    /// tables.
    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Ropsten => "ropsten",
            Network::Rinkeby => "rinkeby",
            Network::Goerli => "goerli",
            Network::Kovan => "kovan",
        }
    }

    /// Returns the chain ID as a numeric value.
    pub fn chain_id(self) -> u64 {
        self as u64
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported chain {0}")]
pub struct UnsupportedChain(pub u64);
