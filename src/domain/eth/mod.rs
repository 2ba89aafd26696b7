mod chain;

pub use {
    self::chain::{Network, UnsupportedChain},
    alloy::primitives::{Address, TxHash, U256},
};

use {
    alloy::primitives::hex,
    std::fmt::{self, Debug, Formatter},
};

/// Gas amount.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Gas(pub u64);

impl std::ops::Mul<u64> for Gas {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// The parts of a block header that exchanges care about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block {
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

/// An encoded contract function call.
#[derive(Clone, Eq, PartialEq)]
pub struct Call {
    /// The address that gets called on-chain.
    pub to: Address,
    /// The associated calldata for the on-chain call.
    pub calldata: Vec<u8>,
}

impl Call {
    /// The 4-byte function selector of the call, if the calldata has one.
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.calldata.get(..4)?.try_into().ok()
    }
}

impl Debug for Call {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Call")
            .field("to", &self.to)
            .field("calldata", &hex::encode_prefixed(&self.calldata))
            .finish()
    }
}

/// A transaction calling a contract on behalf of an account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub calldata: Vec<u8>,
    /// Ether sent along with the call, in wei.
    pub value: U256,
    /// The gas limit. Left to the node when unset.
    pub gas: Option<Gas>,
    /// The gas price in wei. Left to the node when unset.
    pub gas_price: Option<U256>,
}
