use {
    crate::domain::eth,
    alloy::signers::local::{LocalSignerError, PrivateKeySigner},
    std::{
        fmt::{self, Debug, Formatter},
        str::FromStr,
    },
};

/// An externally owned account that buys tokens and pays for gas.
#[derive(Clone)]
pub struct Account {
    signer: PrivateKeySigner,
}

impl Account {
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    pub fn address(&self) -> eth::Address {
        self.signer.address()
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl FromStr for Account {
    type Err = LocalSignerError;

    /// Parses a hex encoded private key, with or without `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().parse()?))
    }
}

impl Debug for Account {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
