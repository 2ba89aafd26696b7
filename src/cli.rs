use {
    crate::{domain::TokenTicker, infra::exchange},
    bigdecimal::BigDecimal,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Buy tokens with ether on on-chain exchanges.
#[derive(Parser)]
#[command(version)]
pub struct Args {
    /// Log filter to use.
    #[clap(long, env, default_value = "warn,token_exchange=info")]
    pub log: String,

    /// Path to the TOML configuration file.
    #[clap(long, env)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the costs of buying tokens on every configured exchange.
    Quote(Order),
    /// Buy tokens, on the cheapest exchange unless one is named.
    Buy {
        #[command(flatten)]
        order: Order,

        /// The exchange to buy from, e.g. `kyber` or `uniswap`.
        #[clap(long)]
        exchange: Option<exchange::Kind>,
    },
}

#[derive(clap::Args)]
pub struct Order {
    /// The token to buy, e.g. `RDN`.
    #[clap(long)]
    pub ticker: TokenTicker,

    /// The amount of tokens to buy, in whole tokens.
    #[clap(long)]
    pub amount: BigDecimal,

    /// Hex encoded private key of the buying account.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
}
