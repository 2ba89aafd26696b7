use {
    crate::infra::exchange,
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
    std::path::Path,
};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// The JSON RPC endpoint of the Ethereum node.
    #[serde_as(as = "DisplayFromStr")]
    node_url: reqwest::Url,

    /// Names of the exchanges to use. All supported exchanges are used when
    /// omitted.
    #[serde(default = "default_exchanges")]
    #[serde_as(as = "Vec<DisplayFromStr>")]
    exchanges: Vec<exchange::Kind>,
}

fn default_exchanges() -> Vec<exchange::Kind> {
    exchange::Kind::ALL.to_vec()
}

/// Load the configuration from a TOML file.
///
/// # Panics
///
/// This method panics if the config is invalid or on I/O errors.
pub async fn load(path: &Path) -> super::Config {
    let data = tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("I/O error while reading {path:?}: {e:?}"));
    parse(&data).unwrap_or_else(|e| panic!("TOML syntax error while reading {path:?}: {e}"))
}

fn parse(data: &str) -> Result<super::Config, toml::de::Error> {
    let config = toml::from_str::<Config>(data)?;
    Ok(super::Config {
        node_url: config.node_url,
        exchanges: config.exchanges,
    })
}
