use {
    crate::{
        cli,
        domain::{Account, TokenAmount, TransactionCosts, purchase},
        infra::{self, Exchange, blockchain, config},
    },
    anyhow::Context,
    clap::Parser,
    std::sync::Arc,
};

/// Parses the arguments, runs the command and exits the process with a
/// non-zero status on failure.
pub async fn start(args: impl IntoIterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    infra::observe::initialize(&args.log);
    tracing::debug!(config = ?args.config, "starting");

    if let Err(err) = run(args).await {
        tracing::error!(?err, "command failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> anyhow::Result<()> {
    let config = config::file::load(&args.config).await;
    let node: Arc<dyn infra::Node> = Arc::new(blockchain::rpc(&config.node_url));

    match args.command {
        cli::Command::Quote(order) => {
            let (account, amount) = order_parts(order)?;
            let exchanges = connect(&config.exchanges, &node).await?;
            let quotes = purchase::quotes(&exchanges, &amount, &account).await;
            if quotes.is_empty() {
                println!("no exchange sells {amount}");
            }
            for quote in quotes {
                print_costs(quote.exchange, &quote.costs);
            }
        }
        cli::Command::Buy { order, exchange } => {
            let (account, amount) = order_parts(order)?;
            let kinds = match exchange {
                Some(kind) => vec![kind],
                None => config.exchanges.clone(),
            };
            let exchanges = connect(&kinds, &node).await?;
            let purchase = purchase::buy(&exchanges, exchange, &amount, &account).await?;
            if let Some(costs) = &purchase.quote {
                print_costs(purchase.exchange, costs);
            }
            println!("bought {amount} on {}: {}", purchase.exchange.name(), purchase.hash);
        }
    }
    Ok(())
}

fn order_parts(order: cli::Order) -> anyhow::Result<(Account, TokenAmount)> {
    let account = order
        .private_key
        .parse::<Account>()
        .context("invalid private key")?;
    Ok((account, TokenAmount::new(order.amount, order.ticker)))
}

async fn connect(
    kinds: &[infra::Kind],
    node: &Arc<dyn infra::Node>,
) -> anyhow::Result<Vec<Box<dyn Exchange>>> {
    let mut exchanges = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let exchange = kind
            .connect(node.clone())
            .await
            .with_context(|| format!("connecting to {kind}"))?;
        exchanges.push(exchange);
    }
    Ok(exchanges)
}

fn print_costs(exchange: &dyn Exchange, costs: &TransactionCosts) {
    let metadata = exchange.metadata();
    println!("{}", exchange.name());
    println!("  exchange rate: {}", costs.exchange_rate);
    println!("  ether sold:    {}", costs.eth_sold);
    println!("  gas:           {} at {}", costs.gas.0, costs.gas_price);
    println!("  gas cost:      {}", costs.gas_cost());
    println!("  total:         {}", costs.total);
    if let Some(fee) = metadata.exchange_fee_bps {
        println!("  exchange fee:  {}%", f64::from(fee) / 100.0);
    }
    if let Some(url) = metadata.terms_of_service_url {
        println!("  terms:         {url}");
    }
}
