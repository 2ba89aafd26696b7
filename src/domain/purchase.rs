//! Picking the exchange to buy from.

use {
    crate::{
        domain::{Account, TokenAmount, TransactionCosts, eth},
        infra::exchange::{self, Exchange, Kind},
    },
    tracing::Instrument,
};

/// The costs of buying on a specific exchange.
pub struct Quote<'a> {
    pub exchange: &'a dyn Exchange,
    pub costs: TransactionCosts,
}

/// Estimates the costs of buying `amount` on each exchange, one after the
/// other. Exchanges that don't list the token or fail to quote are skipped.
pub async fn quotes<'a>(
    exchanges: &'a [Box<dyn Exchange>],
    amount: &TokenAmount,
    account: &Account,
) -> Vec<Quote<'a>> {
    let mut quotes = Vec::new();
    for exchange in exchanges {
        let costs = exchange
            .calculate_transaction_costs(amount, account)
            .instrument(tracing::debug_span!("quote", exchange = exchange.name()))
            .await;
        match costs {
            Ok(Some(costs)) => quotes.push(Quote {
                exchange: exchange.as_ref(),
                costs,
            }),
            Ok(None) => {
                tracing::debug!(exchange = exchange.name(), %amount, "exchange does not apply")
            }
            Err(err) => {
                tracing::warn!(exchange = exchange.name(), %amount, ?err, "failed to quote")
            }
        }
    }
    quotes
}

/// The quote with the lowest total cost, if any exchange can sell `amount`.
pub async fn best_quote<'a>(
    exchanges: &'a [Box<dyn Exchange>],
    amount: &TokenAmount,
    account: &Account,
) -> Option<Quote<'a>> {
    quotes(exchanges, amount, account)
        .await
        .into_iter()
        .min_by(|a, b| a.costs.total.cmp(&b.costs.total))
}

/// A submitted purchase.
pub struct Purchase<'a> {
    pub exchange: &'a dyn Exchange,
    /// The quote the exchange was picked by. Absent when the exchange was
    /// named by the caller.
    pub quote: Option<TransactionCosts>,
    pub hash: eth::TxHash,
}

/// Buys `amount` on the exchange of kind `named`, or on the exchange with the
/// best quote when none is named.
///
/// A named exchange is not quoted first, so it reports itself why it can't
/// sell `amount`.
pub async fn buy<'a>(
    exchanges: &'a [Box<dyn Exchange>],
    named: Option<Kind>,
    amount: &TokenAmount,
    account: &Account,
) -> Result<Purchase<'a>, Error> {
    let (exchange, quote) = match named {
        Some(kind) => {
            let exchange = exchanges
                .iter()
                .find(|exchange| exchange.kind() == kind)
                .ok_or(Error::NotConnected(kind))?;
            (exchange.as_ref(), None)
        }
        None => {
            let quote = best_quote(exchanges, amount, account)
                .await
                .ok_or_else(|| Error::NoQuote(amount.clone()))?;
            (quote.exchange, Some(quote.costs))
        }
    };

    let hash = exchange
        .buy_tokens(account, amount)
        .await
        .map_err(|source| Error::Exchange {
            exchange: exchange.name(),
            source,
        })?;
    Ok(Purchase {
        exchange,
        quote,
        hash,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no exchange sells {0}")]
    NoQuote(TokenAmount),
    #[error("{0} is not connected")]
    NotConnected(Kind),
    #[error("buying on {exchange} failed")]
    Exchange {
        exchange: &'static str,
        #[source]
        source: exchange::Error,
    },
}
