use super::format_answer;
use crate::di::ResolverServices;
use futures::stream::{FuturesUnordered, StreamExt};
use netbox_resolver_application::ports::AddressList;
use netbox_resolver_jobs::{CacheJanitorJob, JobRunner};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Resolve stdin names concurrently while the cache janitor runs.
///
/// Ctrl+C cancels in-flight lookups; EOF lets them finish first.
pub async fn watch_stdin(
    services: &ResolverServices,
    janitor_interval: Duration,
) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    let handles = JobRunner::new()
        .with_cache_janitor(
            CacheJanitorJob::new(services.cache.clone())
                .with_interval(janitor_interval)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = FuturesUnordered::new();
    let mut stdin_open = true;

    info!("Reading names from stdin");

    loop {
        if !stdin_open && in_flight.is_empty() {
            break;
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!(pending = in_flight.len(), "Interrupted, cancelling lookups");
                shutdown.cancel();
            }
            _ = shutdown.cancelled() => break,
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    let name = line.trim().to_string();
                    if name.is_empty() {
                        continue;
                    }
                    let resolve = services.resolve.clone();
                    let token = shutdown.clone();
                    in_flight.push(async move {
                        let addresses: AddressList =
                            resolve.lookup_with_cancellation(&name, &token).await;
                        (name, addresses)
                    });
                }
                Ok(None) => stdin_open = false,
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    stdin_open = false;
                }
            },
            Some((name, addresses)) = in_flight.next(), if !in_flight.is_empty() => {
                println!("{}", format_answer(&name, &addresses));
            }
        }
    }

    shutdown.cancel();
    for handle in handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Watch finished");
    Ok(())
}
