use super::format_answer;
use crate::di::ResolverServices;
use futures::future::join_all;
use tracing::info;

pub async fn resolve_names(services: &ResolverServices, names: &[String]) -> anyhow::Result<()> {
    let lookups = names.iter().map(|name| services.resolve.lookup(name));
    let answers = join_all(lookups).await;

    let mut resolved = 0usize;
    for (name, addresses) in names.iter().zip(answers) {
        if !addresses.is_empty() {
            resolved += 1;
        }
        println!("{}", format_answer(name, &addresses));
    }

    info!(requested = names.len(), resolved, "Lookups completed");
    Ok(())
}
