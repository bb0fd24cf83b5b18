pub mod resolve;
pub mod watch;

pub use resolve::resolve_names;
pub use watch::watch_stdin;

use std::net::Ipv4Addr;

/// `name<TAB>addr1 addr2`, or `name<TAB>-` when nothing was found.
pub fn format_answer(name: &str, addresses: &[Ipv4Addr]) -> String {
    if addresses.is_empty() {
        return format!("{name}\t-");
    }
    let joined: Vec<String> = addresses.iter().map(Ipv4Addr::to_string).collect();
    format!("{name}\t{}", joined.join(" "))
}
