//! `seasonswap seasons` – list the built-in catalog.

use seasonswap_core::catalog::SeasonCatalog;
use seasonswap_core::expiry;

pub fn run_seasons() {
    let catalog = SeasonCatalog::builtin();
    let now = expiry::now_ms();
    println!("{:<12} {:<8} {:<16} {}", "HASH", "STATE", "ENDS (epoch ms)", "IMAGE");
    for season in catalog.iter() {
        let state = if season.end_ms < now { "ended" } else { "live" };
        println!(
            "{:<12} {:<8} {:<16} {}",
            season.hash, state, season.end_ms, season.image_path
        );
    }
}
