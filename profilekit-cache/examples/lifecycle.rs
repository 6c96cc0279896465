//! Walks a profile through validation, caching and eviction.
//!
//! Run with `RUST_LOG=profilekit=trace` to see every attribute write and
//! cache operation.

use anyhow::Result;
use chrono::Local;
use profilekit_cache::{share, ProfileCache};
use profilekit_core::{resolve_last_login, Profile};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profilekit=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut profile = Profile::new();
    profile.set_username("JohnDoe")?;
    profile.set_email("john@example.com")?;
    info!(%profile, last_login = %resolve_last_login(&profile), "Created profile");

    if let Err(err) = profile.set_email("john@example") {
        warn!(%err, "Rejected update");
    }

    let profile = share(profile);
    let id = ProfileCache::global().register(&profile);

    // Registered profiles stay writable through the owner's handle.
    profile.write().update_last_login(Some(Local::now().naive_local()))?;
    match ProfileCache::global().get(&id) {
        Some(cached) => info!(profile = %cached.read(), "Cache hit"),
        None => warn!(%id, "Cache miss while profile is alive"),
    }

    drop(profile);
    let after_drop = ProfileCache::global().get(&id);
    info!(%id, present = after_drop.is_some(), "Looked up after last owner dropped");

    Ok(())
}
