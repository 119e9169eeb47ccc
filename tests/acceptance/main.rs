//! Acceptance suite runner.
//!
//! Runs `tests/features` against a live WebDriver server and the object
//! store API. Both are external, so the run is opt-in:
//!
//! ```text
//! ACCEPTANCE_RUN=1 cargo test --test acceptance
//! ACCEPTANCE_RUN=1 cargo test --test acceptance -- --tags @feature:login
//! ```
//!
//! Configuration is read from `ACCEPTANCE_*` variables (see
//! `acceptance_suite::config`). `ACCEPTANCE_DEBUG=1` raises the log level.
//! Login scenarios are tagged `@serial`, so a WebDriver server hosting one
//! session at a time (geckodriver) is enough.

mod steps;
mod tags;
mod world;

use acceptance_suite::SuiteConfig;
use anyhow::Context;
use cucumber::World;
use futures_util::FutureExt;
use tracing_subscriber::EnvFilter;

use world::AcceptanceWorld;

/// Initialize tracing/logging.
fn init_logging(debug: bool) {
    let default = if debug {
        "acceptance_suite=debug,acceptance=debug"
    } else {
        "acceptance_suite=info,acceptance=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| !matches!(v.trim(), "" | "0" | "false"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if !flag("ACCEPTANCE_RUN") {
        eprintln!("Skipping acceptance suite (set ACCEPTANCE_RUN=1 to run it)");
        return Ok(());
    }

    init_logging(flag("ACCEPTANCE_DEBUG"));

    let config = SuiteConfig::from_env().context("invalid ACCEPTANCE_* configuration")?;
    config.driver().context("invalid WebDriver configuration")?;
    world::install_config(config);

    AcceptanceWorld::cucumber()
        .before(|feature, _rule, scenario, world| {
            async move { world.set_up(feature, scenario).await }.boxed_local()
        })
        .after(|feature, _rule, scenario, finished, world| {
            async move {
                if let Some(world) = world {
                    world.tear_down(feature, scenario, finished).await;
                }
            }
            .boxed_local()
        })
        .with_default_cli()
        .run_and_exit(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/features"))
        .await;

    Ok(())
}
