//! Application execution logic.
//!
//! Builds a resolver from the validated configuration, runs one lookup
//! and renders the result.

use serde::Serialize;
use thiserror::Error;

use getmac::config::{OutputFormat, ValidatedConfig};
use getmac::{MacAddress, ResolveError, Resolver, Selector};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Every probe ran and none found an address.
    #[error("No MAC address found for {target}")]
    NotFound {
        /// Human-readable description of the target
        target: String,
    },

    /// The target could not be resolved to something probes can query.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Failed to render JSON output.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// JSON output record.
#[derive(Debug, Serialize)]
struct Report<'a> {
    target: &'a str,
    mac_address: MacAddress,
}

/// Looks up the configured target and returns the line to print.
///
/// # Errors
///
/// Returns [`RunError::NotFound`] when no address is found, or the
/// underlying error when the target cannot be resolved.
pub fn execute(config: &ValidatedConfig) -> Result<String, RunError> {
    execute_with(config, build_resolver(config))
}

fn build_resolver(config: &ValidatedConfig) -> Resolver {
    let resolver = Resolver::new().with_network_request(config.network_request);
    match &config.default_interface {
        Some(name) => resolver.with_default_interface(name.clone()),
        None => resolver,
    }
}

fn execute_with(config: &ValidatedConfig, resolver: Resolver) -> Result<String, RunError> {
    let selector = config
        .selector
        .clone()
        .unwrap_or_else(|| Selector::Interface(resolver.default_interface()));
    let target = target_label(&selector);
    tracing::debug!(target = %target, platform = %resolver.platform(), "Looking up MAC address");

    let mac = resolver
        .try_resolve(Some(&selector))?
        .ok_or_else(|| RunError::NotFound {
            target: selector.to_string(),
        })?;

    tracing::info!(%mac, target = %target, "Found MAC address");
    render(config.format, &target, mac)
}

/// Renders `mac` for stdout in the configured format.
fn render(format: OutputFormat, target: &str, mac: MacAddress) -> Result<String, RunError> {
    match format {
        OutputFormat::Text => Ok(mac.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Report {
            target,
            mac_address: mac,
        })?),
    }
}

/// The bare target value, as shown in JSON output.
fn target_label(selector: &Selector) -> String {
    match selector {
        Selector::Interface(name) | Selector::Hostname(name) => name.clone(),
        Selector::Ipv4(ip) => ip.to_string(),
        Selector::Ipv6(ip) => ip.to_string(),
    }
}
