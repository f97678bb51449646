//! The resolution strategy engine.

use std::fmt;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs, UdpSocket};

use tracing::Dispatch;

use super::strategy::{self, TargetKind, UNIX_FALLBACK_INTERFACE, WINDOWS_DEFAULT_INTERFACE};
use super::{Platform, ResolveError, Selector};
use crate::address::{MacAddress, normalize};
use crate::probe::{self, CommandRunner, Probe, SystemRunner};

/// Function resolving a hostname to its addresses.
pub type HostLookup = fn(&str) -> io::Result<Vec<IpAddr>>;

/// Resolves hostnames with the operating system's resolver.
///
/// # Errors
///
/// Returns the resolver's error if the name cannot be looked up.
pub fn system_lookup(hostname: &str) -> io::Result<Vec<IpAddr>> {
    Ok((hostname, 0).to_socket_addrs()?.map(|addr| addr.ip()).collect())
}

/// Returns true if an IPv6 socket can be bound on this host.
fn host_supports_ipv6() -> bool {
    UdpSocket::bind((Ipv6Addr::LOCALHOST, 0)).is_ok()
}

/// A selector after hostname lookup and default-interface discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Interface(String),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
}

impl Target {
    const fn kind(&self) -> TargetKind {
        match self {
            Self::Interface(_) => TargetKind::Interface,
            Self::Ipv4(_) => TargetKind::Ipv4,
            Self::Ipv6(_) => TargetKind::Ipv6,
        }
    }

    const fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Interface(_) => None,
            Self::Ipv4(ip) => Some(IpAddr::V4(*ip)),
            Self::Ipv6(ip) => Some(IpAddr::V6(*ip)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface(name) => write!(f, "{name}"),
            Self::Ipv4(ip) => write!(f, "{ip}"),
            Self::Ipv6(ip) => write!(f, "{ip}"),
        }
    }
}

/// Resolves MAC addresses by running platform probes in priority order.
///
/// Every call is independent; the resolver keeps no state between calls.
///
/// # Construction
///
/// [`Resolver::new`] targets the current platform through [`SystemRunner`]
/// with network priming enabled. The `with_*` methods replace individual
/// collaborators, which is how tests drive the engine with scripted output.
///
/// # Example
///
/// ```no_run
/// use getmac::{Resolver, Selector};
///
/// let resolver = Resolver::new().with_network_request(false);
/// let mac = resolver.resolve(Some(&Selector::Interface("eth0".into())));
/// # let _ = mac;
/// ```
pub struct Resolver {
    platform: Platform,
    runner: Box<dyn CommandRunner>,
    network_request: bool,
    default_interface: Option<String>,
    ipv6_support: Option<bool>,
    lookup: HostLookup,
    dispatch: Option<Dispatch>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("platform", &self.platform)
            .field("network_request", &self.network_request)
            .field("default_interface", &self.default_interface)
            .field("ipv6_support", &self.ipv6_support)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Creates a resolver for the current platform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            runner: Box::new(SystemRunner::new()),
            network_request: true,
            default_interface: None,
            ipv6_support: None,
            lookup: system_lookup,
            dispatch: None,
        }
    }

    /// Replaces the command runner used by every probe.
    #[must_use]
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Overrides the detected platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Enables or disables pinging remote hosts before probing.
    #[must_use]
    pub const fn with_network_request(mut self, enabled: bool) -> Self {
        self.network_request = enabled;
        self
    }

    /// Uses `name` when no selector is given, skipping default-route discovery.
    #[must_use]
    pub fn with_default_interface(mut self, name: impl Into<String>) -> Self {
        self.default_interface = Some(name.into());
        self
    }

    /// Overrides the runtime check for IPv6 support.
    #[must_use]
    pub const fn with_ipv6_support(mut self, supported: bool) -> Self {
        self.ipv6_support = Some(supported);
        self
    }

    /// Replaces the hostname lookup function.
    #[must_use]
    pub fn with_host_lookup(mut self, lookup: HostLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Routes this resolver's diagnostics to `dispatch` instead of the global subscriber.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Returns the platform whose probes this resolver runs.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// The interface queried when no selector is given.
    ///
    /// A configured name wins. Otherwise Windows uses `Ethernet 1` and Unix
    /// asks `ip route get` for the default-route interface, falling back to
    /// `eth0`.
    #[must_use]
    pub fn default_interface(&self) -> String {
        if let Some(name) = &self.default_interface {
            return name.clone();
        }

        match self.platform {
            Platform::Windows => WINDOWS_DEFAULT_INTERFACE.to_string(),
            Platform::Unix => probe::default_interface(self.runner.as_ref()).unwrap_or_else(|| {
                tracing::debug!(
                    fallback = UNIX_FALLBACK_INTERFACE,
                    "Default route interface unknown, using fallback"
                );
                UNIX_FALLBACK_INTERFACE.to_string()
            }),
        }
    }

    /// Resolves `selector`, or the default interface when `None`.
    ///
    /// Never fails: every error is logged as a warning and reported as `None`.
    #[must_use]
    pub fn resolve(&self, selector: Option<&Selector>) -> Option<MacAddress> {
        self.in_scope(|| {
            self.resolve_inner(selector).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "MAC address resolution failed");
                None
            })
        })
    }

    /// Resolves `selector`, or the default interface when `None`.
    ///
    /// Returns `Ok(None)` when no probe finds an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when:
    /// - The hostname cannot be resolved (`ResolveError::HostnameLookup`)
    /// - The hostname has no IPv4 address (`ResolveError::NoIpv4Address`)
    /// - An IPv6 target was given on a host without IPv6 (`ResolveError::Ipv6Unsupported`)
    pub fn try_resolve(
        &self,
        selector: Option<&Selector>,
    ) -> Result<Option<MacAddress>, ResolveError> {
        self.in_scope(|| self.resolve_inner(selector))
    }

    fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    fn resolve_inner(
        &self,
        selector: Option<&Selector>,
    ) -> Result<Option<MacAddress>, ResolveError> {
        let target = self.target_for(selector)?;
        let _span =
            tracing::debug_span!("resolve", platform = %self.platform, target = %target).entered();

        if let Target::Ipv6(address) = target {
            if !self.ipv6_supported() {
                return Err(ResolveError::Ipv6Unsupported { address });
            }
        }

        if self.network_request {
            if let Some(ip) = target.ip() {
                self.prime(ip);
            }
        }

        let probes = strategy::probes_for(self.platform, target.kind());
        if probes.is_empty() {
            tracing::debug!(kind = ?target.kind(), "No probes available for this target");
        }

        let Some(raw) = first_candidate(probes, &target.to_string(), self.runner.as_ref()) else {
            tracing::debug!("No probe produced a candidate");
            return Ok(None);
        };

        let mac = normalize(&raw);
        match mac {
            Some(mac) => tracing::debug!(%mac, "Resolved MAC address"),
            None => tracing::debug!(candidate = %raw, "Discarded malformed candidate"),
        }
        Ok(mac)
    }

    fn target_for(&self, selector: Option<&Selector>) -> Result<Target, ResolveError> {
        match selector {
            Some(Selector::Interface(name)) => Ok(Target::Interface(name.clone())),
            Some(Selector::Ipv4(ip)) => Ok(Target::Ipv4(self.replace_loopback(*ip))),
            Some(Selector::Ipv6(ip)) => Ok(Target::Ipv6(*ip)),
            Some(Selector::Hostname(hostname)) => self
                .lookup_ipv4(hostname)
                .map(|ip| Target::Ipv4(self.replace_loopback(ip))),
            None => Ok(Target::Interface(self.default_interface())),
        }
    }

    fn lookup_ipv4(&self, hostname: &str) -> Result<Ipv4Addr, ResolveError> {
        let addresses = (self.lookup)(hostname).map_err(|source| ResolveError::HostnameLookup {
            hostname: hostname.to_string(),
            source,
        })?;

        let ip = addresses
            .into_iter()
            .find_map(|addr| match addr {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| ResolveError::NoIpv4Address {
                hostname: hostname.to_string(),
            })?;

        tracing::debug!(hostname, %ip, "Resolved hostname");
        Ok(ip)
    }

    /// Windows keeps no neighbor entry for `127.0.0.1`, so the address of
    /// the machine's own hostname is queried instead. Falls back to the
    /// loopback address when the hostname cannot be read or resolved.
    fn replace_loopback(&self, ip: Ipv4Addr) -> Ipv4Addr {
        if self.platform != Platform::Windows || ip != Ipv4Addr::LOCALHOST {
            return ip;
        }

        let hostname = match self.runner.run("hostname", "") {
            Ok(output) => output.trim().to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "Local hostname unavailable, keeping loopback");
                return ip;
            }
        };
        if hostname.is_empty() {
            return ip;
        }

        match self.lookup_ipv4(&hostname) {
            Ok(local) => {
                tracing::debug!(%hostname, %local, "Using local hostname address for loopback");
                local
            }
            Err(e) => {
                tracing::debug!(error = %e, "Local hostname did not resolve, keeping loopback");
                ip
            }
        }
    }

    fn ipv6_supported(&self) -> bool {
        self.ipv6_support.unwrap_or_else(host_supports_ipv6)
    }

    /// Sends one echo request so the OS learns the neighbor's address.
    fn prime(&self, ip: IpAddr) {
        let (command, args) = strategy::priming_command(self.platform, ip);
        match self.runner.run(command, &args) {
            Ok(_) => tracing::debug!(%ip, "Primed neighbor table"),
            Err(e) => tracing::debug!(%ip, error = %e, "Priming ping failed, continuing"),
        }
    }
}

/// Runs `probes` in order and returns the first non-empty raw candidate.
///
/// Later probes are not run once one succeeds. Probe errors are logged and skipped.
pub(crate) fn first_candidate(
    probes: &[&dyn Probe],
    target: &str,
    runner: &dyn CommandRunner,
) -> Option<String> {
    for probe in probes {
        match probe.probe(target, runner) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                tracing::debug!(probe = probe.name(), candidate = %raw, "Probe found a candidate");
                return Some(raw);
            }
            Ok(_) => tracing::debug!(probe = probe.name(), "Probe found nothing"),
            Err(e) => tracing::debug!(probe = probe.name(), error = %e, "Probe failed"),
        }
    }
    None
}
