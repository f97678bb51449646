//! Tests for the run module.

use super::*;

use std::collections::HashMap;

use getmac::Platform;
use getmac::config::Cli;
use getmac::probe::{CommandRunner, ExecError};

/// Runner answering from a fixed table; anything else is a missing tool.
struct TableRunner(HashMap<(&'static str, &'static str), &'static str>);

impl CommandRunner for TableRunner {
    fn run(&self, command: &str, args: &str) -> Result<String, ExecError> {
        self.0
            .iter()
            .find(|((c, a), _)| *c == command && *a == args)
            .map(|(_, output)| (*output).to_string())
            .ok_or_else(|| ExecError::Spawn {
                command: command.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

const IFCONFIG: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.20  netmask 255.255.255.0  broadcast 192.168.1.255
        ether 00:1c:42:00:00:18  txqueuelen 1000  (Ethernet)
";

const ROUTE: &str = "0.0.0.0 via 192.168.1.1 dev eth0 src 192.168.1.20 uid 1000\n";

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["getmac"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

fn resolver() -> Resolver {
    let table = HashMap::from([(("ifconfig", ""), IFCONFIG)]);
    Resolver::new()
        .with_platform(Platform::Unix)
        .with_runner(TableRunner(table))
        .with_ipv6_support(false)
}

mod output {
    use super::*;

    #[test]
    fn text_prints_address_only() {
        let line = execute_with(&config(&["-i", "eth0"]), resolver()).unwrap();
        assert_eq!(line, "00:1c:42:00:00:18");
    }

    #[test]
    fn json_prints_target_and_address() {
        let line = execute_with(&config(&["-i", "eth0", "--json"]), resolver()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["target"], "eth0");
        assert_eq!(value["mac_address"], "00:1c:42:00:00:18");
    }

    #[test]
    fn default_target_uses_configured_interface() {
        let mut config = config(&["--json"]);
        config.default_interface = Some("eth0".to_string());

        let resolver = resolver().with_default_interface("eth0");
        let line = execute_with(&config, resolver).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["target"], "eth0");
    }

    #[test]
    fn default_target_names_the_default_route_interface() {
        let table = HashMap::from([
            (("ip", "route get 0.0.0.0"), ROUTE),
            (("ifconfig", ""), IFCONFIG),
        ]);
        let resolver = Resolver::new()
            .with_platform(Platform::Unix)
            .with_runner(TableRunner(table));

        let line = execute_with(&config(&["--json"]), resolver).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["target"], "eth0");
        assert_eq!(value["mac_address"], "00:1c:42:00:00:18");
    }
}

mod failures {
    use super::*;

    #[test]
    fn unknown_interface_is_not_found() {
        let result = execute_with(&config(&["-i", "eth9"]), resolver());

        match result {
            Err(RunError::NotFound { target }) => assert_eq!(target, "interface eth9"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn ipv6_without_support_is_resolve_error() {
        let result = execute_with(&config(&["--ip6", "fe80::1"]), resolver());

        assert!(matches!(
            result,
            Err(RunError::Resolve(ResolveError::Ipv6Unsupported { .. }))
        ));
    }

    #[test]
    fn missing_default_interface_is_named() {
        let resolver = Resolver::new()
            .with_platform(Platform::Windows)
            .with_runner(TableRunner(HashMap::new()));

        let result = execute_with(&config(&[]), resolver);

        match result {
            Err(RunError::NotFound { target }) => assert_eq!(target, "interface Ethernet 1"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn not_found_displays_target() {
        let error = RunError::NotFound {
            target: "ip 10.0.0.1".to_string(),
        };
        assert_eq!(error.to_string(), "No MAC address found for ip 10.0.0.1");
    }
}

mod labels {
    use super::*;

    #[test]
    fn label_is_bare_value() {
        assert_eq!(target_label(&Selector::Ipv4("10.0.0.1".parse().unwrap())), "10.0.0.1");
        assert_eq!(target_label(&Selector::Ipv6("::1".parse().unwrap())), "::1");
        assert_eq!(target_label(&Selector::Hostname("nas".to_string())), "nas");
        assert_eq!(target_label(&Selector::Interface("en0".to_string())), "en0");
    }
}
