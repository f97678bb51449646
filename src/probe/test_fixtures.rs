//! Shared test fixtures for probe and resolver tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CommandRunner, ExecError};

/// Mock runner that answers from a table of canned outputs.
///
/// Commands without a scripted answer fail as if the tool were missing.
/// Every invocation is recorded as `"command args"` for later inspection.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<(String, String), Result<String, i32>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful run of `command args` printing `output`.
    pub fn with_output(mut self, command: &str, args: &str, output: &str) -> Self {
        self.outputs.insert(
            (command.to_string(), args.to_string()),
            Ok(output.to_string()),
        );
        self
    }

    /// Scripts a run of `command args` that exits with status `code`.
    pub fn with_failure(mut self, command: &str, args: &str, code: i32) -> Self {
        self.outputs
            .insert((command.to_string(), args.to_string()), Err(code));
        self
    }

    /// Returns every invocation made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns true if `command` was invoked with any arguments.
    pub fn was_called(&self, command: &str) -> bool {
        self.calls()
            .iter()
            .any(|call| call.split(' ').next() == Some(command))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, args: &str) -> Result<String, ExecError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{command} {args}").trim_end().to_string());

        match self.outputs.get(&(command.to_string(), args.to_string())) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(code)) => Err(ExecError::Status {
                command: command.to_string(),
                code: Some(*code),
            }),
            None => Err(ExecError::Spawn {
                command: command.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

/// `ifconfig` output from a modern Linux host (net-tools 2.x).
pub const IFCONFIG_LINUX: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.20  netmask 255.255.255.0  broadcast 192.168.1.255
        inet6 fe80::21c:42ff:fe00:18  prefixlen 64  scopeid 0x20<link>
        ether 00:1c:42:00:00:18  txqueuelen 1000  (Ethernet)
        RX packets 1234  bytes 567890 (554.5 KiB)

lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        inet 127.0.0.1  netmask 255.0.0.0
        loop  txqueuelen 1000  (Local Loopback)

wlan0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 10.0.0.7  netmask 255.255.255.0  broadcast 10.0.0.255
        ether 3c:a9:f4:10:20:30  txqueuelen 1000  (Ethernet)
";

/// `ifconfig` output in the legacy net-tools 1.x format.
pub const IFCONFIG_LEGACY: &str = "\
eth0      Link encap:Ethernet  HWaddr 00:0C:29:28:FD:4C
          inet addr:192.168.1.20  Bcast:192.168.1.255  Mask:255.255.255.0
          UP BROADCAST RUNNING MULTICAST  MTU:1500  Metric:1

lo        Link encap:Local Loopback
          inet addr:127.0.0.1  Mask:255.0.0.0
";

/// `ifconfig` output from macOS.
pub const IFCONFIG_MACOS: &str = "\
lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\tinet 127.0.0.1 netmask 0xff000000
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\toptions=400<CHANNEL_IO>
\tether a4:83:e7:11:22:33
\tinet 192.168.1.5 netmask 0xffffff00 broadcast 192.168.1.255
";

/// `ip link` output.
pub const IP_LINK: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN mode DEFAULT group default qlen 1000
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP mode DEFAULT group default qlen 1000
    link/ether 52:54:00:12:34:56 brd ff:ff:ff:ff:ff:ff
3: veth1@if4: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue state UP mode DEFAULT group default
    link/ether 9a:bc:de:f0:12:34 brd ff:ff:ff:ff:ff:ff link-netnsid 0
";

/// `netstat -iae` output (Linux net-tools, legacy block format).
pub const NETSTAT_IAE: &str = "\
Kernel Interface table
eth0      Link encap:Ethernet  HWaddr 08:00:27:AB:CD:EF
          inet addr:10.0.2.15  Bcast:10.0.2.255  Mask:255.255.255.0
          UP BROADCAST RUNNING MULTICAST  MTU:1500  Metric:1

lo        Link encap:Local Loopback
          inet addr:127.0.0.1  Mask:255.0.0.0
";

/// `arp -an` output.
pub const ARP_AN: &str = "\
? (192.168.1.1) at 00:11:22:33:44:55 [ether] on eth0
? (192.168.1.10) at 66:77:88:99:aa:bb [ether] on eth0
? (192.168.1.99) at <incomplete> on eth0
";

/// `/proc/net/arp` contents.
pub const PROC_NET_ARP: &str = "\
IP address       HW type     Flags       HW address            Mask     Device
192.168.1.10     0x1         0x2         66:77:88:99:aa:bb     *        eth0
192.168.1.1      0x1         0x2         00:11:22:33:44:55     *        eth0
";

/// `lanscan -ai` output from HP-UX.
pub const LANSCAN_AI: &str = "\
0x001560045C81 lan0 snap0
0x00306EF41A7B lan1 snap1
";

/// `ip route get 0.0.0.0` output.
pub const IP_ROUTE_GET: &str = "\
0.0.0.0 via 192.168.1.1 dev wlp2s0 src 192.168.1.20 uid 1000
    cache
";

/// `ipconfig /all` output from Windows (CRLF line endings).
pub const IPCONFIG_ALL: &str = "\r
Windows IP Configuration\r
\r
   Host Name . . . . . . . . . . . . : DESKTOP\r
\r
Ethernet adapter Ethernet 1:\r
\r
   Connection-specific DNS Suffix  . : lan\r
   Description . . . . . . . . . . . : Intel(R) Ethernet Connection\r
   Physical Address. . . . . . . . . : 00-1A-2B-3C-4D-5E\r
   DHCP Enabled. . . . . . . . . . . : Yes\r
\r
Wireless LAN adapter Wi-Fi:\r
\r
   Media State . . . . . . . . . . . : Media disconnected\r
   Description . . . . . . . . . . . : Intel(R) Wi-Fi 6 AX201\r
   Physical Address. . . . . . . . . : A0-B1-C2-D3-E4-F5\r
";

/// `ipconfig /all` with adapters whose names contain one another, and a
/// tunnel adapter that has no physical address.
pub const IPCONFIG_NEIGHBORS: &str = "\r
Windows IP Configuration\r
\r
Ethernet adapter vEthernet (WSL):\r
\r
   Connection-specific DNS Suffix  . :\r
   Description . . . . . . . . . . . : Hyper-V Virtual Ethernet Adapter\r
   Physical Address. . . . . . . . . : 00-15-5D-00-00-01\r
\r
Tunnel adapter Teredo:\r
\r
   Media State . . . . . . . . . . . : Media disconnected\r
\r
Ethernet adapter Ethernet 10:\r
\r
   Description . . . . . . . . . . . : USB Ethernet\r
   Physical Address. . . . . . . . . : 10-10-10-10-10-10\r
\r
Ethernet adapter Ethernet:\r
\r
   Description . . . . . . . . . . . : Realtek PCIe GbE\r
   Physical Address. . . . . . . . . : AA-BB-CC-DD-EE-FF\r
\r
Ethernet adapter Ethernet 1:\r
\r
   Description . . . . . . . . . . . : Intel(R) Ethernet Connection\r
   Physical Address. . . . . . . . . : 01-01-01-01-01-01\r
";
