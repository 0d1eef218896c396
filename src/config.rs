//! Bridge configuration loader - parses meshwx.toml
//!
//! Separates operator settings (station label, destination callsign,
//! sensor node address, serial parameters) from code, so a deployment can
//! be retargeted without recompiling.

use serde::Deserialize;
use std::fs;
use std::time::Duration;

/// Root configuration structure for TOML parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: StationConfig,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub serial: SerialConfig,
}

/// Report identity: who the message is from and where it goes.
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// Location label prefixed to every outbound message.
    pub location: String,
    /// MeshCom destination callsign or group id.
    pub destination: String,
}

/// The LoRa node reachable on the LAN: serves the status page over HTTP
/// and accepts message datagrams over UDP.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub host: String,
    pub http_timeout_secs: f64,
    pub udp_port: u16,
    pub udp_timeout_secs: f64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: "192.168.1.143".to_string(),
            http_timeout_secs: 5.0,
            // default meshcom port on the lora board side
            udp_port: 1799,
            udp_timeout_secs: 2.0,
        }
    }
}

impl NodeConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.http_timeout_secs)
    }

    pub fn udp_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.udp_timeout_secs)
    }
}

/// Serial console parameters for the directly attached node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
    /// Total window to collect response lines after the query.
    pub response_window_secs: f64,
    /// Per-read timeout on the open port.
    pub read_timeout_ms: u64,
    /// Pause between empty read attempts.
    pub read_delay_ms: u64,
    /// Pause after writing the query, before the first read. Some modules
    /// take a few tens of milliseconds before the first line appears.
    pub settle_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: 115_200,
            response_window_secs: 6.0,
            read_timeout_ms: 500,
            read_delay_ms: 50,
            settle_ms: 200,
        }
    }
}

impl SerialConfig {
    pub fn response_window(&self) -> Duration {
        Duration::from_secs_f64(self.response_window_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn read_delay(&self) -> Duration {
        Duration::from_millis(self.read_delay_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Loads bridge configuration from a TOML file.
///
/// # Panics
/// Panics if the configuration file is missing or malformed. This is
/// intentional — the bridge cannot operate without a station identity and
/// a reachable node.
pub fn load_config(path: &str) -> Config {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));

    toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_shipped_config() {
        let config = load_config("meshwx.toml");
        assert!(!config.station.location.is_empty());
        assert!(!config.station.destination.is_empty());
        assert!(config.node.udp_port > 0);
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[station]\nlocation = \"Test QTH\"\ndestination = \"22299\"\n"
        )
        .expect("write config");

        let config = load_config(file.path().to_str().unwrap());
        assert_eq!(config.station.location, "Test QTH");
        assert_eq!(config.node.udp_port, 1799);
        assert_eq!(config.node.http_timeout(), Duration::from_secs(5));
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.serial.settle(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_section_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[station]\nlocation = \"Test QTH\"\ndestination = \"22299\"\n\n\
             [node]\nhost = \"10.0.0.7\"\n\n\
             [serial]\nport = \"/dev/ttyACM0\"\nbaud_rate = 9600\n"
        )
        .expect("write config");

        let config = load_config(file.path().to_str().unwrap());
        assert_eq!(config.node.host, "10.0.0.7");
        // unset keys in a present section still default
        assert_eq!(config.node.udp_port, 1799);
        assert_eq!(config.serial.port, "/dev/ttyACM0");
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.serial.read_delay(), Duration::from_millis(50));
    }

    #[test]
    #[should_panic(expected = "Failed to read")]
    fn test_missing_file_panics() {
        load_config("no_such_meshwx.toml");
    }

    #[test]
    #[should_panic(expected = "Failed to parse")]
    fn test_missing_station_section_panics() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[node]\nhost = \"10.0.0.7\"\n").expect("write config");
        load_config(file.path().to_str().unwrap());
    }
}
