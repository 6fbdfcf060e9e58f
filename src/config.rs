//! Server configuration.
//!
//! Values come from the environment first (`PORT`, `CORPUS_PATH`) and can be
//! overridden on the command line with `--port <n>` and `--corpus <path>`.

use anyhow::{Context, Result, anyhow};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORPUS_PATH: &str = "completeworks.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub corpus_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup` instead of the process
    /// environment. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            config.port = parse_port(&port).context("invalid PORT")?;
        }
        if let Some(path) = lookup("CORPUS_PATH").filter(|v| !v.is_empty()) {
            config.corpus_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Applies `--port` and `--corpus` flags, given either as `--flag value`
    /// or `--flag=value`. Unknown arguments are logged and ignored.
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            match flag.as_str() {
                "--port" => {
                    let value = inline
                        .or_else(|| args.next())
                        .ok_or_else(|| anyhow!("--port requires a value"))?;
                    self.port = parse_port(&value).context("invalid --port")?;
                }
                "--corpus" => {
                    let value = inline
                        .or_else(|| args.next())
                        .ok_or_else(|| anyhow!("--corpus requires a value"))?;
                    self.corpus_path = PathBuf::from(value);
                }
                other => {
                    tracing::warn!("Ignoring unknown argument {}", other);
                }
            }
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .with_context(|| format!("{:?} is not a port number", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.corpus_path, PathBuf::from("completeworks.txt"));
    }

    #[test]
    fn test_reads_port_and_corpus_from_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("CORPUS_PATH", "/data/plays.txt"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.corpus_path, PathBuf::from("/data/plays.txt"));
    }

    #[test]
    fn test_empty_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_args_override_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")]))
            .unwrap()
            .with_args(args(&["--port", "9000", "--corpus", "sonnets.txt"]))
            .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.corpus_path, PathBuf::from("sonnets.txt"));
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        let config = ServerConfig::default()
            .with_args(args(&["--verbose", "--port", "4000"]))
            .unwrap();

        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_args_accept_equals_form() {
        let config = ServerConfig::default()
            .with_args(args(&["--port=4000", "--corpus=/srv/a=b.txt"]))
            .unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.corpus_path, PathBuf::from("/srv/a=b.txt"));
    }

    #[test]
    fn test_equals_form_rejects_bad_port() {
        assert!(ServerConfig::default().with_args(args(&["--port=abc"])).is_err());
    }

    #[test]
    fn test_flag_without_value_is_an_error() {
        assert!(ServerConfig::default().with_args(args(&["--port"])).is_err());
        assert!(ServerConfig::default().with_args(args(&["--corpus"])).is_err());
    }

    #[test]
    fn test_bind_addr_listens_on_all_interfaces() {
        let config = ServerConfig {
            port: 4321,
            ..ServerConfig::default()
        };

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:4321");
    }
}
