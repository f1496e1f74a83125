use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_WRITE_SIGNAL_PATH: &str = "/create-signal/write-signal";
pub const LIVEZ_PATH: &str = "/livez/";
pub const HEALTHZ_PATH: &str = "/healthz/";

const RESERVED_PATHS: [&str; 2] = [LIVEZ_PATH, HEALTHZ_PATH];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http_host: String,
    pub http_port: u16,
    pub write_signal_path: String,

    /// Seed for a reproducible identifier sequence; unset draws from the thread rng.
    pub id_seed: Option<u64>,

    pub service_name: String,
    pub use_telemetry: bool,
    pub otlp_host: String,
    pub otlp_port: u16,
}

impl Settings {
    /// Reads settings from the process environment. The error carries the
    /// reason; callers map it to `ERR-SETTINGS` once logging is up.
    pub fn load() -> core::result::Result<Settings, String> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> core::result::Result<Settings, String> {
        let settings = Config::builder()
            .set_default("http_host", "0.0.0.0")
            .and_then(|b| b.set_default("http_port", 5000))
            .and_then(|b| b.set_default("write_signal_path", DEFAULT_WRITE_SIGNAL_PATH))
            .and_then(|b| b.set_default("service_name", env!("CARGO_PKG_NAME")))
            .and_then(|b| b.set_default("use_telemetry", false))
            .and_then(|b| b.set_default("otlp_host", "localhost"))
            .and_then(|b| b.set_default("otlp_port", 4317))
            .and_then(|b| b.add_source(env.try_parsing(true)).build())
            .and_then(|c| c.try_deserialize::<Settings>())
            .map_err(|err| err.to_string())?;
        check_write_signal_path(&settings.write_signal_path)?;
        Ok(settings)
    }

    #[cfg(test)]
    pub fn from_vars(vars: &[(&str, &str)]) -> core::result::Result<Settings, String> {
        let source: std::collections::HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::from_env(Environment::default().source(Some(source)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn otlp_endpoint(&self) -> String {
        format!("http://{}:{}", self.otlp_host, self.otlp_port)
    }
}

/// The write path is registered verbatim, so it must be a plain literal path:
/// absolute, no route syntax, and not shadowing a probe.
fn check_write_signal_path(path: &str) -> core::result::Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("WRITE_SIGNAL_PATH must start with '/', got {path:?}"));
    }
    if let Some(c) = path
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '/' | '-')))
    {
        return Err(format!(
            "WRITE_SIGNAL_PATH may only contain literal segments, found {c:?} in {path:?}"
        ));
    }
    if RESERVED_PATHS.contains(&path) {
        return Err(format!("WRITE_SIGNAL_PATH {path:?} collides with a probe route"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = core::result::Result<(), String>;

    #[test]
    fn test_defaults() -> TestResult {
        let s = Settings::from_vars(&[])?;
        assert_eq!(s.http_host, "0.0.0.0");
        assert_eq!(s.http_port, 5000);
        assert_eq!(s.bind_addr(), "0.0.0.0:5000");
        assert_eq!(s.write_signal_path, DEFAULT_WRITE_SIGNAL_PATH);
        assert_eq!(s.id_seed, None);
        assert!(!s.use_telemetry);
        assert_eq!(s.otlp_endpoint(), "http://localhost:4317");
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> TestResult {
        let s = Settings::from_vars(&[
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "8081"),
            ("WRITE_SIGNAL_PATH", "/ceh/write"),
            ("ID_SEED", "42"),
            ("USE_TELEMETRY", "on"),
            ("OTLP_HOST", "collector"),
        ])?;
        assert_eq!(s.bind_addr(), "127.0.0.1:8081");
        assert_eq!(s.write_signal_path, "/ceh/write");
        assert_eq!(s.id_seed, Some(42));
        assert!(s.use_telemetry);
        assert_eq!(s.otlp_endpoint(), "http://collector:4317");
        Ok(())
    }

    #[test]
    fn test_write_path_checks() {
        assert!(check_write_signal_path(DEFAULT_WRITE_SIGNAL_PATH).is_ok());
        assert!(check_write_signal_path("/ceh/write").is_ok());
        assert!(check_write_signal_path("/v1.2/write_signal~x").is_ok());
        assert!(check_write_signal_path("create-signal").is_err());
        assert!(check_write_signal_path(LIVEZ_PATH).is_err());
        assert!(check_write_signal_path(HEALTHZ_PATH).is_err());
        for bad in ["/a/*", "/a/*rest", "/a/:id", "/a/{id}", "/a/}", "/a b", "/a?b", "/a%20"] {
            assert!(check_write_signal_path(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn test_load_reports_reason() {
        let err = Settings::from_vars(&[("WRITE_SIGNAL_PATH", "/a/*")]).unwrap_err();
        assert!(err.contains("literal segments"), "{err}");

        let err = Settings::from_vars(&[("WRITE_SIGNAL_PATH", "create-signal")]).unwrap_err();
        assert!(err.contains("must start with '/'"), "{err}");

        let err = Settings::from_vars(&[("HTTP_PORT", "notaport")]).unwrap_err();
        assert!(!err.is_empty());
    }
}
