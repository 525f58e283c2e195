use std::path::PathBuf;
use std::time::Duration;

use common::logger::LogFormat;
use market::MarketConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// How many random trades the ticker runs before closing the market.
    pub trades: usize,

    /// Base pause after each listing and each ticker line, in milliseconds.
    ///
    /// A random jitter is added on top of every trade pause. Zero runs the
    /// ticker flat out.
    pub pause_ms: u64,

    /// Lookback for volume weighted prices, in seconds.
    pub window_secs: u64,

    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// JSON stock catalog; the built-in sample data when `None`.
    pub catalog: Option<PathBuf>,

    /// JSON log lines instead of pretty output.
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trades: 20,
            pause_ms: 750,
            window_secs: 300,
            seed: None,
            catalog: None,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";

        Self {
            trades: env_parse("GBCE_TRADES").unwrap_or(defaults.trades),
            pause_ms: env_parse("GBCE_PAUSE_MS").unwrap_or(defaults.pause_ms),
            window_secs: env_parse("GBCE_WINDOW_SECS").unwrap_or(defaults.window_secs),
            seed: env_parse("GBCE_SEED"),
            catalog: std::env::var_os("GBCE_STOCKS").map(PathBuf::from),
            json_logs: is_production,
        }
    }

    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn market_config(&self) -> MarketConfig {
        MarketConfig::default().with_vwap_window(Duration::from_secs(self.window_secs))
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_demo() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.trades, 20);
        assert_eq!(cfg.pause(), Duration::from_millis(750));
        assert_eq!(cfg.log_format(), LogFormat::Pretty);
        assert_eq!(cfg.market_config(), MarketConfig::default());
    }

    #[test]
    fn json_logs_select_json_format() {
        let cfg = AppConfig {
            json_logs: true,
            ..AppConfig::default()
        };
        assert_eq!(cfg.log_format(), LogFormat::Json);
    }

    #[test]
    fn unset_variables_are_none() {
        assert_eq!(env_parse::<u64>("GBCE_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
