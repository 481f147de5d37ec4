use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::store::slot::{FileSlot, HistorySlot, MemorySlot, RedisSlot};

/// Opens the history slot selected by configuration.
pub fn open_history_slot(config: &Config) -> Result<Arc<dyn HistorySlot>> {
    if let Some(url) = &config.redis_url {
        let client = redis::Client::open(url.as_str()).context("REDIS_URL is not a valid Redis URL")?;
        info!("Analysis history: Redis key '{}'", config.history_key);
        return Ok(Arc::new(RedisSlot::new(client, config.history_key.clone())));
    }

    if let Some(path) = &config.history_file {
        info!("Analysis history: file {}", path.display());
        return Ok(Arc::new(FileSlot::new(path.clone())));
    }

    warn!("Neither REDIS_URL nor HISTORY_FILE is set; analysis history will not survive a restart");
    Ok(Arc::new(MemorySlot::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HISTORY_KEY;

    fn config() -> Config {
        Config {
            redis_url: None,
            history_file: None,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_memory_fallback_when_nothing_configured() {
        let slot = open_history_slot(&config()).unwrap();
        assert!(slot.get().unwrap().is_none());
        slot.set("[]".to_string()).unwrap();
        assert_eq!(slot.get().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_selected_by_history_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let cfg = Config {
            history_file: Some(path.clone()),
            ..config()
        };
        let slot = open_history_slot(&cfg).unwrap();
        slot.set("[]".to_string()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn test_invalid_redis_url_is_an_error() {
        let cfg = Config {
            redis_url: Some("not a url".to_string()),
            ..config()
        };
        assert!(open_history_slot(&cfg).is_err());
    }
}
