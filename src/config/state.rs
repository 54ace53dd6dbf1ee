// Application state module
// Read-only state shared by every connection task

use std::sync::Arc;

use super::types::Config;
use crate::logger::LogFormat;
use crate::routing::RouteTable;

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub routes: Arc<RouteTable>,
    /// `None` when access logging is disabled
    pub access_log: Option<LogFormat>,
}

impl AppState {
    pub fn new(config: Config, routes: RouteTable) -> Self {
        let access_log = config
            .logging
            .access_log
            .then(|| LogFormat::parse(&config.logging.access_log_format));

        Self {
            config,
            routes: Arc::new(routes),
            access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_disabled_by_default() {
        let state = AppState::new(Config::default(), RouteTable::greetings().unwrap());
        assert!(state.access_log.is_none());
        assert_eq!(state.routes.len(), 2);
    }

    #[test]
    fn test_access_log_format_resolved() {
        let mut config = Config::default();
        config.logging.access_log = true;
        config.logging.access_log_format = "combined".to_string();
        let state = AppState::new(config, RouteTable::greetings().unwrap());
        assert_eq!(state.access_log, Some(LogFormat::Combined));
    }
}
