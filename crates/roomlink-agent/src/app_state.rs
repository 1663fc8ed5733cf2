//! Shared application state for the roomlink agent.

use std::sync::Arc;

use crate::config::AgentConfig;
use crate::handler::DataHandler;
use crate::obs::AgentMetrics;
use crate::session::ConversationSession;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AgentConfig,
    handler: DataHandler,
    metrics: Arc<AgentMetrics>,
}

impl AppState {
    pub fn new(cfg: AgentConfig, session: Arc<dyn ConversationSession>) -> Self {
        let metrics = Arc::new(AgentMetrics::default());
        let handler = DataHandler::new(session, Arc::clone(&metrics));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                handler,
                metrics,
            }),
        }
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.inner.cfg
    }

    pub fn handler(&self) -> &DataHandler {
        &self.inner.handler
    }

    pub fn metrics(&self) -> &AgentMetrics {
        &self.inner.metrics
    }
}
