use std::sync::Arc;

use crate::fit::engine::FitAnalyzer;
use crate::gateway::GatewayClient;
use crate::knowledge::KnowledgeBase;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: GatewayClient,
    pub knowledge: Arc<KnowledgeBase>,
    /// Résumé-context system prompt, rendered once from the knowledge base.
    pub system_prompt: Arc<str>,
    /// Pluggable fit analyzer. Default: RuleFitAnalyzer.
    pub fit_analyzer: Arc<dyn FitAnalyzer>,
}
