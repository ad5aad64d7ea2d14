use super::graph::QuestionGraph;
use crate::error::StoreError;
use crate::store::FormStore;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Process-wide handle to the currently loaded question graph.
///
/// Readers take an `Arc` snapshot and keep it for the duration of one
/// request; a reload swaps the whole snapshot, so nobody observes a partially
/// replaced graph. Cloning the handle shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct GraphHandle {
    current: Arc<RwLock<Arc<QuestionGraph>>>,
}

impl GraphHandle {
    pub fn new(graph: QuestionGraph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// Returns the graph as of this instant.
    pub fn snapshot(&self) -> Arc<QuestionGraph> {
        // A poisoned lock still guards a complete Arc; keep serving it.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Installs `graph` as the current snapshot.
    pub fn replace(&self, graph: QuestionGraph) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(graph);
    }

    /// Loads the named form from `store` and installs it.
    ///
    /// On failure the handle is left holding an empty graph, so subsequent
    /// traversals report the question as unavailable rather than serving a
    /// stale form.
    pub fn reload(
        &self,
        store: &dyn FormStore,
        name: &str,
    ) -> Result<Arc<QuestionGraph>, StoreError> {
        match store.read(name).into_result() {
            Ok(graph) => {
                info!(form = name, questions = graph.len(), "Loaded form");
                let graph = Arc::new(graph);
                let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
                *guard = Arc::clone(&graph);
                Ok(graph)
            }
            Err(e) => {
                warn!(form = name, error = %e, "Form reload failed, clearing questions");
                self.replace(QuestionGraph::empty());
                Err(e)
            }
        }
    }
}
