//! Disambiguation strategy trait.

use crate::types::{Occurrence, ResolvedEntity};

/// An algorithm that collapses raw occurrences into resolved entities.
///
/// Strategies are total: every input occurrence lands in exactly one
/// resolved entity; none are dropped or duplicated. Both shipped
/// strategies are deterministic functions of input order, so callers
/// must hand occurrences over in merged arrival order.
pub trait DisambiguationStrategy: Send + Sync {
    /// Strategy identifier used in logs.
    fn name(&self) -> &str;

    /// Fold raw occurrences into resolved entities.
    fn select(&self, occurrences: Vec<Occurrence>) -> Vec<ResolvedEntity>;

    /// Diagnostic hook. Must not panic; the default logs a summary.
    fn log_stats(&self, resolved: &[ResolvedEntity]) {
        let mentions: usize = resolved.iter().map(ResolvedEntity::occurrence_count).sum();
        tracing::debug!(
            strategy = self.name(),
            entities = resolved.len(),
            mentions,
            "disambiguation pass complete"
        );
    }
}
