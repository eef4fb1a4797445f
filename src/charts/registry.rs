//! Chart registry
//!
//! Records which renderer components are available. Registration is
//! additive and idempotent; nothing is ever unregistered.

use std::collections::BTreeSet;
use std::sync::RwLock;
use thiserror::Error;

use super::Registerable;

/// Errors raised when a page asks for renderers that are missing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart components not registered: {}", format_missing(.0))]
    NotRegistered(Vec<Registerable>),
}

fn format_missing(missing: &[Registerable]) -> String {
    missing
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for chart registry operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Registry of renderer components
#[derive(Debug, Default)]
pub struct ChartRegistry {
    registered: RwLock<BTreeSet<Registerable>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register components, returning how many were new
    pub fn register<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = Registerable>,
    {
        let mut registered = self
            .registered
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let added = items
            .into_iter()
            .filter(|item| registered.insert(*item))
            .count();

        tracing::debug!(added, total = registered.len(), "Registered chart components");
        added
    }

    pub fn is_registered(&self, item: Registerable) -> bool {
        self.registered
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&item)
    }

    /// Fail with every component in `required` that is missing
    pub fn ensure(&self, required: &[Registerable]) -> ChartResult<()> {
        let registered = self
            .registered
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let missing: Vec<Registerable> = required
            .iter()
            .filter(|item| !registered.contains(*item))
            .copied()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ChartError::NotRegistered(missing))
        }
    }

    pub fn len(&self) -> usize {
        self.registered
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
