//! Mount hosts
//!
//! The environment an application is mounted into: somewhere to find the
//! anchor element, the location to start at, and a viewport to scroll.

use std::collections::HashSet;
use std::sync::Arc;

use crate::router::{DetachedViewport, Viewport};

/// Anchor element the application was mounted onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    pub selector: String,
}

/// Environment the application mounts into
pub trait MountHost: Send + Sync {
    /// Find the anchor matching `selector`
    fn query_selector(&self, selector: &str) -> Option<MountPoint>;

    /// Location the host is currently showing
    fn location(&self) -> String;

    /// Viewport scroll resets are applied to
    fn viewport(&self) -> Arc<dyn Viewport>;
}

/// In-memory host with a fixed set of anchors
pub struct StaticHost {
    anchors: HashSet<String>,
    location: String,
    viewport: Arc<dyn Viewport>,
}

impl StaticHost {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            anchors: HashSet::new(),
            location: location.into(),
            viewport: Arc::new(DetachedViewport),
        }
    }

    pub fn with_anchor(mut self, selector: impl Into<String>) -> Self {
        self.anchors.insert(selector.into());
        self
    }

    pub fn with_viewport(mut self, viewport: Arc<dyn Viewport>) -> Self {
        self.viewport = viewport;
        self
    }
}

impl MountHost for StaticHost {
    fn query_selector(&self, selector: &str) -> Option<MountPoint> {
        self.anchors.contains(selector).then(|| MountPoint {
            selector: selector.to_string(),
        })
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn viewport(&self) -> Arc<dyn Viewport> {
        Arc::clone(&self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_host_anchors() {
        let host = StaticHost::new("/dashboard").with_anchor("#app");
        assert_eq!(
            host.query_selector("#app"),
            Some(MountPoint {
                selector: "#app".to_string()
            })
        );
        assert!(host.query_selector("#root").is_none());
        assert_eq!(host.location(), "/dashboard");
    }
}
