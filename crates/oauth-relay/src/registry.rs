//! In-memory session registry following the teacher's store pattern:
//! a `HashMap` behind `Arc<RwLock<_>>` with a deliberately narrow API.
//!
//! Entries live for the lifetime of the process. There is no expiry and no
//! removal; re-registering a session silently replaces the prior port.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Parse a callback port from its string form.
///
/// Accepts only values in the valid TCP port range [1, 65535]; everything
/// else is rejected before it can reach the registry or a forwarded request.
#[must_use]
pub fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

/// In-memory table of session id to callback port mappings.
///
/// The relay runs handlers on a multi-threaded runtime, so the table is
/// guarded by an async `RwLock`.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, u16>>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the port mapping for a session.
    pub async fn upsert(&self, session_id: impl Into<String>, port: u16) {
        self.sessions.write().await.insert(session_id.into(), port);
    }

    /// Look up the registered port for a session.
    pub async fn lookup(&self, session_id: &str) -> Option<u16> {
        self.sessions.read().await.get(session_id).copied()
    }

    /// Number of registered sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid_range() {
        assert_eq!(parse_port("1"), Some(1));
        assert_eq!(parse_port("9001"), Some(9001));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port(" 8080 "), Some(8080));
    }

    #[test]
    fn test_parse_port_rejects_invalid() {
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("-1"), None);
        assert_eq!(parse_port("not-a-port"), None);
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("80.5"), None);
    }

    #[tokio::test]
    async fn test_upsert_and_lookup() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.count().await, 0);
        assert_eq!(registry.lookup("abc").await, None);

        registry.upsert("abc", 9001).await;
        assert_eq!(registry.lookup("abc").await, Some(9001));
        assert_eq!(registry.count().await, 1);
    }

    #[tokio::test]
    async fn test_upsert_overwrites() {
        let registry = SessionRegistry::new();
        registry.upsert("abc", 9001).await;
        registry.upsert("abc", 9002).await;

        assert_eq!(registry.lookup("abc").await, Some(9002));
        assert_eq!(registry.count().await, 1);
    }
}
