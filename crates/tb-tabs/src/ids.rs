//! Identifier scheme for tab blocks.
//!
//! Every id in a tab block is derived from one base id:
//!
//! ```text
//! base id   {namespace}__{token}
//! tab id    {base}-{index}
//! link id   {base}-{index}-link
//! pane id   {base}-{index}-pane
//! ```
//!
//! Link and pane ids are only ever computed from a [`TabId`], so the tab list
//! and the pane container always reference each other correctly.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rand::RngExt;

/// Source of unique tokens for base ids.
///
/// Implementations must return tokens that do not collide across calls, even
/// when called from several threads.
pub trait IdSource: Send + Sync {
    /// Return a fresh token.
    ///
    /// With `url_safe`, the token contains only ASCII letters and digits and
    /// can be used inside an HTML `id` or a URL fragment.
    fn unique_token(&self, url_safe: bool) -> String;
}

/// Tokens from 128 bits of the thread-local CSPRNG.
///
/// URL-safe tokens are 32 lowercase hex characters; other tokens are
/// standard base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn unique_token(&self, url_safe: bool) -> String {
        let bytes = rand::rng().random::<u128>().to_be_bytes();
        if url_safe {
            hex::encode(bytes)
        } else {
            BASE64_STANDARD.encode(bytes)
        }
    }
}

/// Deterministic tokens `t0`, `t1`, ... for tests and reproducible output.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: AtomicUsize,
}

impl SequentialIdSource {
    /// Create a source starting at `t0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn unique_token(&self, _url_safe: bool) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("t{n}")
    }
}

/// Create a fresh base id: `{namespace}__{token}`.
pub fn create_base_id(source: &dyn IdSource, namespace: &str) -> String {
    format!("{namespace}__{}", source.unique_token(true))
}

/// Derive the id of the tab at `index`.
#[must_use]
pub fn create_tab_id(base_id: &str, index: usize) -> String {
    format!("{base_id}-{index}")
}

/// Derive the link id from a tab id.
#[must_use]
pub fn create_tab_link_id(tab_id: &str) -> String {
    format!("{tab_id}-link")
}

/// Derive the pane id from a tab id.
#[must_use]
pub fn create_tab_pane_id(tab_id: &str) -> String {
    format!("{tab_id}-pane")
}

/// Id of one tab within a block, the root of its link and pane ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    /// Derive the tab id at `index` under `base_id`.
    #[must_use]
    pub fn new(base_id: &str, index: usize) -> Self {
        Self(create_tab_id(base_id, index))
    }

    /// The tab id itself.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the nav link for this tab.
    #[must_use]
    pub fn link_id(&self) -> String {
        create_tab_link_id(&self.0)
    }

    /// Id of the content pane for this tab.
    #[must_use]
    pub fn pane_id(&self) -> String {
        create_tab_pane_id(&self.0)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
