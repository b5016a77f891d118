//! Error types for tab block rendering.

use tb_config::ConfigError;
use tb_markup::MarkupError;

/// Error from rendering a tab block.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TabsError {
    /// Shortcode content is not well-formed markup.
    #[error("{shortcode} shortcode: invalid input markup")]
    MalformedInput {
        /// Shortcode whose content failed to parse.
        shortcode: String,
        /// Underlying parse error.
        #[source]
        source: MarkupError,
    },
    /// Builder settings are not usable as names.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
