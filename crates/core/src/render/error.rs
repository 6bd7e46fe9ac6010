//! Render error types.

use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Page is too short to hold the header and one row.
    #[error("page of {page_lines} lines cannot fit a {needed}-line block")]
    PageTooShort {
        /// Usable lines per page.
        page_lines: usize,
        /// Lines the block needs.
        needed: usize,
    },
}
