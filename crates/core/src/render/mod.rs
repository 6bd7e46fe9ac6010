//! Printable output.
//!
//! Rendering is an opaque sink: callers hand a [`Printable`] to any
//! [`DocumentRenderer`]. [`TextRenderer`] lays documents out as paged plain
//! text.

pub mod error;
pub mod format;
pub mod printable;
pub mod text;

pub use error::RenderError;
pub use format::{format_amount, format_rate};
pub use printable::Printable;
pub use text::{PageLayout, TextRenderer};

/// Something that can print documents and certificates.
pub trait DocumentRenderer {
    /// Renders one printable.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    fn render(&mut self, printable: &Printable<'_>) -> Result<(), RenderError>;
}
