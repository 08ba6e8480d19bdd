//! Complementary hover accents for portfolio project cards.
//!
//! ```
//! assert_eq!(
//!     folio_accent::complementary_color("#FF0000").unwrap(),
//!     "rgba(0, 255, 255, 0.2)"
//! );
//! ```

pub mod color;
pub mod error;
pub mod palette;
pub mod renderer;
pub mod traits;

pub use color::{Accent, Color, ColorParseError, complementary_color};
pub use error::{Error, Result};
pub use palette::{Palette, PaletteAccent};
