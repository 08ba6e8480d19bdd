pub mod accent;
pub mod hsl;
pub mod model;
pub mod parse;

pub use accent::{ACCENT_ALPHA, Accent, complementary, complementary_accent, complementary_color};
pub use hsl::Hsl;
pub use model::Color;
pub use parse::{ColorParseError, parse_color, parse_hex6};
