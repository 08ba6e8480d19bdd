pub mod frame;
pub mod swatch;

pub use frame::Frame;
pub use swatch::render_swatch;
