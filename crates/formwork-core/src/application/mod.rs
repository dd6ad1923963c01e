//! Application layer: resolver services and the ports they drive.

pub mod lookup;
pub mod ports;
pub mod renderer;

pub use lookup::BUNDLED_APP;
pub use renderer::{CombinedRenderer, StandaloneRenderer, TemplateResolver};
