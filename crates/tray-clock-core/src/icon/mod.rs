mod renderer;
mod style;
pub(crate) mod wedge;

pub use {
    renderer::{ProgressIconRenderer, render_progress_icon},
    style::ProgressIconStyle,
};
