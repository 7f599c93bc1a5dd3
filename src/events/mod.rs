pub mod controls;
pub mod pointer;

pub use controls::{sync_sliders, wire_mode_select, wire_sliders};
pub use pointer::wire_pointermove;
