pub mod material_layout;
pub mod ripple_config;
pub mod widget;

pub use material_layout::{find_target, Hit, MaterialLayout, RippleParams, RippleState};
pub use ripple_config::RippleConfig;
pub use widget::{Color, Event, Rect, Widget};
