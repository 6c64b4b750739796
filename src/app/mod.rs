pub mod controller;
pub mod event;
pub mod mode;
pub mod render_state;

pub use controller::App;
pub use event::KeyPress;
pub use mode::AppMode;
pub use render_state::RenderState;
