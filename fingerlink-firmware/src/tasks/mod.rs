//! Embassy async tasks
//!
//! Each task loops over one `fingerlink-core` step and logs the result.

pub mod input;
pub mod menu;
pub mod relay;

pub use input::input_task;
pub use menu::menu_task;
pub use relay::relay_task;
