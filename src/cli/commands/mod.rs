pub mod dump;
pub mod latest;
pub mod list;
pub mod predict;
pub mod push;
pub mod show_config;

pub use dump::dump;
pub use latest::latest;
pub use list::list;
pub use predict::predict;
pub use push::push;
pub use show_config::show_config;
