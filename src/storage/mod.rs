pub mod codec;
pub mod memory;
pub mod resolver;
pub mod store;

pub use codec::ArtifactFormat;
pub use memory::MemoryStore;
pub use resolver::{parse_version, ModelResolver};
pub use store::{FileSystemStore, VersionStore};
