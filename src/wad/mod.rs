pub mod builder;
pub mod container;
pub mod types;

pub use builder::WadBuilder;
pub use container::{Wad, DIRECTORY_ENTRY_SIZE, HEADER_SIZE};
pub use types::{Lump, WadHeader, WadKind};
