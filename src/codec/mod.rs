pub mod reader;
pub mod writer;

pub use reader::{decode_text, BinaryReader};
pub use writer::BinaryWriter;
