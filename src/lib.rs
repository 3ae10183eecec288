//! WAD level-container analyzer.
//!
//! Parses the binary container format used by classic first-person
//! shooters, detects the playable maps inside, and resolves each map's
//! display name from the metadata formats the container may carry
//! (binary-patch text, simple-text declarations, block-structured
//! declarations).
//!
//! The main entry point is [`analyze`], which takes raw container bytes
//! and returns the sorted display names of every playable map.

pub mod codec;
pub mod error;
pub mod names;
pub mod wad;

pub use codec::{BinaryReader, BinaryWriter};
pub use error::{Error, Result};
pub use names::{analyze, analyze_file, MapLumpKind, Symbol, Token, Tokenizer};
pub use wad::{Lump, Wad, WadBuilder, WadHeader, WadKind};
