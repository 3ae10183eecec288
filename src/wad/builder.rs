use crate::codec::BinaryWriter;
use crate::wad::container::HEADER_SIZE;
use crate::wad::types::WadKind;

/// Assembles a valid container image: header, lump payloads, directory.
///
/// Payloads are laid out in declaration order directly after the header,
/// with the directory appended at the end of the file.
pub struct WadBuilder {
    kind: WadKind,
    lumps: Vec<(String, Vec<u8>)>,
}

impl WadBuilder {
    pub fn new(kind: WadKind) -> Self {
        Self {
            kind,
            lumps: Vec::new(),
        }
    }

    pub fn lump(mut self, name: &str, data: &[u8]) -> Self {
        self.lumps.push((name.to_string(), data.to_vec()));
        self
    }

    /// Zero-length lump, as map markers are in practice
    pub fn empty_lump(self, name: &str) -> Self {
        self.lump(name, b"")
    }

    pub fn text_lump(self, name: &str, text: &str) -> Self {
        self.lump(name, text.as_bytes())
    }

    pub fn build(self) -> Vec<u8> {
        let payload_len: usize = self.lumps.iter().map(|(_, data)| data.len()).sum();
        let directory_offset = HEADER_SIZE + payload_len;

        let mut writer = BinaryWriter::with_capacity(directory_offset + self.lumps.len() * 16);
        writer.write_bytes(self.kind.tag().as_bytes());
        writer.write_i32_le(self.lumps.len() as i32);
        writer.write_i32_le(directory_offset as i32);

        let mut offsets = Vec::with_capacity(self.lumps.len());
        for (_, data) in &self.lumps {
            offsets.push(writer.len() as i32);
            writer.write_bytes(data);
        }

        for ((name, data), offset) in self.lumps.iter().zip(offsets) {
            writer.write_i32_le(offset);
            writer.write_i32_le(data.len() as i32);
            writer.write_name8(name);
        }

        writer.into_vec()
    }
}
