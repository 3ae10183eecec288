use tracing::debug;

use crate::codec::{decode_text, BinaryReader};
use crate::error::{Error, Result};
use crate::wad::types::{Lump, WadHeader, WadKind};

pub const HEADER_SIZE: usize = 12;
pub const DIRECTORY_ENTRY_SIZE: usize = 16;

/// Parsed WAD container: header plus directory, borrowing the raw bytes.
///
/// Lump payloads are not validated up front. Each directory row is range
/// checked only when its bytes are requested, so a container with a few
/// corrupt rows still exposes the rest.
#[derive(Debug)]
pub struct Wad<'a> {
    data: &'a [u8],
    header: WadHeader,
    lumps: Vec<Lump>,
}

impl<'a> Wad<'a> {
    /// Parse the header and full directory out of raw container bytes
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let header = read_header(data)?;
        let lumps = read_directory(data, &header)?;
        debug!(
            kind = header.kind.tag(),
            lump_count = header.lump_count,
            "parsed container directory"
        );
        Ok(Self {
            data,
            header,
            lumps,
        })
    }

    pub fn header(&self) -> &WadHeader {
        &self.header
    }

    pub fn lumps(&self) -> &[Lump] {
        &self.lumps
    }

    /// Payload bytes for a lump, range checked against the file extent
    pub fn lump_bytes(&self, lump: &Lump) -> Result<&'a [u8]> {
        let corrupt = || Error::CorruptEntry {
            name: lump.name.clone(),
            offset: lump.offset,
            length: lump.length,
            file_len: self.data.len(),
        };

        if lump.offset < 0 || lump.length < 0 {
            return Err(corrupt());
        }
        let start = lump.offset as usize;
        let end = start.checked_add(lump.length as usize).ok_or_else(corrupt)?;
        if end > self.data.len() {
            return Err(corrupt());
        }
        Ok(&self.data[start..end])
    }

    /// Payload decoded byte-to-char, for text metadata lumps
    pub fn lump_text(&self, lump: &Lump) -> Result<String> {
        Ok(decode_text(self.lump_bytes(lump)?))
    }
}

fn read_header(data: &[u8]) -> Result<WadHeader> {
    if data.len() < HEADER_SIZE {
        return Err(Error::CorruptContainer {
            reason: format!("file too small for header: {} bytes", data.len()),
        });
    }

    let mut reader = BinaryReader::new(data);
    let tag = reader.read_fixed_str(4)?;
    let kind = WadKind::from_tag(&tag).ok_or_else(|| Error::CorruptContainer {
        reason: format!("unrecognized identification tag {tag:?}"),
    })?;
    let lump_count = reader.read_i32_le()?;
    let directory_offset = reader.read_i32_le()?;

    if lump_count < 0 || directory_offset < 0 {
        return Err(Error::CorruptContainer {
            reason: format!("negative header field: count {lump_count}, offset {directory_offset}"),
        });
    }

    let extent =
        directory_offset as u64 + lump_count as u64 * DIRECTORY_ENTRY_SIZE as u64;
    if extent > data.len() as u64 {
        return Err(Error::CorruptContainer {
            reason: format!(
                "directory extent {extent} exceeds file size {}",
                data.len()
            ),
        });
    }

    Ok(WadHeader {
        kind,
        lump_count,
        directory_offset,
    })
}

fn read_directory(data: &[u8], header: &WadHeader) -> Result<Vec<Lump>> {
    let mut reader = BinaryReader::new(data);
    reader.set_position(header.directory_offset as usize);

    let mut lumps = Vec::with_capacity(header.lump_count as usize);
    for _ in 0..header.lump_count {
        let offset = reader.read_i32_le()?;
        let length = reader.read_i32_le()?;
        let name = reader.read_name8()?;
        lumps.push(Lump {
            name,
            offset,
            length,
        });
    }
    Ok(lumps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wad::builder::WadBuilder;

    #[test]
    fn test_parse_empty_container() {
        let data = WadBuilder::new(WadKind::Pwad).build();
        let wad = Wad::parse(&data).unwrap();

        assert_eq!(wad.header().kind, WadKind::Pwad);
        assert_eq!(wad.header().lump_count, 0);
        assert!(wad.lumps().is_empty());
    }

    #[test]
    fn test_parse_directory() {
        let data = WadBuilder::new(WadKind::Iwad)
            .lump("MAP01", b"")
            .lump("THINGS", &[1, 2, 3, 4])
            .build();
        let wad = Wad::parse(&data).unwrap();

        assert_eq!(wad.header().lump_count, 2);
        assert_eq!(wad.lumps()[0].name, "MAP01");
        assert_eq!(wad.lumps()[1].name, "THINGS");
        assert_eq!(wad.lumps()[1].length, 4);
    }

    #[test]
    fn test_lump_bytes() {
        let data = WadBuilder::new(WadKind::Pwad)
            .lump("DEMO", b"payload")
            .build();
        let wad = Wad::parse(&data).unwrap();

        assert_eq!(wad.lump_bytes(&wad.lumps()[0]).unwrap(), b"payload");
    }

    #[test]
    fn test_too_small_for_header() {
        let err = Wad::parse(b"PWAD").unwrap_err();
        assert!(matches!(err, Error::CorruptContainer { .. }));
    }

    #[test]
    fn test_bad_tag() {
        let data = WadBuilder::new(WadKind::Pwad).build();
        let mut data = data;
        data[0..4].copy_from_slice(b"ZWAD");

        let err = Wad::parse(&data).unwrap_err();
        assert!(matches!(err, Error::CorruptContainer { .. }));
    }

    #[test]
    fn test_directory_extent_overflow() {
        let mut data = WadBuilder::new(WadKind::Pwad).lump("MAP01", b"").build();
        // claim one more lump than the file holds
        data[4..8].copy_from_slice(&2i32.to_le_bytes());

        let err = Wad::parse(&data).unwrap_err();
        assert!(matches!(err, Error::CorruptContainer { .. }));
    }

    #[test]
    fn test_negative_lump_count() {
        let mut data = WadBuilder::new(WadKind::Pwad).build();
        data[4..8].copy_from_slice(&(-1i32).to_le_bytes());

        let err = Wad::parse(&data).unwrap_err();
        assert!(matches!(err, Error::CorruptContainer { .. }));
    }

    #[test]
    fn test_corrupt_entry_detected_at_read() {
        let data = WadBuilder::new(WadKind::Pwad).lump("DEMO", b"abc").build();
        let wad = Wad::parse(&data).unwrap();

        // parse succeeds, the bogus range only fails when dereferenced
        let bogus = Lump {
            name: "DEMO".to_string(),
            offset: wad.lumps()[0].offset,
            length: i32::MAX,
        };
        let err = wad.lump_bytes(&bogus).unwrap_err();
        assert!(matches!(err, Error::CorruptEntry { .. }));
    }

    #[test]
    fn test_negative_lump_offset_rejected() {
        let data = WadBuilder::new(WadKind::Pwad).lump("DEMO", b"abc").build();
        let wad = Wad::parse(&data).unwrap();

        let bogus = Lump {
            name: "DEMO".to_string(),
            offset: -1,
            length: 3,
        };
        assert!(matches!(
            wad.lump_bytes(&bogus),
            Err(Error::CorruptEntry { .. })
        ));
    }

    #[test]
    fn test_lump_text() {
        let data = WadBuilder::new(WadKind::Pwad)
            .text_lump("MAPINFO", "MAP MAP01 \"Entryway\"\n")
            .build();
        let wad = Wad::parse(&data).unwrap();

        assert_eq!(
            wad.lump_text(&wad.lumps()[0]).unwrap(),
            "MAP MAP01 \"Entryway\"\n"
        );
    }
}
