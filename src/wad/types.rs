/// Container flavor declared by the 4-byte identification tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    /// Base game container ("IWAD")
    Iwad,
    /// Patch container layered over a base game ("PWAD")
    Pwad,
}

impl WadKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "IWAD" => Some(WadKind::Iwad),
            "PWAD" => Some(WadKind::Pwad),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            WadKind::Iwad => "IWAD",
            WadKind::Pwad => "PWAD",
        }
    }
}

/// Parsed 12-byte container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WadHeader {
    pub kind: WadKind,
    pub lump_count: i32,
    pub directory_offset: i32,
}

/// One directory row: a named byte range inside the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lump {
    pub name: String,
    pub offset: i32,
    pub length: i32,
}
