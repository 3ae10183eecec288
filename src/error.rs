#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("corrupt container: {reason}")]
    CorruptContainer { reason: String },

    #[error("corrupt lump {name}: bytes {offset}+{length} exceed file size {file_len}")]
    CorruptEntry {
        name: String,
        offset: i32,
        length: i32,
        file_len: usize,
    },

    #[error("unexpected end of data")]
    UnexpectedEof,

    #[error("io error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;
