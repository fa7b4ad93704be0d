// nfctag/src/error.rs
//! Error type shared by every module.

use thiserror::Error;

/// Common error type for every tag exchange.
#[derive(Error, Debug)]
pub enum Error {
    /// Hex, binary or charset input that does not have the expected shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No variant is registered for the first reported capability.
    #[error("unsupported tag type: {0}")]
    UnsupportedTagType(String),

    /// Record kind other than a well-known Text record.
    #[error("unsupported NDEF record: tnf={tnf:#04x}, type={record_type:02x?}")]
    UnsupportedRecordType {
        /// Type name format of the offending record.
        tnf: u8,
        /// Its record type bytes.
        record_type: Vec<u8>,
    },

    /// NDEF bytes that do not decode.
    #[error("malformed NDEF payload: {0}")]
    MalformedPayload(String),

    /// The platform delivered no NDEF message, or an empty one.
    #[error("tag delivered no NDEF message")]
    NoNdefMessage,

    /// The card refused a key or the handshake frames did not line up.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A response did not have the byte count the protocol step requires.
    #[error("protocol violation during {stage}: expected {expected} bytes, got {actual}")]
    ProtocolViolation {
        /// Step that received the frame.
        stage: &'static str,
        /// Required byte count.
        expected: usize,
        /// Received byte count.
        actual: usize,
    },

    /// A status or ACK byte other than the one the step requires.
    #[error("unexpected status during {stage}: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedStatus {
        /// Step that received the status.
        stage: &'static str,
        /// Required status.
        expected: u8,
        /// Received status.
        actual: u8,
    },

    /// A length outside what a field or the tag can hold.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Allowed length (an upper bound where the field is variable).
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// Transport failure reported by the host.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The tag stopped answering.
    #[error("operation timed out")]
    Timeout,

    /// The variant does not implement this operation.
    #[error("operation not supported: {0}")]
    NotSupported(String),

    /// The exchange was cancelled before its session opened.
    #[error("exchange cancelled before it started")]
    Cancelled,

    /// The dispatcher already holds an override.
    #[error("a protocol override is already registered")]
    AlreadyRegistered,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
