// nfctag/src/prelude.rs
//! Common imports for hosts.

pub use crate::config::{AuthConfig, ChallengeSource, IvPolicy, ProtocolConfig, SendMode};
pub use crate::crypto::{SessionKey, derive_session_key};
pub use crate::dispatcher::TagDispatcher;
pub use crate::exchange::{CancelToken, Completed, Exchange, Operation, Outcome};
#[cfg(feature = "async")]
pub use crate::exchange::{ExchangeHandle, spawn};
pub use crate::protocol::{NdefMessage, NdefRecord};
pub use crate::tag::{Session, Tag, TagBuilder};
pub use crate::transport::Transceiver;
pub use crate::variants::{TagProtocol, create_protocol_for};
pub use crate::{CapabilitySet, ClassicSize, Error, Result, Uid, Variant};

// Small codec helpers used by hosts for display and logging
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_to_bytes};
