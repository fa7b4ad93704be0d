// nfctag/src/transport/mod.rs
//! Link to the tag, owned by the host platform.

pub mod mock;
pub mod traits;

pub use mock::{MockReply, MockTransport};
pub use traits::Transceiver;
