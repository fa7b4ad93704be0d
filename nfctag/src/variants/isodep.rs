// nfctag/src/variants/isodep.rs
//! ISO-DEP balance query.

use std::sync::Arc;

use log::debug;

use crate::config::ProtocolConfig;
use crate::protocol::apdu::{select_by_name, split_status, SW_SUCCESS};
use crate::tag::Tag;
use crate::types::Variant;
use crate::utils::bytes_to_hex;
use crate::variants::TagProtocol;
use crate::{Error, Result};

/// ISO-DEP cards: SELECT the configured application, then one fixed
/// command APDU whose response is handed back untouched.
pub struct IsoDep {
    config: Arc<ProtocolConfig>,
}

impl IsoDep {
    /// Variant reading tunables from `config`.
    pub fn new(config: Arc<ProtocolConfig>) -> Self {
        Self { config }
    }
}

impl TagProtocol for IsoDep {
    fn variant(&self) -> Variant {
        Variant::IsoDep
    }

    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        let select = select_by_name(&self.config.isodep_aid)?;
        let mut session = tag.session()?;

        let fci = session.transceive(&select)?;
        match split_status(&fci) {
            Some((_, sw)) if sw == SW_SUCCESS => debug!("isodep application selected"),
            Some((_, sw)) => debug!("isodep select answered sw={}", bytes_to_hex(&sw)),
            None => debug!("isodep select answered {} byte(s)", fci.len()),
        }

        session.transceive(&self.config.isodep_balance_apdu)
    }

    fn write(&self, _tag: &mut Tag, _data: &[u8]) -> Result<()> {
        Err(Error::NotSupported("write on IsoDep tags".into()))
    }
}
