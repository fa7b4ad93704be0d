// nfctag/src/variants/ultralight.rs
//! MIFARE Ultralight page access.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::ProtocolConfig;
use crate::constants::{T2_CMD_READ, T2_CMD_WRITE, T2_PAGE_SIZE, T2_READ_LEN};
use crate::tag::Tag;
use crate::types::Variant;
use crate::variants::{expect_ack, TagProtocol};
use crate::{Error, Result};

/// MIFARE Ultralight page I/O over the user pages (4..=15 by default).
pub struct MifareUltralight {
    config: Arc<ProtocolConfig>,
}

impl MifareUltralight {
    /// Variant reading tunables from `config`.
    pub fn new(config: Arc<ProtocolConfig>) -> Self {
        Self { config }
    }

    fn ensure_capability(tag: &Tag) -> Result<()> {
        if tag.capabilities().mentions(Variant::MifareUltralight.short_name()) {
            return Ok(());
        }
        Err(Error::UnsupportedTagType(
            tag.capabilities().first().unwrap_or_default().to_string(),
        ))
    }
}

impl TagProtocol for MifareUltralight {
    fn variant(&self) -> Variant {
        Variant::MifareUltralight
    }

    /// READ returns four pages starting at the first user page.
    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        Self::ensure_capability(tag)?;
        let mut session = tag.session()?;
        session.transceive_exact(
            "ultralight read",
            &[T2_CMD_READ, self.config.ultralight_first_page],
            T2_READ_LEN,
        )
    }

    /// Writes whole pages only. A trailing chunk shorter than a page and
    /// anything past the last user page are left out.
    fn write(&self, tag: &mut Tag, data: &[u8]) -> Result<()> {
        Self::ensure_capability(tag)?;

        let capacity = self.config.ultralight_capacity();
        if data.len() > capacity {
            warn!(
                "ultralight write of {} bytes exceeds {} bytes of user memory; the rest is dropped",
                data.len(),
                capacity
            );
        }

        let first = self.config.ultralight_first_page;
        let last = self.config.ultralight_last_page;
        let mut session = tag.session()?;
        let mut written = 0usize;
        for (i, page) in (first..=last).enumerate() {
            let start = i * T2_PAGE_SIZE;
            if start + T2_PAGE_SIZE > data.len() {
                break;
            }
            let mut command = Vec::with_capacity(2 + T2_PAGE_SIZE);
            command.push(T2_CMD_WRITE);
            command.push(page);
            command.extend_from_slice(&data[start..start + T2_PAGE_SIZE]);
            let response = session.transceive(&command)?;
            expect_ack("ultralight write", &response)?;
            written += 1;
        }
        if data.len() % T2_PAGE_SIZE != 0 && data.len() < capacity {
            warn!(
                "ultralight write skipped a trailing {}-byte partial page",
                data.len() % T2_PAGE_SIZE
            );
        }
        debug!("ultralight wrote {} page(s)", written);
        Ok(())
    }
}
