// nfctag/src/variants/classic.rs
//! MIFARE Classic sector and block access.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::ProtocolConfig;
use crate::constants::{CLASSIC_BLOCK_SIZE, CLASSIC_CMD_AUTH_A, CLASSIC_CMD_READ, CLASSIC_CMD_WRITE};
use crate::tag::{Session, Tag};
use crate::types::Variant;
use crate::variants::{expect_ack, TagProtocol};
use crate::{Error, Result};

/// MIFARE Classic sector I/O keyed with a single key A.
pub struct MifareClassic {
    config: Arc<ProtocolConfig>,
}

impl MifareClassic {
    /// Variant reading tunables from `config`.
    pub fn new(config: Arc<ProtocolConfig>) -> Self {
        Self { config }
    }

    /// `60 <block> <uid[4]> <key[6]>` against the sector's first block.
    fn authenticate(&self, session: &mut Session<'_>, block: u8, uid: &[u8; 4]) -> Result<()> {
        let mut command = Vec::with_capacity(12);
        command.push(CLASSIC_CMD_AUTH_A);
        command.push(block);
        command.extend_from_slice(uid);
        command.extend_from_slice(&self.config.classic_key);
        let response = session.transceive(&command)?;
        expect_ack("classic authenticate", &response)
    }
}

impl TagProtocol for MifareClassic {
    fn variant(&self) -> Variant {
        Variant::MifareClassic
    }

    /// Reads every sector the key opens. Sectors that refuse the key are
    /// skipped and the bytes of the others are returned.
    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        let size = tag.classic_size();
        let uid = tag.uid().auth_bytes();
        let mut session = tag.session()?;

        let mut out = Vec::new();
        let mut skipped = 0usize;
        for sector in 0..size.sector_count() {
            let first = size.sector_to_block(sector);
            if let Err(e) = self.authenticate(&mut session, first, &uid) {
                warn!("classic sector {} skipped: {}", sector, e);
                skipped += 1;
                continue;
            }
            for offset in 0..size.blocks_in_sector(sector) {
                let block = first + offset;
                let data = session.transceive_exact(
                    "classic read",
                    &[CLASSIC_CMD_READ, block],
                    CLASSIC_BLOCK_SIZE,
                )?;
                out.extend_from_slice(&data);
            }
        }
        debug!(
            "classic read {} byte(s), {} of {} sector(s) skipped",
            out.len(),
            skipped,
            size.sector_count()
        );
        Ok(out)
    }

    /// Writes one 16-byte block of the configured sector. The sector
    /// trailer is never a target.
    fn write(&self, tag: &mut Tag, data: &[u8]) -> Result<()> {
        if data.len() != CLASSIC_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: CLASSIC_BLOCK_SIZE,
                actual: data.len(),
            });
        }

        let size = tag.classic_size();
        let sector = self.config.classic_write_sector;
        let block = self.config.classic_write_block;
        if sector >= size.sector_count() {
            return Err(Error::MalformedInput(format!(
                "sector {} does not exist on a {}-sector tag",
                sector,
                size.sector_count()
            )));
        }
        let first = size.sector_to_block(sector);
        let trailer = first + (size.blocks_in_sector(sector) - 1);
        if block < first || block >= trailer {
            return Err(Error::MalformedInput(format!(
                "block {} is not a data block of sector {}",
                block, sector
            )));
        }

        let uid = tag.uid().auth_bytes();
        let mut session = tag.session()?;
        self.authenticate(&mut session, first, &uid)
            .map_err(|e| Error::AuthenticationFailed(format!("sector {}: {}", sector, e)))?;

        let mut command = Vec::with_capacity(2 + CLASSIC_BLOCK_SIZE);
        command.push(CLASSIC_CMD_WRITE);
        command.push(block);
        command.extend_from_slice(data);
        let response = session.transceive(&command)?;
        expect_ack("classic write", &response)?;
        debug!("classic wrote block {}", block);
        Ok(())
    }
}
