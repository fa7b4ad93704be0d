// nfctag/src/variants/desfire.rs
//! DESFire native select and three-pass authentication over NfcA.

use std::sync::Arc;

use log::debug;

use crate::config::ProtocolConfig;
use crate::constants::{
    DESFIRE_ADDITIONAL_FRAME, DESFIRE_AUTHENTICATION_ERROR, DESFIRE_NATIVE_AUTHENTICATE,
    DESFIRE_NATIVE_SELECT, DESFIRE_STATUS_OK,
};
use crate::crypto::auth::{derive_session_key, CHALLENGE_LEN, SESSION_KEY_LEN};
use crate::protocol::parser::{expect_len, expect_status};
use crate::tag::{Session, Tag};
use crate::types::Variant;
use crate::variants::TagProtocol;
use crate::{Error, Result};

/// NfcA tags spoken to with DESFire native commands: select the PICC
/// application, then run the three-pass handshake.
pub struct Desfire {
    config: Arc<ProtocolConfig>,
}

impl Desfire {
    /// Variant reading tunables from `config`.
    pub fn new(config: Arc<ProtocolConfig>) -> Self {
        Self { config }
    }

    /// One exchange whose answer is `status || body`. A bare `AE` means the
    /// card rejected the key.
    fn exchange(
        session: &mut Session<'_>,
        stage: &'static str,
        command: &[u8],
        status: u8,
        len: usize,
    ) -> Result<Vec<u8>> {
        let response = session.transceive(command)?;
        if response == [DESFIRE_AUTHENTICATION_ERROR] {
            return Err(Error::AuthenticationFailed(format!(
                "card answered {:#04x} during {}",
                DESFIRE_AUTHENTICATION_ERROR, stage
            )));
        }
        expect_len(stage, &response, len)?;
        expect_status(stage, &response, status)?;
        Ok(response)
    }
}

impl TagProtocol for Desfire {
    fn variant(&self) -> Variant {
        Variant::NfcA
    }

    /// Returns the card's confirmation frame `00 || ek(RndA')`.
    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        let mut session = tag.session()?;

        Self::exchange(&mut session, "select", &DESFIRE_NATIVE_SELECT, DESFIRE_STATUS_OK, 1)?;

        let challenge = Self::exchange(
            &mut session,
            "authenticate",
            &DESFIRE_NATIVE_AUTHENTICATE,
            DESFIRE_ADDITIONAL_FRAME,
            1 + CHALLENGE_LEN,
        )?;
        let session_key = derive_session_key(&self.config.auth, &challenge[1..])?;

        let mut confirm = Vec::with_capacity(1 + SESSION_KEY_LEN);
        confirm.push(DESFIRE_ADDITIONAL_FRAME);
        confirm.extend_from_slice(session_key.as_bytes());
        let response = Self::exchange(
            &mut session,
            "confirm",
            &confirm,
            DESFIRE_STATUS_OK,
            1 + CHALLENGE_LEN,
        )?;
        debug!("desfire handshake completed");
        Ok(response)
    }

    fn write(&self, _tag: &mut Tag, _data: &[u8]) -> Result<()> {
        Err(Error::NotSupported("write on NfcA (DESFire) tags".into()))
    }
}
