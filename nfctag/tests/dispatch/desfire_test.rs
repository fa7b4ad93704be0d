use nfctag::prelude::*;
use nfctag::test_support::SharedMock;

use crate::common::fixtures::{desfire_replies, DESFIRE, ZERO_KEY_SESSION};

fn fixed_dispatcher() -> TagDispatcher {
    TagDispatcher::with_config(ProtocolConfig {
        auth: AuthConfig::default().with_challenge(ChallengeSource::Fixed([0u8; 8])),
        ..Default::default()
    })
}

#[test]
fn handshake_sends_derived_session_key() {
    let confirm = vec![0x00, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8];
    let mock = SharedMock::with_responses(desfire_replies(confirm.clone()));
    let mut tag = mock.tag(DESFIRE);

    assert_eq!(fixed_dispatcher().read(&mut tag).unwrap(), confirm);
    let sent = mock.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(bytes_to_hex(&sent[2]), format!("af{}", ZERO_KEY_SESSION));
}

#[test]
fn wrong_length_confirm_is_protocol_violation() {
    let mock = SharedMock::with_responses(desfire_replies(vec![0x00, 0x01]));
    let mut tag = mock.tag(DESFIRE);
    assert!(matches!(
        fixed_dispatcher().read(&mut tag),
        Err(Error::ProtocolViolation { stage: "confirm", expected: 9, actual: 2 })
    ));
    assert_eq!(mock.lock().close_count, 1);
}

#[test]
fn card_rejecting_key() {
    let mock = SharedMock::with_responses(desfire_replies(vec![0xAE]));
    let mut tag = mock.tag(DESFIRE);
    assert!(matches!(
        fixed_dispatcher().read(&mut tag),
        Err(Error::AuthenticationFailed(_))
    ));
}

#[test]
fn write_is_not_supported() {
    let mock = SharedMock::new();
    let mut tag = mock.tag(DESFIRE);
    assert!(matches!(
        fixed_dispatcher().write(&mut tag, b"data"),
        Err(Error::NotSupported(_))
    ));
}
