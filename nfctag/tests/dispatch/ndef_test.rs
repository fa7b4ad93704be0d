use nfctag::prelude::*;
use nfctag::protocol::ndef::unwrap_tlv;
use nfctag::test_support::SharedMock;

use crate::common::fixtures::{text_message, NDEF};

#[test]
fn text_roundtrip_through_record() {
    let encoded = NdefMessage::single(NdefRecord::text("en", "hi").unwrap())
        .encode()
        .unwrap();
    let decoded = NdefMessage::decode(&encoded).unwrap();
    let text = decoded.first().unwrap().text_payload().unwrap();
    assert_eq!(text.body, b"hi");
    assert_eq!(text.language, b"en");
}

#[test]
fn read_delivered_message() {
    let mock = SharedMock::new();
    let mut tag = mock.tag_with_ndef(NDEF, vec![text_message("en", "hi")]);
    assert_eq!(TagDispatcher::new().read(&mut tag).unwrap(), b"hi".to_vec());
}

#[test]
fn written_pages_hold_a_readable_message() {
    let mock = SharedMock::with_responses(vec![vec![0x0A]; 8]);
    let mut tag = mock.tag(NDEF);
    let config = ProtocolConfig {
        ndef_language: "en".into(),
        ..Default::default()
    };
    TagDispatcher::with_config(config)
        .write_text(&mut tag, "hello tag")
        .unwrap();

    // reassemble the data area from the page writes
    let area: Vec<u8> = mock.sent().iter().flat_map(|cmd| cmd[2..].to_vec()).collect();
    let message = NdefMessage::decode(unwrap_tlv(&area).unwrap()).unwrap();
    assert_eq!(message.first().unwrap().text_payload().unwrap().body, b"hello tag");
}

#[test]
fn malformed_payload_surfaces() {
    // status byte claims a 9-byte language code in a 3-byte payload
    let raw = vec![0xD1, 0x01, 0x03, b'T', 0x09, b'e', b'n'];
    let mock = SharedMock::new();
    let mut tag = mock.tag_with_ndef(NDEF, vec![raw]);
    assert!(matches!(
        TagDispatcher::new().read(&mut tag),
        Err(Error::MalformedPayload(_))
    ));
}
