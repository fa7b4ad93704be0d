use nfctag::prelude::*;
use nfctag::test_support::SharedMock;

use crate::common::fixtures::ISO_DEP;

#[test]
fn select_apdu_bytes() {
    let mock = SharedMock::with_responses([vec![0x90, 0x00], vec![0x00, 0x64, 0x90, 0x00]]);
    let mut tag = mock.tag(ISO_DEP);
    let balance = TagDispatcher::new().read(&mut tag).unwrap();
    assert_eq!(balance, vec![0x00, 0x64, 0x90, 0x00]);

    let sent = mock.sent();
    assert_eq!(
        bytes_to_hex(&sent[0]),
        format!("00a404000e{}00", hex::encode("2PAY.SYS.DDF01"))
    );
    assert_eq!(sent[1], vec![0x80, 0x5C, 0x00, 0x02, 0x04]);
}

#[test]
fn custom_aid() {
    let aid = vec![0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10];
    let config = ProtocolConfig {
        isodep_aid: aid.clone(),
        ..Default::default()
    };
    let mock = SharedMock::with_responses([vec![0x90, 0x00], vec![0x90, 0x00]]);
    let mut tag = mock.tag(ISO_DEP);
    TagDispatcher::with_config(config).read(&mut tag).unwrap();
    let select = &mock.sent()[0];
    assert_eq!(select[4] as usize, aid.len());
    assert_eq!(&select[5..12], aid.as_slice());
    assert_eq!(select.len(), 13);
}
