use nfctag::prelude::*;
use nfctag::test_support::SharedMock;

use crate::common::fixtures::{classic_replies, CLASSIC};

#[test]
fn failed_sector_does_not_abort_read() {
    crate::common::init_logger();
    // 1K: 16 sectors of 4 blocks; sector 3 refuses the key
    let open: Vec<bool> = (0..16).map(|s| s != 3).collect();
    let mock = SharedMock::with_responses(classic_replies(&open, 4));
    let mut tag = mock.tag_with_sak(CLASSIC, 0x08);

    let data = TagDispatcher::new().read(&mut tag).unwrap();
    assert_eq!(data.len(), 15 * 4 * 16);
    // sector 2's blocks are followed directly by sector 4's
    assert_eq!(data[2 * 64], 2);
    assert_eq!(data[3 * 64], 4);
    assert_eq!(mock.lock().close_count, 1);
}

#[test]
fn four_k_large_sectors() {
    // 40 sectors; only the last (16 blocks) opens
    let mut open = vec![false; 40];
    open[39] = true;
    let mock = SharedMock::with_responses(classic_replies(&open, 16));
    let mut tag = mock.tag_with_sak(CLASSIC, 0x18);

    let data = TagDispatcher::new().read(&mut tag).unwrap();
    assert_eq!(data.len(), 16 * 16);
    let sent = mock.sent();
    assert_eq!(sent[39][..2], [0x60, 240]);
    assert_eq!(sent.last().unwrap(), &vec![0x30, 255]);
}

#[test]
fn write_goes_to_block_four_after_auth() {
    let mock = SharedMock::with_responses([vec![0x0A], vec![0x0A]]);
    let mut tag = mock.tag(CLASSIC);
    TagDispatcher::new().write(&mut tag, &[0xEE; 16]).unwrap();
    let sent = mock.sent();
    assert_eq!(sent[0][..2], [0x60, 0x04]);
    assert_eq!(sent[1][..2], [0xA0, 0x04]);
}

#[test]
fn write_fails_when_sector_refuses_key() {
    let mock = SharedMock::new();
    let mut tag = mock.tag(CLASSIC);
    assert!(matches!(
        TagDispatcher::new().write(&mut tag, &[0u8; 16]),
        Err(Error::AuthenticationFailed(_))
    ));
}
