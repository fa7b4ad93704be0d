use nfctag::prelude::*;
use nfctag::test_support::SharedMock;

#[test]
fn ultralight_capability_selects_ultralight() {
    let caps = CapabilitySet::new(["android.nfc.tech.MifareUltralight"]);
    assert_eq!(
        TagDispatcher::select_variant(&caps).unwrap(),
        Variant::MifareUltralight
    );
}

#[test]
fn unknown_capability_is_unsupported() {
    crate::common::init_logger();
    let mock = SharedMock::new();
    let mut tag = mock.tag(&["android.nfc.tech.Foo"]);
    match TagDispatcher::new().read(&mut tag) {
        Err(Error::UnsupportedTagType(name)) => assert_eq!(name, "android.nfc.tech.Foo"),
        other => panic!("expected UnsupportedTagType, got {:?}", other),
    }
    // nothing was opened for an unroutable tag
    assert_eq!(mock.lock().connect_count, 0);
}

#[test]
fn selection_is_idempotent() {
    let caps = CapabilitySet::new(["android.nfc.tech.IsoDep", "android.nfc.tech.NfcA"]);
    let first = TagDispatcher::select_variant(&caps).unwrap();
    let second = TagDispatcher::select_variant(&caps).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Variant::IsoDep);
}

#[test]
fn every_variant_is_reachable() {
    for variant in Variant::ALL {
        let caps = CapabilitySet::new([variant.capability_name()]);
        assert_eq!(TagDispatcher::select_variant(&caps).unwrap(), variant);
    }
}

#[test]
fn resolve_prefers_registered_override() {
    struct Silent;
    impl TagProtocol for Silent {
        fn variant(&self) -> Variant {
            Variant::Ndef
        }
        fn read(&self, _tag: &mut Tag) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
        fn write(&self, _tag: &mut Tag, _data: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    let mock = SharedMock::new();
    let tag = mock.tag(&["android.nfc.tech.MifareClassic"]);
    let dispatcher = TagDispatcher::new();
    assert_eq!(dispatcher.resolve(&tag).unwrap(), Variant::MifareClassic);
    dispatcher.register_override(Box::new(Silent)).unwrap();
    assert_eq!(dispatcher.resolve(&tag).unwrap(), Variant::Ndef);
}
