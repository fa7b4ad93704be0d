use nfctag::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_to_bytes};
use nfctag::Error;
use proptest::prelude::*;

#[test]
fn known_vectors() {
    assert_eq!(hex_to_bytes("55AA00").unwrap(), vec![0x55, 0xAA, 0x00]);
    assert_eq!(bytes_to_hex(&[0x55, 0xAA, 0x00]), "55aa00");
    assert_eq!(bytes_to_hex_spaced(&[0x5A, 0xFF]), "5a ff");
}

#[test]
fn odd_length_is_malformed() {
    assert!(matches!(hex_to_bytes("ABC"), Err(Error::MalformedInput(_))));
}

#[test]
fn whitespace_is_trimmed_only_at_the_ends() {
    assert_eq!(hex_to_bytes("  0a0B \n").unwrap(), vec![0x0A, 0x0B]);
    assert!(hex_to_bytes("0a 0b").is_err());
    assert!(hex_to_bytes("zz").is_err());
}

proptest! {
    #[test]
    fn agrees_with_hex_crate(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let ours = bytes_to_hex(&bytes);
        prop_assert_eq!(&ours, &hex::encode(&bytes));
        prop_assert_eq!(hex_to_bytes(&ours.to_uppercase()).unwrap(), bytes);
    }
}
