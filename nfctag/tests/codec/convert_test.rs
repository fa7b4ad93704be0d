use nfctag::utils::{
    binary_to_hex, bytes_to_decimal_le, bytes_to_float, bytes_to_int_be, float_to_bytes,
    float_to_hex, hex_to_binary, hex_to_int, int_to_hex,
};
use proptest::prelude::*;

#[test]
fn binary_strings() {
    assert_eq!(binary_to_hex("0000101011111111").as_deref(), Some("0aff"));
    assert_eq!(binary_to_hex("0101"), None);
    assert_eq!(binary_to_hex("00000002"), None);
    assert_eq!(hex_to_binary("a5").as_deref(), Some("10100101"));
    assert_eq!(hex_to_binary("a"), None);
}

#[test]
fn integers() {
    assert_eq!(int_to_hex(255), "ff");
    assert_eq!(hex_to_int("7fffffff").unwrap(), i32::MAX);
    assert!(hex_to_int("xyz").is_err());
    assert_eq!(bytes_to_int_be(&[0x01, 0x02, 0x03], 2), 0x0102);
}

#[test]
fn float_is_big_endian() {
    assert_eq!(float_to_bytes(1.0), [0x3F, 0x80, 0x00, 0x00]);
    assert_eq!(float_to_hex(-2.5), "c0200000");
    assert!(bytes_to_float(&[0x3F, 0x80]).is_err());
}

#[test]
fn uid_decimal() {
    // 0x04030201 little-endian
    assert_eq!(bytes_to_decimal_le(&[0x01, 0x02, 0x03, 0x04]), "67305985");
}

proptest! {
    #[test]
    fn float_roundtrip(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let back = bytes_to_float(&float_to_bytes(f)).unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits());
    }
}
