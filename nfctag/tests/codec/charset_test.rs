use nfctag::utils::{bytes_to_string, string_to_bytes, string_to_hex};
use nfctag::Error;

#[test]
fn gbk_roundtrip() {
    assert_eq!(string_to_hex("中文", "GBK").unwrap(), "d6d0cec4");
    let bytes = string_to_bytes("标签", "gb2312").unwrap();
    assert_eq!(bytes_to_string(&bytes, "GBK").unwrap(), "标签");
}

#[test]
fn ascii_is_identical_in_gbk() {
    assert_eq!(string_to_bytes("tag-01", "GBK").unwrap(), b"tag-01".to_vec());
}

#[test]
fn unknown_charset_and_unmappable_text() {
    assert!(matches!(string_to_bytes("x", "klingon"), Err(Error::MalformedInput(_))));
    assert!(matches!(string_to_bytes("😀", "GBK"), Err(Error::MalformedInput(_))));
    assert_eq!(string_to_bytes("😀", "utf-8").unwrap(), "😀".as_bytes().to_vec());
}
