use super::*;

#[test]
fn test_parse_and_display() {
    let bits: BitString = "0110100".parse().unwrap();

    assert_eq!(bits.len(), 7);
    assert_eq!(bits.iter().nth(1), Some(true));
    assert_eq!(bits.to_string(), "0110100");
}

#[test]
fn test_parse_rejects_other_characters() {
    let err = "01a1".parse::<BitString>().unwrap_err();

    assert_eq!(err, ParseBitStringError { index: 2, found: 'a' });
}

#[test]
fn test_empty_string_is_empty_bits() {
    let bits: BitString = "".parse().unwrap();

    assert!(bits.is_empty());
    assert_eq!(bits.to_string(), "");
}

#[test]
fn test_from_value() {
    assert_eq!(BitString::from_value(0b101, 3).to_string(), "101");
    assert_eq!(BitString::from_value(0b101, 5).to_string(), "00101");
    assert_eq!(BitString::from_value(0, 1).to_string(), "0");
}

#[test]
fn test_prefix() {
    let short: BitString = "10".parse().unwrap();
    let long: BitString = "1011".parse().unwrap();

    assert!(short.is_prefix_of(&long));
    assert!(!long.is_prefix_of(&short));
    assert!(short.is_prefix_of(&short));
}

#[test]
fn test_ordering_matches_text() {
    let mut codes: Vec<BitString> = ["11", "0", "10", "011"].iter().map(|s| s.parse().unwrap()).collect();
    codes.sort();

    let text: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    assert_eq!(text, vec!["0", "011", "10", "11"]);
}

#[test]
fn test_pack_and_unpack() {
    let bits: BitString = "1011001110001".parse().unwrap();

    let packed = bits.pack();

    assert_eq!(packed.len, 13);
    assert_eq!(&*packed.bytes, &[0b1011_0011, 0b1000_1000]);
    assert_eq!(packed.unpack().unwrap(), bits);
}

#[test]
fn test_pack_whole_bytes_has_no_padding_byte() {
    let bits: BitString = "1111000011110000".parse().unwrap();

    let packed = bits.pack();

    assert_eq!(packed.bytes.len(), 2);
    assert_eq!(packed.unpack().unwrap(), bits);
}

#[test]
fn test_pack_empty() {
    let packed = BitString::new().pack();

    assert_eq!(packed.len, 0);
    assert!(packed.bytes.is_empty());
    assert!(packed.unpack().unwrap().is_empty());
}

#[test]
fn test_unpack_rejects_overlong_length() {
    let packed = PackedBits { len: 20, bytes: vec![0xFF, 0x00].into_boxed_slice() };

    assert!(matches!(
        packed.unpack(),
        Err(HuffmanError::TruncatedInput { position: 16, dangling: 4 })
    ));
}

#[test]
fn test_pack_longer_than_a_word() {
    // 70 bits: one full 64-bit chunk and a 6-bit tail.
    let text: String = (0..70).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
    let bits: BitString = text.parse().unwrap();

    let packed = bits.pack();

    assert_eq!(packed.len, 70);
    assert_eq!(packed.bytes.len(), 9);
    assert_eq!(packed.bytes[0], 0b1001_0010);
    assert_eq!(packed.unpack().unwrap(), bits);
}

#[test]
fn test_push_bits_across_bytes() {
    let mut writer = BinaryWriterBuilder::new();

    writer.push_bits(0b101, 3);
    writer.push_bits(0x3FF, 10);
    writer.push_bits(0, 1);

    let packed = writer.build();
    assert_eq!(packed.len, 14);

    let mut reader = BinaryReader::new(packed.bytes, packed.len);
    assert_eq!(reader.read_int(3), Some(0b101));
    assert_eq!(reader.read_int(10), Some(0x3FF));
    assert_eq!(reader.remaining(), 1);
    assert_eq!(reader.read_int(2), None);
    assert_eq!(reader.read_bit(), Some(false));
    assert_eq!(reader.read_bit(), None);
}
