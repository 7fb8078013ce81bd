//! Property tests for the A1 address codec.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheetlens_core::{
    address_to_coordinate, coordinate_to_address, CellAddress, MAX_COLS, MAX_ROWS,
};

proptest! {
    #[test]
    fn coordinate_survives_address_roundtrip(row in 1..=MAX_ROWS, col in 1..=MAX_COLS) {
        let address = coordinate_to_address(row, col);
        prop_assert_eq!(address_to_coordinate(&address).unwrap(), (row, col));
    }

    #[test]
    fn lowercase_addresses_parse_like_uppercase(row in 1..=MAX_ROWS, col in 1..=MAX_COLS) {
        let address = coordinate_to_address(row, col);
        prop_assert_eq!(
            address_to_coordinate(&address.to_lowercase()).unwrap(),
            (row, col)
        );
    }

    #[test]
    fn validated_address_displays_as_codec_output(row in 1..=MAX_ROWS, col in 1..=MAX_COLS) {
        let addr = CellAddress::new(row, col).unwrap();
        prop_assert_eq!(addr.to_string(), coordinate_to_address(row, col));
    }

    #[test]
    fn leading_digit_is_rejected(row in 1..=MAX_ROWS, col in 1..=MAX_COLS, digit in 0u32..10) {
        let address = format!("{}{}", digit, coordinate_to_address(row, col));
        prop_assert!(address_to_coordinate(&address).is_err());
    }
}

#[test]
fn documented_addresses() {
    assert_eq!(coordinate_to_address(2, 27), "AA2");
    assert_eq!(coordinate_to_address(3, 2), "B3");
    assert_eq!(address_to_coordinate("A1").unwrap(), (1, 1));
    assert_eq!(address_to_coordinate("AA2").unwrap(), (2, 27));
    assert!(matches!(
        address_to_coordinate("8A2"),
        Err(sheetlens_core::Error::InvalidAddress(_))
    ));
}
