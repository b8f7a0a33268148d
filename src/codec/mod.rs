mod barcode;

pub use barcode::Barcode;

use crate::common::{
    check_char, checksum, BarcodeError, BarcodeResult, BASE_LEN, CODE_LEN, ITEM_MODULUS,
    PREFIX_LEN, YEAR_MODULUS,
};

// Encoder
//------------------------------------------------------------------------------

/// Packs fitment metadata into a 13 character code `PP NNNNNN YY ZZ C`.
///
/// The prefix is the first two characters of the upper-cased category name. They are not
/// checked to be letters, so a name like `"4x4"` encodes fine but will not [`validate`].
/// A composite item id of one million or more keeps only its low six digits, and the
/// years keep only their last two.
///
/// # Errors
///
/// [`BarcodeError::InvalidInput`] if the upper-cased category name has fewer than two
/// characters.
pub fn encode(
    category_name: &str,
    composite_item_id: u64,
    year_from: i32,
    year_to: i32,
) -> BarcodeResult<String> {
    let prefix = category_prefix(category_name);
    if prefix.chars().count() < PREFIX_LEN {
        return Err(BarcodeError::InvalidInput(format!(
            "category name too short: {category_name:?}"
        )));
    }

    let base = format!(
        "{prefix}{:06}{:02}{:02}",
        composite_item_id % ITEM_MODULUS,
        year_from % YEAR_MODULUS,
        year_to % YEAR_MODULUS
    );

    let mut code = String::with_capacity(CODE_LEN);
    code.push_str(&base);
    code.push(check_char(checksum(&base)));
    Ok(code)
}

/// First two characters of the upper-cased name. May be shorter, or contain non-letters.
pub(crate) fn category_prefix(category_name: &str) -> String {
    category_name.to_uppercase().chars().take(PREFIX_LEN).collect()
}

#[cfg(test)]
mod encode_tests {
    use test_case::test_case;

    use super::encode;
    use crate::common::BarcodeError;

    #[test_case("Category", 123, 2015, 2020, "CA00012315200")]
    #[test_case("brakes", 2_003, 2010, 2019, "BR00200310196")]
    #[test_case("engine", 234_567, 2005, 2009, "EN23456705090")]
    #[test_case("su", 0, 1999, 1999, "SU00000099994")]
    #[test_case("filters", 999_999, 2000, 2000, "FI99999900009")]
    fn test_encode(category: &str, id: u64, year_from: i32, year_to: i32, exp: &str) {
        assert_eq!(encode(category, id, year_from, year_to).unwrap(), exp);
    }

    #[test]
    fn test_encode_fields() {
        let code = encode("Category", 123, 2015, 2020).unwrap();
        assert_eq!(&code[..2], "CA");
        assert_eq!(&code[2..8], "000123");
        assert_eq!(&code[8..10], "15");
        assert_eq!(&code[10..12], "20");
        assert_eq!(code.len(), 13);
    }

    #[test]
    fn test_encode_truncates_item_id() {
        let code = encode("Exhaust", 1_234_567, 2015, 2020).unwrap();
        assert_eq!(&code[2..8], "234567");
        assert_eq!(code, encode("Exhaust", 234_567, 2015, 2020).unwrap());
    }

    #[test]
    fn test_encode_year_suffix_padding() {
        let code = encode("Wheels", 1, 2001, 2009).unwrap();
        assert_eq!(&code[8..12], "0109");
    }

    #[test_case(""; "empty")]
    #[test_case("a"; "single char")]
    #[test_case("é"; "single non ascii char")]
    fn test_encode_short_category(category: &str) {
        let err = encode(category, 123, 2015, 2020).unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidInput(_)));
    }

    #[test]
    fn test_encode_full_case_mapping() {
        let code = encode("ßx", 1, 2015, 2020).unwrap();
        assert_eq!(&code[..2], "SS");
        assert!(super::validate(&code));
    }

    #[test]
    fn test_encode_accepts_non_letter_prefix() {
        let code = encode("C5", 2_003, 2005, 2010).unwrap();
        assert_eq!(code, "C500200305109");
        assert!(!super::validate(&code));
    }
}

// Validator
//------------------------------------------------------------------------------

/// Checks that `candidate` is two uppercase ASCII letters followed by ten ASCII digits,
/// the last of which is the check digit of the first twelve characters.
pub fn validate(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() != CODE_LEN {
        return false;
    }

    let (prefix, digits) = bytes.split_at(PREFIX_LEN);
    if !prefix.iter().all(u8::is_ascii_uppercase) || !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }

    checksum(&candidate[..BASE_LEN]) == bytes[BASE_LEN] - b'0'
}
