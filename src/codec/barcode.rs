use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::validate;
use crate::common::{
    BarcodeError, BarcodeResult, BASE_LEN, ITEM_RANGE, PREFIX_LEN, YEAR_FROM_RANGE, YEAR_TO_RANGE,
};

/// A code that has passed [`validate`]. Every field sits at a fixed offset, so the accessors
/// are plain slices. The source make, model and submodel ids cannot be recovered from it.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Barcode(String);

impl Barcode {
    pub fn parse(code: &str) -> BarcodeResult<Self> {
        if !validate(code) {
            return Err(BarcodeError::InvalidBarcode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }

    pub fn item_field(&self) -> &str {
        &self.0[ITEM_RANGE]
    }

    pub fn year_from_suffix(&self) -> &str {
        &self.0[YEAR_FROM_RANGE]
    }

    pub fn year_to_suffix(&self) -> &str {
        &self.0[YEAR_TO_RANGE]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[BASE_LEN] - b'0'
    }
}

impl FromStr for Barcode {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Barcode {
    type Error = BarcodeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        if !validate(&code) {
            return Err(BarcodeError::InvalidBarcode(code));
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Barcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod barcode_tests {
    use super::Barcode;
    use crate::common::BarcodeError;

    #[test]
    fn test_fields() {
        let code: Barcode = "CA00012315200".parse().unwrap();
        assert_eq!(code.prefix(), "CA");
        assert_eq!(code.item_field(), "000123");
        assert_eq!(code.year_from_suffix(), "15");
        assert_eq!(code.year_to_suffix(), "20");
        assert_eq!(code.check_digit(), 0);
        assert_eq!(code.to_string(), "CA00012315200");
    }

    #[test]
    fn test_parse_invalid() {
        let err = Barcode::parse("CA00012315201").unwrap_err();
        assert_eq!(err, BarcodeError::InvalidBarcode("CA00012315201".to_string()));
    }

    #[test]
    fn test_try_from_string() {
        let code = Barcode::try_from("BR00200310196".to_string()).unwrap();
        assert_eq!(code.into_string(), "BR00200310196");
        assert!(Barcode::try_from("BR0020031019".to_string()).is_err());
    }
}
