use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BarcodeError {
    // Encoding
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    // Validation
    #[error("Invalid barcode: {0}")]
    InvalidBarcode(String),

    // Rendering
    #[error("Failed to encode barcode: {0}")]
    EncodingFailed(String),
    #[error("Failed to serialize barcode image: {0}")]
    SerializationFailed(String),
}

impl BarcodeError {
    /// True when the failure was caused by the caller's input rather than a rendering
    /// collaborator. Request handlers map these to 4xx and the rest to 5xx.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::OutOfRange(_) | Self::InvalidBarcode(_))
    }
}

pub type BarcodeResult<T> = Result<T, BarcodeError>;

#[cfg(test)]
mod error_tests {
    use test_case::test_case;

    use super::BarcodeError;

    #[test_case(BarcodeError::InvalidInput("category name too short".into()), true)]
    #[test_case(BarcodeError::OutOfRange("model id 1000".into()), true)]
    #[test_case(BarcodeError::InvalidBarcode("AB123".into()), true)]
    #[test_case(BarcodeError::EncodingFailed("bad char".into()), false)]
    #[test_case(BarcodeError::SerializationFailed("png".into()), false)]
    fn test_is_client_error(err: BarcodeError, exp: bool) {
        assert_eq!(err.is_client_error(), exp);
    }

    #[test]
    fn test_display() {
        let err = BarcodeError::InvalidInput("category name too short".into());
        assert_eq!(err.to_string(), "Invalid input: category name too short");
    }
}
