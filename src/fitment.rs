use tracing::debug;

use crate::codec::{category_prefix, encode, Barcode};
use crate::common::{
    BarcodeError, BarcodeResult, MAKE_FACTOR, MAX_MODEL_ID, MAX_SUBMODEL_ID, MODEL_FACTOR,
    PREFIX_LEN,
};
use crate::render::{
    BarRasterizer, BufferEncoder, Code128Symbology, ImageEncoder, Rasterizer, Renderer,
    Symbology,
};

// Fitment key
//------------------------------------------------------------------------------

/// Vehicle fitment of a part: its category, the make/model/submodel it fits and the model
/// years it spans.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FitmentKey {
    pub category: String,
    pub make_id: u32,
    pub model_id: u32,
    pub submodel_id: u32,
    pub year_from: i32,
    pub year_to: i32,
}

impl FitmentKey {
    pub fn new(
        category: impl Into<String>,
        make_id: u32,
        model_id: u32,
        submodel_id: u32,
        year_from: i32,
        year_to: i32,
    ) -> Self {
        Self { category: category.into(), make_id, model_id, submodel_id, year_from, year_to }
    }

    /// Packs make, model and submodel into one integer.
    ///
    /// # Errors
    ///
    /// - [`BarcodeError::InvalidInput`] if any id is zero
    /// - [`BarcodeError::OutOfRange`] if the model or submodel id needs more than three
    ///   digits, which would let it bleed into the neighbouring field
    pub fn composite_item_id(&self) -> BarcodeResult<u64> {
        if self.make_id == 0 || self.model_id == 0 || self.submodel_id == 0 {
            return Err(BarcodeError::InvalidInput(
                "make, model and submodel ids must be positive".to_string(),
            ));
        }
        if self.model_id > MAX_MODEL_ID {
            return Err(BarcodeError::OutOfRange(format!(
                "model id {} exceeds {MAX_MODEL_ID}",
                self.model_id
            )));
        }
        if self.submodel_id > MAX_SUBMODEL_ID {
            return Err(BarcodeError::OutOfRange(format!(
                "submodel id {} exceeds {MAX_SUBMODEL_ID}",
                self.submodel_id
            )));
        }
        Ok(pack_item_id(self.make_id, self.model_id, self.submodel_id))
    }

    pub fn validate_years(&self) -> BarcodeResult<()> {
        if self.year_from <= 0 || self.year_to <= 0 || self.year_from > self.year_to {
            return Err(BarcodeError::InvalidInput(format!(
                "invalid year range {}..={}",
                self.year_from, self.year_to
            )));
        }
        Ok(())
    }

    /// The category must yield two ASCII letters, otherwise the encoded code would never
    /// validate.
    pub fn validate_category(&self) -> BarcodeResult<()> {
        let prefix = category_prefix(&self.category);
        if prefix.len() != PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(BarcodeError::InvalidInput(format!(
                "category {:?} does not start with two letters",
                self.category
            )));
        }
        Ok(())
    }
}

pub fn pack_item_id(make_id: u32, model_id: u32, submodel_id: u32) -> u64 {
    u64::from(make_id) * MAKE_FACTOR + u64::from(model_id) * MODEL_FACTOR + u64::from(submodel_id)
}

#[cfg(test)]
mod fitment_key_tests {
    use test_case::test_case;

    use super::{pack_item_id, FitmentKey};
    use crate::common::BarcodeError;

    #[test]
    fn test_pack_item_id() {
        assert_eq!(pack_item_id(1, 2, 3), 1_002_003);
        assert_eq!(pack_item_id(42, 999, 999), 42_999_999);
        assert_eq!(pack_item_id(u32::MAX, 999, 999), 4_294_967_295_999_999);
    }

    #[test]
    fn test_composite_item_id() {
        let key = FitmentKey::new("Brakes", 12, 345, 678, 2010, 2019);
        assert_eq!(key.composite_item_id(), Ok(12_345_678));
    }

    #[test_case(0, 1, 1)]
    #[test_case(1, 0, 1)]
    #[test_case(1, 1, 0)]
    fn test_composite_item_id_zero(make: u32, model: u32, submodel: u32) {
        let key = FitmentKey::new("Brakes", make, model, submodel, 2010, 2019);
        assert!(matches!(key.composite_item_id(), Err(BarcodeError::InvalidInput(_))));
    }

    #[test_case(1, 1000, 1)]
    #[test_case(1, 1, 1000)]
    fn test_composite_item_id_out_of_range(make: u32, model: u32, submodel: u32) {
        let key = FitmentKey::new("Brakes", make, model, submodel, 2010, 2019);
        assert!(matches!(key.composite_item_id(), Err(BarcodeError::OutOfRange(_))));
    }

    #[test_case(2010, 2019, true)]
    #[test_case(2015, 2015, true)]
    #[test_case(2020, 2015, false)]
    #[test_case(0, 2015, false)]
    #[test_case(-1999, 2015, false)]
    #[test_case(2015, 0, false)]
    fn test_validate_years(year_from: i32, year_to: i32, ok: bool) {
        let key = FitmentKey::new("Brakes", 1, 1, 1, year_from, year_to);
        assert_eq!(key.validate_years().is_ok(), ok);
    }

    #[test_case("Brakes", true)]
    #[test_case("oil filters", true)]
    #[test_case("B", false)]
    #[test_case("", false)]
    #[test_case("4x4 Parts", false)]
    #[test_case("C5", false)]
    #[test_case("Éclairage", false)]
    fn test_validate_category(category: &str, ok: bool) {
        let key = FitmentKey::new(category, 1, 1, 1, 2010, 2019);
        assert_eq!(key.validate_category().is_ok(), ok);
    }
}

// Barcode service
//------------------------------------------------------------------------------

/// Enforces the fitment contract on top of the codec and hands codes to a [`Renderer`].
#[derive(Debug, Clone)]
pub struct BarcodeService<S = Code128Symbology, R = BarRasterizer, E = BufferEncoder> {
    renderer: Renderer<S, R, E>,
}

impl BarcodeService {
    pub fn new() -> Self {
        Self::with_renderer(Renderer::new())
    }
}

impl Default for BarcodeService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R, E> BarcodeService<S, R, E> {
    pub fn with_renderer(renderer: Renderer<S, R, E>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &Renderer<S, R, E> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<S, R, E> {
        &mut self.renderer
    }

    pub fn generate(&self, key: &FitmentKey) -> BarcodeResult<Barcode> {
        debug!(
            category = %key.category,
            make_id = key.make_id,
            model_id = key.model_id,
            submodel_id = key.submodel_id,
            year_from = key.year_from,
            year_to = key.year_to,
            "Generating barcode..."
        );

        key.validate_years()?;
        key.validate_category()?;
        let item_id = key.composite_item_id()?;

        let code = encode(&key.category, item_id, key.year_from, key.year_to)?;
        debug!(code = %code, item_id, "Barcode generated");
        Barcode::try_from(code)
    }
}

impl<S: Symbology, R: Rasterizer, E: ImageEncoder> BarcodeService<S, R, E> {
    pub fn generate_image(&self, code: &str) -> BarcodeResult<Vec<u8>> {
        self.renderer.render(code)
    }
}
