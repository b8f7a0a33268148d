// Barcode layout
//------------------------------------------------------------------------------
// PP NNNNNN YY ZZ C
// |  |      |  |  check digit
// |  |      |  year to suffix
// |  |      year from suffix
// |  composite item id, low six digits
// category prefix

pub const PREFIX_LEN: usize = 2;
pub const ITEM_LEN: usize = 6;
pub const YEAR_LEN: usize = 2;

pub const BASE_LEN: usize = PREFIX_LEN + ITEM_LEN + YEAR_LEN + YEAR_LEN;
pub const CODE_LEN: usize = BASE_LEN + 1;

pub const ITEM_MODULUS: u64 = 1_000_000;
pub const YEAR_MODULUS: i32 = 100;

// Composite item id packing: make * 1_000_000 + model * 1_000 + submodel
pub const MAKE_FACTOR: u64 = 1_000_000;
pub const MODEL_FACTOR: u64 = 1_000;
pub const MAX_MODEL_ID: u32 = 999;
pub const MAX_SUBMODEL_ID: u32 = 999;

pub const ITEM_RANGE: std::ops::Range<usize> = PREFIX_LEN..PREFIX_LEN + ITEM_LEN;
pub const YEAR_FROM_RANGE: std::ops::Range<usize> = ITEM_RANGE.end..ITEM_RANGE.end + YEAR_LEN;
pub const YEAR_TO_RANGE: std::ops::Range<usize> = YEAR_FROM_RANGE.end..BASE_LEN;
