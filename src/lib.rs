//! # fitcode
//!
//! A Rust library for generating, validating and rendering vehicle-fitment barcodes.
//!
//! A fitment code packs the category of a part, the vehicle it fits and the model years it
//! spans into 13 printable characters protected by a check digit:
//!
//! ```text
//! CA 000123 15 20 0
//! |  |      |  |  check digit
//! |  |      |  last two digits of the final model year
//! |  |      last two digits of the first model year
//! |  composite make/model/submodel id, low six digits
//! first two letters of the category
//! ```
//!
//! ## Features
//!
//! - **Encoding**: Pure, allocation-light packing of fitment metadata into a fixed-width code
//! - **Validation**: Shape and check digit verification of arbitrary strings
//! - **Rendering**: Code128 bars rasterized to a fixed-size PNG through swappable collaborators
//!
//! ## Quick Start
//!
//! ### Encoding & validating
//!
//! ```rust
//! use fitcode::{encode, validate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = encode("Category", 123, 2015, 2020)?;
//! assert_eq!(code, "CA00012315200");
//! assert!(validate(&code));
//! assert!(!validate("CA00012315201"));
//! # Ok(())
//! # }
//! ```
//!
//! ### From a fitment to an image
//!
//! ```rust
//! use fitcode::{BarcodeService, FitmentKey};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = BarcodeService::new();
//! let key = FitmentKey::new("Brakes", 1, 2, 3, 2010, 2019);
//!
//! let code = service.generate(&key)?;
//! assert_eq!(code.as_str(), "BR00200310196");
//!
//! let png = service.generate_image(code.as_str())?;  // 300x100 PNG
//! assert!(png.starts_with(b"\x89PNG"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Configuring the renderer
//!
//! ```rust
//! use fitcode::Renderer;
//! use image::ImageFormat;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut renderer = Renderer::new();
//! renderer
//!     .size(600, 200)              // Canvas size - if not provided, defaults to 300x100
//!     .format(ImageFormat::Png);   // Output format - if not provided, defaults to PNG
//!
//! let bytes = renderer.render("CA00012315200")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Caveats
//!
//! - The item field holds six digits. Composite ids of one million or more keep only their low
//!   six digits, so the make id never reaches the code and codes are not unique keys.
//! - [`encode`] takes the first two characters of any category name. Names that do not start
//!   with two letters encode without error but never [`validate`]. [`BarcodeService`] rejects
//!   them up front.

pub mod codec;
pub(crate) mod common;
pub mod fitment;
pub mod render;

pub use codec::{encode, validate, Barcode};
pub use common::checksum::checksum;
pub use common::error::{BarcodeError, BarcodeResult};
pub use common::layout::{BASE_LEN, CODE_LEN};
pub use fitment::{pack_item_id, BarcodeService, FitmentKey};
pub use render::{RenderOptions, Renderer};
