use barcoders::sym::code128::Code128;

/// Error reported by a rendering collaborator. The renderer folds it into a
/// [`BarcodeError`](crate::BarcodeError) variant for the step that failed.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

// Bar pattern
//------------------------------------------------------------------------------

/// One-dimensional run of modules, `true` being a dark bar module.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BarPattern {
    modules: Vec<bool>,
}

impl BarPattern {
    pub fn new(modules: Vec<bool>) -> Self {
        Self { modules }
    }

    /// Builds a pattern from symbology output where any non-zero byte is a dark module.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self { modules: bits.iter().map(|&b| b != 0).collect() }
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn width(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Dark bars as `(start, len)` in module units.
    pub fn dark_runs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut i = 0;
        std::iter::from_fn(move || {
            while i < self.modules.len() && !self.modules[i] {
                i += 1;
            }
            if i == self.modules.len() {
                return None;
            }
            let start = i;
            while i < self.modules.len() && self.modules[i] {
                i += 1;
            }
            Some((start, i - start))
        })
    }
}


// Symbology
//------------------------------------------------------------------------------

pub trait Symbology {
    /// Converts `text` into bar modules. Fails if `text` has characters or a length the
    /// symbology cannot carry.
    fn encode_to_bars(&self, text: &str) -> Result<BarPattern, CollaboratorError>;
}

// Selects Code128 character set B, which covers every character a fitment code can hold
const CODE_SET_B: char = 'Ɓ';

#[derive(Debug, Default, Clone, Copy)]
pub struct Code128Symbology;

impl Symbology for Code128Symbology {
    fn encode_to_bars(&self, text: &str) -> Result<BarPattern, CollaboratorError> {
        let symbol = Code128::new(format!("{CODE_SET_B}{text}")).map_err(|e| format!("{e:?}"))?;
        Ok(BarPattern::from_bits(&symbol.encode()))
    }
}
