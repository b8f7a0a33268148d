// Check digit
//------------------------------------------------------------------------------

/// Weighted sum over the character codes of `base`, weights alternating 3, 1, 3, ...
/// starting at position 0. Letters are weighted by their code point just like digits.
/// Returns the digit that tops the sum up to the next multiple of 10.
pub fn checksum(base: &str) -> u8 {
    let sum = base.chars().enumerate().fold(0u64, |acc, (i, ch)| {
        let weight = if i % 2 == 0 { 3 } else { 1 };
        acc + ch as u64 * weight
    });
    ((10 - sum % 10) % 10) as u8
}

#[inline]
pub(crate) fn check_char(digit: u8) -> char {
    debug_assert!(digit < 10, "Invalid check digit {digit}");
    (b'0' + digit) as char
}
