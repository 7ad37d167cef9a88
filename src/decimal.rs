use std::cmp::Ordering;
use std::fmt;

/// Compares two decimal strings by magnitude.
///
/// Both strings must be canonical: either `"0"` or digits without a leading
/// zero. Under that rule a longer string is always the larger number, and
/// strings of equal length order the same way as their numbers do, so no
/// integer conversion (and no overflow) is involved. The empty string is
/// less than every non-empty string, which lets it stand in for a missing
/// component.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(Ordering::Less, gover::compare_decimal("9", "10"));
/// assert_eq!(Ordering::Less, gover::compare_decimal("", "0"));
/// ```
#[must_use]
pub fn compare_decimal(x: &str, y: &str) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Returns the decimal string one less than the given one.
///
/// Borrows propagate across every digit and a leading zero left behind by
/// the borrow is dropped, so `"100"` becomes `"99"`. Zero has no
/// predecessor and gives the empty string, as does any input that is not
/// made up solely of ASCII digits.
///
/// ```
/// assert_eq!("99", gover::decrement_decimal("100"));
/// assert_eq!("", gover::decrement_decimal("0"));
/// ```
#[must_use]
pub fn decrement_decimal(decimal: &str) -> String {
    if !decimal.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let mut digits = decimal.as_bytes().to_vec();

    // Zeros to the right of the digit being decremented all become nines.
    let Some(position) = digits.iter().rposition(|d| *d != b'0') else {
        return String::new();
    };

    for digit in digits.iter_mut().skip(position + 1) {
        *digit = b'9';
    }

    if let Some(digit) = digits.get_mut(position) {
        *digit -= 1;
    }

    if position == 0 && digits.len() > 1 && digits.first() == Some(&b'0') {
        digits.remove(0);
    }

    digits.into_iter().map(char::from).collect()
}

pub(crate) fn is_canonical(digits: &str) -> bool {
    digits == "0" || !digits.starts_with('0')
}

/// A non-negative integer of unbounded size, held as its canonical decimal
/// string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Decimal(String);

impl Decimal {
    pub(crate) fn zero() -> Self {
        Decimal("0".into())
    }

    /// The caller is responsible for passing canonical digits.
    pub(crate) fn from_digits(digits: &str) -> Self {
        Decimal(digits.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_decimal(&self.0, &other.0)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
