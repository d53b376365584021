#[cfg(feature = "python-interface")]
use pyo3::{exceptions::PyValueError, pyfunction, PyResult};

use derive_more::Error;
use log::trace;
use std::fmt;

use crate::encode::RowPattern;
use crate::symbols::{find, Family, Placeholder, Token};
use crate::{BitOps, Row, PAYLOAD_BITS, SLOT_SIZE};

/// Recover the tokens of a pattern.
/// # Definition
/// Slots are read from the highest one. A slot with an empty mask is a
/// placeholder `x`, so `xx` comes back as `x x`, which encodes to the same
/// row. A fully masked slot is an edge if its code is even, otherwise it is
/// the first half of a connector and the next slot is read with it.
pub fn decode(row: &RowPattern) -> Result<Vec<Token>> {
    if row.n_bits % SLOT_SIZE != 0 {
        return Err(DecodeError::Misaligned { n_bits: row.n_bits });
    }
    let n_slots = row.n_bits / SLOT_SIZE;
    let mut tokens: Vec<Token> = Vec::with_capacity(n_slots);
    let mut i = 0;
    while i < n_slots {
        let offset = row.n_bits - (i + 1) * SLOT_SIZE;
        let mask = row.mask.field(offset, SLOT_SIZE);
        if mask == 0 {
            tokens.push(Token::Placeholder(Placeholder::Single));
            i += 1;
            continue;
        }
        if mask != <Row>::low_ones(SLOT_SIZE) {
            return Err(DecodeError::PartialMask { slot: i });
        }
        let code = row.pattern.field(offset, SLOT_SIZE) as u16;
        if let Some(edge) = find(Family::Edge, code) {
            tokens.push(Token::Symbol(edge));
            i += 1;
            continue;
        }

        let width = Family::Connector.width();
        if i + 1 >= n_slots {
            return Err(DecodeError::UnknownCode { slot: i, code });
        }
        let offset = offset - SLOT_SIZE;
        if row.mask.field(offset, width) != <Row>::low_ones(width) {
            return Err(DecodeError::PartialMask { slot: i + 1 });
        }
        let code = row.pattern.field(offset, width) as u16;
        match find(Family::Connector, code) {
            Some(connector) => tokens.push(Token::Symbol(connector)),
            None => return Err(DecodeError::UnknownCode { slot: i, code }),
        }
        i += 2;
    }
    trace!("Decoded {} tokens from {} slots.", tokens.len(), n_slots);
    Ok(tokens)
}

/// Token sequence of a full row, every payload bit being constrained.
pub fn describe_row(row: Row) -> Result<String> {
    if row >> PAYLOAD_BITS != 0 {
        return Err(DecodeError::ReservedBits);
    }
    let full = RowPattern {
        pattern: row,
        mask: <Row>::low_ones(PAYLOAD_BITS),
        n_bits: PAYLOAD_BITS,
    };
    Ok(join(&decode(&full)?))
}

/// Space separated sequence, as accepted by [crate::encode::encode].
pub fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Raw values of the slots of the `n_bits` low bits of `row`, highest slot
/// first.
pub fn slots(row: Row, n_bits: usize) -> Vec<u8> {
    (0..n_bits / SLOT_SIZE)
        .map(|i| row.field(n_bits - (i + 1) * SLOT_SIZE, SLOT_SIZE) as u8)
        .collect()
}

#[cfg(feature = "python-interface")]
#[pyfunction]
pub fn describe_row_py(high: u64, low: u64) -> PyResult<String> {
    let row = (high as Row) << 64 | low as Row;
    describe_row(row).map_err(|e| PyValueError::new_err(e.to_string()))
}

type Result<T> = std::result::Result<T, DecodeError>;

/// Pattern that does not come from a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not a whole number of slots.
    Misaligned { n_bits: usize },
    /// Slot only partly covered by the mask.
    PartialMask { slot: usize },
    /// Masked code that is in no family.
    UnknownCode { slot: usize, code: u16 },
    /// Bits set above the payload.
    ReservedBits,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Misaligned { n_bits } => {
                write!(f, "{} bits is not a whole number of {} bit slots.", n_bits, SLOT_SIZE)
            }
            DecodeError::PartialMask { slot } => {
                write!(f, "Mask only partly covers slot {}.", slot)
            }
            DecodeError::UnknownCode { slot, code } => {
                write!(f, "Code {:06b} at slot {} is not a known piece.", code, slot)
            }
            DecodeError::ReservedBits => write!(f, "Row has bits set in its reserved part."),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_decode_mixed() {
        let row = encode("c1a e1a xx e2a x c6b").unwrap();
        assert_eq!(join(&decode(&row).unwrap()), "c1a e1a x x e2a x c6b");
    }

    #[test]
    fn test_join_keeps_placeholder_width() {
        let tokens = [
            Token::Placeholder(Placeholder::Double),
            Token::Placeholder(Placeholder::Single),
        ];
        let text = join(&tokens);
        assert_eq!(text, "xx x");
        let width: usize = tokens.iter().map(|t| t.width()).sum();
        assert_eq!(encode(&text).unwrap().n_bits, width);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(&RowPattern::default()).unwrap().is_empty());
    }

    #[test]
    fn test_misaligned() {
        let row = RowPattern { pattern: 0, mask: 0, n_bits: 7 };
        assert_eq!(decode(&row), Err(DecodeError::Misaligned { n_bits: 7 }));
    }

    #[test]
    fn test_partial_mask() {
        let row = RowPattern { pattern: 0b000010, mask: 0b000111, n_bits: 6 };
        assert_eq!(decode(&row), Err(DecodeError::PartialMask { slot: 0 }));
        // Connector whose second half is not masked.
        let row = RowPattern { pattern: 0b000001_010001, mask: 0b111111_000000, n_bits: 12 };
        assert_eq!(decode(&row), Err(DecodeError::PartialMask { slot: 1 }));
    }

    #[test]
    fn test_unknown_code() {
        // Odd first slot at the end of the row.
        let row = RowPattern { pattern: 0b000001, mask: 0b111111, n_bits: 6 };
        assert_eq!(decode(&row), Err(DecodeError::UnknownCode { slot: 0, code: 1 }));
        let row = RowPattern { pattern: 0b000001_000001, mask: 0xfff, n_bits: 12 };
        assert_eq!(
            decode(&row),
            Err(DecodeError::UnknownCode { slot: 0, code: 0b000001_000001 })
        );
    }

    #[test]
    fn test_reserved_bits() {
        assert_eq!(describe_row(1 << PAYLOAD_BITS), Err(DecodeError::ReservedBits));
    }

    #[test]
    fn test_slots() {
        let row = encode("c1a e1a").unwrap();
        assert_eq!(slots(row.pattern, row.n_bits), vec![0b000001, 0b010001, 0b000010]);
        assert_eq!(slots(row.mask, row.n_bits), vec![0x3f, 0x3f, 0x3f]);
    }
}
