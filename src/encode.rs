#[cfg(feature = "python-interface")]
use pyo3::{exceptions::PyValueError, pyfunction, PyResult};

use derive_more::{Constructor, Error};
use log::{debug, trace};
use std::fmt;
use std::io::Write;

use crate::symbols::{Token, UnknownTokenError};
use crate::{BitOps, Row, PAYLOAD_BITS, RESERVED_BITS};

/// Row type the literals are cast to.
pub const ROW_TYPE: &str = "static_cast<Puzzle::Row>";

/// Pattern and mask of a token sequence.
/// # Definition
/// Both fields hold the tokens right aligned, the first token in the highest
/// bits. `n_bits` counts the bits contributed by the tokens, the
/// [RESERVED_BITS] above them are always $0$.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowPattern {
    pub pattern: Row,
    pub mask: Row,
    pub n_bits: usize,
}

impl RowPattern {
    /// Appends a token at the low end of the row.
    pub fn push(&mut self, token: Token) -> Result<()> {
        let width = token.width();
        if self.n_bits + width > PAYLOAD_BITS {
            return Err(EncodeError::RowOverflow {
                n_bits: self.n_bits + width,
                limit: PAYLOAD_BITS,
            });
        }
        self.pattern = self.pattern.push_bits(token.pattern().into(), width);
        self.mask = self.mask.push_bits(token.mask().into(), width);
        self.n_bits += width;
        Ok(())
    }

    /// Width of the row with the reserved bits included.
    pub fn width(&self) -> usize {
        RESERVED_BITS + self.n_bits
    }

    /// Pattern as a bit string, reserved bits included.
    pub fn pattern_bits(&self) -> String {
        format!("{:0w$b}", self.pattern, w = self.width())
    }

    /// Mask as a bit string, reserved bits included.
    pub fn mask_bits(&self) -> String {
        format!("{:0w$b}", self.mask, w = self.width())
    }

    pub fn pattern_hex(&self) -> String {
        to_hex(self.pattern, self.width())
    }

    pub fn mask_hex(&self) -> String {
        to_hex(self.mask, self.width())
    }

    /// True if `row` holds the pattern wherever the mask is set.
    pub fn matches(&self, row: Row) -> bool {
        row.matches(self.pattern, self.mask)
    }

    pub fn to_literals(&self, row_type: &str) -> LiteralPair {
        LiteralPair::new(
            format_literal(self.pattern, row_type),
            format_literal(self.mask, row_type),
        )
    }
}

/// Pattern and mask literals, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct LiteralPair {
    pub pattern: String,
    pub mask: String,
}

impl fmt::Display for LiteralPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.pattern)?;
        write!(f, "{}", self.mask)
    }
}

/// Compile a whitespace separated token sequence.
/// # Errors
/// Fails on the first unknown token, or as soon as the tokens no longer fit
/// in [PAYLOAD_BITS]. Nothing is returned for a sequence that fails.
pub fn encode(sequence: &str) -> Result<RowPattern> {
    let mut row = RowPattern::default();
    for word in sequence.split_whitespace() {
        let token: Token = word.parse()?;
        row.push(token)?;
        trace!("Pushed `{}` ({} bits), {} bits accumulated.", token, token.width(), row.n_bits);
    }
    debug!(
        "Encoded `{}` on {} bits: pattern = {:#034x}, mask = {:#034x}",
        sequence, row.n_bits, row.pattern, row.mask
    );
    Ok(row)
}

/// Compile a token sequence straight to its pattern and mask literals.
pub fn encode_literals(sequence: &str) -> Result<LiteralPair> {
    Ok(encode(sequence)?.to_literals(ROW_TYPE))
}

/// Lowercase hexadecimal digits of `value`, left padded to
/// $\lceil n_{\text{bits}}/4\rceil$ digits. An empty width gives an empty
/// string.
pub fn to_hex(value: Row, n_bits: usize) -> String {
    if n_bits == 0 {
        return String::new();
    }
    format!("{:0w$x}", value, w = (n_bits + 3) / 4)
}

/// High and low halves of a row.
pub fn split_row(row: Row) -> (u64, u64) {
    ((row >> 64) as u64, row as u64)
}

/// Format a row as a C++ initializer list entry, as in
/// `static_cast<Puzzle::Row>(0x00000ffffc003f00ULL) << 64 | 0x0fc003f000fc003fULL,`
pub fn format_literal(row: Row, row_type: &str) -> String {
    let (high, low) = split_row(row);
    format!("{}(0x{:016x}ULL) << 64 | 0x{:016x}ULL,", row_type, high, low)
}

/// Write the pattern and mask literals of every sequence to `out`.
/// # Output
/// Two lines per sequence, the pattern then the mask, in the order of
/// `sequences`. All the sequences are encoded before anything is written, so
/// a failing sequence leaves `out` untouched.
pub fn emit_literals<W: Write>(out: &mut W, sequences: &[&str], row_type: &str) -> std::result::Result<(), EmitError> {
    let mut literals: Vec<LiteralPair> = Vec::with_capacity(sequences.len());
    for seq in sequences {
        literals.push(encode(seq)?.to_literals(row_type));
    }
    for pair in literals.iter() {
        writeln!(out, "{}", pair)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(feature = "python-interface")]
#[pyfunction]
pub fn encode_literals_py(sequence: &str) -> PyResult<(String, String)> {
    match encode_literals(sequence) {
        Ok(pair) => Ok((pair.pattern, pair.mask)),
        Err(e) => Err(PyValueError::new_err(e.to_string())),
    }
}

type Result<T> = std::result::Result<T, EncodeError>;

/// Failure to compile a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    UnknownToken(UnknownTokenError),
    /// The tokens need more than `limit` bits.
    RowOverflow { n_bits: usize, limit: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::UnknownToken(e) => write!(f, "{}", e),
            EncodeError::RowOverflow { n_bits, limit } => write!(
                f,
                "Token sequence needs {} bits, a row only has room for {}.",
                n_bits, limit
            ),
        }
    }
}

impl From<UnknownTokenError> for EncodeError {
    fn from(err: UnknownTokenError) -> Self {
        EncodeError::UnknownToken(err)
    }
}

/// Failure to write the literals out.
#[derive(Debug, Error)]
pub enum EmitError {
    Encode(EncodeError),
    Io(std::io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmitError::Encode(e) => write!(f, "{}", e),
            EmitError::Io(e) => write!(f, "Could not write the literals: {}", e),
        }
    }
}

impl From<EncodeError> for EmitError {
    fn from(err: EncodeError) -> Self {
        EmitError::Encode(err)
    }
}

impl From<std::io::Error> for EmitError {
    fn from(err: std::io::Error) -> Self {
        EmitError::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_edge() {
        let row = encode("e1a").unwrap();
        assert_eq!(row.n_bits, 6);
        assert_eq!(&row.pattern_bits()[RESERVED_BITS..], "000010");
        assert_eq!(&row.mask_bits()[RESERVED_BITS..], "111111");
        assert_eq!(row.pattern_bits(), "00000000000000000000000010");
        assert_eq!(row.pattern_hex(), "0000002");
        assert_eq!(row.mask_hex(), "000003f");
    }

    #[test]
    fn test_single_placeholder() {
        let row = encode("x").unwrap();
        assert_eq!(row.pattern, 0);
        assert_eq!(row.mask, 0);
        assert_eq!(row.n_bits, 6);
        assert_eq!(row.pattern_hex(), "0000000");
        assert_eq!(row.mask_hex(), "0000000");
    }

    #[test]
    fn test_empty_sequence() {
        let row = encode("   ").unwrap();
        assert_eq!(row, RowPattern::default());
        assert_eq!(row.pattern_hex(), "00000");
    }

    #[test]
    fn test_whitespace_is_any_run() {
        assert_eq!(encode("c1a\te1a\n  xx").unwrap(), encode("c1a e1a xx").unwrap());
    }

    #[test]
    fn test_unknown_token() {
        match encode("c1a z9a e1a") {
            Err(EncodeError::UnknownToken(e)) => assert_eq!(e.token, "z9a"),
            other => panic!("Expected an unknown token error, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow() {
        let nine = vec!["c1a"; 9].join(" ");
        assert_eq!(encode(&nine).unwrap().n_bits, PAYLOAD_BITS);
        let ten = vec!["c1a"; 10].join(" ");
        assert_eq!(
            encode(&ten),
            Err(EncodeError::RowOverflow { n_bits: 120, limit: PAYLOAD_BITS })
        );
        assert!(encode(&format!("{} x", nine)).is_err());
    }

    #[test]
    fn test_hex_length() {
        for n in 0..=128 {
            assert_eq!(to_hex(0, n).len(), (n + 3) / 4);
        }
        assert_eq!(to_hex(0x2f, 7), "2f");
    }

    #[test]
    fn test_hex_empty_width() {
        assert_eq!(to_hex(0, 0), "");
        assert_eq!(to_hex(0, 1), "0");
        assert_eq!(to_hex(0, 4), "0");
        assert_eq!(to_hex(0, 5), "00");
    }

    #[test]
    fn test_format_literal() {
        let row: Row = 0x0000005108000400_018000800028000c;
        assert_eq!(
            format_literal(row, ROW_TYPE),
            "static_cast<Puzzle::Row>(0x0000005108000400ULL) << 64 | 0x018000800028000cULL,"
        );
        assert_eq!(format_literal(2, "Row"), "Row(0x0000000000000000ULL) << 64 | 0x0000000000000002ULL,");
    }

    #[test]
    fn test_matches() {
        let row = encode("c1a xx e1a").unwrap();
        let hit: Row = 0b000001_010001_101010_111111_000010;
        let miss: Row = 0b000001_010001_101010_111111_000100;
        assert!(row.matches(hit));
        assert!(!row.matches(miss));
    }

    #[test]
    fn test_emit_is_all_or_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let res = emit_literals(&mut out, &["c1a e1a", "c1a oops"], ROW_TYPE);
        assert!(matches!(res, Err(EmitError::Encode(EncodeError::UnknownToken(_)))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_lines() {
        let mut out: Vec<u8> = Vec::new();
        emit_literals(&mut out, &["e1a", "x"], "Row").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "Row(0x0000000000000000ULL) << 64 | 0x0000000000000002ULL,",
            "Row(0x0000000000000000ULL) << 64 | 0x000000000000003fULL,",
            "Row(0x0000000000000000ULL) << 64 | 0x0000000000000000ULL,",
            "Row(0x0000000000000000ULL) << 64 | 0x0000000000000000ULL,",
        ]);
    }
}
