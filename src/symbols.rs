use derive_more::{Constructor, Error};
use std::fmt;
use std::str::FromStr;

use crate::BitOps;

/// Placeholder for a single ignored slot.
pub const PLACEHOLDER: &str = "x";
/// Placeholder for two ignored slots, the width of a connector.
pub const DOUBLE_PLACEHOLDER: &str = "xx";

/// Kind of piece a token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Connector,
    Edge,
}

impl Family {
    /// Number of bits of a code in this family.
    pub const fn width(self) -> usize {
        match self {
            Family::Connector => 12,
            Family::Edge => 6,
        }
    }
}

/// Face a token belongs to. `A` is the top face, `B` the bottom face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    A,
    B,
}

/// One entry of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub name: &'static str,
    pub family: Family,
    pub variant: Variant,
    /// Position on the face, from $1$ to $6$.
    pub position: u8,
    pub code: u16,
}

impl Symbol {
    pub const fn width(&self) -> usize {
        self.family.width()
    }

    /// Code written out as a bit string, left padded to [Symbol::width].
    pub fn bits(&self) -> String {
        format!("{:0w$b}", self.code, w = self.width())
    }
}

const fn connector(name: &'static str, variant: Variant, position: u8, code: u16) -> Symbol {
    Symbol { name, family: Family::Connector, variant, position, code }
}

const fn edge(name: &'static str, variant: Variant, position: u8, code: u16) -> Symbol {
    Symbol { name, family: Family::Edge, variant, position, code }
}

/// The symbol table. Connector codes are written slot by slot.
pub static SYMBOLS: [Symbol; 24] = [
    connector("c1a", Variant::A, 1, 0b000001_010001),
    connector("c2a", Variant::A, 2, 0b000011_010011),
    connector("c3a", Variant::A, 3, 0b000101_010101),
    connector("c4a", Variant::A, 4, 0b000111_010111),
    connector("c5a", Variant::A, 5, 0b001001_011001),
    connector("c6a", Variant::A, 6, 0b001011_011011),
    edge("e1a", Variant::A, 1, 0b000010),
    edge("e2a", Variant::A, 2, 0b000100),
    edge("e3a", Variant::A, 3, 0b000110),
    edge("e4a", Variant::A, 4, 0b001000),
    edge("e5a", Variant::A, 5, 0b001010),
    edge("e6a", Variant::A, 6, 0b001100),
    connector("c1b", Variant::B, 1, 0b100001_110001),
    connector("c2b", Variant::B, 2, 0b100011_110011),
    connector("c3b", Variant::B, 3, 0b100101_110101),
    connector("c4b", Variant::B, 4, 0b100111_110111),
    connector("c5b", Variant::B, 5, 0b101001_111001),
    connector("c6b", Variant::B, 6, 0b101011_111011),
    edge("e1b", Variant::B, 1, 0b100010),
    edge("e2b", Variant::B, 2, 0b100100),
    edge("e3b", Variant::B, 3, 0b100110),
    edge("e4b", Variant::B, 4, 0b101000),
    edge("e5b", Variant::B, 5, 0b101010),
    edge("e6b", Variant::B, 6, 0b101100),
];

/// Find a symbol by name.
pub fn lookup(token: &str) -> Result<&'static Symbol> {
    SYMBOLS
        .iter()
        .find(|s| s.name == token)
        .ok_or_else(|| UnknownTokenError::new(token.to_owned()))
}

/// Find the symbol of a family holding the given code. This is the inverse of
/// [lookup].
pub fn find(family: Family, code: u16) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|s| s.family == family && s.code == code)
}

/// Ignored bits of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `x`, the width of an edge.
    Single,
    /// `xx`, the width of a connector.
    Double,
}

impl Placeholder {
    pub const fn width(self) -> usize {
        match self {
            Placeholder::Single => Family::Edge.width(),
            Placeholder::Double => Family::Connector.width(),
        }
    }
}

/// A resolved token of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Symbol(&'static Symbol),
    Placeholder(Placeholder),
}

impl Token {
    pub fn width(&self) -> usize {
        match self {
            Token::Symbol(s) => s.width(),
            Token::Placeholder(p) => p.width(),
        }
    }

    /// Bits contributed to the pattern.
    pub fn pattern(&self) -> u16 {
        match self {
            Token::Symbol(s) => s.code,
            Token::Placeholder(_) => 0,
        }
    }

    /// Bits contributed to the mask. A run of ones as long as the code for a
    /// symbol, nothing for a placeholder.
    pub fn mask(&self) -> u16 {
        match self {
            Token::Symbol(s) => <u16>::low_ones(s.width()),
            Token::Placeholder(_) => 0,
        }
    }
}

impl FromStr for Token {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PLACEHOLDER => Ok(Token::Placeholder(Placeholder::Single)),
            DOUBLE_PLACEHOLDER => Ok(Token::Placeholder(Placeholder::Double)),
            _ => lookup(s).map(Token::Symbol),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Symbol(s) => write!(f, "{}", s.name),
            Token::Placeholder(Placeholder::Single) => write!(f, "{}", PLACEHOLDER),
            Token::Placeholder(Placeholder::Double) => write!(f, "{}", DOUBLE_PLACEHOLDER),
        }
    }
}

type Result<T> = std::result::Result<T, UnknownTokenError>;

/// Token that is neither in [SYMBOLS] nor a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error, Constructor)]
pub struct UnknownTokenError {
    pub token: String,
}

impl fmt::Display for UnknownTokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown token `{}`, expected c1a..c6b, e1a..e6b, `x` or `xx`.",
            self.token
        )
    }
}
