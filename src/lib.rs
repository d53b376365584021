#[cfg(feature = "python-interface")]
use pyo3::prelude::*;

/// Downstream representation of one face of the puzzle.
pub type Row = u128;

/// Number of bits in a [Row].
pub const ROW_BITS: usize = 128;
/// High order bits of a [Row] that never carry a slot. They are always $0$ in
/// both the pattern and the mask.
pub const RESERVED_BITS: usize = 20;
/// Bits left for the tokens once the reserved bits are set aside.
pub const PAYLOAD_BITS: usize = ROW_BITS - RESERVED_BITS;
/// Number of bits that a slot takes up.
pub const SLOT_SIZE: usize = 6;

// Have the BitOps trait at the root.
include!("bitops.rs");

/// Symbol table of the connector and edge tokens.
/// # Families
/// * __Connector__ `c{n}{v}` - $12$ bits, spans two slots. The first slot is
/// always odd, which is what tells it apart from an edge.
/// * __Edge__ `e{n}{v}` - $6$ bits, a single slot. Always even.
///
/// Variant `a` is the top face, variant `b` the bottom face. The face parity
/// is the leading bit of every slot.
/// # Placeholders
/// `x` and `xx` stand for $6$ and $12$ bits that the comparison ignores.
pub mod symbols;

/// Compile a token sequence into a pattern and a mask.
/// # Definition
/// Every token is pushed at the low end of a [Row] accumulator. A symbol
/// pushes its code in the pattern and a run of ones in the mask, a placeholder
/// pushes zeros in both. A row then matches when
///
/// $$
/// (\text{row}\ \\&\ \text{mask}) = (\text{pattern}\ \\&\ \text{mask})
/// $$
///
/// # Output
/// The literal is meant to be pasted in a C++ initializer list:
/// ```text
/// static_cast<Puzzle::Row>(0x0000005108000400ULL) << 64 | 0x018000800028000cULL,
/// ```
pub mod encode;

/// Turn a pattern and a mask back into a token sequence.
pub mod decode;

/// Token sequences used by the solver.
pub mod presets;

#[cfg(feature = "python-interface")]
#[pymodule]
fn rowmask(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use pyo3::wrap_pyfunction;

    m.add_function(wrap_pyfunction!(encode::encode_literals_py, m)?)?;
    m.add_function(wrap_pyfunction!(decode::describe_row_py, m)?)?;
    Ok(())
}
