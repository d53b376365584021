/// Top face target: the corner C1 and the six edges in place, the other
/// corners ignored.
pub const TOP_TARGET: &str = "c1a e1a xx e2a xx e3a xx e4a xx e5a xx e6a";
/// Bottom face target: E1, C1, E5 and C5 ignored, the rest in place.
pub const BOTTOM_TARGET: &str = "e3b c3b e2b c2b x xx e6b c6b x xx e4b c4b";

/// Solved top face. Starts at C1 and runs clockwise.
pub const SOLVED_TOP: &str = "c1a e1a c2a e2a c3a e3a c4a e4a c5a e5a c6a e6a";
/// Solved bottom face. Starts at E3 and runs counterclockwise.
pub const SOLVED_BOTTOM: &str = "e3b c3b e2b c2b e1b c1b e6b c6b e5b c5b e4b c4b";

/// Sequences written out by the reference program, top first.
pub fn reference_sequences() -> [&'static str; 2] {
    [TOP_TARGET, BOTTOM_TARGET]
}

/// Solved rows, top first.
pub fn solved_sequences() -> [&'static str; 2] {
    [SOLVED_TOP, SOLVED_BOTTOM]
}
