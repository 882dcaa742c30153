//! DoS prevention constants.
//!
//! These limits keep the renderer linear on malformed or adversarial
//! input. Hitting one degrades output (markers stay literal), it never
//! fails the render.

/// Maximum number of whole-line bold passes per delimiter style.
///
/// Bold resolution repeats until a pass changes nothing. Unbalanced runs
/// such as `****a**b**` can keep producing matches, so the loop is capped.
pub const MAX_EMPHASIS_PASSES: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_reasonable() {
        const { assert!(MAX_EMPHASIS_PASSES == 10) };
    }
}
