//! Size negotiation with the host layout

/// Constraint the host places on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host dictates the size
    Exactly(f64),
    /// The host offers up to this much room
    AtMost(f64),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Resolve against the cloud's preferred extent.
    ///
    /// Only `Exactly` overrides; a bounded axis still reports the preferred
    /// extent, leaving any clipping to the host.
    pub fn resolve(self, preferred: f64) -> f64 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => preferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::Exactly(300.0).resolve(520.0), 300.0);
        assert_eq!(MeasureSpec::AtMost(300.0).resolve(520.0), 520.0);
        assert_eq!(MeasureSpec::AtMost(900.0).resolve(520.0), 520.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(520.0), 520.0);
    }
}
