/// Swappable rule deriving the maturity score from compliance.
///
/// Maturity is intended to become a distinct metric; keeping the rule behind
/// a trait lets the policy change without touching the calculator interface.
pub trait MaturityModel: Send + Sync {
    fn derive(&self, compliance: f64) -> f64;
}

/// Current policy: maturity mirrors compliance unchanged.
pub struct ComplianceMirror;

impl MaturityModel for ComplianceMirror {
    fn derive(&self, compliance: f64) -> f64 {
        compliance
    }
}
