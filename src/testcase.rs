//! Test-case record assembly.
//!
//! The record wraps two bracket-encoded trees generated from one shared
//! random stream: `t1` dense (density forced to 1.0), `t2` sparse (the
//! configured density). The `d` field is a placeholder for an expected
//! diff size that a downstream process may fill in; it is never computed
//! here.

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::generator::generate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub test_id: u32,
    pub t1: String,
    pub t2: String,
    pub d: i64,
}

impl TestCase {
    /// Build one test case from a seeded random stream.
    ///
    /// `t1` fully consumes its draws before `t2` begins; the two trees
    /// share one continuous random sequence in call order.
    pub fn build<R: Rng>(height: u32, density: f64, rng: &mut R) -> Self {
        let t1 = generate(height, 1.0, rng);
        let t2 = generate(height, density, rng);
        debug!("t1: {} bytes, t2: {} bytes", t1.len(), t2.len());
        TestCase {
            test_id: 1,
            t1,
            t2,
            d: 0,
        }
    }
}

/// Renders the single-record array consumed by the benchmark harness.
///
/// The tree text goes out verbatim: `{` and `}` are NOT escaped even
/// though the wrapper resembles JSON. The harness expects the raw bytes,
/// so the record must not be run through any encoder.
impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{{")?;
        writeln!(f, "\"testID\":{},", self.test_id)?;
        writeln!(f, "\"t1\":\"{}\",", self.t1)?;
        writeln!(f, "\"t2\":\"{}\",", self.t2)?;
        writeln!(f, "\"d\":{}}}]", self.d)
    }
}
