pub mod cli;
pub mod exitcode;
pub mod generator;
pub mod testcase;
pub mod util;

pub use generator::generate;
pub use testcase::TestCase;
