//! Command execution: parameter validation and record emission

use std::io::{self, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::testcase::TestCase;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // clap enforces --height unless a utility flag short-circuits in main
    let height = cli
        .height
        .ok_or_else(|| CliError::InvalidArgs("--height is required".to_string()))?;
    let height = validate_height(height)?;
    let density = validate_density(cli.density)?;
    emit_test_case(height, density, cli.seed)
}

/// Height is parsed as i64 so negative values reach the user-facing
/// message instead of a clap parse error.
fn validate_height(height: i64) -> CliResult<u32> {
    if height < 0 {
        return Err(CliError::InvalidArgs(
            "Height must be greater than 0".to_string(),
        ));
    }
    u32::try_from(height)
        .map_err(|_| CliError::InvalidArgs(format!("Height {} is out of range", height)))
}

fn validate_density(density: f64) -> CliResult<f64> {
    // The range check also rejects NaN.
    if !(0.0..=1.0).contains(&density) {
        return Err(CliError::InvalidArgs(
            "Density must be between 0.0 to 1.0".to_string(),
        ));
    }
    Ok(density)
}

#[instrument]
fn emit_test_case(height: u32, density: f64, seed: u64) -> CliResult<()> {
    debug!("height: {}, density: {}, seed: {}", height, density, seed);

    // One stream, seeded once: the dense tree consumes its draws before
    // the sparse tree begins.
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let case = TestCase::build(height, density, &mut rng);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", case)?;
    handle.flush()?;
    Ok(())
}
