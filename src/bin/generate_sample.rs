use anyhow::{Context, Result};

/// Next value in `[0, 1)` from a splitmix64 stream.
fn next_unit(state: &mut u64) -> f64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
}

/// Backtrack count for one solver run: grows roughly exponentially with the
/// grid size, spread log-uniformly within a factor of four either way.
fn backtracks(grid_size: u32, state: &mut u64) -> u64 {
    let base = 1.6f64.powi(grid_size as i32);
    let spread = (next_unit(state) * 2.0 - 1.0) * std::f64::consts::LN_2 * 2.0;
    (base * spread.exp()).round() as u64
}

fn main() -> Result<()> {
    let mut state = 42u64;

    let grid_sizes = [4u32, 5, 6, 7, 8, 9, 10, 12];
    let runs_per_size = 6;

    let output_path = "data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer
        .write_record(["Grid size", "Backtracks"])
        .context("writing header")?;

    let mut rows = 0;
    for &size in &grid_sizes {
        for _ in 0..runs_per_size {
            let count = backtracks(size, &mut state);
            writer
                .write_record([size.to_string(), count.to_string()])
                .context("writing row")?;
            rows += 1;
        }
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {rows} runs ({} grid sizes) to {output_path}",
        grid_sizes.len()
    );
    Ok(())
}
