use std::path::PathBuf;

use anyhow::{Context, Result};

const FIRST_YEAR: u32 = 2014;
const LAST_YEAR: u32 = 2025;

/// (department, 2014 budget in crores, yearly growth rate)
const DEPARTMENTS: [(&str, f64, f64); 8] = [
    ("Health", 4200.0, 0.08),
    ("Education", 6100.0, 0.06),
    ("Public Works", 3500.0, 0.05),
    ("Agriculture", 2800.0, 0.04),
    ("Home Affairs", 5200.0, 0.07),
    ("Transport", 1900.0, 0.09),
    ("Water Resources", 1250.0, 0.03),
    ("Social Welfare", 2300.0, 0.10),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [-1, 1).
    fn next_signed(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Budget for every year: compound growth with up to ±6% noise per year.
fn budget_path(base: f64, growth: f64, rng: &mut SimpleRng) -> Vec<f64> {
    let mut value = base;
    (FIRST_YEAR..=LAST_YEAR)
        .map(|_| {
            let noisy = value * (1.0 + 0.06 * rng.next_signed());
            value *= 1.0 + growth;
            (noisy * 100.0).round() / 100.0
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_budget.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let header = std::iter::once("Department".to_string())
        .chain((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    writer.write_record(header).context("writing header")?;

    for (department, base, growth) in DEPARTMENTS {
        let values = budget_path(base, growth, &mut rng);
        let record = std::iter::once(department.to_string())
            .chain(values.iter().map(|v| format!("{v:.2}")));
        writer
            .write_record(record)
            .with_context(|| format!("writing {department}"))?;
        log::debug!("{department}: {} years", values.len());
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} departments ({FIRST_YEAR}–{LAST_YEAR}) to {}",
        DEPARTMENTS.len(),
        output_path.display()
    );
    Ok(())
}
