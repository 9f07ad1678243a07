//! Sweep the interception probability and tabulate the induced QBER.
//!
//! Runs the protocol once per probability from 0.0 to 1.0, at 10000
//! qubits by default, and compares the measured error rate against the
//! p/4 prediction.
//!
//! Usage: `eve_sweep [num_qubits]`

use bb84_sim::prelude::*;

const DEFAULT_SWEEP_QUBITS: usize = 10000;

fn main() -> Result<()> {
    env_logger::init();

    let num_qubits = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_SWEEP_QUBITS);
    let mut rng = rand::thread_rng();

    log::info!("sweeping interception probability at {} qubits", num_qubits);
    println!("QBER vs interception probability, {} qubits per run", num_qubits);
    println!();
    println!(
        "{:>6} {:>13} {:>12} {:>13} {:>12}",
        "p", "intercepted", "sifted len", "QBER (%)", "p/4 (%)"
    );

    for step in 0..=10 {
        let p = step as f64 / 10.0;
        let config = ProtocolConfig {
            num_qubits,
            intercept_probability: p,
        };
        let comparison = run_protocol(&config, &mut rng)?;
        let intercepted = comparison
            .with_eve
            .interceptions
            .iter()
            .filter(|e| e.is_intercepted())
            .count();
        println!(
            "{:>6.1} {:>13} {:>12} {:>13.2} {:>12.2}",
            p,
            intercepted,
            comparison.with_eve.keys.len(),
            comparison.with_eve.qber,
            p * 25.0,
        );
    }

    Ok(())
}
