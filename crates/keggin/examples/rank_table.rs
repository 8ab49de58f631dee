//! Print the ranked orbit table for a few zero counts.
//!
//! Run: cargo run -p keggin --example rank_table

use keggin::api::{format_distance, run, RunCfg};

fn main() {
    let cfg = RunCfg {
        min_zeros: 2,
        max_zeros: 3,
    };
    let out = match run(&cfg) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("run failed: {e}");
            std::process::exit(1);
        }
    };
    println!("group order {}", out.group_order);
    for report in &out.reports {
        println!("{} zeros: {} orbits", report.zero_count, report.rankings.len());
        for (ix, row) in report.rankings.iter().enumerate() {
            println!(
                "  {}. {} {} (orbit size {})",
                ix + 1,
                row.label,
                format_distance(row.value),
                row.orbit.size()
            );
        }
    }
}
