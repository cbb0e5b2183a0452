//! Collect one snapshot of the running host and print the report
//!
//! Also shows how many volumes `sysinfo` reports before the fixed-disk
//! filter is applied. Takes about one second for CPU sampling.
//!
//! Run with `cargo run -p hostprobe-system --example snapshot`.

use hostprobe_system::{self as sys, Collector};

fn main() -> sys::SystemResult<()> {
    let snapshot = Collector::system().collect()?;

    println!("=== Hostprobe: Snapshot ===");
    print!("{}", sys::render(&snapshot));

    println!(
        "\nVolumes seen: {} (fixed: {})",
        sys::disk::list().len(),
        snapshot.number_of_hard_disks
    );

    Ok(())
}
