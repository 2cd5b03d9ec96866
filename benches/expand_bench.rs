//! Quick benchmark to verify pattern expansion performance

use retouch::expand;
use std::time::Instant;

fn main() {
    let patterns = vec![
        "report.txt",
        "log_{1...10}.txt",
        "shard_{0...999}/part_{0...999}.bin",
        "deep/nested/dir/file_{100...1100}.dat",
    ];

    println!("Pattern Expansion Performance Test");
    println!("==================================\n");

    for pattern in &patterns {
        let iterations = 1_000;
        let start = Instant::now();
        let mut produced = 0usize;

        for _ in 0..iterations {
            produced += expand(pattern).unwrap().count();
        }

        let elapsed = start.elapsed();
        let per_name = elapsed.as_nanos() as f64 / produced.max(1) as f64;

        println!("Pattern: {}", pattern);
        println!("  {} names in {:?} ({:.1} ns/name)\n", produced, elapsed, per_name);
    }
}
