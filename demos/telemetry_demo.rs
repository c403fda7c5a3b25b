//! Simulated tag session against a handful of ranging anchors

use anchor_registry::{
    AnchorRegistry, DuplicatePolicy, RegistryConfig, TelemetryExporter,
};
use env_logger::Builder;
use log::LevelFilter;

fn main() {
    Builder::new().filter_level(LevelFilter::Debug).init();

    println!("=== UWB Anchor Registry - Telemetry Demo ===\n");

    let config = RegistryConfig::new()
        .with_max_anchors(8)
        .with_duplicate_policy(DuplicatePolicy::Reject);
    let mut registry = AnchorRegistry::with_config(config);
    let exporter = TelemetryExporter::new();

    // Discovery: three anchors answer the first solicitation
    for address in [0x001A, 0x002B, 0x003C] {
        if let Err(e) = registry.insert(address) {
            println!("discovery failed: {}", e);
        }
    }
    println!("1. Tracking {} anchors", registry.len());

    // Ranging rounds: each anchor reports a range and signal strength
    let rounds: [&[(u16, f32, f32)]; 3] = [
        &[(0x001A, 3.02, -71.5), (0x002B, 7.48, -78.0), (0x003C, 1.95, -64.2)],
        &[(0x001A, 3.05, -71.0), (0x002B, 7.61, -79.5), (0x003C, 1.88, -63.8)],
        &[(0x001A, 2.98, -70.5), (0x002B, 7.52, -78.8), (0x003C, 1.91, -64.0)],
    ];
    for round in rounds {
        for &(address, range_m, signal_dbm) in round {
            if registry.update(address, range_m, signal_dbm).is_err() {
                println!("update skipped for anchor {:04X}", address);
            }
        }
    }

    println!("\n2. Wire export:");
    println!("   {}", exporter.export_json(&registry, 415));

    println!("\n3. Typed rows:");
    let rows = exporter.snapshot(&registry, 415);
    match serde_json::to_string_pretty(&rows) {
        Ok(pretty) => println!("{}", pretty),
        Err(e) => println!("   serialization failed: {}", e),
    }

    // Failure paths: duplicate discovery and a lookup for an unknown anchor
    println!("\n4. Failure handling:");
    if let Err(e) = registry.insert(0x001A) {
        println!("   re-discovery refused: {}", e);
    }
    if let Err(e) = registry.find(0x9999) {
        println!("   lookup failed: {}", e);
    }

    // A stale anchor drops out of the report
    registry.remove(0x002B);
    println!("\n5. After dropping anchor 002B:");
    println!("   {}", exporter.export_json(&registry, 415));
}
