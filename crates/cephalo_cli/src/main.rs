//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cephalo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("cephalo_core ping={}", cephalo_core::ping());
    println!("cephalo_core version={}", cephalo_core::core_version());
    println!(
        "cephalo_core landmarks={}",
        cephalo_core::LANDMARK_CATALOG.len()
    );
}
