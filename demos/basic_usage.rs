// ============================================================================
// Basic Usage Example
// ============================================================================

use safe_int_arith::prelude::*;
use std::cell::Cell;

/// Packs an RGB565 pixel, rejecting channels that don't fit their fields.
fn pack_rgb565(r: u8, g: u8, b: u8) -> ArithResult<u16> {
    let r = checked::ufit(r, 5)?;
    let g = checked::ufit(g, 6)?;
    let b = checked::ufit(b, 5)?;
    let packed = checked::add(checked::add(checked::shl(r, 11)?, checked::shl(g, 5)?)?, b)?;
    checked::conv::<u16, _>(packed)
}

fn main() {
    #[cfg(feature = "logging")]
    safe_int_arith::logging::init_logging(tracing::Level::TRACE);

    println!("=== Safe Integer Arithmetic Example ===\n");

    // Checked: failures are errors
    println!("Checked:");
    println!("  add(i32::MAX - 1, 1)  = {:?}", checked::add(i32::MAX - 1, 1i32));
    match checked::add(i32::MAX - 1, 2i32) {
        Ok(v) => println!("  add(i32::MAX - 1, 2)  = {}", v),
        Err(e) => println!("  add(i32::MAX - 1, 2)  failed: {}", e),
    }
    match checked::div(5i32, 0i32) {
        Ok(v) => println!("  div(5, 0)             = {}", v),
        Err(e) => println!("  div(5, 0)             failed: {}", e),
    }
    println!("  sub(0u32, 1i32)       = {:?}", checked::sub(0u32, 1i32));
    println!("  -1i32 + 1u32          = {:?}", checked::add(-1i32, 1u32));

    // Flagged: one flag for a whole batch
    println!("\nFlagged:");
    let failed = Cell::new(false);
    let values = [3i64, 1 << 40, -7, i64::MAX / 2];
    let total = values
        .iter()
        .fold(0i64, |acc, &v| flagged::add(acc, flagged::mul(v, 2i32, &failed), &failed));
    println!("  sum of doubled values = {} (failed: {})", total, failed.get());

    let mut code = 0i32;
    let q = flagged::div(i32::MIN, -1i32, &mut code);
    println!("  div(i32::MIN, -1)     = {} (code: {})", q, code);

    // Truncating and saturating never fail
    println!("\nTruncating / Saturating:");
    for (a, b) in [(i32::MAX - 1, 1i32), (i32::MAX - 1, 2), (i32::MIN, -1)] {
        println!(
            "  add({}, {}): truncating = {}, saturating = {}",
            a,
            b,
            truncating::add(a, b),
            saturating::add(a, b)
        );
    }
    println!(
        "  shl(0x7777777, 5):  truncating = {:#x}, saturating = {:#x}",
        truncating::shl(0x7777777i32, 5),
        saturating::shl(0x7777777i32, 5)
    );
    println!(
        "  conv::<u8>(300):    truncating = {}, saturating = {}",
        truncating::conv::<u8, _>(300i32),
        saturating::conv::<u8, _>(300i32)
    );

    // Field packing
    println!("\nField packing:");
    for (r, g, b) in [(31u8, 63u8, 31u8), (12, 40, 7), (32, 0, 0)] {
        match pack_rgb565(r, g, b) {
            Ok(px) => println!("  rgb565({}, {}, {}) = {:#06x}", r, g, b, px),
            Err(e) => println!("  rgb565({}, {}, {}) rejected: {}", r, g, b, e),
        }
    }

    // Policies by name
    println!("\nPolicies:");
    for name in ["cx", "flagged", "TR", "sr", "wrapping"] {
        match name.parse::<Policy>() {
            Ok(p) => println!("  {:<10} -> {} (total: {})", name, p, p.is_total()),
            Err(e) => println!("  {:<10} -> {}", name, e),
        }
    }
}
