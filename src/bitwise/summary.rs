// Status-summary bitmask expansion
//
// Each summary byte is first reinterpreted by reading its decimal digits as
// hexadecimal (10 -> 0x10), as the device's reference decoder does. Bits are
// then scanned from the least significant up to the width of that value's
// binary representation, and bit `n` selects `labels[n]`.
//
// The second byte's scan runs inside the first byte's loop, so its labels
// are emitted once per scanned position of the first byte.

use super::bcd::{int_to_bcd_packed, Result};

/// Number of binary digits needed to print `value` ("0" counts as one)
fn binary_width(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        u64::BITS - value.leading_zeros()
    }
}

fn is_set(value: u64, bit: u32) -> bool {
    (value >> bit) & 1 == 1
}

fn push_label(result: &mut Vec<&'static str>, labels: &[&'static str], bit: u32) {
    match labels.get(bit as usize) {
        Some(&label) => result.push(label),
        None => tracing::debug!("Status summary bit {} has no label, skipping", bit),
    }
}

/// Expand the two status-summary bytes into their labels
pub fn expand_status_summary(
    a: u8,
    b: u8,
    labels: &[&'static str],
) -> Result<Vec<&'static str>> {
    let first = int_to_bcd_packed(a as u64)?;
    let second = int_to_bcd_packed(b as u64)?;
    let mut result = Vec::new();

    for i in 0..binary_width(first) {
        if is_set(first, i) {
            push_label(&mut result, labels, i);
        }

        for j in 0..binary_width(second) {
            if is_set(second, j) {
                push_label(&mut result, labels, j);
            }
        }
    }

    Ok(result)
}
