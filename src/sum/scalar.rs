use super::SanitizeValue;

/// Reference 8-bit sum: every element in index order, skipping the sentinel.
pub fn sum8(values: &[i8], sanitize: SanitizeValue) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sentinel = sanitize.get();
    let mut total = 0i64;
    for &v in values {
        if v != sentinel {
            total += v as i64;
        }
    }
    total
}

/// Reference 32-bit sum.
pub fn sum32(values: &[i32]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let mut total = 0i64;
    for &v in values {
        total += v as i64;
    }
    total
}

#[cfg(test)]
#[path = "../../tests/src_inline/sum/scalar.rs"]
mod tests;
