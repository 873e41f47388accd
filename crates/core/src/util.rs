//! Utility functions that can't be grouped into any other module.

/// Converts a length in bytes to a human-readable size.
///
/// Divides by 1024 until the value fits its unit, then prints two decimals. Exact byte counts
/// below 1 KB stay integral, so short headers read naturally.
///
/// # Warnings
/// This function uses f64, which will lose precision on very large lengths, but it still rounds
/// to a close-enough value.
#[must_use]
pub fn format_size(length: usize) -> String {
    const UNITS: [&str; 7] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

    if length < 1024 {
        return format!("{length} bytes");
    }

    let mut size = length as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{size:.2} {}", UNITS[unit_index])
}
