/// Number of pages needed for `total` items at `per_page` each.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

/// Clamps a requested page size to `1..=max`.
pub fn clamp_per_page(per_page: u64, max: u64) -> u64 {
    per_page.clamp(1, max)
}
