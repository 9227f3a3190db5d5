/// Inline SVG placeholder swapped into an image whose source failed to load.
pub const FALLBACK_IMAGE_DATA_URL: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iODgiIGhlaWdodD0iODgiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyIgc3Ryb2tlPSIjMDAwIiBzdHJva2UtbGluZWpvaW49InJvdW5kIiBvcGFjaXR5PSIuMyIgZmlsbD0ibm9uZSIgc3Ryb2tlLXdpZHRoPSIzLjciPjxyZWN0IHg9IjE2IiB5PSIxNiIgd2lkdGg9IjU2IiBoZWlnaHQ9IjU2IiByeD0iNiIvPjxwYXRoIGQ9Im0xNiA1OCAxNi0xOCAzMiAzMiIvPjxjaXJjbGUgY3g9IjUzIiBjeT0iMzUiIHI9IjciLz48L3N2Zz4KCg==";

/// Cache-busting URL for a manual image retry. Attempt 0 is the original URL
/// unchanged; later attempts append `retry=N` with `?` or `&` depending on
/// whether the source already carries a query string.
pub fn retry_url(src: &str, attempt: u32) -> String {
    if attempt == 0 {
        return src.to_string();
    }
    let sep = if src.contains('?') { '&' } else { '?' };
    format!("{src}{sep}retry={attempt}")
}
