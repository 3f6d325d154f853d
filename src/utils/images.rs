#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Scales a source image down to fit inside `max_width` x `max_height`,
/// preserving aspect ratio. Images already inside the box are returned
/// unchanged; this never upscales.
pub fn fit_within(source: Dimensions, max_width: u32, max_height: u32) -> Dimensions {
    if source.width <= max_width && source.height <= max_height {
        return source;
    }

    let ratio = (max_width as f64 / source.width as f64)
        .min(max_height as f64 / source.height as f64);

    Dimensions {
        width: (source.width as f64 * ratio).round() as u32,
        height: (source.height as f64 * ratio).round() as u32,
    }
}

/// Human-readable byte count, base 1024, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{bytes} B");
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    format!("{trimmed} {}", UNITS[unit])
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveImage {
    pub src: String,
    pub srcset: String,
    pub sizes: String,
}

pub const DEFAULT_RESPONSIVE_WIDTHS: [u32; 3] = [400, 800, 1200];

/// Builds the `src`/`srcset`/`sizes` trio for a width-parameterized image
/// URL. An empty width list falls back to the default breakpoints.
pub fn responsive_image(base_url: &str, widths: &[u32]) -> ResponsiveImage {
    let widths = if widths.is_empty() {
        &DEFAULT_RESPONSIVE_WIDTHS[..]
    } else {
        widths
    };

    let srcset = widths
        .iter()
        .map(|w| format!("{base_url}?w={w} {w}w"))
        .collect::<Vec<_>>()
        .join(", ");

    ResponsiveImage {
        src: format!("{base_url}?w={}", widths[0]),
        srcset,
        sizes: "(max-width: 600px) 400px, (max-width: 1200px) 800px, 1200px".to_string(),
    }
}
