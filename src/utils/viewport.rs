/// Layout width the storefront was designed against (standard iPhone width).
pub const DESIGN_WIDTH: f64 = 375.0;

pub const MIN_PAGE_SCALE: f64 = 0.5;
pub const MAX_PAGE_SCALE: f64 = 5.0;
pub const BASE_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_ios: bool,
    pub is_android: bool,
    pub is_wechat: bool,
}

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Classifies a user agent string by substring markers.
pub fn detect_device(user_agent: &str) -> DeviceProfile {
    let ua = user_agent.to_lowercase();

    DeviceProfile {
        is_mobile: MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)),
        is_ios: ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod"),
        is_android: ua.contains("android"),
        is_wechat: ua.contains("micromessenger"),
    }
}

/// Scale factor that maps the design width onto the device, clamped to
/// [0.5, 1.5], with a 0.8 floor for very narrow screens.
pub fn page_scale(screen_width: f64) -> f64 {
    let mut scale = screen_width / DESIGN_WIDTH;

    if scale < 0.5 {
        scale = 0.5;
    } else if scale > 1.5 {
        scale = 1.5;
    }

    if screen_width < 360.0 {
        scale = scale.max(0.8);
    }

    scale
}

/// Root font size in px for rem-based layouts at the given scale.
pub fn root_font_size(scale: f64) -> f64 {
    BASE_FONT_SIZE * scale
}

/// The viewport meta content applying `scale`, clamped to the allowed range.
pub fn viewport_meta_content(scale: f64) -> String {
    let clamped = scale.clamp(MIN_PAGE_SCALE, MAX_PAGE_SCALE);

    format!(
        "width=device-width, initial-scale={clamped}, maximum-scale={MAX_PAGE_SCALE}, \
         minimum-scale={MIN_PAGE_SCALE}, user-scalable=yes, viewport-fit=cover"
    )
}

/// Platform-specific default viewport content, matching what the storefront
/// injects on first load.
pub fn platform_viewport_content(user_agent: &str, screen_width: f64) -> String {
    let device = detect_device(user_agent);

    if device.is_ios {
        "width=device-width, initial-scale=1.0, maximum-scale=5.0, minimum-scale=0.5, \
         user-scalable=yes, viewport-fit=cover"
            .to_string()
    } else if device.is_android {
        let scale = if screen_width < 360.0 { 0.9 } else { 1.0 };
        format!(
            "width=device-width, initial-scale={scale}, maximum-scale=5.0, minimum-scale=0.5, \
             user-scalable=yes"
        )
    } else {
        "width=device-width, initial-scale=1.0, maximum-scale=5.0, minimum-scale=0.5, \
         user-scalable=yes"
            .to_string()
    }
}

/// Scale correction when rendered content overflows the screen. `None`
/// means the content already fits.
pub fn content_fit_scale(content_width: f64, screen_width: f64) -> Option<f64> {
    if content_width <= screen_width {
        return None;
    }

    Some((screen_width / content_width).clamp(0.5, 1.0))
}
