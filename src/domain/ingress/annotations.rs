//! Well-known annotation keys read from Ingress metadata

use std::collections::BTreeMap;

/// "true" / "false" toggles dashboard visibility for one Ingress
pub const ENABLED: &str = "kavorites.koudijs.app/enabled";
/// Display title replacing the Ingress name on its card
pub const TITLE: &str = "kavorites.koudijs.app/title";
/// External image URL shown on the card
pub const IMAGE: &str = "kavorites.koudijs.app/image";
/// Inline base64 image, takes precedence over `IMAGE`
pub const IMAGE_BASE64: &str = "kavorites.koudijs.app/image-base64";

/// Visibility of an Ingress given its annotations and the configured default.
/// Anything other than a literal true/false falls back to the default.
pub fn is_enabled(annotations: &BTreeMap<String, String>, default_enabled: bool) -> bool {
    match annotations.get(ENABLED).map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "true" => true,
        Some(v) if v == "false" => false,
        _ => default_enabled,
    }
}

/// Card title override, if one is set
pub fn display_title(annotations: &BTreeMap<String, String>) -> Option<String> {
    annotations
        .get(TITLE)
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Image source for the card: inline base64 first, then the external URL.
/// Bare base64 payloads are wrapped into a data URL.
pub fn image_src(annotations: &BTreeMap<String, String>) -> Option<String> {
    let inline = annotations
        .get(IMAGE_BASE64)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| {
            if v.starts_with("data:") {
                v.to_string()
            } else {
                format!("data:image/png;base64,{}", v)
            }
        });

    inline.or_else(|| {
        annotations
            .get(IMAGE)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}
