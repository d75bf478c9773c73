pub const ICO_FILENAME: &str = "favicon.ico";

/// Written in place of a real ICO image; browsers fall back to the SVG favicon.
pub const ICO_PLACEHOLDER: &str =
    "# Favicon ICO placeholder - use favicon.svg or generate PNG files\n";
