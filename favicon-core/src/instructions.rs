use crate::{html::DOWNLOADS_PAGE_FILENAME, ico::ICO_FILENAME, icon::IconSpec};
use std::fmt::Write;

pub const INSTRUCTIONS_FILENAME: &str = "FAVICON_INSTRUCTIONS.md";

/// Markdown notes on turning the generated SVGs into PNG files.
pub fn instructions(icons: &[IconSpec]) -> String {
    let mut out = String::from("# Favicon Files Generated\n\nThe following files have been created:\n");
    for icon in icons {
        let _ = writeln!(out, "- {}", icon.filename);
    }
    let _ = writeln!(out, "- {} (placeholder)", ICO_FILENAME);
    let _ = writeln!(out, "- {}", DOWNLOADS_PAGE_FILENAME);

    out.push_str(
        "
## Converting SVG to PNG

To convert these SVG files to PNG format, you can:

1. **Using the download page (recommended):**
",
    );
    let _ = writeln!(out, "   - Open {} in your browser", DOWNLOADS_PAGE_FILENAME);
    out.push_str(
        "   - Right-click each image and save it under the name shown

2. **Using online tools:**
   - Visit https://cloudconvert.com/svg-to-png
   - Upload each SVG file and convert to PNG
   - Download with the correct naming

3. **Using other tools:**
   - GIMP, Photoshop, or any image editor
   - Open SVG files and export as PNG

## File naming:
",
    );
    for icon in icons {
        let _ = writeln!(out, "- {} → {}", icon.filename, icon.png_filename());
    }
    out
}
