/// Icons from this size upwards get the second background balloon.
pub const BACKGROUND_BALLOON_MIN_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

pub const ICONS: [IconSpec; 3] = [
    IconSpec {
        size: 16,
        filename: "favicon-16x16.svg",
    },
    IconSpec {
        size: 32,
        filename: "favicon-32x32.svg",
    },
    IconSpec {
        size: 180,
        filename: "apple-touch-icon.svg",
    },
];

impl IconSpec {
    /// Name under which the icon is offered for download as a PNG.
    pub fn png_filename(&self) -> String {
        match self.filename.strip_suffix(".svg") {
            Some(stem) => format!("{}.png", stem),
            None => format!("{}.png", self.filename),
        }
    }

    pub fn svg(&self) -> String {
        balloon_svg(self.size)
    }
}

const LEFT_BALLOON: &str = r##"
    <!-- Background balloons (behind) - slightly smaller and pink -->
    <!-- Left background balloon -->
    <ellipse cx="10" cy="12" rx="5.5" ry="6.5" fill="#f5c2b8" stroke="#d4a48a" stroke-width="0.4"/>
    <ellipse cx="8.5" cy="9.5" rx="1.5" ry="2" fill="rgba(255,255,255,0.5)"/>
    <path d="M10 18.5 Q9 20.5 10 22 Q11 23.5 10 24.5" stroke="#d4a48a" stroke-width="0.8" fill="none" stroke-linecap="round"/>"##;

const RIGHT_BALLOON: &str = r##"
    <!-- Right background balloon -->
    <ellipse cx="22" cy="12" rx="5.5" ry="6.5" fill="#f5c2b8" stroke="#d4a48a" stroke-width="0.4"/>
    <ellipse cx="23.5" cy="9.5" rx="1.5" ry="2" fill="rgba(255,255,255,0.5)"/>
    <path d="M22 18.5 Q23 20.5 22 22 Q21 23.5 22 24.5" stroke="#d4a48a" stroke-width="0.8" fill="none" stroke-linecap="round"/>"##;

const MAIN_BALLOON: &str = r##"
    <!-- Main balloon (front) - purple -->
    <ellipse cx="16" cy="14" rx="7" ry="8.5" fill="#b084a6" stroke="#8b6a85" stroke-width="0.5"/>
    <ellipse cx="13.5" cy="11.5" rx="2" ry="2.5" fill="rgba(255,255,255,0.6)"/>
    <path d="M16 22.5 Q14 25 16 27 Q18 29 16 30" stroke="#8b6a85" stroke-width="1" fill="none" stroke-linecap="round"/>
</svg>"##;

/// Builds the balloon icon drawn on a 32x32 view box and scaled to `size`.
pub fn balloon_svg(size: u32) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 32 32">"#
    );
    svg.push_str(LEFT_BALLOON);
    if size >= BACKGROUND_BALLOON_MIN_SIZE {
        svg.push_str(RIGHT_BALLOON);
    }
    svg.push_str(MAIN_BALLOON);
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing_elements(svg: &str) -> usize {
        svg.matches("<ellipse ").count() + svg.matches("<path ").count()
    }

    #[test]
    fn should_set_width_and_height_to_icon_size() {
        for icon in &ICONS {
            let svg = icon.svg();
            assert!(svg.starts_with("<svg "));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains(&format!(r#"width="{}""#, icon.size)));
            assert!(svg.contains(&format!(r#"height="{}""#, icon.size)));
        }
    }

    #[test]
    fn should_add_background_balloon_from_threshold_size() {
        assert_eq!(drawing_elements(&balloon_svg(16)), 6);
        assert_eq!(drawing_elements(&balloon_svg(31)), 6);
        assert_eq!(drawing_elements(&balloon_svg(32)), 9);
        assert_eq!(drawing_elements(&balloon_svg(180)), 9);
        assert!(!balloon_svg(16).contains("Right background balloon"));
        assert!(balloon_svg(32).contains("Right background balloon"));
    }

    #[test]
    fn should_build_identical_svg_for_same_size() {
        assert_eq!(balloon_svg(180), balloon_svg(180));
    }

    #[test]
    fn should_keep_view_box_independent_of_size() {
        for icon in &ICONS {
            assert!(icon.svg().contains(r#"viewBox="0 0 32 32""#));
        }
    }

    #[test]
    fn should_derive_png_filename() {
        let names = ICONS.iter().map(|i| i.png_filename()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "favicon-16x16.png",
                "favicon-32x32.png",
                "apple-touch-icon.png"
            ]
        );
    }
}
