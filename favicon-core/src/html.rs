use crate::{data_uri::DataUri, icon::IconSpec, icon::ICONS, template::template};

pub const DOWNLOADS_PAGE_FILENAME: &str = "favicon-downloads.html";

const DOWNLOADS_PAGE: &str = include_str!("../resources/favicon-downloads.html");

#[derive(Debug, thiserror::Error)]
#[error("no data URI for icon '{0}'")]
pub struct MissingIcon(String);

/// Renders the download page. The page has a fixed slot for each of [`ICONS`],
/// keyed by the icon's PNG filename.
pub fn downloads_page(icons: &[(IconSpec, DataUri)]) -> Result<String, MissingIcon> {
    let mut context = Vec::with_capacity(ICONS.len());
    for expected in &ICONS {
        let data_uri = icons
            .iter()
            .find(|(icon, _)| icon == expected)
            .map(|(_, data_uri)| data_uri)
            .ok_or_else(|| MissingIcon(expected.png_filename()))?;
        context.push((expected.png_filename(), data_uri.to_string()));
    }
    Ok(template(DOWNLOADS_PAGE, &context))
}
