use crate::{
    data_uri::DataUri,
    html::{self, MissingIcon, DOWNLOADS_PAGE_FILENAME},
    ico::{ICO_FILENAME, ICO_PLACEHOLDER},
    icon::{IconSpec, ICONS},
    instructions::{instructions, INSTRUCTIONS_FILENAME},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    MissingIcon(#[from] MissingIcon),
}

/// The files written by a [`Generator`] run, in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

impl Generated {
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|file| self.output_dir.join(file))
    }
}

#[derive(Debug)]
pub struct Generator {
    output_dir: PathBuf,
    icons: Vec<IconSpec>,
}

impl Generator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Generator {
            output_dir: output_dir.into(),
            icons: ICONS.to_vec(),
        }
    }

    /// Writes every favicon asset, invoking `on_written` with each file name as
    /// soon as that file is on disk.
    pub fn run_with(
        &self,
        mut on_written: impl FnMut(&str),
    ) -> Result<Generated, GenerateError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            GenerateError::CreateDir {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let mut generated = Generated {
            output_dir: self.output_dir.clone(),
            files: Vec::new(),
        };
        let mut write = |filename: &str, contents: &str| -> Result<(), GenerateError> {
            let path = self.output_dir.join(filename);
            std::fs::write(&path, contents)
                .map_err(|source| GenerateError::Write { path, source })?;
            tracing::debug!(file = filename, bytes = contents.len(), "wrote favicon asset");
            generated.files.push(filename.to_owned());
            on_written(filename);
            Ok(())
        };

        let mut data_uris = Vec::with_capacity(self.icons.len());
        for icon in &self.icons {
            let svg = icon.svg();
            write(icon.filename, &svg)?;
            data_uris.push((*icon, DataUri::for_svg(&svg)));
        }

        write(DOWNLOADS_PAGE_FILENAME, &html::downloads_page(&data_uris)?)?;
        write(ICO_FILENAME, ICO_PLACEHOLDER)?;
        write(INSTRUCTIONS_FILENAME, &instructions(&self.icons))?;

        tracing::info!(
            output_dir = %self.output_dir.display(),
            files = generated.files.len(),
            "generated favicons"
        );
        Ok(generated)
    }

    pub fn run(&self) -> Result<Generated, GenerateError> {
        self.run_with(|_| {})
    }
}
