use std::{fmt::Display, path::PathBuf};

use getset::Getters;
use log::debug;
use typed_builder::TypedBuilder;

/// The config of a recorded video, as consumed by the site generator.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters)]
#[getset(get = "pub")]
pub struct VideoConfigRecord {
    title: String,
    /// ISO 8601, e.g. `2019-03-01T19:00:00+08:00`.
    datetime: String,
    vod: String,
    #[builder(default)]
    m3u8: Option<String>,
    tags: Vec<String>,
    #[builder(default)]
    thumbnail: String,
    playlists: Vec<String>,
    #[builder(setter(into))]
    file: PathBuf,
}

impl VideoConfigRecord {
    /// Writes the rendered config, replacing whatever is at the destination.
    pub fn write(&self) -> std::io::Result<()> {
        debug!("Writing {:?}", self.file);
        fs_err::write(&self.file, self.to_string())
    }
}

impl Display for VideoConfigRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "datetime: {}", self.datetime)?;
        writeln!(f, "vod: {}", self.vod)?;
        if let Some(m3u8) = self.m3u8.as_deref().filter(|x| !x.is_empty()) {
            writeln!(f, "m3u8: {m3u8}")?;
        }
        f.write_str("tags:\n")?;
        for tag in &self.tags {
            writeln!(f, "  - {tag}")?;
        }
        writeln!(f, "thumbnail: {}", self.thumbnail)?;
        f.write_str("playlists:\n")?;
        for playlist in &self.playlists {
            writeln!(f, "  - {playlist}")?;
        }
        Ok(())
    }
}
