use std::path::{Path, PathBuf};

use anyhow::Context;
use getset::{CopyGetters, Getters};
use log::{debug, info};
use snh48live_utils::regex;

use crate::{
    platform::Group,
    schema::{Perfnum, VideoId},
};

/// Subdirectory of the video configs directory holding configs of past seasons.
pub const PAST_SUBDIR: &str = "past";

/// Attributes of a config file, recovered from its file name
/// `{date}-{pvid}-{stage}[-{perfnum}].yml`.
#[derive(Clone, PartialEq, Eq, Debug, Getters, CopyGetters)]
pub struct VodAttrs {
    #[getset(get = "pub")]
    date: String,
    #[getset(get_copy = "pub")]
    group: Group,
    #[getset(get_copy = "pub")]
    video_id: VideoId,
    #[getset(get = "pub")]
    stage: String,
    #[getset(get_copy = "pub")]
    perfnum: Option<Perfnum>,
}

impl VodAttrs {
    /// Id on the aggregator.  Recordings sourced from a mirror have ids in another
    /// numbering, so they report zero.
    pub fn live_id(&self) -> VideoId {
        if self.group == Group::Snh {
            self.video_id
        } else {
            VideoId::from(0)
        }
    }

    pub fn parse_file_name(name: &str) -> Option<Self> {
        let captures = regex!(
            r"^(?P<date>[0-9]{8})-(?P<group>[a-z]{3})?(?P<vid>[0-9]+)-(?P<stage>.+?)(?:-(?P<perfnum>[0-9]{2,}))?\.yml$"
        )
        .captures(name)?;
        let group = match captures.name("group") {
            Some(group) => group.as_str().parse().ok()?,
            None => Group::Snh,
        };
        let perfnum = match captures.name("perfnum") {
            Some(perfnum) => Some(perfnum.as_str().parse().ok()?),
            None => None,
        };
        Some(Self {
            date: captures["date"].to_owned(),
            group,
            video_id: captures["vid"].parse().ok()?,
            stage: captures["stage"].to_owned(),
            perfnum,
        })
    }
}

#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct VodConfigEntry {
    file: PathBuf,
    attrs: VodAttrs,
}

impl VodConfigEntry {
    pub fn new(file: PathBuf, attrs: VodAttrs) -> Self {
        Self { file, attrs }
    }
}

/// Lists the config files in `dir` in chronological order.
/// A missing directory is treated as empty.
pub fn list_vod_configs(dir: &Path, include_past: bool) -> anyhow::Result<Vec<VodConfigEntry>> {
    let mut dirs = vec![dir.to_owned()];
    if include_past {
        dirs.push(dir.join(PAST_SUBDIR));
    }

    let mut entries = vec![];
    for dir in dirs {
        let read_dir = match fs_err::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{dir:?} does not exist; skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for entry in read_dir {
            let entry = entry.with_context(|| format!("While listing {dir:?}"))?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(attrs) = file_name.to_str().and_then(VodAttrs::parse_file_name) else {
                debug!("Skipping {:?}", entry.path());
                continue;
            };
            entries.push(VodConfigEntry::new(entry.path(), attrs));
        }
    }
    // File names start with the date, so this is the chronological order
    // across the current and past directories.
    entries.sort_by(|x, y| x.file.file_name().cmp(&y.file.file_name()));
    Ok(entries)
}

pub fn find_latest_live_id(entries: &[VodConfigEntry]) -> Option<VideoId> {
    entries.iter().rev().find_map(|entry| {
        let live_id = entry.attrs.live_id();
        (!live_id.is_zero()).then(|| {
            info!("latest live_id from {:?}", entry.file);
            live_id
        })
    })
}

pub fn find_latest_perfnum(entries: &[VodConfigEntry], stage: &str) -> Option<Perfnum> {
    entries.iter().rev().find_map(|entry| {
        if entry.attrs.stage != stage {
            return None;
        }
        let perfnum = entry.attrs.perfnum?;
        info!("latest perf # from {:?}", entry.file);
        Some(perfnum)
    })
}
