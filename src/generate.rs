use std::path::{Path, PathBuf};

use log::info;
use snh48live_utils::regex;
use typed_builder::TypedBuilder;

use crate::{
    listing::{find_latest_live_id, find_latest_perfnum, VodConfigEntry},
    platform::{canonical_vod_url, Platform},
    registry::{StageRegistry, TeamTagRegistry, STAGES, TEAM_TAGS},
    schema::{Perfnum, VideoId},
    thumbnail::{ThumbnailRequest, Thumbnailer},
    vod_config::VideoConfigRecord,
};

pub const BASE_TAG: &str = "SNH48";
pub const PLAYLIST_ALL: &str = "全部";
pub const PLAYLIST_PERFORMANCES: &str = "全部公演";
pub const PLAYLIST_SPECIAL_PERFORMANCES: &str = "特别公演";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid date {0}")]
    InvalidDate(String),
    #[error("invalid time {0}")]
    InvalidTime(String),
    #[error("unrecognized platform {0}")]
    UnrecognizedPlatform(String),
    #[error("historical address format since 27/02/2019 {0}")]
    DeprecatedPlatform(String),
    #[error("video ID not given and cannot be derived from previous configs")]
    MissingVideoId,
    #[error("invalid video ID {0}")]
    InvalidVideoId(String),
    #[error("name should not be empty")]
    EmptyStageName,
    #[error("stage {0} not recognized")]
    UnknownStage(String),
    #[error("performance # not given for {0}")]
    MissingPerformanceNumber(String),
    #[error("no tags registered for {0}")]
    UnregisteredTeamAliases(String),
}

/// Fields of a performance, either scraped from its page or entered by hand.
#[derive(Debug, TypedBuilder)]
pub struct ConfigRequest<'a> {
    /// `YYYYMMDD`
    date: &'a str,
    /// `HH:MM`
    time: &'a str,
    /// Host name, e.g. `live.48.cn`.
    platform: &'a str,
    #[builder(default)]
    video_id: Option<&'a str>,
    #[builder(default)]
    special: bool,
    /// Stage name, or the event label of a special performance.
    stage: &'a str,
    #[builder(default)]
    m3u8: Option<&'a str>,
    #[builder(default)]
    perfnum: Option<Perfnum>,
}

pub struct DerivedConfig {
    pub record: VideoConfigRecord,
    /// `None` for special performances, whose thumbnails are made by hand.
    pub thumbnail: Option<ThumbnailRequest>,
}

#[derive(TypedBuilder)]
pub struct ConfigGenerator<'a> {
    #[builder(default = STAGES)]
    stages: StageRegistry,
    #[builder(default = TEAM_TAGS)]
    team_tags: TeamTagRegistry,
    configs_dir: &'a Path,
    /// Previously written configs in chronological order.
    prior: &'a [VodConfigEntry],
}

impl ConfigGenerator<'_> {
    pub fn derive(&self, request: &ConfigRequest) -> Result<DerivedConfig, ConfigError> {
        let datetime = iso_datetime(request.date, request.time)?;
        let platform = Platform::from_host(request.platform)?;
        let vid = self.resolve_video_id(platform, request.video_id)?;
        let m3u8 = request.m3u8.map(ToOwned::to_owned);
        if request.special {
            self.derive_special(request, datetime, vid, m3u8)
        } else {
            self.derive_regular(request, datetime, platform, vid, m3u8)
        }
    }

    fn resolve_video_id(
        &self,
        platform: Platform,
        input: Option<&str>,
    ) -> Result<VideoId, ConfigError> {
        let vid = match input.map(str::trim).filter(|x| !x.is_empty()) {
            Some(input) => input.to_owned(),
            None if platform.is_canonical() => find_latest_live_id(self.prior)
                .ok_or(ConfigError::MissingVideoId)?
                .next()
                .to_string(),
            None => return Err(ConfigError::MissingVideoId),
        };
        vid.parse().map_err(|_| ConfigError::InvalidVideoId(vid))
    }

    fn derive_special(
        &self,
        request: &ConfigRequest,
        datetime: String,
        vid: VideoId,
        m3u8: Option<String>,
    ) -> Result<DerivedConfig, ConfigError> {
        let date = request.date;
        let label = request.stage.trim();
        if label.is_empty() {
            return Err(ConfigError::EmptyStageName);
        }

        let record = VideoConfigRecord::builder()
            .title(format!("{date} {label}"))
            .datetime(datetime)
            .vod(canonical_vod_url(vid))
            .m3u8(m3u8)
            .tags(vec![BASE_TAG.to_owned()])
            .thumbnail(String::new())
            .playlists(
                [PLAYLIST_ALL, PLAYLIST_PERFORMANCES, PLAYLIST_SPECIAL_PERFORMANCES]
                    .map(ToOwned::to_owned)
                    .to_vec(),
            )
            .file(self.configs_dir.join(format!("{date}-{vid}-{label}.yml")))
            .build();
        Ok(DerivedConfig {
            record,
            thumbnail: None,
        })
    }

    fn derive_regular(
        &self,
        request: &ConfigRequest,
        datetime: String,
        platform: Platform,
        vid: VideoId,
        m3u8: Option<String>,
    ) -> Result<DerivedConfig, ConfigError> {
        let date = request.date;
        let stage = request.stage.trim();
        let team = self.stages.find_team(stage)?;
        let perfnum = match request.perfnum {
            Some(perfnum) => perfnum,
            None => find_latest_perfnum(self.prior, stage)
                .map(Perfnum::next)
                .ok_or_else(|| ConfigError::MissingPerformanceNumber(stage.to_owned()))?,
        };

        let title = match team {
            Some(team) => format!("{date} {team} {stage} {perfnum}"),
            // Multi-team, e.g. 我们向前冲
            None => format!("{date} {stage} {perfnum}"),
        };

        let mut tags = vec![BASE_TAG.to_owned(), stage.to_owned()];
        if let Some(team) = team {
            tags.extend(self.team_tags.aliases(team)?.iter().map(|&x| x.to_owned()));
        }

        let mut playlists = vec![PLAYLIST_ALL.to_owned(), PLAYLIST_PERFORMANCES.to_owned()];
        match team {
            Some(team) => playlists.extend([team.to_string(), format!("{team} — {stage}")]),
            None => playlists.push(stage.to_owned()),
        }

        let pvid = platform.qualified_video_id(vid);
        let record = VideoConfigRecord::builder()
            .title(title)
            .datetime(datetime)
            .vod(platform.vod_url(vid))
            .m3u8(m3u8)
            .tags(tags)
            .thumbnail(format!("{date}-{stage}-{perfnum}.png"))
            .playlists(playlists)
            .file(self.configs_dir.join(format!("{date}-{pvid}-{stage}-{perfnum}.yml")))
            .build();
        Ok(DerivedConfig {
            record,
            thumbnail: Some(ThumbnailRequest::new(
                stage.to_owned(),
                date.to_owned(),
                perfnum,
            )),
        })
    }
}

/// `YYYYMMDD` and `HH:MM` to ISO 8601 in China Standard Time.
pub fn iso_datetime(date: &str, time: &str) -> Result<String, ConfigError> {
    if !regex!(r"^[0-9]{8}$").is_match(date) {
        return Err(ConfigError::InvalidDate(date.to_owned()));
    }
    if !regex!(r"^[0-9]{2}:[0-9]{2}$").is_match(time) {
        return Err(ConfigError::InvalidTime(time.to_owned()));
    }
    Ok(format!(
        "{}-{}-{}T{time}:00+08:00",
        &date[..4],
        &date[4..6],
        &date[6..]
    ))
}

/// Derives the config, writes it (overwriting any existing file) and has the thumbnail generated.
/// Nothing is written if any field fails validation.
pub fn generate_config_file(
    generator: &ConfigGenerator,
    request: &ConfigRequest,
    thumbnailer: &impl Thumbnailer,
) -> anyhow::Result<PathBuf> {
    let DerivedConfig { record, thumbnail } = generator.derive(request)?;

    hr();
    println!("{}", record.file().display());
    record.write()?;

    hr();
    match thumbnail {
        Some(thumbnail) => {
            info!("Generating thumbnail...");
            thumbnailer.generate(&thumbnail);
        }
        None => info!("Please remember to generate the thumbnail."),
    }

    Ok(record.file().clone())
}

fn hr() {
    eprintln!("{}", "-".repeat(80));
}
