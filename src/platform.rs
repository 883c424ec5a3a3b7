use std::fmt::Display;

use clap::ValueEnum;
use snh48live_utils::regex;
use strum::{EnumString, IntoStaticStr};

use crate::{generate::ConfigError, schema::VideoId};

pub const AGGREGATOR_HOST: &str = "live.48.cn";
/// Address format of the Chongqing site that has been historical since 27/02/2019.
pub const LEGACY_CKG_HOST: &str = "zhibo.ckg48.com";

/// Three-letter abbreviation of a group, used to qualify video ids in file names.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumString, IntoStaticStr, strum::Display, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Group {
    Snh,
    Bej,
    Gnz,
    Shy,
    Ckg,
}

/// A host that performance recordings can be sourced from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    /// `live.48.cn`, which aggregates the performances of all groups.
    Aggregator,
    /// `live.{group}48.com`
    Mirror(Group),
}

impl Platform {
    pub fn from_host(host: &str) -> Result<Self, ConfigError> {
        if host == AGGREGATOR_HOST {
            return Ok(Self::Aggregator);
        }
        if host == LEGACY_CKG_HOST {
            return Err(ConfigError::DeprecatedPlatform(host.to_owned()));
        }
        let group = regex!(r"^live\.([a-z]{3})48\.com$")
            .captures(host)
            .and_then(|captures| captures[1].parse::<Group>().ok());
        match group {
            // `live.snh48.com` never served recordings; SNH48 lives on the aggregator.
            None | Some(Group::Snh) => Err(ConfigError::UnrecognizedPlatform(host.to_owned())),
            Some(group) => Ok(Self::Mirror(group)),
        }
    }

    pub fn from_group(group: Group) -> Self {
        match group {
            Group::Snh => Self::Aggregator,
            group => Self::Mirror(group),
        }
    }

    pub fn group(self) -> Group {
        match self {
            Self::Aggregator => Group::Snh,
            Self::Mirror(group) => group,
        }
    }

    pub fn is_canonical(self) -> bool {
        self.group() == Group::Snh
    }

    pub fn host(self) -> String {
        match self {
            Self::Aggregator => AGGREGATOR_HOST.to_owned(),
            Self::Mirror(group) => format!("live.{group}48.com"),
        }
    }

    /// The video id as it appears in config file names.
    /// Recordings sourced from a mirror carry the group abbreviation,
    /// so that the same performance from different mirrors does not collide.
    pub fn qualified_video_id(self, vid: VideoId) -> String {
        if self.is_canonical() {
            vid.to_string()
        } else {
            format!("{}{vid}", self.group())
        }
    }

    pub fn performance_page_url(self, vid: VideoId) -> String {
        format!("http://{}/Index/invedio/id/{vid}", self.host())
    }

    pub fn vod_url(self, vid: VideoId) -> String {
        format!("http://{}/Index/invedio/club/1/id/{vid}", self.host())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.host())
    }
}

pub fn canonical_vod_url(vid: VideoId) -> String {
    format!("https://{AGGREGATOR_HOST}/Index/invedio/club/1/id/{vid}")
}

#[cfg(test)]
mod tests {
    use super::{Group, Platform};
    use crate::{generate::ConfigError, schema::VideoId};

    #[test]
    fn test_from_host() {
        assert_eq!(Platform::from_host("live.48.cn").unwrap(), Platform::Aggregator);
        for (host, group) in [
            ("live.bej48.com", Group::Bej),
            ("live.gnz48.com", Group::Gnz),
            ("live.shy48.com", Group::Shy),
            ("live.ckg48.com", Group::Ckg),
        ] {
            assert_eq!(Platform::from_host(host).unwrap(), Platform::Mirror(group));
        }
    }

    #[test]
    fn test_deprecated_host() {
        assert!(matches!(
            Platform::from_host("zhibo.ckg48.com"),
            Err(ConfigError::DeprecatedPlatform(host)) if host == "zhibo.ckg48.com"
        ));
    }

    #[test]
    fn test_unrecognized_host() {
        for host in ["live.snh48.com", "live.akb48.com", "example.com", "", "live.48.cn.evil"] {
            assert!(
                matches!(
                    Platform::from_host(host),
                    Err(ConfigError::UnrecognizedPlatform(_))
                ),
                "{host}"
            );
        }
    }

    #[test]
    fn test_host_round_trip() {
        for group in [Group::Snh, Group::Bej, Group::Gnz, Group::Shy, Group::Ckg] {
            let platform = Platform::from_group(group);
            assert_eq!(Platform::from_host(&platform.host()).unwrap(), platform);
            assert_eq!(platform.group(), group);
        }
    }

    #[test]
    fn test_qualified_video_id() {
        let vid = VideoId::from(321);
        assert_eq!(Platform::Aggregator.qualified_video_id(vid), "321");
        assert_eq!(Platform::Mirror(Group::Gnz).qualified_video_id(vid), "gnz321");
        assert_eq!(Platform::Mirror(Group::Bej).qualified_video_id(vid), "bej321");
    }

    #[test]
    fn test_urls() {
        let vid = VideoId::from(77);
        assert_eq!(
            Platform::Mirror(Group::Shy).performance_page_url(vid),
            "http://live.shy48.com/Index/invedio/id/77"
        );
        assert_eq!(
            Platform::Mirror(Group::Shy).vod_url(vid),
            "http://live.shy48.com/Index/invedio/club/1/id/77"
        );
        assert_eq!(
            super::canonical_vod_url(vid),
            "https://live.48.cn/Index/invedio/club/1/id/77"
        );
    }
}
