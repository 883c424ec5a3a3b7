use derive_more::Display;
use log::debug;

use crate::generate::ConfigError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub struct Team(&'static str);
impl Team {
    pub const S2: Self = Self("Team SⅡ");
    pub const N2: Self = Self("Team NⅡ");
    pub const H2: Self = Self("Team HⅡ");
    pub const X: Self = Self("Team X");
    pub const X2: Self = Self("Team XⅡ");
    pub const FT: Self = Self("Team Ft");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

/// A stage, together with the team performing it.
/// `None` means the stage is shared by multiple teams.
pub type StageEntry = (Option<Team>, &'static str);

/// Stages in the order they were registered.
/// The same stage may appear several times, when it was handed over to another team
/// or revived later; the first registration wins.
#[derive(Clone, Copy, Debug)]
pub struct StageRegistry(&'static [StageEntry]);

pub const STAGES: StageRegistry = StageRegistry(&[
    (Some(Team::S2), "第48区"),
    (Some(Team::S2), "美丽48区"),
    (Some(Team::N2), "以爱之名"),
    (Some(Team::H2), "美丽世界"),
    (Some(Team::H2), "New H Stars"),
    (Some(Team::H2), "头号新闻"),
    (Some(Team::X), "命运的X号"),
    (Some(Team::X2), "代号XⅡ"),
    (Some(Team::FT), "梦想的旗帜"),
    (Some(Team::FT), "双面偶像"),
    (None, "我们向前冲"),
    (Some(Team::H2), "头号新闻"),
    (Some(Team::S2), "美丽48区"),
    (Some(Team::FT), "双面偶像"),
    (Some(Team::S2), "重生计划"),
    (Some(Team::N2), "N.E.W"),
]);

impl StageRegistry {
    pub const fn new(entries: &'static [StageEntry]) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &'static [StageEntry] {
        self.0
    }

    /// Returns the team of the first registration of `stage`.
    pub fn find_team(&self, stage: &str) -> Result<Option<Team>, ConfigError> {
        for &(team, name) in self.0 {
            if name == stage {
                debug!("Stage {stage} belongs to {team:?}");
                return Ok(team);
            }
        }
        Err(ConfigError::UnknownStage(stage.to_owned()))
    }
}

/// Aliases of each team used as tags, full-width numerals first.
#[derive(Clone, Copy, Debug)]
pub struct TeamTagRegistry(&'static [(Team, &'static [&'static str])]);

pub const TEAM_TAGS: TeamTagRegistry = TeamTagRegistry(&[
    (Team::S2, &["Team SⅡ", "SⅡ", "Team SII", "SII"]),
    (Team::N2, &["Team NⅡ", "NⅡ", "Team NII", "NII"]),
    (Team::H2, &["Team HⅡ", "HⅡ", "Team HII", "HII"]),
    (Team::X, &["Team X"]),
    (Team::X2, &["Team XⅡ", "XⅡ", "Team XII", "XII"]),
    (Team::FT, &["Team Ft", "Ft"]),
]);

impl TeamTagRegistry {
    pub const fn new(entries: &'static [(Team, &'static [&'static str])]) -> Self {
        Self(entries)
    }

    pub fn aliases(&self, team: Team) -> Result<&'static [&'static str], ConfigError> {
        self.0
            .iter()
            .find(|(t, _)| *t == team)
            .map(|&(_, aliases)| aliases)
            .ok_or_else(|| ConfigError::UnregisteredTeamAliases(team.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{StageRegistry, Team, TeamTagRegistry, STAGES, TEAM_TAGS};
    use crate::generate::ConfigError;

    #[test]
    fn test_find_team() {
        assert_eq!(STAGES.find_team("美丽48区").unwrap(), Some(Team::S2));
        assert_eq!(STAGES.find_team("N.E.W").unwrap(), Some(Team::N2));
        assert_eq!(STAGES.find_team("我们向前冲").unwrap(), None);
    }

    #[test]
    fn test_unknown_stage() {
        assert!(matches!(
            STAGES.find_team("心的旅程"),
            Err(ConfigError::UnknownStage(stage)) if stage == "心的旅程"
        ));
        // No fuzzy matching.
        assert!(STAGES.find_team(" 美丽48区").is_err());
    }

    #[test]
    fn test_first_registration_wins() {
        const REASSIGNED: StageRegistry = StageRegistry::new(&[
            (Some(Team::new("Team A")), "stage"),
            (None, "other"),
            (Some(Team::new("Team B")), "stage"),
        ]);
        for _ in 0..3 {
            assert_eq!(
                REASSIGNED.find_team("stage").unwrap(),
                Some(Team::new("Team A"))
            );
        }
    }

    #[test]
    fn test_every_stage_team_has_tags() {
        for (team, _) in STAGES.entries() {
            if let Some(team) = team {
                let aliases = TEAM_TAGS.aliases(*team).unwrap();
                assert_eq!(aliases[0], team.name());
            }
        }
    }

    #[test]
    fn test_unregistered_aliases() {
        const EMPTY: TeamTagRegistry = TeamTagRegistry::new(&[]);
        assert!(matches!(
            EMPTY.aliases(Team::X),
            Err(ConfigError::UnregisteredTeamAliases(team)) if team == "Team X"
        ));
        assert_eq!(
            TEAM_TAGS.aliases(Team::S2).unwrap(),
            ["Team SⅡ", "SⅡ", "Team SII", "SII"]
        );
    }
}
