use clap::ValueEnum;
use itertools::Itertools;
use strum::{EnumString, IntoStaticStr};

use crate::registry::Team;

/// Short affiliation code used by the tooling around member-specific playlists.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumString, IntoStaticStr, strum::Display, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum TeamCode {
    S2,
    N2,
    H2,
    X,
    X2,
}
impl TeamCode {
    pub fn team(self) -> Team {
        match self {
            Self::S2 => Team::S2,
            Self::N2 => Team::N2,
            Self::H2 => Team::H2,
            Self::X => Team::X,
            Self::X2 => Team::X2,
        }
    }
}

// This list does not include all ex-members.
pub const TEAM_AFFILIATIONS: &[(&str, TeamCode)] = &[
    ("陈观慧", TeamCode::S2),
    ("陈思", TeamCode::S2),
    ("成珏", TeamCode::S2),
    ("戴萌", TeamCode::S2),
    ("蒋芸", TeamCode::S2),
    ("孔肖吟", TeamCode::S2),
    ("李宇琪", TeamCode::S2),
    ("刘力玮", TeamCode::S2),
    ("吕一", TeamCode::S2),
    ("莫寒", TeamCode::S2),
    ("潘燕琦", TeamCode::S2),
    ("钱蓓婷", TeamCode::S2),
    ("邱欣怡", TeamCode::S2),
    ("申月姣", TeamCode::S2),
    ("沈之琳", TeamCode::S2),
    ("孙芮", TeamCode::S2),
    ("温晶婕", TeamCode::S2),
    ("吴哲晗", TeamCode::S2),
    ("徐晨辰", TeamCode::S2),
    ("徐子轩", TeamCode::S2),
    ("许佳琪", TeamCode::S2),
    ("袁丹妮", TeamCode::S2),
    ("袁雨桢", TeamCode::S2),
    ("张语格", TeamCode::S2),
    ("赵韩倩", TeamCode::S2),
    ("赵嘉敏", TeamCode::S2),
    ("赵晔", TeamCode::S2),

    ("陈佳莹", TeamCode::N2),
    ("陈问言", TeamCode::N2),
    ("邓艳秋菲", TeamCode::N2),
    ("董艳芸", TeamCode::N2),
    ("冯薪朵", TeamCode::N2),
    ("葛佳慧", TeamCode::N2),
    ("龚诗淇", TeamCode::N2),
    ("何晓玉", TeamCode::N2),
    ("黄婷婷", TeamCode::N2),
    ("黄彤扬", TeamCode::N2),
    ("江真仪", TeamCode::N2),
    ("金莹玥", TeamCode::N2),
    ("鞠婧祎", TeamCode::N2),
    ("李艺彤", TeamCode::N2),
    ("林思意", TeamCode::N2),
    ("刘菊子", TeamCode::N2),
    ("刘瀛", TeamCode::N2),
    ("陆婷", TeamCode::N2),
    ("罗兰", TeamCode::N2),
    ("马凡", TeamCode::N2),
    ("孟玥", TeamCode::N2),
    ("钱艺", TeamCode::N2),
    ("唐安琪", TeamCode::N2),
    ("万丽娜", TeamCode::N2),
    ("许逸", TeamCode::N2),
    ("徐真", TeamCode::N2),
    ("易嘉爱", TeamCode::N2),
    ("曾艳芬", TeamCode::N2),
    ("张雅梦", TeamCode::N2),
    ("张雨鑫", TeamCode::N2),
    ("赵粤", TeamCode::N2),
    ("周怡", TeamCode::N2),

    ("陈怡馨", TeamCode::H2),
    ("郭倩芸", TeamCode::H2),
    ("郝婉晴", TeamCode::H2),
    ("姜涵", TeamCode::H2),
    ("李清扬", TeamCode::H2),
    ("林楠", TeamCode::H2),
    ("刘炅然", TeamCode::H2),
    ("刘佩鑫", TeamCode::H2),
    ("沈梦瑶", TeamCode::H2),
    ("孙珍妮", TeamCode::H2),
    ("王柏硕", TeamCode::H2),
    ("王金铭", TeamCode::H2),
    ("王璐", TeamCode::H2),
    ("王露皎", TeamCode::H2),
    ("王奕", TeamCode::H2),
    ("文文", TeamCode::H2),
    ("吴燕文", TeamCode::H2),
    ("谢妮", TeamCode::H2),
    ("熊沁娴", TeamCode::H2),
    ("徐晗", TeamCode::H2),
    ("徐伊人", TeamCode::H2),
    ("许杨玉琢", TeamCode::H2),
    ("杨惠婷", TeamCode::H2),
    ("袁航", TeamCode::H2),
    ("袁一琦", TeamCode::H2),
    ("张昕", TeamCode::H2),
    ("赵梦婷", TeamCode::H2),

    ("陈琳", TeamCode::X),
    ("冯晓菲", TeamCode::X),
    ("李晶", TeamCode::X),
    ("李钊", TeamCode::X),
    ("林忆宁", TeamCode::X),
    ("祁静", TeamCode::X),
    ("邵雪聪", TeamCode::X),
    ("宋昕冉", TeamCode::X),
    ("孙歆文", TeamCode::X),
    ("孙亚萍", TeamCode::X),
    ("汪佳翎", TeamCode::X),
    ("汪束", TeamCode::X),
    ("王晓佳", TeamCode::X),
    ("谢天依", TeamCode::X),
    ("闫明筠", TeamCode::X),
    ("杨冰怡", TeamCode::X),
    ("杨韫玉", TeamCode::X),
    ("姚祎纯", TeamCode::X),
    ("张丹三", TeamCode::X),
    ("张嘉予", TeamCode::X),
    ("张韵雯", TeamCode::X),

    ("陈音", TeamCode::X2),
    ("陈韫凌", TeamCode::X2),
    ("费沁源", TeamCode::X2),
    ("贺苏堃", TeamCode::X2),
    ("洪珮雲", TeamCode::X2),
    ("姜杉", TeamCode::X2),
    ("蒋舒婷", TeamCode::X2),
    ("李佳恩", TeamCode::X2),
    ("林歆源", TeamCode::X2),
    ("刘增艳", TeamCode::X2),
    ("吕梦莹", TeamCode::X2),
    ("潘瑛琪", TeamCode::X2),
    ("宋雨珊", TeamCode::X2),
    ("陶波尔", TeamCode::X2),
    ("许嘉怡", TeamCode::X2),
    ("徐诗琪", TeamCode::X2),
    ("严佼君", TeamCode::X2),
    ("於佳怡", TeamCode::X2),
    ("曾晓雯", TeamCode::X2),
    ("张文静", TeamCode::X2),
    ("张怡", TeamCode::X2),
    ("邹佳佳", TeamCode::X2),
];

pub fn members() -> impl Iterator<Item = &'static str> {
    TEAM_AFFILIATIONS.iter().map(|&(name, _)| name)
}

pub fn affiliation(member: &str) -> Option<TeamCode> {
    TEAM_AFFILIATIONS
        .iter()
        .find(|&&(name, _)| name == member)
        .map(|&(_, code)| code)
}

pub fn members_of(code: TeamCode) -> Vec<&'static str> {
    TEAM_AFFILIATIONS
        .iter()
        .filter(|&&(_, c)| c == code)
        .map(|&(name, _)| name)
        .collect_vec()
}
