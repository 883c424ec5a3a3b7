use anyhow::Context;
use chrono::NaiveDateTime;
use scraper::Html;
use snh48live_utils::{regex, selector};

/// Metadata found on the page of a recorded performance.
#[derive(Debug, PartialEq, Eq)]
pub struct PerformancePage {
    pub stage: String,
    /// `YYYYMMDD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub m3u8: String,
}

pub fn parse(html: &str) -> anyhow::Result<PerformancePage> {
    let document = Html::parse_document(html);

    let title1 = document
        .select(selector!("span.title1"))
        .next()
        .context("Title span not found")?
        .text()
        .collect::<String>();
    let stage = parse_stage(&title1).to_owned();

    let title2 = document
        .select(selector!("span.title2"))
        .next()
        .context("Date span not found")?
        .text()
        .collect::<String>();
    let aired_at = parse_aired_at(&title2)?;

    // The player is set up in a script, so this is taken from the raw text.
    let m3u8 = regex!(r#"https?://[^\s"']*?\.m3u8[^\s"']*"#)
        .find(html)
        .context("m3u8 URL not found")?
        .as_str()
        .to_owned();

    Ok(PerformancePage {
        stage,
        date: aired_at.format("%Y%m%d").to_string(),
        time: aired_at.format("%H:%M").to_string(),
        m3u8,
    })
}

/// Titles look like `《美丽48区》剧场公演`; the part in the brackets is the stage name.
fn parse_stage(title: &str) -> &str {
    match regex!(r"^《(.*)》.*$").captures(title) {
        Some(captures) => captures.get(1).map_or(title, |x| x.as_str()),
        None => title,
    }
}

fn parse_aired_at(text: &str) -> anyhow::Result<NaiveDateTime> {
    let captures = regex!(r"([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})")
        .captures(text)
        .with_context(|| format!("Unexpected date span: {text:?}"))?;
    Ok(NaiveDateTime::parse_from_str(
        &captures[1],
        "%Y-%m-%d %H:%M:%S",
    )?)
}
