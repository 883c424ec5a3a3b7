use anyhow::{bail, Context};
use log::{debug, info};

use crate::{
    page_parser::{self, PerformancePage},
    platform::Platform,
    schema::VideoId,
};

pub struct LiveClient {
    client: reqwest::Client,
}

impl LiveClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .connection_verbose(true)
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch_performance_page(
        &self,
        platform: Platform,
        vid: VideoId,
    ) -> anyhow::Result<PerformancePage> {
        let url = platform.performance_page_url(vid);
        info!("Fetching {url}");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            bail!(
                "Unexpected error code: server returned {:?}",
                response.status()
            );
        }
        let page = page_parser::parse(&response.text().await?)
            .with_context(|| format!("While parsing {url}"))?;
        debug!("Scraped: {page:?}");
        Ok(page)
    }
}
