use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::LevelFilter;
use snh48live_config::api::LiveClient;
use snh48live_config::generate::generate_config_file;
use snh48live_config::generate::ConfigGenerator;
use snh48live_config::generate::ConfigRequest;
use snh48live_config::listing::list_vod_configs;
use snh48live_config::members::members_of;
use snh48live_config::members::TeamCode;
use snh48live_config::members::TEAM_AFFILIATIONS;
use snh48live_config::platform::Group;
use snh48live_config::platform::Platform;
use snh48live_config::platform::AGGREGATOR_HOST;
use snh48live_config::schema::Perfnum;
use snh48live_config::schema::VideoId;
use snh48live_config::settings::Settings;
use snh48live_config::thumbnail::ExternalThumbnailer;

#[derive(Parser)]
struct Opts {
    /// TOML file providing `video_configs_dir` and `thumbnailer`.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long)]
    video_configs_dir: Option<PathBuf>,
    #[arg(long)]
    thumbnailer: Option<PathBuf>,
    #[command(subcommand)]
    sub: Sub,
}

#[derive(Subcommand)]
enum Sub {
    /// Scrape the page of a recording and write its config.
    Autogen(Autogen),
    /// Write a config from fields given on the command line.
    New(New),
    /// List members, optionally only those of one team.
    Members(Members),
}

#[derive(Args)]
struct Autogen {
    vid: VideoId,
    #[arg(value_enum, default_value_t = Group::Snh)]
    platform: Group,
    #[arg(short, long)]
    special: bool,
    #[arg(long)]
    perfnum: Option<Perfnum>,
}

#[derive(Args)]
struct New {
    /// YYYYMMDD
    #[arg(long)]
    date: String,
    /// HH:MM
    #[arg(long)]
    time: String,
    #[arg(long, default_value = AGGREGATOR_HOST)]
    platform: String,
    /// Defaults to the latest live id plus one on the aggregator.
    #[arg(long)]
    vid: Option<String>,
    #[arg(short, long)]
    special: bool,
    /// Stage name, or the title of a special performance.
    #[arg(long, default_value = "")]
    stage: String,
    #[arg(long)]
    m3u8: Option<String>,
    /// Defaults to the latest performance number of the stage plus one.
    #[arg(long)]
    perfnum: Option<Perfnum>,
}

#[derive(Args)]
struct Members {
    #[arg(value_enum)]
    team: Option<TeamCode>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();

    let opts = Opts::parse();
    if let Err(e) = run(opts).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

async fn run(opts: Opts) -> anyhow::Result<()> {
    let mut settings = Settings::load(opts.settings.as_deref())?;
    if let Some(dir) = opts.video_configs_dir {
        settings.video_configs_dir = dir;
    }
    if let Some(thumbnailer) = opts.thumbnailer {
        settings.thumbnailer = thumbnailer;
    }

    match opts.sub {
        Sub::Autogen(sub) => autogen(&settings, sub).await,
        Sub::New(sub) => {
            let request = ConfigRequest::builder()
                .date(&sub.date)
                .time(&sub.time)
                .platform(&sub.platform)
                .video_id(sub.vid.as_deref())
                .special(sub.special)
                .stage(&sub.stage)
                .m3u8(sub.m3u8.as_deref())
                .perfnum(sub.perfnum)
                .build();
            write_config(&settings, &request)
        }
        Sub::Members(sub) => {
            match sub.team {
                Some(team) => members_of(team)
                    .into_iter()
                    .for_each(|name| println!("{name}\t{team}")),
                None => TEAM_AFFILIATIONS
                    .iter()
                    .for_each(|(name, team)| println!("{name}\t{team}")),
            }
            Ok(())
        }
    }
}

async fn autogen(settings: &Settings, sub: Autogen) -> anyhow::Result<()> {
    let platform = Platform::from_group(sub.platform);
    let page = LiveClient::new()?
        .fetch_performance_page(platform, sub.vid)
        .await?;
    info!("{} {} {} {}", page.stage, page.date, page.time, page.m3u8);

    let host = platform.host();
    let vid = sub.vid.to_string();
    let request = ConfigRequest::builder()
        .date(&page.date)
        .time(&page.time)
        .platform(&host)
        .video_id(Some(vid.as_str()))
        .special(sub.special)
        .stage(&page.stage)
        .m3u8(Some(page.m3u8.as_str()))
        .perfnum(sub.perfnum)
        .build();
    write_config(settings, &request)
}

fn write_config(settings: &Settings, request: &ConfigRequest) -> anyhow::Result<()> {
    let prior = list_vod_configs(&settings.video_configs_dir, true)?;
    let generator = ConfigGenerator::builder()
        .configs_dir(&settings.video_configs_dir)
        .prior(&prior)
        .build();
    let thumbnailer = ExternalThumbnailer::new(&settings.thumbnailer);
    let path = generate_config_file(&generator, request, &thumbnailer)?;
    info!("Successfully saved config to {path:?}.");
    Ok(())
}
