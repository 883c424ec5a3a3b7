pub mod api;
pub mod generate;
pub mod listing;
pub mod members;
pub mod page_parser;
pub mod platform;
pub mod registry;
pub mod schema;
pub mod settings;
pub mod thumbnail;
pub mod vod_config;
