use crate::config::AssetsConfig;
use serde::Serialize;

pub const TITLE: &str = "Winter Narratives";

const PARAGRAPHS: [&str; 2] = [
    "Welcome to the Winter Narrative app! Explore your feelings about winter and see which story fits you best.",
    "This is a fun way to explore diversity and different perspectives, especially regarding something as universally experienced yet uniquely perceived as winter. Continue by clicking Introspection in the menu.",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StartView {
    pub title: &'static str,
    pub hero_image_url: String,
    pub paragraphs: Vec<&'static str>,
}

impl StartView {
    pub fn render(assets: &AssetsConfig) -> Self {
        Self {
            title: TITLE,
            hero_image_url: assets.hero_image_url.clone(),
            paragraphs: PARAGRAPHS.to_vec(),
        }
    }
}
