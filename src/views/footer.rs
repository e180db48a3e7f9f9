use serde::Serialize;

const DISCLAIMERS: [&str; 3] = [
    "Disclaimer: The narratives and perspectives provided are generated for exploratory and entertainment purposes. They may not reflect real-life experiences or outcomes. Please use them as a creative tool rather than factual advice.",
    "Disclaimer: Your input may be stored and used for research and improvement of this application. No personally identifiable information is collected or shared.",
    "Note: This app uses third-party services like Airtable for data storage. By submitting your thoughts, you agree to the processing of data in accordance with their privacy policies.",
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub disclaimers: Vec<&'static str>,
    pub link_prefix: &'static str,
    pub link_text: &'static str,
    pub link_url: &'static str,
}

impl Footer {
    pub fn render() -> Self {
        Self {
            disclaimers: DISCLAIMERS.to_vec(),
            link_prefix: "Explore more data-driven perspectives at",
            link_text: "Best of Worlds",
            link_url: "https://bestofworlds.se",
        }
    }
}
