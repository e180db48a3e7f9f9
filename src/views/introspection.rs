use crate::catalog::QuestionCatalog;
use crate::session::Session;
use serde::Serialize;

pub const TITLE: &str = "The essence of winter";
pub const INTRO: &str = "This is not a test, see it as just an exploration of your perspectives. Choose an option which feels most right to you.";
pub const ACKNOWLEDGEMENT: &str = "Thank you for answering the questions! You can now proceed to the 'See Your Story' section.";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IntrospectionView {
    pub title: &'static str,
    pub intro: &'static str,
    pub questions: Vec<QuestionView>,
    pub answered: usize,
}

impl IntrospectionView {
    pub fn render(questions: &QuestionCatalog, session: &Session) -> Self {
        let questions = questions
            .iter()
            .map(|q| QuestionView {
                id: q.id.clone(),
                prompt: q.prompt.clone(),
                options: q.options.iter().map(|o| o.text.clone()).collect(),
                selected: session.selection(&q.id),
            })
            .collect::<Vec<_>>();
        Self {
            title: TITLE,
            intro: INTRO,
            questions,
            answered: session.answered(),
        }
    }
}
