use crate::app::AppState;
use crate::export::ExportedDocument;
use crate::views::{
    introspection, AnalysisView, Footer, IntrospectionView, ModePanel, StartView, StoryView, View,
};
use tauri::command;

/* ---------- 1.  NAVIGATION & STATIC VIEWS ---------- */

#[command]
pub fn navigation() -> Vec<&'static str> {
    View::ALL.iter().map(View::label).collect()
}

#[command]
pub fn start_view(state: tauri::State<'_, AppState>) -> StartView {
    state.start_view()
}

#[command]
pub fn footer(state: tauri::State<'_, AppState>) -> Footer {
    state.footer()
}

/* ---------- 2.  INTROSPECTION ---------- */

#[command]
pub fn introspection_view(state: tauri::State<'_, AppState>) -> IntrospectionView {
    state.introspection_view()
}

#[command]
pub fn select_answer(
    question_id: String,
    option: usize,
    state: tauri::State<'_, AppState>,
) -> Result<IntrospectionView, String> {
    state
        .select_answer(&question_id, option)
        .map_err(|e| e.to_string())
}

#[command]
pub fn clear_answer(question_id: String, state: tauri::State<'_, AppState>) -> IntrospectionView {
    state.clear_answer(&question_id)
}

#[command]
pub fn acknowledge_answers() -> &'static str {
    introspection::ACKNOWLEDGEMENT
}

/* ---------- 3.  YOUR STORY ---------- */

#[command]
pub fn story_view(state: tauri::State<'_, AppState>) -> StoryView {
    state.story_view()
}

#[command]
pub async fn download_story(state: tauri::State<'_, AppState>) -> Result<ExportedDocument, String> {
    state.download_story().await.map_err(|e| e.to_string())
}

/* ---------- 4.  ANALYSIS ---------- */

#[command]
pub fn analysis_view(state: tauri::State<'_, AppState>) -> AnalysisView {
    state.analysis_view()
}

#[command]
pub fn mode_panel(selection: String, state: tauri::State<'_, AppState>) -> Result<ModePanel, String> {
    state.mode_panel(&selection).map_err(|e| e.to_string())
}

#[command]
pub async fn submit_feedback(text: String, state: tauri::State<'_, AppState>) -> Result<String, String> {
    state
        .submit_feedback(&text)
        .await
        .map(str::to_string)
        .map_err(|e| e.to_string())
}
