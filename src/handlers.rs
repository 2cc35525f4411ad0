use crate::capture::submit_entry;
use crate::chart::chart_data;
use crate::errors::AppError;
use crate::models::{
    ChartData, EntryRequest, EntryResponse, MoodEntry, MoodOption, StatsResponse,
};
use crate::mood::MoodLevel;
use crate::state::AppState;
use crate::stats::{rolling_stats, sleep_band};
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
};
use chrono::Local;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    let stats = rolling_stats(store.entries());
    Html(render_index(&today_label(), &stats))
}

pub async fn list_moods() -> Json<Vec<MoodOption>> {
    Json(MoodLevel::ALL.into_iter().map(MoodOption::from).collect())
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let store = state.store.lock().await;
    Json(store.entries().to_vec())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    let stats = rolling_stats(store.entries());
    let sleep_band = sleep_band(&stats.average_sleep_hours);
    Json(StatsResponse { stats, sleep_band })
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartData> {
    let store = state.store.lock().await;
    Json(chart_data(store.entries()))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let mood = parse_mood(payload.mood.as_deref())?;
    let response = apply_entry(&state, mood).await;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn create_entry_form(
    State(state): State<AppState>,
    Form(payload): Form<EntryRequest>,
) -> Result<Redirect, AppError> {
    let mood = parse_mood(payload.mood.as_deref())?;
    apply_entry(&state, mood).await;
    Ok(Redirect::to("/"))
}

async fn apply_entry(state: &AppState, mood: MoodLevel) -> EntryResponse {
    let mut store = state.store.lock().await;
    let entry = submit_entry(&mut store, mood);
    let stats = rolling_stats(store.entries());
    EntryResponse { entry, stats }
}

fn parse_mood(raw: Option<&str>) -> Result<MoodLevel, AppError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        warn!("rejected entry without a mood selection");
        return Err(AppError::bad_request("select a mood before continuing"));
    }

    raw.parse::<MoodLevel>().map_err(|err| {
        warn!("rejected entry: {err}");
        AppError::from(err)
    })
}

fn today_label() -> String {
    Local::now().format("%A, %B %-d").to_string()
}
