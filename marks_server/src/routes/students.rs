//! Student page handlers.
//!
//! Edit/update/delete never surface a missing record: the user is sent back
//! to the list instead.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::MarksRouterState;
use crate::error::AppError;
use crate::models::student::StudentForm;
use crate::services::student_service;
use crate::store::{normalize_search, StudentStore, LIST_LIMIT};
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// `?_method=PUT|DELETE` carried by HTML forms, which can only GET or POST.
#[derive(Debug, Default, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

fn back_to_list() -> Redirect {
    Redirect::to("/")
}

/// Malformed ids are treated the same as ids that match nothing.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub async fn list_students(
    State(state): State<MarksRouterState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let search = normalize_search(query.q.as_deref());
    if search.is_some() {
        crate::metrics::search_performed();
    }

    let students = state.store.list(search, LIST_LIMIT).await?;
    Ok(Html(views::list::render(&students, search.unwrap_or_default())))
}

pub async fn add_form() -> Html<String> {
    Html(views::form::render_add())
}

pub async fn create_student(
    State(state): State<MarksRouterState>,
    Form(form): Form<StudentForm>,
) -> Result<Redirect, AppError> {
    student_service::create_student(state.store.as_ref(), form).await?;
    Ok(back_to_list())
}

pub async fn edit_form(
    State(state): State<MarksRouterState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return back_to_list().into_response();
    };

    match state.store.get(id).await {
        Ok(Some(student)) => Html(views::form::render_edit(&student)).into_response(),
        Ok(None) => back_to_list().into_response(),
        Err(e) => {
            tracing::error!(student_id = id, error = %e, "Edit lookup failed");
            back_to_list().into_response()
        }
    }
}

pub async fn update_student(
    State(state): State<MarksRouterState>,
    Path(id): Path<String>,
    Form(form): Form<StudentForm>,
) -> Result<Redirect, AppError> {
    match parse_id(&id) {
        Some(id) => {
            student_service::update_student(state.store.as_ref(), id, form).await?;
        }
        None => tracing::debug!(raw_id = %id, "Update with malformed id"),
    }
    Ok(back_to_list())
}

pub async fn delete_student(
    State(state): State<MarksRouterState>,
    Path(id): Path<String>,
) -> Redirect {
    if let Some(id) = parse_id(&id) {
        student_service::delete_student(state.store.as_ref(), id).await;
    }
    back_to_list()
}

/// POST /students/{id}?_method=... dispatch.
pub async fn method_override(
    state: State<MarksRouterState>,
    path: Path<String>,
    Query(over): Query<MethodOverride>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Response {
    let method = over.method.map(|m| m.trim().to_ascii_uppercase());

    match method.as_deref() {
        Some("PUT") => match form {
            Ok(form) => update_student(state, path, form).await.into_response(),
            Err(rejection) => rejection.into_response(),
        },
        Some("DELETE") => delete_student(state, path).await.into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
