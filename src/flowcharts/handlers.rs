use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
};

use super::dto::{CreateFlowchart, UpdateFlowchart};
use super::repo::Flowchart;

pub fn flowchart_routes() -> Router<AppState> {
    Router::new()
        .route("/flowcharts", post(create_flowchart).get(list_flowcharts))
        .route(
            "/flowcharts/:id",
            get(get_flowchart)
                .put(update_flowchart)
                .delete(delete_flowchart),
        )
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_flowchart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateFlowchart>,
) -> Result<(StatusCode, Json<Flowchart>), ApiError> {
    let flowchart = Flowchart::create(
        &state.db,
        user.id,
        &payload.title,
        payload.description.as_deref(),
        &payload.data,
    )
    .await?;

    info!(flowchart_id = %flowchart.id, "flowchart created");
    Ok((StatusCode::CREATED, Json(flowchart)))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_flowcharts(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Flowchart>>, ApiError> {
    let flowcharts = Flowchart::list_by_owner(&state.db, user.id).await?;
    Ok(Json(flowcharts))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_flowchart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Flowchart>, ApiError> {
    let flowchart = Flowchart::find_by_id_and_owner(&state.db, id, user.id)
        .await?
        .ok_or(ApiError::NotFound("Flowchart"))?;
    Ok(Json(flowchart))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_flowchart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFlowchart>,
) -> Result<Json<Flowchart>, ApiError> {
    let flowchart = Flowchart::update_fields(&state.db, id, user.id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Flowchart"))?;

    info!(flowchart_id = %flowchart.id, "flowchart updated");
    Ok(Json(flowchart))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_flowchart(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Flowchart::delete(&state.db, id, user.id).await? {
        return Err(ApiError::NotFound("Flowchart"));
    }

    info!(flowchart_id = %id, "flowchart deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::OffsetDateTime;

    #[test]
    fn flowchart_record_serialization() {
        let flowchart = Flowchart {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Flow1".into(),
            description: None,
            data: json!({"nodes": []}),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let value = serde_json::to_value(&flowchart).unwrap();
        assert_eq!(value["title"], "Flow1");
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["data"], json!({"nodes": []}));
        assert_eq!(value["updated_at"], "1970-01-01T00:00:00Z");
    }
}
