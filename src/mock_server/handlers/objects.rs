//! Object endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::{authorize, error_response, Caller};
use crate::mock_server::state::MockState;

/// Query parameters for creating objects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjectQuery {
    pub return_object: Option<bool>,
}

/// Query parameters for listing objects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsQuery {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

fn unknown_object(object_type: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("The object '{object_type}' does not exist"),
    )
}

/// POST /1/objects/{object_type}
pub async fn create_object(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(object_type): Path<String>,
    Query(query): Query<CreateObjectQuery>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut state = state.write().await;

    match authorize(&state, &headers) {
        Ok(Caller::User) => {}
        Ok(Caller::Anonymous) => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "Anonymous users may not create objects",
            )
        }
        Err(response) => return response,
    }

    let object: Map<String, Value> = match serde_json::from_str(&body) {
        Ok(object) => object,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "The request body must be a JSON object",
            )
        }
    };

    let Some(collection) = state.collection_mut(&object_type) else {
        return unknown_object(&object_type);
    };

    let created = collection.insert(object);
    if query.return_object.unwrap_or(false) {
        (StatusCode::OK, Json(Value::Object(created.clone()))).into_response()
    } else {
        let id = created.get("id").cloned().unwrap_or(Value::Null);
        (
            StatusCode::OK,
            Json(serde_json::json!({ "__metadata": { "id": id.to_string() } })),
        )
            .into_response()
    }
}

/// GET /1/objects/{object_type}
pub async fn list_objects(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(object_type): Path<String>,
    Query(query): Query<ListObjectsQuery>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    let Some(collection) = state.collection(&object_type) else {
        return unknown_object(&object_type);
    };

    let page_size = query.page_size.unwrap_or(20);
    let page_number = query.page_number.unwrap_or(1);
    let data: Vec<Value> = collection
        .page(page_size, page_number)
        .into_iter()
        .map(|object| Value::Object(object.clone()))
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "totalRows": collection.len(),
            "data": data,
        })),
    )
        .into_response()
}

/// GET /1/objects/{object_type}/{id}
pub async fn get_object(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((object_type, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    let Some(collection) = state.collection(&object_type) else {
        return unknown_object(&object_type);
    };

    match id.parse::<u64>().ok().and_then(|id| collection.get(id)) {
        Some(object) => (StatusCode::OK, Json(Value::Object(object.clone()))).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No {object_type} object with id {id}"),
        ),
    }
}
