use axum::{http::header, response::IntoResponse};
use rota_sequencer::json::schema::generate_json_schema;

use crate::error::ApiError;

pub async fn schema_handler() -> Result<impl IntoResponse, ApiError> {
    let schema = generate_json_schema().map_err(|err| ApiError::InternalServerError(err.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], schema))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_utils::{local_state, send_json};

    #[tokio::test]
    async fn test_schema() {
        let (state, _) = local_state();

        let (status, json) = send_json(state, "GET", "/schema", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "OptimizedRoute");
    }
}
