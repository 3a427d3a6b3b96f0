use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::services::{cors_json, now_iso};
use crate::sheets::SheetRegistry;

#[derive(Deserialize)]
pub(crate) struct ValuesQuery {
    #[serde(default)]
    key: String,
}

pub(crate) async fn process(
    config: web::Data<Config>,
    sheets: web::Data<SheetRegistry>,
    query: web::Query<ValuesQuery>,
) -> HttpResponse {
    if query.key != config.read_api_key {
        return cors_json(
            StatusCode::FORBIDDEN,
            json!({
                "success": false,
                "error": "Invalid or missing API key",
                "timestamp": now_iso(),
            }),
        );
    }

    match sheets.feedback().rows() {
        Ok(rows) => cors_json(StatusCode::OK, json!({ "values": rows })),
        Err(err) => {
            error!("feedback sheet read failed: {err}");
            cors_json(
                StatusCode::OK,
                json!({
                    "success": false,
                    "error": format!("Failed to read feedback sheet: {err}"),
                    "timestamp": now_iso(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::services::forms::feedback_header;
    use crate::sheets::Sheet;

    fn config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            data_dir: String::new(),
            read_api_key: "test-key".to_string(),
        }
    }

    #[actix_web::test]
    async fn wrong_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config()))
                .app_data(web::Data::new(SheetRegistry::new(dir.path())))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/feedbacks/values?key=nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn right_key_returns_all_rows() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SheetRegistry::new(dir.path());
        let sheet: Sheet = registry.feedback();
        let row: Vec<String> = vec![
            "t", "A", "a@b.co", "", "", "", "5", "Great", "Website Feedback Form", "Client", "N",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        sheet.append(&feedback_header(), &row).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config()))
                .app_data(web::Data::new(registry))
                .service(super::super::configure_routes()),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/feedbacks/values?key=test-key")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value =
            serde_json::from_slice(&to_bytes(resp.into_body()).await.unwrap()).unwrap();
        let values = body["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0][0], "Timestamp");
        assert_eq!(values[1][1], "A");
    }
}
