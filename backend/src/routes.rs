use crate::proxy::{Classifier, ProxyError, UploadedFile};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::info;
use shared::{is_supported_upload, InputMode, TextRequest, UrlRequest};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/predict-text").route(web::post().to(predict_text)))
        .service(web::resource("/predict-url").route(web::post().to(predict_url)))
        .service(web::resource("/predict-file").route(web::post().to(predict_file)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("NewsDetector front end is running.")
}

async fn predict_text(
    classifier: web::Data<Classifier>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ProxyError> {
    info!("Forwarding text of {} bytes", body.text.len());
    classifier.forward_json(InputMode::Text, &body.into_inner()).await
}

async fn predict_url(
    classifier: web::Data<Classifier>,
    body: web::Json<UrlRequest>,
) -> Result<HttpResponse, ProxyError> {
    info!("Forwarding url {}", body.url);
    classifier.forward_json(InputMode::Url, &body.into_inner()).await
}

async fn predict_file(
    classifier: web::Data<Classifier>,
    mut payload: Multipart,
) -> Result<HttpResponse, ProxyError> {
    let upload = read_upload(&mut payload).await?;
    if !is_supported_upload(&upload.name) {
        return Err(ProxyError::UnsupportedFormat);
    }
    info!("Forwarding file {} ({} bytes)", upload.name, upload.bytes.len());
    classifier.forward_file(upload).await
}

// Only the `file` field is kept; other fields are drained and ignored.
async fn read_upload(payload: &mut Multipart) -> Result<UploadedFile, ProxyError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ProxyError::Upload(e.to_string()))?
    {
        let is_file = field.name() == Some("file");
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| ProxyError::Upload(e.to_string()))?;
            if is_file {
                bytes.extend_from_slice(&data);
            }
        }

        if is_file {
            return Ok(UploadedFile { name, bytes });
        }
    }
    Err(ProxyError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App, HttpServer};
    use serde_json::json;
    use shared::ErrorResponse;

    const BOUNDARY: &str = "newsdetector-boundary";

    fn multipart_request(field: &str, filename: &str, content: &str) -> test::TestRequest {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n{content}\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        test::TestRequest::post()
            .uri("/predict-file")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    // Starts a stand-in classification service on an ephemeral port.
    fn spawn_classifier() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/predict-text",
                    web::post().to(|body: web::Json<TextRequest>| async move {
                        HttpResponse::Ok().json(json!({
                            "text": body.text,
                            "label": "Fake",
                            "confidence": 0.87,
                            "word_count": 4,
                            "suspicious_words": ["shocking"],
                            "explanation": "Detected sensational terms."
                        }))
                    }),
                )
                .route(
                    "/predict-url",
                    web::post().to(|| async {
                        HttpResponse::BadRequest().json(json!({ "error": "Article could not be downloaded" }))
                    }),
                )
                .route(
                    "/predict-file",
                    web::post().to(|mut payload: Multipart| async move {
                        let upload = read_upload(&mut payload).await.ok();
                        let text = upload
                            .map(|u| format!("{}:{}", u.name, String::from_utf8_lossy(&u.bytes)))
                            .unwrap_or_default();
                        HttpResponse::Ok().json(json!({ "text": text, "label": "Real" }))
                    }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stand-in classifier");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", addr)
    }

    macro_rules! app {
        ($base:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Classifier::new($base)))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_reports_running() {
        let app = app!("http://127.0.0.1:9");
        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"NewsDetector front end is running."));
    }

    #[actix_web::test]
    async fn upload_without_file_field_is_rejected() {
        let app = app!("http://127.0.0.1:9");
        let req = multipart_request("attachment", "story.txt", "hello").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No file uploaded");
    }

    #[actix_web::test]
    async fn unsupported_extension_is_rejected_before_forwarding() {
        let app = app!("http://127.0.0.1:9");
        let req = multipart_request("file", "scan.pdf", "%PDF").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Unsupported file format");
    }

    #[actix_web::test]
    async fn unreachable_service_is_bad_gateway() {
        let app = app!("http://127.0.0.1:9");
        let req = test::TestRequest::post()
            .uri("/predict-text")
            .set_json(json!({ "text": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Classification service unavailable"));
    }

    #[actix_web::test]
    async fn text_prediction_is_relayed() {
        let base = spawn_classifier();
        let app = app!(base);
        let req = test::TestRequest::post()
            .uri("/predict-text")
            .set_json(json!({ "text": "BREAKING: shocking secret exposed!" }))
            .to_request();
        let result: shared::ClassificationResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(result.text, "BREAKING: shocking secret exposed!");
        assert_eq!(result.label, shared::Label::Fake);
        assert_eq!(result.word_count, Some(4));
    }

    #[actix_web::test]
    async fn service_errors_keep_their_status() {
        let base = spawn_classifier();
        let app = app!(base);
        let req = test::TestRequest::post()
            .uri("/predict-url")
            .set_json(json!({ "url": "https://example.invalid/story" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Article could not be downloaded");
    }

    #[actix_web::test]
    async fn file_is_forwarded_with_its_name() {
        let base = spawn_classifier();
        let app = app!(base);
        let req = multipart_request("file", "story.TXT", "Officials confirmed it.").to_request();
        let result: shared::ClassificationResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(result.text, "story.TXT:Officials confirmed it.");
        assert_eq!(result.label, shared::Label::Real);
    }
}
