use std::time::Duration;

use gallery_engine::{ContentSource, FailureKind, ReqwestContentSource, SourceSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalogue(count: usize) -> serde_json::Value {
    let items: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": format!("item-{i}"),
                "title": format!("Title {i}"),
                "creator": "Marco Alves",
                "price": if i % 3 == 0 { json!(null) } else { json!(i as f64 + 0.5) },
                "pricingOption": (i % 3) as u8,
                "imagePath": format!("https://cdn.example/{i}.jpg"),
            })
        })
        .collect();
    json!(items)
}

async fn source_for(server: &MockServer, route: &str) -> ReqwestContentSource {
    let settings = SourceSettings {
        endpoint: format!("{}{}", server.uri(), route),
        ..SourceSettings::default()
    };
    ReqwestContentSource::new(settings).expect("client")
}

#[tokio::test]
async fn pages_are_sliced_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalogue(17)))
        .expect(3)
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/data").await;

    let first = source.fetch(1, 12).await.expect("page 1");
    assert_eq!(first.len(), 12);
    assert_eq!(first[0].id, "item-1");
    assert_eq!(first[0].title, "Title 1");
    assert_eq!(first[0].pricing_option, 1);
    assert_eq!(first[0].price, Some(1.5));
    assert_eq!(first[0].image_path, "https://cdn.example/1.jpg");

    let second = source.fetch(2, 12).await.expect("page 2");
    let ids: Vec<_> = second.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["item-13", "item-14", "item-15", "item-16", "item-17"]
    );
    assert_eq!(second[2].price, None);

    let third = source.fetch(3, 12).await.expect("page 3");
    assert!(third.is_empty());
}

#[tokio::test]
async fn missing_optional_fields_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "2", "title": "Test Content 2", "creator": "Creator 2", "pricingOption": 1 }
        ])))
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/data").await;
    let page = source.fetch(1, 12).await.expect("page");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].price, None);
    assert_eq!(page[0].image_path, "");
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/data").await;
    let err = source.fetch(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(
        err.user_message(),
        "Failed to fetch contents (http status 500)"
    );
}

#[tokio::test]
async fn fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/data").await;
    let err = source.fetch(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn rejects_page_zero_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalogue(3)))
        .expect(0)
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/data").await;
    let err = source.fetch(0, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPage);
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(catalogue(1)),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        endpoint: format!("{}/slow", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..SourceSettings::default()
    };
    let source = ReqwestContentSource::new(settings).expect("client");
    let err = source.fetch(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[ 1234567890 ]"))
        .mount(&server)
        .await;

    let settings = SourceSettings {
        endpoint: format!("{}/large", server.uri()),
        max_bytes: 10,
        ..SourceSettings::default()
    };
    let source = ReqwestContentSource::new(settings).expect("client");
    let err = source.fetch(1, 12).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(14)
        }
    );
}

#[tokio::test]
async fn invalid_endpoint_is_reported() {
    let settings = SourceSettings {
        endpoint: "not a url".to_string(),
        ..SourceSettings::default()
    };
    let source = ReqwestContentSource::new(settings).expect("client");
    let err = source.fetch(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
