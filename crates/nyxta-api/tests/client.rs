//! Integration tests for `ApiClient` using wiremock HTTP mocks.

use nyxta_api::gallery::{self, GalleryFilter};
use nyxta_api::normalize::normalize_branches;
use nyxta_api::{ApiClient, ApiError};
use nyxta_core::NewEnquiry;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::with_base_url(base_url, 30, "nyxta-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn get_branches_decodes_both_room_rate_shapes() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": 31,
            "name": "NYXTA LADIES HOSTEL - Branch 31",
            "contact_no": ["+91 9000000031"],
            "address": "Edappally, Kochi",
            "gmap_link": "https://maps.google.com/?q=branch31",
            "room_rate": [
                {"title": "4 sharing", "rate_per_month": 4500},
                {"title": "2 sharing", "rate_per_month": 6500}
            ],
            "amenities": ["WiFi"],
            "property_features": ["Parking"],
            "is_ladies": true
        },
        {
            "id": 5,
            "name": "NYXTA MEN'S HOSTEL - Branch 05",
            "contact_no": ["+91 9000000005"],
            "room_rate": {"6 sharing": 3800},
            "prime_location_perks": [
                {"name": "Metro Station", "distance": "500m", "walk": "5 min"}
            ]
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let raws = client.get_branches().await.expect("should parse branches");
    assert_eq!(raws.len(), 2);

    let branches = normalize_branches(&raws);
    assert_eq!(branches[0].branch_number, "31");
    assert_eq!(branches[0].rooms_price.len(), 2);
    assert_eq!(
        branches[0].amenities.as_deref(),
        Some(["WiFi".to_string(), "Parking".to_string()].as_slice())
    );
    assert_eq!(branches[1].rooms_price.len(), 1);
    assert_eq!(branches[1].rooms_price[0].title, "6 sharing");
    assert_eq!(branches[1].location_perks[0].time_to_reach, "5 min");
}

#[tokio::test]
async fn get_branch_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/branches/99"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"message": "Branch not found"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_branch(99).await;

    assert!(
        matches!(result, Err(ApiError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn error_status_surfaces_message_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_branches().await.unwrap_err();

    assert!(
        matches!(
            &err,
            ApiError::Status { status: 500, message } if message == "database unavailable"
        ),
        "expected Status(500, database unavailable), got: {err:?}"
    );
}

#[tokio::test]
async fn error_status_without_message_body_uses_reason_phrase() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_branches().await.unwrap_err();

    assert!(
        matches!(&err, ApiError::Status { status: 503, .. }),
        "expected Status(503), got: {err:?}"
    );
}

#[tokio::test]
async fn branch_gallery_empty_success_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gallery/branch/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let images = gallery::fetch_gallery_for_branch(&client, 31, &[])
        .await
        .expect("empty gallery is a successful response");
    assert!(images.is_empty());
}

#[tokio::test]
async fn fetch_gallery_for_branch_cleans_and_dedupes() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": 1,
            "branch_id": 31,
            "image_url": " `https://cdn.nyxta.in/g/room.jpg?v=1` ",
            "title": "Room",
            "description": "",
            "display_order": 2
        },
        {
            "id": 2,
            "branch_id": 31,
            "image_url": "https://cdn.nyxta.in/cached/room.jpg?v=2",
            "title": "Room",
            "description": "",
            "display_order": 3
        },
        {
            "id": 3,
            "branch_id": 31,
            "image_url": "https://cdn.nyxta.in/g/front.jpg",
            "title": "Front",
            "description": "",
            "display_order": 1
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/gallery/branch/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let images = gallery::fetch_gallery_for_branch(&client, 31, &[])
        .await
        .expect("should aggregate gallery");

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].src, "https://cdn.nyxta.in/g/front.jpg");
    assert_eq!(images[1].src, "https://cdn.nyxta.in/g/room.jpg?v=1");
    assert_eq!(images[1].branch, "Branch 31");

    let filtered = gallery::filter_images(
        &images,
        &GalleryFilter {
            branch: None,
            search_term: Some("front".to_string()),
        },
    );
    assert_eq!(filtered.len(), 1);
}

#[tokio::test]
async fn create_enquiry_posts_website_source_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/enquiries"))
        .and(body_partial_json(serde_json::json!({
            "name": "Asha",
            "phone": "+91 9000000001",
            "source": "website"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 12,
            "name": "Asha",
            "phone": "+91 9000000001",
            "source": "website",
            "created_at": "2025-11-02T10:15:00Z"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut enquiry = NewEnquiry::new("Asha", "+91 9000000001");
    enquiry.branch_id = Some(31);

    let created = client
        .create_enquiry(&enquiry)
        .await
        .expect("should create enquiry");
    assert_eq!(created.id, 12);
    assert_eq!(created.source.as_deref(), Some("website"));
}
