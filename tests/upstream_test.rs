use httpmock::prelude::*;
use insinc_backend::{
    error::QuoteError,
    schema::{api::InsuranceQuote, upstream::Mortgage},
    upstream::{MortgageClient, ServiceCodeClient},
};
use isahc::HttpClient;
use serde_json::json;

fn registry(server: &MockServer) -> MortgageClient {
    MortgageClient::new(HttpClient::new().unwrap(), server.url("/api"))
}

fn lookup(server: &MockServer) -> ServiceCodeClient {
    ServiceCodeClient::new(HttpClient::new().unwrap(), server.url("/v1"))
}

#[tokio::test]
async fn fetches_the_single_matching_mortgage() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/MortgageApplications")
                .query_param("filter[where][mortgageID]", "M1");
            then.status(200).json_body(json!([
                {"mortgageID": "M1", "houseID": "H1", "applicant": {"name": "Ann"}}
            ]));
        })
        .await;

    let mortgage = registry(&server).fetch_mortgage("M1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(mortgage.mortgage_id, "M1");
    assert_eq!(mortgage.house_id, "H1");
    assert_eq!(mortgage.extra["applicant"], json!({"name": "Ann"}));
}

#[tokio::test]
async fn zero_or_many_mortgages_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/MortgageApplications")
                .query_param("filter[where][mortgageID]", "none");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/MortgageApplications")
                .query_param("filter[where][mortgageID]", "twice");
            then.status(200).json_body(json!([
                {"mortgageID": "twice", "houseID": "H1"},
                {"mortgageID": "twice", "houseID": "H2"}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/MortgageApplications")
                .query_param("filter[where][mortgageID]", "null");
            then.status(200).body("null");
        })
        .await;

    let client = registry(&server);
    for id in ["none", "twice", "null"] {
        match client.fetch_mortgage(id).await {
            Err(QuoteError::NotFound(_)) => {}
            other => panic!("{id}: expected not found, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn registry_error_status_is_an_upstream_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/MortgageApplications");
            then.status(503);
        })
        .await;

    assert!(matches!(
        registry(&server).fetch_mortgage("M1").await,
        Err(QuoteError::Upstream { .. })
    ));
}

#[tokio::test]
async fn unreachable_registry_is_an_upstream_failure() {
    let client = MortgageClient::new(HttpClient::new().unwrap(), "http://127.0.0.1:1/api");

    assert!(matches!(
        client.fetch_mortgage("M1").await,
        Err(QuoteError::Upstream { .. })
    ));
}

#[tokio::test]
async fn notify_puts_the_whole_mortgage_with_its_quote() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/MortgageApplications")
                .header("content-type", "application/json")
                .json_body(json!({
                    "mortgageID": "M1",
                    "houseID": "H1",
                    "status": "pending",
                    "insuranceQuote": {"deductibleValue": 5000.0, "insuredValue": 695000.0}
                }));
            then.status(500);
        })
        .await;

    let mut mortgage: Mortgage =
        serde_json::from_value(json!({"mortgageID": "M1", "houseID": "H1", "status": "pending"}))
            .unwrap();
    mortgage.insurance_quote = Some(InsuranceQuote {
        deductible_value: 5000.0,
        insured_value: 695000.0,
        client_name: None,
    });

    // The registry's answer is not inspected, so even a 500 is fine.
    registry(&server).notify(&mortgage).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn fetches_service_codes_for_a_house() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/service-codes")
                .query_param("mlsId", "H1");
            then.status(200)
                .json_body(json!({"services": ["plumbing", "electric"]}));
        })
        .await;

    let codes = lookup(&server).fetch_service_codes("H1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(codes.0, json!(["plumbing", "electric"]));
}

#[tokio::test]
async fn missing_services_are_not_found() {
    let server = MockServer::start_async().await;
    for (house, body) in [
        ("null-services", r#"{"services": null}"#),
        ("no-services", r#"{"other": 1}"#),
        ("null-body", "null"),
        ("empty-body", ""),
    ] {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/service-codes")
                    .query_param("mlsId", house);
                then.status(200).body(body);
            })
            .await;
    }

    let client = lookup(&server);
    for house in ["null-services", "no-services", "null-body", "empty-body"] {
        match client.fetch_service_codes(house).await {
            Err(QuoteError::NotFound(_)) => {}
            other => panic!("{house}: expected not found, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn lookup_error_status_is_an_upstream_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/service-codes");
            then.status(404);
        })
        .await;

    assert!(matches!(
        lookup(&server).fetch_service_codes("H1").await,
        Err(QuoteError::Upstream { .. })
    ));
}
