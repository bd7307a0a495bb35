//! Integration tests for the fare backend clients (wiremock-based)

use domain::{Coordinate, ProviderService};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_fares::{
    FareClient, FareServiceConfig, FareServiceError, HttpFareClient, HttpLocationSearchClient,
    LocationSearchClient, normalize_prices,
};

fn config_for_mock(base_url: &str) -> FareServiceConfig {
    FareServiceConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..FareServiceConfig::default()
    }
}

fn kent_ridge() -> Coordinate {
    Coordinate::new(1.305_893, 103.773_858).unwrap()
}

fn utown() -> Coordinate {
    Coordinate::new(1.305_202, 103.773_905).unwrap()
}

const fn sample_prices_json() -> &'static str {
    r#"{
        "message": "Successfully retrieved prices",
        "data": {
            "grab": {
                "services": [
                    {
                        "serviceID": 156,
                        "serviceName": "GrabCar 6",
                        "eta": 8,
                        "fare": { "currency": "SGD", "maxFare": 15.18, "minFare": 11.04 },
                        "deepLink": "https://grab.onelink.me/2695613898?taxiTypeId=156",
                        "surgeNotice": "LOW_SURGE",
                        "iconLink": "https://myteksi.s3.amazonaws.com/156.png",
                        "directDeepLink": "grab://open?taxiTypeId=156",
                        "ett": 4
                    },
                    {
                        "serviceID": 302,
                        "serviceName": "JustGrab",
                        "eta": 6,
                        "fare": { "currency": "SGD", "maxFare": 11.88, "minFare": 8.64 },
                        "deepLink": "https://grab.onelink.me/2695613898?taxiTypeId=302",
                        "surgeNotice": "HIGH_SURGE",
                        "iconLink": "https://myteksi.s3.amazonaws.com/302.png",
                        "directDeepLink": "grab://open?taxiTypeId=302",
                        "ett": 4
                    }
                ]
            },
            "gojek": 8.13,
            "meteredFare": 8.57,
            "zig": 13.06
        }
    }"#
}

const fn sample_locations_json() -> &'static str {
    r#"{
        "message": "Successfully retrieved locations",
        "results": [
            {
                "address": "2 College Avenue West",
                "name": "Stephen Riady Centre",
                "shortName": "SRC",
                "tips": "UTown",
                "distanceBetween": 0.1,
                "latitude": 1.30457,
                "longitude": 103.772392
            },
            {
                "address": "21 Lower Kent Ridge Road",
                "name": "NUS",
                "shortName": "NUS",
                "tips": "",
                "distanceBetween": 1.2,
                "latitude": 1.2966,
                "longitude": 103.7764
            }
        ]
    }"#
}

#[tokio::test]
async fn test_fetch_prices_sends_trip_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .and(query_param("fromLat", "1.305893"))
        .and(query_param("fromLong", "103.773858"))
        .and(query_param("toLat", "1.305202"))
        .and(query_param("toLong", "103.773905"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_prices_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let raw = client.fetch_prices(kent_ridge(), utown()).await.unwrap();

    assert_eq!(raw.grab.services.len(), 2);
    assert!((raw.zig - 13.06).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_fetch_and_normalize() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_prices_json()))
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let raw = client.fetch_prices(kent_ridge(), utown()).await.unwrap();
    let offers = normalize_prices(raw).unwrap();

    assert_eq!(offers.len(), 5);
    assert_eq!(offers[0].service_name(), Some("GrabCar 6"));
    assert_eq!(offers[0].surge(), Some(false));
    assert_eq!(offers[1].service_name(), Some("JustGrab"));
    assert_eq!(offers[1].surge(), Some(true));
    assert_eq!(offers[1].link(), Some("grab://open?taxiTypeId=302"));
    assert_eq!(offers[2].service(), ProviderService::Gojek);
    assert_eq!(offers[3].service(), ProviderService::StandardTaxi);
    assert_eq!(offers[4].service(), ProviderService::Zig);
}

#[tokio::test]
async fn test_fetch_prices_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_prices(kent_ridge(), utown()).await.unwrap_err();

    assert!(matches!(err, FareServiceError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_prices_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_prices(kent_ridge(), utown()).await.unwrap_err();

    assert!(matches!(
        err,
        FareServiceError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_fetch_prices_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Service waking up</html>"))
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_prices(kent_ridge(), utown()).await.unwrap_err();

    assert!(matches!(err, FareServiceError::ParseError(_)));
}

#[tokio::test]
async fn test_fetch_prices_null_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getprices/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"message": "Could not find route", "data": null}"#),
        )
        .mount(&server)
        .await;

    let client = HttpFareClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_prices(kent_ridge(), utown()).await.unwrap_err();

    assert!(matches!(err, FareServiceError::NoOffersFound(_)));
}

#[tokio::test]
async fn test_fetch_prices_connection_refused() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpFareClient::new(&config_for_mock(&uri)).unwrap();
    let err = client.fetch_prices(kent_ridge(), utown()).await.unwrap_err();

    assert!(matches!(err, FareServiceError::ConnectionFailed(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_search_locations_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("searchString", "utown"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_locations_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpLocationSearchClient::new(&config_for_mock(&server.uri())).unwrap();
    let results = client.search_locations("utown").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].short_name, "SRC");
    assert_eq!(results[1].name, "NUS");
}

#[tokio::test]
async fn test_search_locations_encodes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("searchString", "Kent Ridge & co"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message": "ok", "results": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpLocationSearchClient::new(&config_for_mock(&server.uri())).unwrap();
    let results = client.search_locations("Kent Ridge & co").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_locations_empty_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_locations_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpLocationSearchClient::new(&config_for_mock(&server.uri())).unwrap();
    let results = client.search_locations("").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_locations_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message": "ok"}"#))
        .mount(&server)
        .await;

    let client = HttpLocationSearchClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search_locations("utown").await.unwrap_err();
    assert!(matches!(err, FareServiceError::ParseError(_)));
}
