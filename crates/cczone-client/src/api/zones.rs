//! Zone catalog endpoints.

use crate::CatalogClient;
use cczone_core::{Result, ZoneRecord};

/// Zone catalog endpoints
pub struct ZonesApi<'a> {
    client: &'a CatalogClient,
}

impl<'a> ZonesApi<'a> {
    pub(crate) const fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// List every deployment zone
    ///
    /// Public endpoint: no authentication, no pagination.
    pub async fn list(&self) -> Result<Vec<ZoneRecord>> {
        self.client.get("/v2/products/zones").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cczone_core::ZoneCheckError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn lists_zones() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/products/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "name": "par", "city": "Paris", "countryCode": "FR" },
                { "name": "mtl", "city": "Montreal", "countryCode": "CA" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let zones = client.zones().list().await.unwrap();

        let names: Vec<_> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["par", "mtl"]);
        assert_eq!(zones[1].city.as_deref(), Some("Montreal"));
    }

    #[tokio::test]
    async fn api_error_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/products/zones"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "id": 503,
                "message": "Service unavailable",
                "type": "error"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.zones().list().await.unwrap_err();

        match err {
            ZoneCheckError::Api { code, message } => {
                assert_eq!(code, 503);
                assert_eq!(message, "Service unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_endpoint_is_not_found() {
        let server = MockServer::start().await;

        let client = client_for(&server).await;
        let err = client.zones().list().await.unwrap_err();

        assert!(matches!(err, ZoneCheckError::NotFound { .. }));
        assert!(err.is_catalog_error());
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/products/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.zones().list().await.unwrap_err();

        assert!(matches!(err, ZoneCheckError::Json(_)));
    }
}
