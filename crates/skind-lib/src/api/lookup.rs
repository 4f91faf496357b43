use super::mojang::MojangApi;
use crate::error::{ApiError, Result};
use crate::http::HttpMethod;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resolved player UUID with the canonically-cased name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameUuid {
    pub id: Uuid,
    pub name: String,
}

impl MojangApi {
    /// Resolve a username to its UUID.
    ///
    /// Uses the bulk lookup endpoint with a single name, so only the first
    /// record of the response is meaningful. An empty result is `NotFound`.
    pub async fn get_uuid(&self, username: &str) -> Result<UsernameUuid> {
        let url = format!(
            "{}/minecraft/profile/lookup/bulk/byname",
            self.minecraft_services
        );
        let body = serde_json::json!([username]).to_string().into_bytes();

        log::debug!("API call: get_uuid for username: {}", username);
        let response = self
            .client
            .request_json(HttpMethod::Post, &url, Some(body))
            .await?;

        match response.status {
            200 => {
                let results: Vec<UsernameUuid> =
                    serde_json::from_slice(&response.body).map_err(ApiError::ResponseParse)?;

                results
                    .into_iter()
                    .next()
                    .ok_or_else(|| ApiError::NotFound(username.to_string()))
            }
            400 => Err(ApiError::BadRequest),
            status => Err(ApiError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mojang::with_http_client;
    use crate::http::mock::MockHttpClient;
    use crate::http::{HEADER_ACCEPT, HEADER_CONTENT_TYPE, MIME_JSON};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn api_with_mock() -> (MojangApi, Arc<MockHttpClient>) {
        let client = Arc::new(MockHttpClient::new());
        let api = MojangApi::new(vec![with_http_client(client.clone())]).unwrap();
        (api, client)
    }

    #[tokio::test]
    async fn test_get_uuid_ok() {
        let (api, client) = api_with_mock();
        client.respond_with_string(
            200,
            r#"[{
                "id": "069a79f444e94726a5befca90e38aaf5",
                "name": "Notch"
            }]"#,
        );

        let res = assert_ok!(api.get_uuid("notch").await);

        assert_eq!(res.name, "Notch");
        assert_eq!(
            res.id,
            Uuid::parse_str("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_uuid_accepts_dashed_id() {
        let (api, client) = api_with_mock();
        client.respond_with_string(
            200,
            r#"[{"id": "069a79f4-44e9-4726-a5be-fca90e38aaf5", "name": "Notch"}]"#,
        );

        let res = assert_ok!(api.get_uuid("Notch").await);
        assert_eq!(res.id.simple().to_string(), "069a79f444e94726a5befca90e38aaf5");
    }

    #[tokio::test]
    async fn test_get_uuid_sends_single_name_bulk_request() {
        let (api, client) = api_with_mock();
        client.respond_with_string(200, "[]");

        let _ = api.get_uuid("Notch").await;

        let sent = client.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(
            sent.url,
            "https://api.minecraftservices.com/minecraft/profile/lookup/bulk/byname"
        );
        assert_eq!(sent.body.as_deref(), Some(&br#"["Notch"]"#[..]));
        assert_eq!(sent.headers.get(HEADER_ACCEPT).map(String::as_str), Some(MIME_JSON));
        assert_eq!(
            sent.headers.get(HEADER_CONTENT_TYPE).map(String::as_str),
            Some(MIME_JSON)
        );
    }

    #[tokio::test]
    async fn test_get_uuid_takes_first_record() {
        let (api, client) = api_with_mock();
        client.respond_with_string(
            200,
            r#"[
                {"id": "069a79f444e94726a5befca90e38aaf5", "name": "Notch"},
                {"id": "6fff97fed35d425c9fb9c1355a8fb117", "name": "dreamscached"}
            ]"#,
        );

        let res = assert_ok!(api.get_uuid("Notch").await);
        assert_eq!(res.name, "Notch");
    }

    #[tokio::test]
    async fn test_get_uuid_missing_username() {
        let (api, client) = api_with_mock();
        client.respond_with_string(200, "[]");

        let err = assert_err!(api.get_uuid("missingUsername").await);

        assert!(err.is_not_found());
        match err {
            ApiError::NotFound(name) => assert_eq!(name, "missingUsername"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_uuid_bad_username() {
        let (api, client) = api_with_mock();
        client.respond_with_string(400, "");

        let err = assert_err!(api.get_uuid("").await);
        assert!(matches!(err, ApiError::BadRequest));
    }

    #[tokio::test]
    async fn test_get_uuid_unexpected_status() {
        let (api, client) = api_with_mock();
        client.respond_with_string(418, "");

        let err = assert_err!(api.get_uuid("").await);
        assert!(matches!(err, ApiError::UnexpectedStatus(418)));
    }

    #[tokio::test]
    async fn test_get_uuid_malformed_body() {
        let (api, client) = api_with_mock();
        client.respond_with_string(200, r#"{"id": "not-an-array"}"#);

        let err = assert_err!(api.get_uuid("Notch").await);
        assert!(matches!(err, ApiError::ResponseParse(_)));
    }

    #[tokio::test]
    async fn test_get_uuid_transport_failure() {
        let (api, client) = api_with_mock();
        client.respond_with_error("connection reset");

        let err = assert_err!(api.get_uuid("Notch").await);
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
