//! External registry collaborator.
//!
//! The registry accepts a three-field search form and answers with an envelope of the shape
//! `{ "status": <flag>, "data": [<record>, ...] }`. This module owns both halves of that
//! contract: [`RegistrySearch`] is serialized as `application/x-www-form-urlencoded`, and
//! [`RegistryEnvelope`] interprets the answer.
//!
//! [`RegistryClient`] is the seam the lookup service depends on; [`HttpRegistryClient`] is the
//! production implementation.

use crate::config::CoreConfig;
use crate::doctor::DoctorRecord;
use crate::{LookupError, LookupResult};
use async_trait::async_trait;
use docsage_types::RegistrationNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The search form sent to the registry.
///
/// `Name` and `FatherName` are always sent, empty, because this flow only searches by number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrySearch {
    pub registration_no: String,
    pub name: String,
    pub father_name: String,
}

impl RegistrySearch {
    pub fn by_registration_number(registration_number: &RegistrationNumber) -> Self {
        Self {
            registration_no: registration_number.as_str().to_owned(),
            name: String::new(),
            father_name: String::new(),
        }
    }
}

/// The registry's response envelope, before interpretation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegistryEnvelope {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub data: Value,
}

impl RegistryEnvelope {
    /// Whether the registry reported a match.
    ///
    /// The flag is read loosely: `false`, `null`, a missing field, `0` and `""` all mean
    /// "no match".
    pub fn is_match(&self) -> bool {
        is_truthy(&self.status)
    }

    /// Interpret the envelope for `registration_number`.
    ///
    /// Returns the first record on a match, unchanged. Any further records are dropped.
    pub fn into_first_record(
        self,
        registration_number: &RegistrationNumber,
    ) -> LookupResult<DoctorRecord> {
        if !self.is_match() {
            return Err(LookupError::NotFound {
                registration_number: registration_number.to_string(),
            });
        }

        let Value::Array(records) = self.data else {
            return Err(LookupError::EmptyMatch);
        };
        let total = records.len();
        let Some(first) = records.into_iter().next() else {
            return Err(LookupError::EmptyMatch);
        };
        if total > 1 {
            tracing::debug!(
                registration_number = %registration_number,
                discarded = total - 1,
                "registry returned multiple matches; keeping the first"
            );
        }

        DoctorRecord::from_value(first).ok_or(LookupError::MalformedRecord)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Anything that can run a registry search.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn search(&self, search: &RegistrySearch) -> LookupResult<RegistryEnvelope>;
}

/// Registry client backed by `reqwest`.
///
/// Each search is a single POST with no retries. The optional timeout from [`CoreConfig`]
/// applies to the whole request.
#[derive(Clone, Debug)]
pub struct HttpRegistryClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRegistryClient {
    pub fn new(cfg: &CoreConfig) -> LookupResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.registry_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LookupError::HttpClientBuild)?;

        Ok(Self {
            endpoint: cfg.registry_url().to_owned(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn search(&self, search: &RegistrySearch) -> LookupResult<RegistryEnvelope> {
        tracing::debug!(endpoint = %self.endpoint, "querying registry");

        let response = self
            .client
            .post(&self.endpoint)
            .form(search)
            .send()
            .await
            .map_err(LookupError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(LookupError::from_reqwest)?;
        serde_json::from_slice(&body).map_err(LookupError::MalformedEnvelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reg(n: &str) -> RegistrationNumber {
        RegistrationNumber::parse(n).unwrap()
    }

    fn envelope(value: Value) -> RegistryEnvelope {
        serde_json::from_value(value).unwrap()
    }

    fn jane() -> Value {
        json!({
            "RegistrationNo": "12345-A",
            "Name": "Jane Doe",
            "FatherName": "John Doe",
            "Status": "Active"
        })
    }

    fn client_for(server: &MockServer, timeout: Option<Duration>) -> HttpRegistryClient {
        let cfg = CoreConfig::new(format!("{}/api/DRC/GetData", server.uri()), timeout).unwrap();
        HttpRegistryClient::new(&cfg).unwrap()
    }

    #[test]
    fn truthiness_follows_loose_json_rules() {
        for falsy in [json!(false), json!(null), json!(0), json!(""), json!(0.0)] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("ok"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn match_returns_first_record() {
        let env = envelope(json!({
            "status": true,
            "data": [jane(), { "RegistrationNo": "999", "Name": "Other", "FatherName": "", "Status": "" }]
        }));

        let record = env.into_first_record(&reg("12345-A")).unwrap();
        assert_eq!(record.into_value(), jane());
    }

    #[test]
    fn false_status_is_not_found_regardless_of_data() {
        let env = envelope(json!({ "status": false, "data": [jane()] }));
        let err = env.into_first_record(&reg("12345-A")).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));

        let env = envelope(json!({ "data": [] }));
        let err = env.into_first_record(&reg("12345-A")).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn truthy_status_without_records_is_upstream_failure() {
        for data in [json!([]), json!(null), json!({ "RegistrationNo": "1" })] {
            let env = envelope(json!({ "status": true, "data": data }));
            let err = env.into_first_record(&reg("1")).unwrap_err();
            assert!(matches!(err, LookupError::EmptyMatch));
        }
    }

    #[test]
    fn non_object_record_is_upstream_failure() {
        for first in [json!("12345-A"), json!(null), json!([jane()])] {
            let env = envelope(json!({ "status": true, "data": [first] }));
            let err = env.into_first_record(&reg("1")).unwrap_err();
            assert!(matches!(err, LookupError::MalformedRecord));
        }
    }

    #[test]
    fn match_relays_record_verbatim() {
        let odd = json!({
            "RegistrationNo": 12345,
            "Name": "Jane Doe",
            "FatherName": null,
            "Status": "Active",
            "Gender": "F"
        });
        let env = envelope(json!({ "status": 1, "data": [odd.clone()] }));

        let record = env.into_first_record(&reg("12345")).unwrap();

        assert_eq!(record.into_value(), odd);
    }

    #[tokio::test]
    async fn search_sends_form_encoded_three_field_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/DRC/GetData"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("RegistrationNo=12345-A&Name=&FatherName="))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": true, "data": [jane()] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert_eq!(client.endpoint(), format!("{}/api/DRC/GetData", server.uri()));
        let env = client
            .search(&RegistrySearch::by_registration_number(&reg("12345-A")))
            .await
            .expect("search succeeds");

        assert!(env.is_match());
    }

    #[tokio::test]
    async fn search_maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .search(&RegistrySearch::by_registration_number(&reg("1")))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::UpstreamStatus { status: 503 }));
    }

    #[tokio::test]
    async fn search_maps_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .search(&RegistrySearch::by_registration_number(&reg("1")))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn search_honours_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": true, "data": [jane()] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Some(Duration::from_secs(1)));
        let err = client
            .search(&RegistrySearch::by_registration_number(&reg("1")))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::UpstreamTimeout(_)));
    }

    #[tokio::test]
    async fn search_maps_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let cfg = CoreConfig::new(format!("http://{addr}/api/DRC/GetData"), None).unwrap();
        let client = HttpRegistryClient::new(&cfg).unwrap();
        let err = client
            .search(&RegistrySearch::by_registration_number(&reg("1")))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::UpstreamTransport(_)));
    }
}
