//! Qontak WhatsApp broadcast endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, MekariClient};

/// Path of the direct broadcast endpoint.  Creation success is HTTP 201.
pub const DIRECT_BROADCAST_PATH: &str = "/qontak/chat/v1/broadcasts/whatsapp/direct";

/// Template language selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
}

/// One body variable substituted into the message template.
///
/// `key` is the 1-based position, `value` the template variable name and
/// `value_text` the substituted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyParameter {
    pub key: String,
    pub value: String,
    pub value_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(default)]
    pub body: Vec<BodyParameter>,
}

/// Direct WhatsApp broadcast to a single recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectBroadcast {
    pub to_number: String,
    pub to_name: String,
    pub message_template_id: String,
    pub channel_integration_id: String,
    pub language: Language,
    pub parameters: Parameters,
}

/// Send a direct broadcast (POST).
pub async fn send_direct(client: &MekariClient, broadcast: &DirectBroadcast) -> ApiResponse {
    let payload = serde_json::to_value(broadcast).expect("broadcast serializes");
    client
        .send(Method::POST, DIRECT_BROADCAST_PATH, Some(&payload))
        .await
}

/// Fetch the delivery log of a previously created broadcast (GET).
pub async fn fetch_log(client: &MekariClient, broadcast_id: &str) -> ApiResponse {
    client.send(Method::GET, &log_path(broadcast_id), None).await
}

/// Path of the delivery log endpoint for `broadcast_id`.
pub fn log_path(broadcast_id: &str) -> String {
    format!("/qontak/chat/v1/broadcasts/{broadcast_id}/whatsapp/log")
}

/// Extract `data.id` from a broadcast-creation response.
pub fn broadcast_id(resp: &ApiResponse) -> Option<String> {
    resp.body
        .as_ref()?
        .get("data")?
        .get("id")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_path_embeds_broadcast_id() {
        assert_eq!(
            log_path("fbd4da17-a20e"),
            "/qontak/chat/v1/broadcasts/fbd4da17-a20e/whatsapp/log"
        );
    }

    #[test]
    fn broadcast_id_reads_data_id() {
        let resp = ApiResponse {
            body: Some(json!({"data": {"id": "abc-123", "name": "promo"}})),
            status_code: 201,
        };
        assert_eq!(broadcast_id(&resp).as_deref(), Some("abc-123"));

        let missing = ApiResponse {
            body: Some(json!({"data": {}})),
            status_code: 201,
        };
        assert_eq!(broadcast_id(&missing), None);

        let empty = ApiResponse {
            body: None,
            status_code: 500,
        };
        assert_eq!(broadcast_id(&empty), None);
    }

    #[test]
    fn direct_broadcast_serializes_wire_shape() {
        let b = DirectBroadcast {
            to_number: "628123456789".into(),
            to_name: "Iqbal".into(),
            message_template_id: "tmpl-1".into(),
            channel_integration_id: "chan-1".into(),
            language: Language { code: "id".into() },
            parameters: Parameters {
                body: vec![BodyParameter {
                    key: "1".into(),
                    value: "customer_name".into(),
                    value_text: "Iqbal".into(),
                }],
            },
        };
        let v = serde_json::to_value(&b).unwrap();
        assert_eq!(v["language"]["code"], "id");
        assert_eq!(v["parameters"]["body"][0]["key"], "1");
        assert_eq!(v["parameters"]["body"][0]["value"], "customer_name");
        assert_eq!(v["to_number"], "628123456789");
    }
}
