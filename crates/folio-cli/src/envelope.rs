use serde::Serialize;
use serde_json::Value;

pub const ENVELOPE_SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Serialize)]
pub struct ServiceErrorEnvelope<'a> {
    pub code: &'a str,
    pub message: &'a str,
    pub details: Option<&'a Value>,
}

#[derive(Debug, Serialize)]
pub struct ServiceEnvelope<'a> {
    pub schema_version: &'static str,
    pub command: &'a str,
    pub ok: bool,
    pub result: Option<Value>,
    pub error: Option<ServiceErrorEnvelope<'a>>,
}

pub fn success_envelope(command: &str, result: Value) -> serde_json::Result<String> {
    serde_json::to_string(&ServiceEnvelope {
        schema_version: ENVELOPE_SCHEMA_VERSION,
        command,
        ok: true,
        result: Some(result),
        error: None,
    })
}

/// Error envelope; never fails, degrading to a hand-built payload if needed.
pub fn error_envelope(command: &str, code: &str, message: &str, details: Option<&Value>) -> String {
    let envelope = ServiceEnvelope {
        schema_version: ENVELOPE_SCHEMA_VERSION,
        command,
        ok: false,
        result: None,
        error: Some(ServiceErrorEnvelope {
            code,
            message,
            details,
        }),
    };

    serde_json::to_string(&envelope).unwrap_or_else(|serialize_error| {
        serde_json::json!({
            "schema_version": ENVELOPE_SCHEMA_VERSION,
            "command": command,
            "ok": false,
            "result": Value::Null,
            "error": {
                "code": "internal.serialize",
                "message": format!("failed to serialize service error envelope: {serialize_error}"),
                "details": Value::Null,
            }
        })
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_success_wraps_result_in_v1_shape() {
        let payload = success_envelope("projects", json!({"total": 2})).expect("serialize");
        let value: Value = serde_json::from_str(&payload).expect("json");

        assert_eq!(value["schema_version"], "v1");
        assert_eq!(value["command"], "projects");
        assert_eq!(value["ok"], true);
        assert_eq!(value["result"]["total"], 2);
        assert!(value["error"].is_null());
    }

    #[test]
    fn envelope_error_keeps_code_message_and_details() {
        let details = json!({"fields": ["email"]});
        let payload = error_envelope("contact", "folio.user", "email is invalid", Some(&details));
        let value: Value = serde_json::from_str(&payload).expect("json");

        assert_eq!(value["ok"], false);
        assert!(value.get("result").is_some());
        assert_eq!(value["error"]["code"], "folio.user");
        assert_eq!(value["error"]["message"], "email is invalid");
        assert_eq!(value["error"]["details"]["fields"][0], "email");
    }

    #[test]
    fn envelope_error_serializes_missing_details_as_null() {
        let payload = error_envelope("training", "folio.runtime", "boom", None);
        let value: Value = serde_json::from_str(&payload).expect("json");

        assert!(value["error"].get("details").is_some());
        assert!(value["error"]["details"].is_null());
    }
}
