// ═══════════════════════════════════════════════════════════════════
// Gateway Tests: request builder, response schemas, HTTP gateway
// credential handling (no network)
// ═══════════════════════════════════════════════════════════════════

use market_brief_core::errors::{CoreError, FailureKind};
use market_brief_core::gateway::gemini::GeminiGateway;
use market_brief_core::gateway::request::{GenerateRequest, ResponseSchema, SchemaType, Tool};
use market_brief_core::gateway::traits::Gateway;
use market_brief_core::models::settings::Settings;

mod request_builder {
    use super::*;

    #[test]
    fn defaults_are_plain_text() {
        let req = GenerateRequest::new("m", "p");
        assert_eq!(req.model, "m");
        assert_eq!(req.prompt, "p");
        assert!(!req.wants_json());
        assert!(!req.uses_web_search());
        assert!(req.config.temperature.is_none());
    }

    #[test]
    fn tool_is_added_once() {
        let req = GenerateRequest::new("m", "p")
            .tool(Tool::WebSearch)
            .tool(Tool::WebSearch);
        assert_eq!(req.config.tools, vec![Tool::WebSearch]);
    }

    #[test]
    fn schema_marks_request_structured() {
        let req = GenerateRequest::new("m", "p").schema(ResponseSchema::string());
        assert!(req.wants_json());
    }
}

mod response_schema {
    use super::*;

    #[test]
    fn object_requires_every_field_in_order() {
        let schema = ResponseSchema::object([
            ("b", ResponseSchema::string()),
            ("a", ResponseSchema::string()),
        ]);
        assert_eq!(schema.schema_type, SchemaType::Object);
        assert_eq!(schema.required_fields(), &["b", "a"]);
        assert_eq!(
            schema.property_ordering.as_deref(),
            Some(&["b".to_string(), "a".to_string()][..])
        );
    }

    #[test]
    fn serializes_as_openapi_subset() {
        let schema = ResponseSchema::array_of(ResponseSchema::object([(
            "impact",
            ResponseSchema::enumeration(["high", "low"]),
        )]));
        let v = serde_json::to_value(&schema).unwrap();
        assert_eq!(v["type"], "ARRAY");
        assert_eq!(v["items"]["type"], "OBJECT");
        assert_eq!(v["items"]["properties"]["impact"]["type"], "STRING");
        assert_eq!(v["items"]["properties"]["impact"]["enum"][1], "low");
        assert_eq!(v["items"]["propertyOrdering"][0], "impact");
        assert!(v.get("enum").is_none());
    }

    #[test]
    fn scalar_has_no_required_fields() {
        assert!(ResponseSchema::string().required_fields().is_empty());
    }
}

mod gemini_gateway {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let gw = GeminiGateway::new(&Settings::default());
        assert!(!gw.has_credential());
        assert_eq!(gw.name(), "Gemini");

        let err = gw
            .generate(&GenerateRequest::new("gemini-3-flash-preview", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingCredential));
        assert_eq!(err.kind(), FailureKind::MissingCredential);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        let settings = Settings {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..Settings::default()
        }
        .with_api_key("test-key");
        let gw = GeminiGateway::new(&settings);

        let err = gw
            .generate(&GenerateRequest::new("m", "hi"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::TransportFailure);
        assert!(!err.to_string().contains("test-key"));
    }
}
