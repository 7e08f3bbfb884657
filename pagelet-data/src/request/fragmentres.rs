use serde::Deserialize;
use serde_json::Value as JsonValue;

pub const STATUS_OK : &str = "OK";

#[derive(Deserialize)]
struct FragmentEnvelope {
    status: Option<String>,
    result: Option<String>
}

/* Anything other than the one success shape is a rejection. The reason text
 * keeps what the server actually sent so a disabled page and a garbled
 * response stay distinguishable downstream.
 */

#[derive(Clone,Debug,PartialEq,Eq)]
pub enum FragmentRes {
    Found(String),
    Rejected(String)
}

impl FragmentRes {
    pub fn decode(value: JsonValue) -> FragmentRes {
        let envelope : FragmentEnvelope = match serde_json::from_value(value) {
            Ok(envelope) => envelope,
            Err(e) => { return FragmentRes::Rejected(format!("malformed envelope: {}",e)); }
        };
        match envelope {
            FragmentEnvelope { status: Some(status), result: Some(result) } if status == STATUS_OK =>
                FragmentRes::Found(result),
            FragmentEnvelope { status: Some(status), .. } if status != STATUS_OK =>
                FragmentRes::Rejected(format!("server status '{}'",status)),
            _ =>
                FragmentRes::Rejected("incomplete envelope".to_string())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let res = FragmentRes::decode(json!({ "status": "OK", "result": "<p>hi</p>" }));
        assert_eq!(FragmentRes::Found("<p>hi</p>".to_string()),res);
    }

    #[test]
    fn fragment_not_transformed() {
        let html = "<div class=\"x\"><script>a&&b</script></div>";
        let res = FragmentRes::decode(json!({ "status": "OK", "result": html }));
        assert_eq!(FragmentRes::Found(html.to_string()),res);
    }

    #[test]
    fn other_status_rejected_with_reason() {
        let res = FragmentRes::decode(json!({ "status": "KO", "result": "<p>hi</p>" }));
        match res {
            FragmentRes::Rejected(reason) => { assert!(reason.contains("KO")); },
            _ => { panic!("expected rejection"); }
        }
    }

    #[test]
    fn missing_fields_rejected() {
        assert!(matches!(FragmentRes::decode(json!({ "result": "<p>hi</p>" })),FragmentRes::Rejected(_)));
        assert!(matches!(FragmentRes::decode(json!({ "status": "OK" })),FragmentRes::Rejected(_)));
        assert!(matches!(FragmentRes::decode(json!({})),FragmentRes::Rejected(_)));
    }

    #[test]
    fn malformed_shapes_rejected() {
        assert!(matches!(FragmentRes::decode(json!({ "status": 12, "result": "<p>hi</p>" })),FragmentRes::Rejected(_)));
        assert!(matches!(FragmentRes::decode(json!([1,2,3])),FragmentRes::Rejected(_)));
        assert!(matches!(FragmentRes::decode(json!("OK")),FragmentRes::Rejected(_)));
        assert!(matches!(FragmentRes::decode(json!(null)),FragmentRes::Rejected(_)));
    }
}
