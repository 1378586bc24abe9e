//! Probe message construction.

use uuid::Uuid;

/// WS-Addressing action of a discovery probe
pub const PROBE_ACTION: &str = "http://schemas.xmlsoap.org/ws/2005/04/discovery/Probe";

/// Fixed WS-Addressing destination for multicast discovery
pub const DISCOVERY_TO: &str = "urn:schemas-xmlsoap-org:ws:2005:04:discovery";

/// Generate the unique token identifying one probe session.
pub fn new_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// Render the probe envelope carrying `token` as its message id.
///
/// `Types` and `Scopes` are left empty so that every listening device treats
/// it as a match-all probe.
pub fn build_probe(token: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
	<s:Header xmlns:a="http://schemas.xmlsoap.org/ws/2004/08/addressing">
		<a:Action>{action}</a:Action>
		<a:MessageID>urn:uuid:{token}</a:MessageID>
		<a:To>{to}</a:To>
	</s:Header>
	<s:Body>
		<d:Probe xmlns:d="http://schemas.xmlsoap.org/ws/2005/04/discovery">
			<d:Types />
			<d:Scopes />
		</d:Probe>
	</s:Body>
</s:Envelope>"#,
        action = PROBE_ACTION,
        token = token,
        to = DISCOVERY_TO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::tags::find_tag_value;

    #[test]
    fn test_session_tokens_are_unique() {
        let a = new_session_token();
        let b = new_session_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_probe_carries_token() {
        let probe = build_probe("1234-abcd");
        assert_eq!(find_tag_value(&probe, "MessageID"), "urn:uuid:1234-abcd");
    }

    #[test]
    fn test_probe_advertises_discovery_action() {
        let probe = build_probe("t");
        assert_eq!(find_tag_value(&probe, "Action"), PROBE_ACTION);
        assert_eq!(find_tag_value(&probe, "a:To"), DISCOVERY_TO);
        assert!(probe.contains("<d:Probe"));
        assert!(probe.contains("<d:Types />"));
        assert!(probe.contains("<d:Scopes />"));
    }

    #[test]
    fn test_probe_is_deterministic_for_token() {
        assert_eq!(build_probe("same"), build_probe("same"));
    }
}
