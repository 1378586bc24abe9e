//! Scope string parsing.
//!
//! A scope string is the space-delimited list of URIs a device attaches to
//! its probe match, e.g.
//! `onvif://www.onvif.org/name/Cam1 onvif://www.onvif.org/Profile/Streaming`.

/// Scope key of the hardware model
pub const HARDWARE_KEY: &str = "hardware";

/// Scope key of the MAC address
pub const MAC_KEY: &str = "MAC";

/// Scope key of the friendly name
pub const NAME_KEY: &str = "name";

/// Prefix of scopes advertising a supported profile
pub const PROFILE_PREFIX: &str = "onvif://www.onvif.org/Profile";

/// Return the value following the first occurrence of `key`.
///
/// The character right after the key is taken as the separator and skipped;
/// the value ends at the next space. The search is a plain substring search,
/// not token aware: a key that also occurs inside an earlier token or value
/// matches there.
pub fn extract_value(scopes: &str, key: &str) -> String {
    let Some(pos) = scopes.find(key) else {
        return String::new();
    };

    let rest = scopes[pos + key.len()..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| &scopes[pos + key.len() + i..])
        .unwrap_or("");

    rest.split(' ').next().unwrap_or("").to_string()
}

/// Return the last path segment of every profile scope, in order.
pub fn extract_profiles(scopes: &str) -> Vec<String> {
    scopes
        .split(' ')
        .filter(|scope| scope.starts_with(PROFILE_PREFIX))
        .filter_map(|scope| scope.rsplit('/').next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPES: &str = "onvif://www.onvif.org/name/Cam1 onvif://www.onvif.org/mac/AA:BB:CC:DD:EE:FF onvif://www.onvif.org/hardware/Model1";

    #[test]
    fn test_extract_mac() {
        assert_eq!(extract_value(SCOPES, "mac"), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_extract_name_and_hardware() {
        assert_eq!(extract_value(SCOPES, NAME_KEY), "Cam1");
        assert_eq!(extract_value(SCOPES, HARDWARE_KEY), "Model1");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(extract_value(SCOPES, "location"), "");
        assert_eq!(extract_value("", NAME_KEY), "");
    }

    #[test]
    fn test_key_at_end_of_string() {
        assert_eq!(extract_value("onvif://www.onvif.org/name", NAME_KEY), "");
        assert_eq!(extract_value("onvif://www.onvif.org/name/", NAME_KEY), "");
    }

    #[test]
    fn test_key_is_case_sensitive() {
        assert_eq!(extract_value(SCOPES, MAC_KEY), "");
        assert_eq!(
            extract_value("onvif://www.onvif.org/MAC/00:11:22:33:44:55", MAC_KEY),
            "00:11:22:33:44:55"
        );
    }

    #[test]
    fn test_substring_match_is_not_token_aware() {
        // "name" first occurs inside "hostname", so that token's tail is returned.
        let scopes = "onvif://www.onvif.org/hostname/gw onvif://www.onvif.org/name/Cam1";
        assert_eq!(extract_value(scopes, NAME_KEY), "gw");
    }

    #[test]
    fn test_separator_may_be_multibyte() {
        assert_eq!(extract_value("name\u{e9}Cam", NAME_KEY), "Cam");
    }

    #[test]
    fn test_extract_profiles_in_order() {
        let scopes = "onvif://www.onvif.org/Profile/Streaming onvif://www.onvif.org/name/Cam1 onvif://www.onvif.org/Profile/T onvif://www.onvif.org/Profile/Streaming";
        assert_eq!(extract_profiles(scopes), vec!["Streaming", "T", "Streaming"]);
    }

    #[test]
    fn test_extract_profiles_excludes_other_scopes() {
        let scopes = "onvif://www.onvif.org/type/video_encoder http://www.onvif.org/Profile/S onvif://www.onvif.org/location/Profile/X";
        assert!(extract_profiles(scopes).is_empty());
        assert!(extract_profiles("").is_empty());
    }

    #[test]
    fn test_profile_without_trailing_segment() {
        assert_eq!(
            extract_profiles("onvif://www.onvif.org/Profile/"),
            vec![String::new()]
        );
        assert_eq!(
            extract_profiles("onvif://www.onvif.org/ProfileG"),
            vec!["ProfileG".to_string()]
        );
    }
}
