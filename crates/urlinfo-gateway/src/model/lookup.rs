use serde::{Deserialize, Serialize};

/// Body of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Whether the canonical URL is in the malware database.
    pub malware: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_single_field() {
        let body = serde_json::to_string(&LookupResponse { malware: true }).unwrap();
        assert_eq!(body, r#"{"malware":true}"#);
    }
}
