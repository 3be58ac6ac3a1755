//! Best-effort session claim extraction
//!
//! Tokens are decoded client-side purely for display (greeting the user by
//! name). The signature is never checked and nothing here is an authorization
//! decision: the backend accepts or rejects the token on every API call.

use serde::{Deserialize, Serialize};

/// Claims carried in the token payload.
///
/// Every field is optional: the backend contract only promises a bag of
/// claims, and a token missing all of them is still a valid session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Expiry as a Unix timestamp, shown informationally by `status`.
    /// Never enforced locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Name to greet the user with, falling back across claims
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("User")
    }
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Decode the claims from a token's payload segment.
///
/// Returns `None` for anything that does not parse as header.payload.signature
/// with a JSON payload. A decode failure means "no session", never an error.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = base64_decode_url(parts[1]).ok()?;
    serde_json::from_slice(&payload_bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_full_claims() {
        let token = make_token(
            r#"{"email":"user@example.com","name":"Alice Smith","username":"alice","id":"u-1"}"#,
        );

        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
        assert_eq!(claims.name.as_deref(), Some("Alice Smith"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_decode_ignores_unknown_claims() {
        let token = make_token(r#"{"username":"alice","role":"admin","iat":1700000000}"#);

        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_decode_not_a_jwt() {
        assert!(decode_claims("not-a-jwt").is_none());
    }

    #[test]
    fn test_decode_wrong_segment_count() {
        assert!(decode_claims("only.two").is_none());
        assert!(decode_claims("a.b.c.d").is_none());
    }

    #[test]
    fn test_decode_bad_base64_payload() {
        assert!(decode_claims("header.!!!not-base64!!!.sig").is_none());
    }

    #[test]
    fn test_decode_payload_not_json() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let body = URL_SAFE_NO_PAD.encode("plain text, not json");
        let token = format!("{header}.{body}.sig");
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn test_display_name_prefers_username() {
        let claims = Claims {
            email: Some("user@example.com".to_string()),
            name: Some("Alice Smith".to_string()),
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_name_then_email() {
        let claims = Claims {
            email: Some("user@example.com".to_string()),
            name: Some("Alice Smith".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.display_name(), "Alice Smith");

        let claims = Claims {
            email: Some("user@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(claims.display_name(), "user@example.com");
    }

    #[test]
    fn test_display_name_literal_fallback() {
        assert_eq!(Claims::default().display_name(), "User");
    }

    #[test]
    fn test_base64url_characters_round_trip() {
        // Payload chosen so the base64url encoding contains - and _
        let token = make_token(r#"{"name":"<<???>>~~"}"#);
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.name.as_deref(), Some("<<???>>~~"));
    }
}
