use crate::error::ApiError;
use crate::model::ShortenRequest;
use jiff::Timestamp;

/// Validates a shorten request before the mapping store is invoked.
///
/// This is the input contract the store assumes: a non-empty http(s) URL
/// with at least one dot-delimited segment after the scheme, and an
/// expiry (when supplied) strictly in the future.
pub fn validate_request(request: &ShortenRequest) -> Result<(), ApiError> {
    validate_url(&request.url)?;
    if let Some(expiry) = request.custom_expiry {
        validate_expiry(expiry)?;
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), ApiError> {
    if url.is_empty() {
        return Err(ApiError::Validation("URL is required".to_string()));
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));

    // Requires a dot with at least one character on each side, as in
    // `example.com`.
    let has_dotted_host = rest.is_some_and(|rest| {
        rest.char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < rest.len())
    });

    if !has_dotted_host {
        return Err(ApiError::Validation(
            "Please enter a valid URL starting with http:// or https://".to_string(),
        ));
    }

    Ok(())
}

fn validate_expiry(expiry: Timestamp) -> Result<(), ApiError> {
    if expiry <= Timestamp::now() {
        return Err(ApiError::Validation(
            "Expiry date must be in the future".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn request(url: &str, custom_expiry: Option<Timestamp>) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
            custom_expiry,
        }
    }

    #[test]
    fn accepts_plain_http_and_https_urls() {
        assert!(validate_request(&request("http://example.com", None)).is_ok());
        assert!(validate_request(&request("https://example.com/a/b?q=1", None)).is_ok());
        assert!(validate_request(&request("https://sub.example.co.uk", None)).is_ok());
    }

    #[test]
    fn rejects_empty_url() {
        assert!(validate_request(&request("", None)).is_err());
    }

    #[test]
    fn rejects_unsupported_schemes() {
        assert!(validate_request(&request("ftp://example.com", None)).is_err());
        assert!(validate_request(&request("example.com", None)).is_err());
        assert!(validate_request(&request("//example.com", None)).is_err());
    }

    #[test]
    fn rejects_hosts_without_a_dotted_segment() {
        assert!(validate_request(&request("http://localhost", None)).is_err());
        assert!(validate_request(&request("https://", None)).is_err());
        assert!(validate_request(&request("https://.", None)).is_err());
        // A leading or trailing dot alone does not make a host.
        assert!(validate_request(&request("https://.com", None)).is_err());
        assert!(validate_request(&request("https://example.", None)).is_err());
    }

    #[test]
    fn accepts_future_expiry() {
        let future = Timestamp::now() + SignedDuration::from_hours(1);
        assert!(validate_request(&request("https://example.com", Some(future))).is_ok());
    }

    #[test]
    fn rejects_past_expiry() {
        let past = Timestamp::now() - SignedDuration::from_secs(1);
        let err = validate_request(&request("https://example.com", Some(past))).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
