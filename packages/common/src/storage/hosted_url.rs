use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostedUrlError {
    #[error("hosted URL has an empty object segment")]
    EmptyPath,

    #[error("hosted URL object segment is not valid UTF-8 after decoding: {0}")]
    Undecodable(String),
}

/// Recognizes public download URLs of the object store we own, e.g.
/// `https://firebasestorage.googleapis.com/v0/b/<bucket>/o/<encoded path>?alt=media`,
/// and recovers the store-native object path from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedUrlPattern {
    host_suffix: String,
}

impl HostedUrlPattern {
    pub fn new(host_suffix: impl Into<String>) -> Self {
        Self {
            host_suffix: host_suffix.into().trim_start_matches('.').to_ascii_lowercase(),
        }
    }

    /// Extract the decoded object path from `uri`.
    ///
    /// Returns `Ok(None)` for URIs that do not have the hosted shape (third-party
    /// links, data URIs, ...). Returns an error only when the URI is hosted but its
    /// object segment is empty or cannot be decoded.
    pub fn object_path(&self, uri: &str) -> Result<Option<String>, HostedUrlError> {
        let uri = uri.trim();
        let Some(rest) = uri
            .strip_prefix("https://")
            .or_else(|| uri.strip_prefix("http://"))
        else {
            return Ok(None);
        };

        let Some(slash) = rest.find('/') else {
            return Ok(None);
        };
        let (authority, path_and_query) = rest.split_at(slash);

        if !self.matches_host(authority) {
            return Ok(None);
        }

        let path_end = path_and_query
            .find(|c| c == '?' || c == '#')
            .unwrap_or(path_and_query.len());
        let path = &path_and_query[..path_end];

        let Some(marker) = path.find("/o/") else {
            return Ok(None);
        };
        let encoded = &path[marker + "/o/".len()..];
        if encoded.is_empty() {
            return Err(HostedUrlError::EmptyPath);
        }

        let decoded =
            urlencoding::decode(encoded).map_err(|e| HostedUrlError::Undecodable(e.to_string()))?;
        if decoded.is_empty() {
            return Err(HostedUrlError::EmptyPath);
        }
        Ok(Some(decoded.into_owned()))
    }

    fn matches_host(&self, authority: &str) -> bool {
        // Strip userinfo and port.
        let host = authority.rsplit('@').next().unwrap_or(authority);
        let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();

        host == self.host_suffix
            || host
                .strip_suffix(self.host_suffix.as_str())
                .is_some_and(|head| head.ends_with('.'))
    }
}
