use crate::{ClientError, ClientResult};

use url::{ParseError, Url};

/// Resolve a configured endpoint the way a page would: absolute URLs are
/// used as-is, relative ones are joined onto the page URL.
pub fn resolve_url(page_url: Option<&Url>, raw: &str) -> ClientResult<Url> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => match page_url {
            Some(base) => base.join(raw).map_err(|e| ClientError::url(raw, e.to_string())),
            None => Err(ClientError::url(
                raw,
                "relative URL needs a page URL to resolve against",
            )),
        },
        Err(e) => Err(ClientError::url(raw, e.to_string())),
    }
}
