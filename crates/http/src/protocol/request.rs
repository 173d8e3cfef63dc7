//! The request model handed to handlers.
//!
//! A [`Request`] is a raw url plus an optional auth token. It is never parsed up
//! front: handlers and the router pull out whichever url parts they need through
//! the accessors, which delegate to [`crate::url`].

use crate::protocol::RequestError;
use crate::url;
use crate::url::{QueryParams, Url};
use http::header::AUTHORIZATION;
use tracing::trace;

const BEARER_PREFIX: &str = "Bearer ";

/// An incoming request.
///
/// Fields are private, a request stays unchanged for the whole call once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Request {
    url: String,
    auth_token: String,
}

impl Request {
    /// Creates a request with an empty auth token
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), auth_token: String::new() }
    }

    /// Creates a request carrying the given auth token
    pub fn with_token(url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self { url: url.into(), auth_token: auth_token.into() }
    }

    /// Returns the raw, unparsed url
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the auth token, empty when none was supplied
    #[inline]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Returns the path part of the url, which is what routing matches on
    #[inline]
    pub fn path(&self) -> &str {
        url::path(&self.url)
    }

    pub fn query_params(&self) -> QueryParams<'_> {
        url::query_params(&self.url)
    }

    pub fn parsed_url(&self) -> Url<'_> {
        Url::parse(&self.url)
    }
}

/// Converts an `http::Request` into a [`Request`].
///
/// The url is the request uri as written, the auth token comes from the
/// `Authorization` header with an optional `Bearer ` prefix removed.
impl<B> TryFrom<&http::Request<B>> for Request {
    type Error = RequestError;

    fn try_from(req: &http::Request<B>) -> Result<Self, Self::Error> {
        let url = req.uri().to_string();
        let auth_token = match req.headers().get(AUTHORIZATION) {
            Some(value) => {
                let value = value.to_str().map_err(RequestError::invalid_authorization)?;
                value.strip_prefix(BEARER_PREFIX).unwrap_or(value).to_owned()
            }
            None => {
                trace!(url = %url, "no authorization header, using empty auth token");
                String::new()
            }
        };

        Ok(Self { url, auth_token })
    }
}
