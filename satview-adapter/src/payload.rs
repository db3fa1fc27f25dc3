use serde::Deserialize;
use url::Url;

use crate::satellite::fields;
use crate::{CatalogError, Satellite};

/// Path of the catalog listing endpoint, relative to the API base URL.
pub const CATALOG_PATH: &str = "v1/satellites";

/// The server-side part of a catalog request.
///
/// Only object types are filtered by the API; name, NORAD id and orbit filters run locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub object_types: Vec<String>,
}

impl CatalogQuery {
    pub fn new(object_types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            object_types: object_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Query parameters in request order. `objectTypes` is omitted when empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.object_types.is_empty() {
            pairs.push(("objectTypes", self.object_types.join(",")));
        }
        pairs.push(("attributes", fields::ALL.join(",")));
        pairs
    }

    /// The full request URL against `base`.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join(CATALOG_PATH)?;
        {
            let mut q = url.query_pairs_mut();
            for (k, v) in self.query_pairs() {
                q.append_pair(k, &v);
            }
        }
        Ok(url)
    }
}

/// Anything that can answer a [`CatalogQuery`]; the shell owns the transport.
pub trait CatalogSource {
    fn fetch(&mut self, query: &CatalogQuery) -> Result<Vec<Satellite>, CatalogError>;
}

impl<F> CatalogSource for F
where
    F: FnMut(&CatalogQuery) -> Result<Vec<Satellite>, CatalogError>,
{
    fn fetch(&mut self, query: &CatalogQuery) -> Result<Vec<Satellite>, CatalogError> {
        self(query)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    status_code: Option<u16>,
    message: Option<String>,
    data: Option<Vec<Satellite>>,
}

/// Fails for any non-2xx HTTP status.
pub fn check_http_status(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Http { status })
    }
}

/// Decodes a catalog response body.
///
/// A non-zero `statusCode` other than 200 is an API error carrying the server's message. A body
/// without `data` is an empty catalog.
pub fn decode_catalog(body: &str) -> Result<Vec<Satellite>, CatalogError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    match envelope.status_code {
        Some(status) if status != 0 && status != 200 => Err(CatalogError::Api {
            status: Some(status),
            message: envelope.message.unwrap_or_else(|| "API Error".to_owned()),
        }),
        _ => {
            let rows = envelope.data.unwrap_or_default();
            adebug!(rows = rows.len(), "catalog decoded");
            Ok(rows)
        }
    }
}
