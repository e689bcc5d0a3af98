//! Catalog Client
//!
//! Fetch adapter for the public artwork catalog API. Responses are
//! normalized into [`ArtworkPage`] so the rest of the app never sees the
//! wire format.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::artwork::{Artwork, ArtworkPage, PageInfo};
use crate::domain::config::ApiConfig;
use crate::domain::pagination::{PageRequest, pages_covering, total_pages};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawResponse {
    pagination: Option<RawPagination>,
    #[serde(default)]
    data: Vec<RawArtwork>,
}

#[derive(Debug, Deserialize)]
struct RawPagination {
    total: Option<u64>,
    limit: Option<u32>,
    offset: Option<u64>,
    total_pages: Option<u32>,
    current_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawArtwork {
    id: Option<u64>,
    title: Option<String>,
    place_of_origin: Option<String>,
    artist_display: Option<String>,
    inscriptions: Option<String>,
    date_start: Option<i32>,
    date_end: Option<i32>,
}

/// Empty or whitespace-only strings carry no information
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl RawArtwork {
    fn normalize(self) -> Option<Artwork> {
        let Some(id) = self.id else {
            debug!(title = ?self.title, "Dropping catalog row without id");
            return None;
        };
        Some(Artwork {
            id,
            title: clean(self.title),
            place_of_origin: clean(self.place_of_origin),
            artist_display: clean(self.artist_display),
            inscriptions: clean(self.inscriptions),
            date_start: self.date_start,
            date_end: self.date_end,
        })
    }
}

/// Parse a catalog response body into a normalized page
///
/// A missing pagination block is derived from `request` and the row count.
pub fn normalize_response(body: &str, request: &PageRequest) -> Result<ArtworkPage> {
    parse_response(body, request).map(|(page, _)| page)
}

/// Normalized page plus the number of rows the server sent before id-less
/// rows were dropped
fn parse_response(body: &str, request: &PageRequest) -> Result<(ArtworkPage, usize)> {
    let raw: RawResponse = serde_json::from_str(body)?;
    let received = raw.data.len();
    let rows: Vec<Artwork> = raw.data.into_iter().filter_map(RawArtwork::normalize).collect();

    let info = match raw.pagination {
        Some(p) => {
            let limit = p.limit.unwrap_or(request.rows_per_page);
            let total = p.total.unwrap_or(received as u64);
            PageInfo {
                total,
                limit,
                offset: p.offset.unwrap_or_else(|| request.first_row_index()),
                total_pages: p.total_pages.unwrap_or_else(|| total_pages(total, limit)),
                current_page: p.current_page.unwrap_or(request.page),
            }
        }
        None => {
            let total = request.first_row_index() + received as u64;
            PageInfo {
                total,
                limit: request.rows_per_page,
                offset: request.first_row_index(),
                total_pages: total_pages(total, request.rows_per_page),
                current_page: request.page,
            }
        }
    };

    Ok((ArtworkPage { rows, info }, received))
}

/// Rows gathered by [`CatalogClient::fetch_leading_rows`]
///
/// A failed page ends the walk; the rows read before it are kept.
#[derive(Debug)]
pub struct LeadingRows {
    pub rows: Vec<Artwork>,
    pub error: Option<Error>,
}

/// HTTP client for the artworks listing endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    fields: String,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fields: config.fields.join(","),
        })
    }

    /// URL of one listing page
    pub fn page_url(&self, request: &PageRequest) -> String {
        let mut url = format!(
            "{}/artworks?page={}&limit={}",
            self.base_url, request.page, request.rows_per_page
        );
        if !self.fields.is_empty() {
            url.push_str("&fields=");
            url.push_str(&self.fields);
        }
        url
    }

    /// Fetch and normalize one page
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<ArtworkPage> {
        self.fetch_counted(request).await.map(|(page, _)| page)
    }

    async fn fetch_counted(&self, request: &PageRequest) -> Result<(ArtworkPage, usize)> {
        let url = self.page_url(request);
        debug!(%url, "Fetching catalog page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let (page, received) = parse_response(&body, request)?;
        info!(
            page = request.page,
            rows = page.rows.len(),
            total = page.info.total,
            "Catalog page loaded"
        );
        Ok((page, received))
    }

    /// Fetch the first `count` rows of the catalog, page by page
    ///
    /// Stops early when the catalog runs out of rows. Rows without an id
    /// are skipped but do not count as the end of the catalog.
    pub async fn fetch_leading_rows(&self, count: u64, rows_per_page: u32) -> LeadingRows {
        let mut rows = Vec::new();
        let mut error = None;
        for request in pages_covering(count, rows_per_page) {
            let (page, received) = match self.fetch_counted(&request).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!(page = request.page, fetched = rows.len(), error = %e, "Leading rows fetch stopped");
                    error = Some(e);
                    break;
                }
            };
            let exhausted = received < request.rows_per_page as usize
                || request.page >= page.info.total_pages;
            rows.extend(page.rows);
            if exhausted {
                break;
            }
        }
        rows.truncate(usize::try_from(count).unwrap_or(usize::MAX));
        LeadingRows { rows, error }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {
            "total": 129884,
            "limit": 2,
            "offset": 2,
            "total_pages": 64942,
            "current_page": 2,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=3&limit=2"
        },
        "data": [
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte — 1884",
                "place_of_origin": "France",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "inscriptions": null,
                "date_start": 1884,
                "date_end": 1886
            },
            {
                "id": 6565,
                "title": "American Gothic",
                "place_of_origin": "United States",
                "artist_display": "Grant Wood\nAmerican, 1891-1942",
                "inscriptions": "   ",
                "date_start": 1930,
                "date_end": 1930
            }
        ],
        "info": { "license_text": "..." },
        "config": { "iiif_url": "https://www.artic.edu/iiif/2" }
    }"#;

    fn client() -> CatalogClient {
        CatalogClient::new(&ApiConfig::default()).expect("client")
    }

    #[test]
    fn normalizes_listing_response() {
        let page = normalize_response(SAMPLE, &PageRequest::new(2, 2)).expect("parse");

        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].id, 27992);
        assert_eq!(page.rows[0].place_of_origin.as_deref(), Some("France"));
        assert_eq!(page.rows[0].inscriptions, None);
        assert_eq!(page.rows[1].inscriptions, None);
        assert_eq!(page.rows[1].date_range(), "1930");

        assert_eq!(page.info.total, 129884);
        assert_eq!(page.info.total_pages, 64942);
        assert_eq!(page.info.current_page, 2);
        assert_eq!(page.info.offset, 2);
    }

    #[test]
    fn drops_rows_without_id() {
        let body = r#"{"data": [{"title": "ghost"}, {"id": 5, "title": ""}]}"#;
        let page = normalize_response(body, &PageRequest::new(1, 12)).expect("parse");

        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, 5);
        assert_eq!(page.rows[0].title, None);
    }

    #[test]
    fn derives_missing_pagination() {
        let body = r#"{"data": [{"id": 1}, {"id": 2}, {"id": 3}]}"#;
        let page = normalize_response(body, &PageRequest::new(3, 10)).expect("parse");

        assert_eq!(page.info.offset, 20);
        assert_eq!(page.info.total, 23);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.current_page, 3);
        assert_eq!(page.info.limit, 10);
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(normalize_response("<html>", &PageRequest::default()).is_err());
    }

    #[test]
    fn page_url_includes_fields() {
        let url = client().page_url(&PageRequest::new(4, 12));
        assert_eq!(
            url,
            "https://api.artic.edu/api/v1/artworks?page=4&limit=12\
             &fields=id,title,place_of_origin,artist_display,inscriptions,date_start,date_end"
        );
    }

    #[test]
    fn page_url_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/api/v1/".to_string(),
            fields: Vec::new(),
            ..ApiConfig::default()
        };
        let client = CatalogClient::new(&config).expect("client");
        assert_eq!(
            client.page_url(&PageRequest::new(1, 5)),
            "http://localhost:9000/api/v1/artworks?page=1&limit=5"
        );
    }

    // ==================== Local catalog server ====================

    /// Serve `handler(page, limit)` over HTTP/1.1 on a local port
    ///
    /// Returns a client pointed at the server and the pages requested so far.
    async fn serve(
        handler: impl Fn(u32, u32) -> (u16, String) + Send + Sync + 'static,
    ) -> (CatalogClient, Arc<Mutex<Vec<u32>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let requested = Arc::new(Mutex::new(Vec::new()));

        let seen = requested.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf);
                let target = head.split_whitespace().nth(1).unwrap_or("/");
                let (page, limit) = query_page(target);
                seen.lock().push(page);

                let (status, body) = handler(page, limit);
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        let config = ApiConfig {
            base_url: format!("http://{addr}/api/v1"),
            fields: Vec::new(),
            timeout_secs: 5,
        };
        (CatalogClient::new(&config).expect("client"), requested)
    }

    fn query_page(target: &str) -> (u32, u32) {
        let mut page = 1;
        let mut limit = 12;
        let query = target.split_once('?').map(|(_, q)| q).unwrap_or("");
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("page", v)) => page = v.parse().unwrap_or(1),
                Some(("limit", v)) => limit = v.parse().unwrap_or(12),
                _ => {}
            }
        }
        (page, limit)
    }

    /// One page of a catalog holding ids `1..=listed`, reporting `total`
    ///
    /// Rows whose id is in `without_id` are sent with a null id.
    fn catalog_page(page: u32, limit: u32, listed: u64, total: u64, without_id: &[u64]) -> String {
        let offset = u64::from(page - 1) * u64::from(limit);
        let data: Vec<_> = (offset + 1..=(offset + u64::from(limit)).min(listed))
            .map(|id| {
                let shown_id = (!without_id.contains(&id)).then_some(id);
                serde_json::json!({ "id": shown_id, "title": format!("Work {id}") })
            })
            .collect();
        serde_json::json!({
            "pagination": {
                "total": total,
                "limit": limit,
                "offset": offset,
                "total_pages": total_pages(total, limit),
                "current_page": page,
            },
            "data": data,
        })
        .to_string()
    }

    fn ids(rows: &[Artwork]) -> Vec<u64> {
        rows.iter().map(|a| a.id).collect()
    }

    #[tokio::test]
    async fn fetch_page_reads_local_catalog() {
        let (client, requested) = serve(|page, limit| {
            (200, catalog_page(page, limit, 25, 25, &[]))
        })
        .await;

        let page = client.fetch_page(&PageRequest::new(3, 10)).await.expect("page");
        assert_eq!(ids(&page.rows), (21..=25).collect::<Vec<_>>());
        assert_eq!(page.info.total, 25);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(*requested.lock(), vec![3]);
    }

    #[tokio::test]
    async fn server_error_maps_to_http_error() {
        let (client, _) = serve(|_, _| (500, "{}".to_string())).await;

        let err = client.fetch_page(&PageRequest::new(1, 12)).await.expect_err("status 500");
        match err {
            Error::Http { status, url } => {
                assert_eq!(status, 500);
                assert!(url.contains("page=1&limit=12"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn leading_rows_are_truncated_to_count() {
        let (client, requested) = serve(|page, limit| {
            (200, catalog_page(page, limit, 25, 25, &[]))
        })
        .await;

        let leading = client.fetch_leading_rows(7, 3).await;
        assert!(leading.error.is_none());
        assert_eq!(ids(&leading.rows), (1..=7).collect::<Vec<_>>());
        assert_eq!(*requested.lock(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn short_page_ends_leading_rows() {
        // The reported total is stale; the data runs out after 5 rows.
        let (client, requested) = serve(|page, limit| {
            (200, catalog_page(page, limit, 5, 100, &[]))
        })
        .await;

        let leading = client.fetch_leading_rows(10, 3).await;
        assert!(leading.error.is_none());
        assert_eq!(ids(&leading.rows), vec![1, 2, 3, 4, 5]);
        assert_eq!(*requested.lock(), vec![1, 2]);
    }

    #[tokio::test]
    async fn row_without_id_does_not_end_leading_rows() {
        let (client, requested) = serve(|page, limit| {
            (200, catalog_page(page, limit, 9, 9, &[2]))
        })
        .await;

        let leading = client.fetch_leading_rows(7, 3).await;
        assert!(leading.error.is_none());
        assert_eq!(ids(&leading.rows), vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(*requested.lock(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failed_page_keeps_rows_already_read() {
        let (client, _) = serve(|page, limit| {
            if page == 2 {
                (429, r#"{"error": "rate limited"}"#.to_string())
            } else {
                (200, catalog_page(page, limit, 30, 30, &[]))
            }
        })
        .await;

        let leading = client.fetch_leading_rows(20, 10).await;
        assert_eq!(ids(&leading.rows), (1..=10).collect::<Vec<_>>());
        assert!(matches!(leading.error, Some(Error::Http { status: 429, .. })));
    }
}
