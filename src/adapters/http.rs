use crate::domain::model::{
    DoctorRecord, QueryEncoding, DEFAULT_QUERY_PARAMETER, DEFAULT_SEARCH_PATH,
};
use crate::domain::ports::{ConfigProvider, DoctorSource};
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Doctor search over HTTP: `GET {base}{search_path}?{parameter}=<problem>`.
///
/// No timeout and no retry are configured on the client.
#[derive(Debug, Clone)]
pub struct HttpDoctorSource {
    client: Client,
    base_url: Url,
    search_path: String,
    parameter: String,
    encoding: QueryEncoding,
}

impl HttpDoctorSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            parameter: DEFAULT_QUERY_PARAMETER.to_string(),
            encoding: QueryEncoding::default(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.base_url())?
            .with_search_path(config.search_path())
            .with_parameter(config.query_parameter())
            .with_encoding(config.query_encoding()))
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_search_path(mut self, search_path: impl Into<String>) -> Self {
        self.search_path = search_path.into();
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    pub fn with_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> QueryEncoding {
        self.encoding
    }

    /// 組出搜尋請求的 URL
    ///
    /// `Raw` 直接把輸入值拼進查詢字串，URL 解析器只會補上無法出現在 URL 中的字元（例如空白）。
    pub fn search_url(&self, problem: &str) -> Result<Url> {
        let endpoint = self.base_url.join(&self.search_path)?;

        match self.encoding {
            QueryEncoding::Raw => {
                let raw = format!("{}?{}={}", endpoint, self.parameter, problem);
                Ok(Url::parse(&raw)?)
            }
            QueryEncoding::Encoded => {
                let mut url = endpoint;
                url.query_pairs_mut().append_pair(&self.parameter, problem);
                Ok(url)
            }
        }
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn search(&self, problem: &str) -> Result<Vec<DoctorRecord>> {
        let url = self.search_url(problem)?;

        tracing::debug!("Making search request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let records: Vec<DoctorRecord> = serde_json::from_str(&body)?;

        tracing::info!("🔍 Found {} doctors for {:?}", records.len(), problem);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source(encoding: QueryEncoding) -> HttpDoctorSource {
        HttpDoctorSource::new("http://127.0.0.1:8000")
            .unwrap()
            .with_encoding(encoding)
    }

    #[test]
    fn test_default_search_url() {
        let url = source(QueryEncoding::Encoded).search_url("flu").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/search-doctors/?problem=flu"
        );
    }

    #[test]
    fn test_empty_problem_keeps_parameter() {
        let encoded = source(QueryEncoding::Encoded).search_url("").unwrap();
        let raw = source(QueryEncoding::Raw).search_url("").unwrap();

        assert_eq!(encoded.query(), Some("problem="));
        assert_eq!(raw.query(), Some("problem="));
    }

    #[test]
    fn test_encoded_query_round_trips_value() {
        let url = source(QueryEncoding::Encoded)
            .search_url("chest pain & fever #2")
            .unwrap();

        assert_eq!(url.query(), Some("problem=chest+pain+%26+fever+%232"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("problem".to_string(), "chest pain & fever #2".to_string())]
        );
    }

    #[test]
    fn test_raw_query_is_not_encoded() {
        let url = source(QueryEncoding::Raw)
            .search_url("cold&city=pune")
            .unwrap();

        assert_eq!(url.query(), Some("problem=cold&city=pune"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("problem".to_string(), "cold".to_string()));
    }

    #[test]
    fn test_raw_query_fragment_truncates_value() {
        let url = source(QueryEncoding::Raw).search_url("ear#left").unwrap();

        assert_eq!(url.query(), Some("problem=ear"));
        assert_eq!(url.fragment(), Some("left"));
    }

    #[test]
    fn test_custom_path_and_parameter() {
        let url = source(QueryEncoding::Encoded)
            .with_search_path("/api/doctors/search/")
            .with_parameter("specialization")
            .search_url("ENT")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/doctors/search/?specialization=ENT"
        );
    }

    #[tokio::test]
    async fn test_search_decodes_records() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/search-doctors/")
                .query_param("problem", "flu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "Dr. A", "specialization": "GP", "email": "a@x.com"}
                ]));
        });

        let source = HttpDoctorSource::new(&server.base_url()).unwrap();
        let records = source.search("flu").await.unwrap();

        api_mock.assert();
        assert_eq!(records, vec![DoctorRecord::new("Dr. A", "GP", "a@x.com")]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/search-doctors/");
            then.status(500);
        });

        let source = HttpDoctorSource::new(&server.base_url()).unwrap();
        let err = source.search("flu").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, SearchError::UnexpectedStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_array_body_is_decode_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/search-doctors/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Not found."}));
        });

        let source = HttpDoctorSource::new(&server.base_url()).unwrap();
        let err = source.search("flu").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // 本機 discard 埠通常沒有服務在聽
        let source = HttpDoctorSource::new("http://127.0.0.1:9").unwrap();
        let err = source.search("flu").await.unwrap_err();

        assert!(matches!(err, SearchError::Http(_)));
    }
}
