use crate::domain::model::{DoctorRecord, QueryEncoding};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 文字輸入欄位：每次呼叫時讀取當下的值
pub trait QueryField: Send + Sync {
    fn read_value(&self) -> Result<String>;
}

/// 結果容器：整段內容一次替換
pub trait ResultsContainer: Send + Sync {
    fn replace_content(&self, html: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn search(&self, problem: &str) -> Result<Vec<DoctorRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn search_path(&self) -> &str;
    fn query_parameter(&self) -> &str;
    fn query_encoding(&self) -> QueryEncoding;
}
