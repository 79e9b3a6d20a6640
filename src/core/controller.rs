use crate::adapters::dom::{ContainerElement, Document, InputElement};
use crate::core::render::render_records;
use crate::core::{ControllerState, DoctorSource, ElementIds, QueryField, ResultsContainer};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reads the problem field, queries the doctor search and replaces the results container.
///
/// Overlapping invocations are not coordinated: each one writes the container when its own
/// response arrives, so the response that resolves last determines the final content.
pub struct SearchController<F: QueryField, C: ResultsContainer, S: DoctorSource> {
    field: F,
    container: C,
    source: S,
    in_flight: AtomicUsize,
}

impl<F: QueryField, C: ResultsContainer, S: DoctorSource> SearchController<F, C, S> {
    pub fn new(field: F, container: C, source: S) -> Self {
        Self {
            field,
            container,
            source,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            ControllerState::Awaiting
        } else {
            ControllerState::Idle
        }
    }

    /// 執行一次搜尋，回傳渲染的卡片數量
    ///
    /// 任何失敗都會原樣回傳並記錄，容器內容保持不變。
    pub async fn invoke(&self) -> Result<usize> {
        let problem = self.field.read_value().inspect_err(|e| {
            tracing::error!("❌ Could not read search input: {}", e);
        })?;

        tracing::debug!("Searching doctors for problem: {:?}", problem);

        let records = {
            let _guard = InFlight::enter(&self.in_flight);
            self.source.search(&problem).await
        }
        .inspect_err(|e| {
            tracing::error!("❌ Doctor search failed for {:?}: {}", problem, e);
        })?;

        let html = render_records(&records);
        self.container
            .replace_content(&html)
            .await
            .inspect_err(|e| {
                tracing::error!("❌ Could not update results container: {}", e);
            })?;

        tracing::debug!("Rendered {} doctor cards", records.len());
        Ok(records.len())
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: DoctorSource> SearchController<InputElement, ContainerElement, S> {
    /// 依元素 id 從頁面取得輸入欄位與結果容器
    pub fn from_document(document: &Document, source: S, ids: &ElementIds) -> Result<Self> {
        let field = document.input(&ids.input_id)?;
        let container = document.container(&ids.container_id)?;
        Ok(Self::new(field, container, source))
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
