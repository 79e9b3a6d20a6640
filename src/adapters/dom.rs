use crate::domain::ports::{QueryField, ResultsContainer};
use crate::utils::error::{Result, SearchError};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Text input element. Clones share the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct InputElement {
    value: Arc<RwLock<String>>,
}

impl InputElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value.into())),
        }
    }

    pub fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl QueryField for InputElement {
    fn read_value(&self) -> Result<String> {
        Ok(self.value())
    }
}

/// Element whose whole content is replaced on every write.
#[derive(Debug, Clone, Default)]
pub struct ContainerElement {
    html: Arc<RwLock<String>>,
}

impl ContainerElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(html: impl Into<String>) -> Self {
        Self {
            html: Arc::new(RwLock::new(html.into())),
        }
    }

    pub fn inner_html(&self) -> String {
        self.html
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_inner_html(&self, html: impl Into<String>) {
        *self.html.write().unwrap_or_else(PoisonError::into_inner) = html.into();
    }
}

impl ResultsContainer for ContainerElement {
    async fn replace_content(&self, html: &str) -> Result<()> {
        self.set_inner_html(html);
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Element {
    Input(InputElement),
    Container(ContainerElement),
}

/// 以 id 查找元素的最小頁面模型
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_input(&mut self, id: impl Into<String>, value: impl Into<String>) -> InputElement {
        let input = InputElement::new(value);
        self.elements
            .insert(id.into(), Element::Input(input.clone()));
        input
    }

    pub fn insert_container(&mut self, id: impl Into<String>) -> ContainerElement {
        let container = ContainerElement::new();
        self.elements
            .insert(id.into(), Element::Container(container.clone()));
        container
    }

    pub fn input(&self, id: &str) -> Result<InputElement> {
        match self.elements.get(id) {
            Some(Element::Input(input)) => Ok(input.clone()),
            _ => Err(SearchError::ElementNotFound { id: id.to_string() }),
        }
    }

    pub fn container(&self, id: &str) -> Result<ContainerElement> {
        match self.elements.get(id) {
            Some(Element::Container(container)) => Ok(container.clone()),
            _ => Err(SearchError::ElementNotFound { id: id.to_string() }),
        }
    }
}
