//! In-memory page model.
//!
//! `MemoryPage` stands in for the browser document: a set of identified
//! elements with visibility and text, plus a log of every effect applied.
//! The headless app renders from it and the tests assert against the log.

use std::collections::HashMap;

use folio_types::config::TerminalConfig;
use folio_types::error::{FolioError, Result};

use crate::services::PageService;

/// One observable effect applied to the page, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    ScrollTo(String),
    ScrollTop,
    ScrollEnd(String),
    Focus(String),
    Display { id: String, visible: bool },
    Text { id: String, text: String },
    Theme(Option<String>),
}

#[derive(Debug, Clone, Default)]
struct Element {
    display: Option<bool>,
    text: String,
}

/// Element map plus effect log.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: HashMap<String, Element>,
    theme: Option<String>,
    effects: Vec<PageEffect>,
}

impl MemoryPage {
    /// An empty page with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page containing the given element identifiers.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new();
        for id in ids {
            page.add_element(id);
        }
        page
    }

    /// A page containing every element the configuration targets.
    pub fn from_config(config: &TerminalConfig) -> Self {
        let targets = &config.targets;
        let mut page = Self::with_elements([
            targets.output.clone(),
            targets.input.clone(),
            targets.sidebar.clone(),
        ]);
        for id in targets
            .headers
            .iter()
            .chain(targets.menus.iter())
            .chain(targets.sections.iter().map(|s| &s.name))
        {
            page.add_element(id.clone());
        }
        page
    }

    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Currently applied theme (`None` = built-in look).
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn effects(&self) -> &[PageEffect] {
        &self.effects
    }

    /// Drain the effect log.
    pub fn take_effects(&mut self) -> Vec<PageEffect> {
        std::mem::take(&mut self.effects)
    }

    fn element(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| FolioError::MissingElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| FolioError::MissingElement(id.to_string()))
    }
}

impl PageService for MemoryPage {
    fn scroll_to(&mut self, id: &str) -> Result<()> {
        self.element(id)?;
        self.effects.push(PageEffect::ScrollTo(id.to_string()));
        Ok(())
    }

    fn scroll_to_top(&mut self) -> Result<()> {
        self.effects.push(PageEffect::ScrollTop);
        Ok(())
    }

    fn scroll_to_end(&mut self, id: &str) -> Result<()> {
        self.element(id)?;
        self.effects.push(PageEffect::ScrollEnd(id.to_string()));
        Ok(())
    }

    fn focus(&mut self, id: &str) -> Result<()> {
        self.element(id)?;
        self.effects.push(PageEffect::Focus(id.to_string()));
        Ok(())
    }

    fn set_display(&mut self, id: &str, visible: bool) -> Result<()> {
        self.element_mut(id)?.display = Some(visible);
        self.effects.push(PageEffect::Display {
            id: id.to_string(),
            visible,
        });
        Ok(())
    }

    fn display_state(&self, id: &str) -> Result<Option<bool>> {
        Ok(self.element(id)?.display)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.element_mut(id)?.text = text.to_string();
        self.effects.push(PageEffect::Text {
            id: id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn append_text(&mut self, id: &str, text: &str) -> Result<()> {
        let element = self.element_mut(id)?;
        element.text.push_str(text);
        let full = element.text.clone();
        self.effects.push(PageEffect::Text {
            id: id.to_string(),
            text: full,
        });
        Ok(())
    }

    fn text(&self, id: &str) -> Result<String> {
        Ok(self.element(id)?.text.clone())
    }

    fn set_theme(&mut self, name: Option<&str>) -> Result<()> {
        self.theme = name.map(str::to_string);
        self.effects.push(PageEffect::Theme(self.theme.clone()));
        Ok(())
    }
}
