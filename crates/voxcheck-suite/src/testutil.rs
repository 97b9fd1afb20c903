//! A scripted fake DOM for unit-testing check logic without a browser.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use voxcheck_browser::{DomActions, Result};

/// Fake page whose probe answers come from pre-seeded tables.
#[derive(Default)]
pub(crate) struct FakeDom {
    counts: HashMap<String, u32>,
    text_counts: HashMap<(String, String), u32>,
    visible: HashSet<String>,
    visible_with_text: HashSet<(String, String)>,
    console_errors: Vec<String>,
    pub(crate) navigations: Mutex<Vec<String>>,
    pub(crate) viewports: Mutex<Vec<(u32, u32, bool)>>,
}

impl FakeDom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_count(mut self, selector: &str, count: u32) -> Self {
        self.counts.insert(selector.to_string(), count);
        self
    }

    pub(crate) fn with_text_count(mut self, selector: &str, text: &str, count: u32) -> Self {
        self.text_counts
            .insert((selector.to_string(), text.to_string()), count);
        self
    }

    pub(crate) fn with_visible(mut self, selector: &str) -> Self {
        self.visible.insert(selector.to_string());
        self
    }

    pub(crate) fn with_visible_text(mut self, selector: &str, text: &str) -> Self {
        self.visible_with_text
            .insert((selector.to_string(), text.to_string()));
        self.visible.insert(selector.to_string());
        self
    }

    pub(crate) fn with_console_error(mut self, text: &str) -> Self {
        self.console_errors.push(text.to_string());
        self
    }
}

#[async_trait::async_trait]
impl DomActions for FakeDom {
    async fn goto(&self, url: &str) -> Result<()> {
        self.navigations
            .lock()
            .expect("navigation log")
            .push(url.to_string());
        Ok(())
    }

    async fn count(&self, selector: &str) -> Result<u32> {
        Ok(self.counts.get(selector).copied().unwrap_or(0))
    }

    async fn count_with_text(&self, selector: &str, text: &str) -> Result<u32> {
        Ok(self
            .text_counts
            .get(&(selector.to_string(), text.to_string()))
            .copied()
            .unwrap_or(0))
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.visible.contains(selector))
    }

    async fn is_visible_with_text(&self, selector: &str, text: &str) -> Result<bool> {
        Ok(self
            .visible_with_text
            .contains(&(selector.to_string(), text.to_string())))
    }

    async fn set_viewport(&self, width: u32, height: u32, mobile: bool) -> Result<()> {
        self.viewports
            .lock()
            .expect("viewport log")
            .push((width, height, mobile));
        Ok(())
    }

    fn console_errors(&self, benign_patterns: &[String]) -> Vec<String> {
        self.console_errors
            .iter()
            .filter(|text| {
                let lower = text.to_lowercase();
                !benign_patterns
                    .iter()
                    .any(|p| lower.contains(&p.to_lowercase()))
            })
            .cloned()
            .collect()
    }
}
