use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use satview::{
    DEFAULT_BUFFER_SIZE, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, ListOptions, MAX_SELECTED,
    RowKey, SortState,
};

use crate::satellite::{comparators, default_columns};
use crate::{ConfigError, DEFAULT_STORAGE_KEY};

pub const DEFAULT_API_BASE_URL: &str = "https://backend.digantara.dev/";

/// Settings for a catalog browser shell.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BrowserConfig {
    /// Base URL the catalog path is joined onto. Keep the trailing slash.
    pub api_base_url: String,
    pub storage_key: String,
    pub max_selected: usize,
    pub row_height: u32,
    pub viewport_height: u32,
    pub buffer_size: usize,
    pub default_sort: SortState,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            max_selected: MAX_SELECTED,
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            default_sort: SortState::default(),
        }
    }
}

impl BrowserConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_max_selected(mut self, max_selected: usize) -> Self {
        self.max_selected = max_selected;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selected == 0 {
            return Err(ConfigError::ZeroSelectionLimit);
        }
        if !comparators().contains(&self.default_sort.key) {
            let key = self.default_sort.key.clone();
            return Err(ConfigError::UnknownSortField(key));
        }
        self.api_base_url()?;
        self.list_options()?;
        Ok(())
    }

    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.api_base_url)?)
    }

    /// List options with the satellite column layout.
    pub fn list_options(&self) -> Result<ListOptions<RowKey>, ConfigError> {
        let options = ListOptions::new()
            .with_row_height(self.row_height)
            .with_viewport_height(self.viewport_height)
            .with_buffer_size(self.buffer_size)
            .with_columns(default_columns());
        options.validate()?;
        Ok(options)
    }
}
