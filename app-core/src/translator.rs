//! 界面文字翻译
//!
//! 语言文件格式：
//!
//! ```xml
//! <translation>
//!   <string>
//!     <original>Hotkeys</original>
//!     <translation>Tastenkürzel</translation>
//!   </string>
//! </translation>
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::parse_elements;
use crate::error::TranslationError;

#[derive(Debug, Clone, Default)]
pub struct LanguageTranslator {
    path: Option<PathBuf>,
    translations: HashMap<String, String>,
}

impl LanguageTranslator {
    /// 不绑定语言文件，原样返回所有文字
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            translations: HashMap::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 读取语言文件，返回载入的条目数
    pub fn load_translations(&mut self) -> Result<usize, TranslationError> {
        let path = self.path.as_ref().ok_or(TranslationError::NoFile)?;
        let content = fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.clone(),
            source,
        })?;

        let elements =
            parse_elements(&content).map_err(|e| TranslationError::Parse(e.to_string()))?;
        let root = elements
            .iter()
            .find(|e| e.name() == "translation")
            .ok_or_else(|| TranslationError::Parse("missing <translation> root".to_string()))?;

        let mut translations = HashMap::new();
        for string in root.children_named("string") {
            let original = string.child("original").and_then(|e| e.text());
            let translation = string.child("translation").and_then(|e| e.text());
            match (original, translation) {
                (Some(original), Some(translation)) => {
                    translations.insert(original.to_string(), translation.to_string());
                }
                _ => warn!("Incomplete translation entry in {}", path.display()),
            }
        }

        debug!("Loaded {} translations from {}", translations.len(), path.display());
        self.translations = translations;
        Ok(self.translations.len())
    }

    /// 翻译文字，没有对应条目时返回原文
    pub fn translate(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
