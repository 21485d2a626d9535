use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use super::action::ActionKind;
use super::combination::KeyCombination;
use crate::error::HotkeyError;

/// 一条快捷键绑定：按键组合 -> 动作 + 参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotkeyEntry {
    pub action: ActionKind,
    pub combination: KeyCombination,
    pub args: Vec<String>,
}

impl HotkeyEntry {
    pub fn new(action: ActionKind, combination: impl Into<KeyCombination>) -> Self {
        Self {
            action,
            combination: combination.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// 按动作的参数规则校验
    pub fn validate(&self) -> Result<(), HotkeyError> {
        let rules = self.action.arg_rules();
        let found = self.args.len();
        if found < rules.required || found > rules.max() {
            return Err(HotkeyError::ArgumentCount {
                action: self.action.name(),
                min: rules.required,
                max: rules.max(),
                found,
            });
        }

        for (index, (kind, value)) in rules.kinds.iter().zip(&self.args).enumerate() {
            kind.check(value)
                .map_err(|reason| HotkeyError::InvalidArgument {
                    action: self.action.name(),
                    index,
                    value: value.clone(),
                    reason,
                })?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

impl fmt::Display for HotkeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] -> {}", self.combination, self.action)?;
        if !self.args.is_empty() {
            write!(f, " ({})", self.args.iter().map(|a| format!("'{}'", a)).join(", "))?;
        }
        Ok(())
    }
}
