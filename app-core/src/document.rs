//! 设置文档
//!
//! 以 `settings` 为根节点的 XML 元素树，负责文件读写以及按名称读取/写入顶层元素。
//! 加载失败时总是回退到只含根节点的空文档，任何操作都不会让文档失去根节点。

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, info, warn};

use crate::error::SettingsError;
use crate::reporter::{ErrorKind, ErrorReporter};

/// 根节点名称
pub const ROOT_ELEMENT: &str = "settings";

/// XML 元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 元素文本；含子元素时只含空白的文本视为没有文本
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 设置属性，已存在则覆盖（保持原有顺序）
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// 第一个同名子元素
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }
}

/// 设置文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// 只含 `<settings/>` 根节点的空文档
    pub fn empty() -> Self {
        Self {
            root: Element::new(ROOT_ELEMENT),
        }
    }

    /// 从文件加载，永不失败
    ///
    /// 文件不存在时静默回退；无法读取、无法解析或缺少根节点时先上报再回退到空文档。
    pub fn load(path: &Path, reporter: &dyn ErrorReporter) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Settings file {} not found; using defaults", path.display());
                return Self::empty();
            }
            Err(e) => {
                warn!("Could not read settings file {}: {}", path.display(), e);
                reporter.report(ErrorKind::ParseFailed, &path.display().to_string());
                return Self::empty();
            }
        };

        match Self::parse(&content) {
            Ok(document) => document,
            Err(SettingsError::MissingRoot(name)) => {
                reporter.report(ErrorKind::MissingXml, &format!("<{}>", name));
                Self::empty()
            }
            Err(e) => {
                warn!("{}", e);
                reporter.report(ErrorKind::ParseFailed, &path.display().to_string());
                Self::empty()
            }
        }
    }

    /// 解析 XML 文本，要求存在 `settings` 根节点
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        let root = parse_elements(content)?
            .into_iter()
            .find(|e| e.name == ROOT_ELEMENT)
            .ok_or(SettingsError::MissingRoot(ROOT_ELEMENT))?;
        Ok(Self { root })
    }

    /// 保存到文件
    ///
    /// 先确保父目录存在（目录创建失败只记录日志），再序列化并写入。
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_settings_dir(dir);
        }

        let xml = self.to_xml_string()?;
        let mut file = File::create(path).map_err(|source| SettingsError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(xml.as_bytes())
            .map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// 序列化为带声明和缩进的 XML 文本
    pub fn to_xml_string(&self) -> Result<String, SettingsError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(serialize_error)?;
        write_element(&mut writer, &self.root)?;
        let mut xml = String::from_utf8(writer.into_inner()).map_err(serialize_error)?;
        xml.push('\n');
        Ok(xml)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.root.child(name)
    }

    /// 获取顶层元素，不存在则创建并追加到末尾
    pub fn get_or_create_element(&mut self, name: &str) -> &mut Element {
        let index = match self.root.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.root.children.push(Element::new(name));
                self.root.children.len() - 1
            }
        };
        &mut self.root.children[index]
    }

    pub fn has_element(&self, name: &str) -> bool {
        self.element(name).is_some()
    }

    /// 元素文本，缺失时返回空字符串
    pub fn get_text(&self, name: &str) -> String {
        match self.element(name) {
            Some(el) => el.text().unwrap_or_default().to_string(),
            None => {
                warn!("XML element '{}' not found", name);
                String::new()
            }
        }
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let Some(el) = self.element(name) else {
            warn!("XML element '{}' not found", name);
            return default;
        };
        el.text().and_then(parse_bool).unwrap_or(default)
    }

    pub fn get_int(&self, name: &str, default: i32) -> i32 {
        let Some(el) = self.element(name) else {
            warn!("XML element '{}' not found", name);
            return default;
        };
        el.text()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        self.get_or_create_element(name).set_text(text);
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set_text(name, if value { "true" } else { "false" });
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.set_text(name, value.to_string());
    }
}

/// 解析 XML 文本，返回所有顶层元素
///
/// 实体引用会被还原；含子元素的节点中只含空白的文本被忽略。
pub fn parse_elements(content: &str) -> Result<Vec<Element>, SettingsError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<(Element, String)> = Vec::new();
    let mut elements = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push((start_element(e)?, String::new()));
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                attach(&mut stack, &mut elements, element);
            }
            Ok(Event::End(_)) => {
                let Some((mut element, text)) = stack.pop() else {
                    return Err(SettingsError::Parse("unexpected closing tag".to_string()));
                };
                // 叶子元素的文本原样保留，含子元素时忽略缩进空白
                let keep = if element.children.is_empty() {
                    !text.is_empty()
                } else {
                    !text.trim().is_empty()
                };
                if keep {
                    element.text = Some(text);
                }
                attach(&mut stack, &mut elements, element);
            }
            Ok(Event::Text(ref t)) => {
                if let Some((_, buf)) = stack.last_mut() {
                    buf.push_str(std::str::from_utf8(t).map_err(parse_error)?);
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some((_, buf)) = stack.last_mut() {
                    buf.push_str(std::str::from_utf8(c).map_err(parse_error)?);
                }
            }
            Ok(Event::GeneralRef(ref r)) => {
                let name = std::str::from_utf8(r).map_err(parse_error)?;
                let resolved = quick_xml::escape::unescape(&format!("&{};", name))
                    .map_err(parse_error)?
                    .into_owned();
                if let Some((_, buf)) = stack.last_mut() {
                    buf.push_str(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            // 声明、注释、处理指令
            Ok(_) => {}
            Err(e) => {
                return Err(SettingsError::Parse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    if let Some((element, _)) = stack.last() {
        return Err(SettingsError::Parse(format!(
            "element <{}> is never closed",
            element.name
        )));
    }

    Ok(elements)
}

fn start_element(e: &BytesStart) -> Result<Element, SettingsError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(parse_error)?
        .to_string();
    let mut element = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(parse_error)?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(parse_error)?;
        let raw = std::str::from_utf8(&attr.value).map_err(parse_error)?;
        let value = quick_xml::escape::unescape(raw).map_err(parse_error)?;
        element.set_attribute(key, value);
    }
    Ok(element)
}

fn attach(stack: &mut [(Element, String)], elements: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(element),
        None => elements.push(element),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), SettingsError> {
    if !is_valid_name(&element.name) {
        return Err(SettingsError::Serialize(format!(
            "invalid element name '{}'",
            element.name
        )));
    }

    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        if !is_valid_name(key) {
            return Err(SettingsError::Serialize(format!(
                "invalid attribute name '{}' on <{}>",
                key, element.name
            )));
        }
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(serialize_error);
    }

    writer.write_event(Event::Start(start)).map_err(serialize_error)?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(serialize_error)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(serialize_error)
}

/// 创建设置目录，已存在不算错误；其他失败只记录日志，由随后的写入决定成败
fn create_settings_dir(dir: &Path) {
    if dir.is_dir() {
        debug!("Settings directory {} already exists", dir.display());
        return;
    }

    info!("Creating settings directory: {}", dir.display());
    if let Err(e) = fs::create_dir_all(dir) {
        match e.kind() {
            io::ErrorKind::AlreadyExists => debug!("Directory already exists"),
            io::ErrorKind::NotFound => warn!("Path not found: {}", dir.display()),
            _ => warn!("Could not create settings directory {}: {}", dir.display(), e),
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        text.parse::<i64>().ok().map(|v| v != 0)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

fn parse_error(e: impl std::fmt::Display) -> SettingsError {
    SettingsError::Parse(e.to_string())
}

fn serialize_error(e: impl std::fmt::Display) -> SettingsError {
    SettingsError::Serialize(e.to_string())
}
