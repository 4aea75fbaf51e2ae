//! Content tree types and the depth-first page flattener.
//!
//! Content documents come from several authoring sources that disagree on
//! field names, so a category may hold its pages under `pages`, `items` or
//! `entries` and its sub-categories under `children` or `sections`. Every
//! alias is treated as an equivalent view of the same role.
//!
//! Decoding is lenient: a collection that is not an array counts as absent,
//! and an element that does not decode is skipped instead of failing the
//! whole document.

pub mod lenient;

#[cfg(test)]
mod tests;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Role a page must carry to be visible to anonymous visitors
pub const GUEST_ROLE: &str = "guest";

/// A single content page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    /// Site-relative path, valid only when it starts with `/`
    #[serde(default, deserialize_with = "lenient::string")]
    pub href: Option<String>,

    /// Title of the page (if available)
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,

    /// Roles allowed to see the page
    #[serde(default, deserialize_with = "lenient::strings")]
    pub roles: Vec<String>,

    /// Only a literal `true` marks the page as published
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_published: bool,

    /// ISO-8601 timestamp of the last edit
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: Option<String>,

    /// ISO-8601 timestamp of creation
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
}

impl PageNode {
    /// Create a published guest page at the given path
    pub fn new(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            roles: vec![GUEST_ROLE.to_string()],
            is_published: true,
            ..Self::default()
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A category holding pages and nested categories under any alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageNode>>,

    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PageNode>>,

    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<PageNode>>,

    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CategoryNode>>,

    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<CategoryNode>>,
}

/// Field names under which a category stores pages, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafField {
    Pages,
    Items,
    Entries,
}

impl LeafField {
    pub const ALL: [LeafField; 3] = [LeafField::Pages, LeafField::Items, LeafField::Entries];
}

/// Field names under which a category stores sub-categories, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerField {
    Children,
    Sections,
}

impl ContainerField {
    pub const ALL: [ContainerField; 2] = [ContainerField::Children, ContainerField::Sections];
}

impl CategoryNode {
    /// Pages stored under one alias; empty when the field is absent
    pub fn leaves(&self, field: LeafField) -> &[PageNode] {
        let list = match field {
            LeafField::Pages => &self.pages,
            LeafField::Items => &self.items,
            LeafField::Entries => &self.entries,
        };
        list.as_deref().unwrap_or(&[])
    }

    /// Sub-categories stored under one alias; empty when the field is absent
    pub fn containers(&self, field: ContainerField) -> &[CategoryNode] {
        let list = match field {
            ContainerField::Children => &self.children,
            ContainerField::Sections => &self.sections,
        };
        list.as_deref().unwrap_or(&[])
    }
}

/// Top-level content document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryNode>>,
}

impl ContentData {
    /// Load content from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        ::log::debug!("Loaded content from {}", path.display());
        Self::from_json(&contents)
    }

    /// Parse content from a JSON string.
    ///
    /// Only invalid JSON syntax is an error. A document of the wrong shape
    /// decodes as empty content. Nesting depth is not limited.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;

        match Self::deserialize(serde_stacker::Deserializer::new(value)) {
            Ok(content) => Ok(content),
            Err(e) => {
                ::log::warn!("Content document has an unexpected shape, using empty content: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Every page in the document, in discovery order
    pub fn pages(&self) -> Vec<&PageNode> {
        extract_all_pages(self.categories.as_deref())
    }
}

impl Drop for ContentData {
    // Unlink nested categories one level at a time so deep trees do not
    // recurse on drop.
    fn drop(&mut self) {
        let mut stack = self.categories.take().unwrap_or_default();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.take().unwrap_or_default());
            stack.extend(node.sections.take().unwrap_or_default());
        }
    }
}

/// Flatten a category tree into its pages.
///
/// Order is depth-first and left to right. Within a node, pages from every
/// leaf alias come first (in `LeafField::ALL` order), then the flattened
/// sub-trees of every container alias (in `ContainerField::ALL` order).
///
/// The walk keeps an explicit stack of sibling iterators, so tree depth is
/// bounded by heap, not by the call stack.
pub fn extract_all_pages(nodes: Option<&[CategoryNode]>) -> Vec<&PageNode> {
    let Some(nodes) = nodes else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut stack = vec![nodes.iter()];

    while let Some(level) = stack.last_mut() {
        let Some(node) = level.next() else {
            stack.pop();
            continue;
        };

        for field in LeafField::ALL {
            out.extend(node.leaves(field));
        }

        // Top of the stack is walked first, so push in reverse priority.
        for field in ContainerField::ALL.iter().rev() {
            let next = node.containers(*field);
            if !next.is_empty() {
                stack.push(next.iter());
            }
        }
    }

    ::log::debug!("Extracted {} pages from content tree", out.len());
    out
}
