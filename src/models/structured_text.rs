use serde::{Deserialize, Serialize};

/// A DAST document: `{"schema": "dast", "document": {"type": "root", ...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub schema: String,
    pub document: Node,
}

/// Text decoration applied to a span
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Underline,
    Strikethrough,
    Highlight,
    /// Custom marks defined in the CMS; the text is kept undecorated
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    Blockquote {
        #[serde(default)]
        attribution: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Code {
        code: String,
        #[serde(default)]
        language: Option<String>,
    },
    ThematicBreak,
    Span {
        value: String,
        #[serde(default)]
        marks: Vec<Mark>,
    },
    Link {
        url: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    ItemLink {
        item: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    InlineItem {
        item: String,
    },
    Block {
        item: String,
    },
    InlineBlock {
        item: String,
    },
    #[serde(other)]
    Unknown,
}
