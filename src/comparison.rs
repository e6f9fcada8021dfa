//! Feature comparison between Noteshell and the tools people already use.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKey {
    Noteshell,
    NotebookLm,
    Notion,
    Obsidian,
    Quizlet,
    ChatGpt,
}

impl ToolKey {
    fn column(self) -> usize {
        match self {
            Self::Noteshell => 0,
            Self::NotebookLm => 1,
            Self::Notion => 2,
            Self::Obsidian => 3,
            Self::Quizlet => 4,
            Self::ChatGpt => 5,
        }
    }

    pub fn tool(self) -> &'static Tool {
        &TOOLS[self.column()]
    }
}

pub const DEFAULT_RIVAL: ToolKey = ToolKey::NotebookLm;

#[derive(Debug, PartialEq)]
pub struct Tool {
    pub key: ToolKey,
    pub name: &'static str,
    pub sub: &'static str,
    pub highlight: bool,
}

pub static TOOLS: [Tool; 6] = [
    Tool {
        key: ToolKey::Noteshell,
        name: "Noteshell",
        sub: "Recommended",
        highlight: true,
    },
    Tool {
        key: ToolKey::NotebookLm,
        name: "NotebookLM",
        sub: "Source notebook",
        highlight: false,
    },
    Tool {
        key: ToolKey::Notion,
        name: "Notion",
        sub: "Workspace",
        highlight: false,
    },
    Tool {
        key: ToolKey::Obsidian,
        name: "Obsidian",
        sub: "Local PKM",
        highlight: false,
    },
    Tool {
        key: ToolKey::Quizlet,
        name: "Quizlet",
        sub: "Study tools",
        highlight: false,
    },
    Tool {
        key: ToolKey::ChatGpt,
        name: "ChatGPT",
        sub: "General AI",
        highlight: false,
    },
];

/// Every tool except Noteshell itself, in column order.
pub fn rivals() -> impl Iterator<Item = &'static Tool> {
    TOOLS.iter().filter(|tool| tool.key != ToolKey::Noteshell)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellValue {
    Yes,
    No,
    Partial,
    Text(&'static str),
}

impl CellValue {
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Partial => "Partial",
            Self::Text(text) => text,
        }
    }
}

use CellValue::{No, Partial, Yes};

#[derive(Debug, PartialEq)]
pub struct Row {
    pub id: &'static str,
    pub label: &'static str,
    pub helper: Option<&'static str>,
    pub detail: Option<&'static str>,
    pub emphasis: bool,
    values: [CellValue; 6],
}

impl Row {
    pub fn value(&self, tool: ToolKey) -> CellValue {
        self.values[tool.column()]
    }

    pub fn detail_id(&self) -> String {
        format!("cmp-detail-{}", self.id)
    }
}

pub static ROWS: [Row; 8] = [
    Row {
        id: "path",
        label: "Turns sources into a learning path",
        helper: Some("Roadmap with modules and next steps"),
        detail: Some("Instead of a blank page, you get a structured roadmap with what to learn first, what comes next, and why."),
        emphasis: true,
        values: [Yes, Partial, No, No, No, Partial],
    },
    Row {
        id: "video",
        label: "Video recommendations and key moments",
        helper: Some("Find what matters without scrubbing"),
        detail: Some("Pulls the best next video for your goal and highlights the key moments so you skip the time-wasting parts."),
        emphasis: true,
        values: [Yes, Partial, No, Partial, No, Partial],
    },
    Row {
        id: "notes",
        label: "Auto-structured notes you can edit",
        helper: Some("Clean, organized, and still yours"),
        detail: Some("Noteshell turns messy inputs into clean, editable notes that stay organized inside a project workspace."),
        emphasis: false,
        values: [Yes, Partial, Yes, Yes, No, No],
    },
    Row {
        id: "study",
        label: "One-click study tools",
        helper: Some("Flashcards, quizzes, mind maps"),
        detail: Some("Generate study outputs from your own materials so you can retain what you learned, not just store it."),
        emphasis: true,
        values: [Yes, Partial, Partial, Partial, Yes, No],
    },
    Row {
        id: "grounded",
        label: "Grounded in your sources",
        helper: Some("Evidence-first outputs"),
        detail: Some("Keeps answers anchored to the sources you provide so you can verify, revisit, and trust the output."),
        emphasis: false,
        values: [Yes, Yes, Partial, Partial, No, Partial],
    },
    Row {
        id: "workflow",
        label: "Built for workflows, not just pages",
        helper: Some("Plan, track, and keep momentum"),
        detail: Some("Designed around goals and progress, not just documents. Keeps the next step obvious."),
        emphasis: false,
        values: [Yes, No, Partial, Partial, No, No],
    },
    Row {
        id: "export",
        label: "Export anytime",
        helper: Some("Markdown and PDF"),
        detail: Some("Your outputs remain portable so you can keep them anywhere, not locked in."),
        emphasis: false,
        values: [Yes, Partial, Partial, Yes, Partial, Partial],
    },
    Row {
        id: "privacy",
        label: "Private by default",
        helper: Some("Your learning stays yours"),
        detail: Some("Treats your learning materials as personal by default with a privacy-first stance."),
        emphasis: false,
        values: [Yes, Partial, Partial, Yes, No, Partial],
    },
];

/// Which rows have their detail text expanded. All rows start collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    open: Vec<bool>,
}

impl Expansion {
    pub fn collapsed(row_count: usize) -> Self {
        Self {
            open: vec![false; row_count],
        }
    }

    fn position(id: &str) -> Option<usize> {
        ROWS.iter().position(|row| row.id == id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        Self::position(id)
            .and_then(|index| self.open.get(index).copied())
            .unwrap_or(false)
    }

    /// Unknown ids leave the state untouched.
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(slot) = Self::position(id).and_then(|index| next.open.get_mut(index)) {
            *slot = !*slot;
        }
        next
    }

    pub fn with_all(&self, open: bool) -> Self {
        Self {
            open: vec![open; self.open.len()],
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }

    pub fn total(&self) -> usize {
        self.open.len()
    }

    pub fn summary(&self) -> String {
        format!("{}/{} expanded", self.expanded_count(), self.total())
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self::collapsed(ROWS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_collapsed() {
        let expansion = Expansion::default();

        assert_eq!(expansion.summary(), "0/8 expanded");
        assert!(ROWS.iter().all(|row| !expansion.is_open(row.id)));
    }

    #[test]
    fn toggling_a_row_flips_only_that_row() {
        let expansion = Expansion::default().toggled("study");

        assert!(expansion.is_open("study"));
        assert!(!expansion.is_open("path"));
        assert_eq!(expansion.expanded_count(), 1);
        assert!(!expansion.toggled("study").is_open("study"));
    }

    #[test]
    fn unknown_row_is_ignored() {
        let expansion = Expansion::default().toggled("pricing");

        assert_eq!(expansion, Expansion::default());
        assert!(!expansion.is_open("pricing"));
    }

    #[test]
    fn expand_and_collapse_all() {
        let expanded = Expansion::default().toggled("video").with_all(true);
        assert_eq!(expanded.summary(), "8/8 expanded");

        let collapsed = expanded.with_all(false);
        assert_eq!(collapsed.expanded_count(), 0);
    }

    #[test]
    fn cell_lookup_follows_tool_columns() {
        let path = &ROWS[0];

        assert_eq!(path.value(ToolKey::Noteshell), CellValue::Yes);
        assert_eq!(path.value(ToolKey::NotebookLm), CellValue::Partial);
        assert_eq!(path.value(ToolKey::Notion), CellValue::No);
        assert_eq!(path.detail_id(), "cmp-detail-path");
    }

    #[test]
    fn labels_describe_cells() {
        assert_eq!(CellValue::Yes.label(), "Yes");
        assert_eq!(CellValue::No.label(), "No");
        assert_eq!(CellValue::Partial.label(), "Partial");
        assert_eq!(CellValue::Text("Beta").label(), "Beta");
    }

    #[test]
    fn rivals_exclude_noteshell_and_keys_match_columns() {
        let names: Vec<_> = rivals().map(|tool| tool.name).collect();
        assert_eq!(names, ["NotebookLM", "Notion", "Obsidian", "Quizlet", "ChatGPT"]);

        for tool in &TOOLS {
            assert_eq!(tool.key.tool(), tool);
        }
        assert!(ROWS.iter().all(|row| row.value(ToolKey::Noteshell) == CellValue::Yes));
    }
}
