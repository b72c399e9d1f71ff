//! Content Model
//!
//! Data structures for the case catalog and transient UI payloads.

use serde::{Deserialize, Serialize};

/// Outcome of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Success,
    Fail,
}

impl Default for CaseStatus {
    fn default() -> Self {
        CaseStatus::Success
    }
}

/// A single AI-generated code demonstration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub status: CaseStatus,
    pub prompt: String,
    pub code: String,
    /// Full HTML document text, or an http(s) URL to open externally
    pub preview_html: String,
}

/// A named, ordered bucket of cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestGroup {
    pub id: String,
    pub title: String,
    pub cases: Vec<TestCase>,
}

/// Derived counters, recomputed from the catalog on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub success: usize,
    pub groups: usize,
}

/// User input for a new case, before it gets an id and a home group
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseDraft {
    pub title: String,
    pub prompt: String,
    pub code: String,
    pub preview_html: String,
    pub status: CaseStatus,
}

/// What the content viewer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKind {
    Code,
    Prompt,
    Preview,
}

impl ViewerKind {
    /// Footer label for the viewer modal
    pub fn label(self) -> &'static str {
        match self {
            ViewerKind::Code => "CODE",
            ViewerKind::Prompt => "PROMPT",
            ViewerKind::Preview => "PREVIEW",
        }
    }
}

/// Transient payload driving the content viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerPayload {
    pub kind: ViewerKind,
    pub title: String,
    pub content: String,
}

/// Pending target of a confirmed deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Group { group_id: String },
    Case { group_id: String, case_id: String },
}

impl DeleteTarget {
    pub fn is_group(&self) -> bool {
        matches!(self, DeleteTarget::Group { .. })
    }
}

/// Drag transfer payload for moving a case between groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDragPayload {
    pub case_id: String,
    pub source_group_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(serde_json::to_string(&CaseStatus::Fail).unwrap(), "\"fail\"");
    }

    #[test]
    fn test_drag_payload_wire_field_names() {
        let payload = CaseDragPayload {
            case_id: "c2".to_string(),
            source_group_id: "g1".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"caseId":"c2","sourceGroupId":"g1"}"#);
    }
}
