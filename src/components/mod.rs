//! UI Components
//!
//! Reusable Leptos components.

mod app_header;
mod case_card;
mod delete_modal;
mod group_panel;
mod stat_card;
mod upload_modal;
mod viewer_modal;

pub use app_header::AppHeader;
pub use case_card::CaseCard;
pub use delete_modal::DeleteModal;
pub use group_panel::GroupPanel;
pub use stat_card::StatCard;
pub use upload_modal::UploadModal;
pub use viewer_modal::ViewerModal;
