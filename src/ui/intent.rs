use crate::catalog::repository::RecipeDraft;

/// Commands produced by the view layer and consumed by the controller. No
/// widget touches the repository directly; everything flows through here.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    Search(String),
    Add(RecipeDraft),
    Update { id: u32, draft: RecipeDraft },
    OpenEditor(u32),
    CloseEditor,
    RequestDelete(u32),
    ConfirmDelete(u32),
    CancelDelete,
    ShowDetail(u32),
    HideDetail,
}

impl CatalogIntent {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::Search(query) => format!("search query={query}"),
            Self::Add(draft) => format!("add title={}", draft.title),
            Self::Update { id, draft } => format!("update id={id} title={}", draft.title),
            Self::OpenEditor(id) => format!("open_editor id={id}"),
            Self::CloseEditor => "close_editor".to_string(),
            Self::RequestDelete(id) => format!("request_delete id={id}"),
            Self::ConfirmDelete(id) => format!("confirm_delete id={id}"),
            Self::CancelDelete => "cancel_delete".to_string(),
            Self::ShowDetail(id) => format!("show_detail id={id}"),
            Self::HideDetail => "hide_detail".to_string(),
        }
    }
}
