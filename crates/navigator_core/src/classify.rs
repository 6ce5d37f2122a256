use crate::ResultItem;

/// Service-provided content tags the client knows how to label.
/// `from_tag` is total: anything unrecognized falls back to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Products,
    Jobs,
    Repositories,
    Videos,
    Questions,
    General,
}

impl ContentKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "products" => ContentKind::Products,
            "jobs" => ContentKind::Jobs,
            "repositories" => ContentKind::Repositories,
            "videos" => ContentKind::Videos,
            "questions" => ContentKind::Questions,
            _ => ContentKind::General,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContentKind::Products => "🛒",
            ContentKind::Jobs => "💼",
            ContentKind::Repositories => "📦",
            ContentKind::Videos => "🎬",
            ContentKind::Questions => "❓",
            ContentKind::General => "🔍",
        }
    }

    pub fn default_action_label(self) -> &'static str {
        match self {
            ContentKind::Products => "View Product",
            ContentKind::Jobs => "View Job",
            ContentKind::Repositories => "View Repository",
            ContentKind::Videos => "Watch Video",
            ContentKind::Questions => "View Question",
            ContentKind::General => "View Details",
        }
    }
}

/// Action label for one card: the item's own `action_text` wins
/// unconditionally when present and non-empty.
pub fn action_label(item: &ResultItem, content_type: &str) -> String {
    match item.action_text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => ContentKind::from_tag(content_type)
            .default_action_label()
            .to_string(),
    }
}

/// Heading for the result grid. Tags arrive already pluralized, so this is
/// the tag with its first letter upper-cased, unknown values included.
pub fn section_title(content_type: &str) -> String {
    let mut chars = content_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
