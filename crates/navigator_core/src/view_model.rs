use crate::classify::{self, ContentKind};
use crate::ResultItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    /// Full session identifier (renderers shorten it themselves).
    pub session: String,
    /// Current instruction text, surfaced so a driver can pre-fill its
    /// input with preserved/example/history text.
    pub input: String,
    pub working: bool,
    /// True when the trimmed input is non-empty and nothing is in flight.
    pub can_submit: bool,
    /// Present whenever there is a status message to show.
    pub status: Option<StatusView>,
    /// Present whenever there are items to show.
    pub results: Option<ResultsView>,
    /// Most-recent-first history rows.
    pub history: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub working: bool,
    /// `"Completed in X.XX seconds"`, only when execution time > 0.
    pub elapsed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub heading: String,
    pub icon: &'static str,
    pub cards: Vec<ResultCardView>,
}

/// One result card, built from whichever optional fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCardView {
    pub title: Option<String>,
    pub fields: Vec<CardField>,
    pub description: Option<String>,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub label: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    /// Index into the store, 0 = most recent; what a driver passes back in
    /// `Msg::HistoryEntrySelected`.
    pub index: usize,
    pub instruction: String,
    pub recorded_at: String,
    pub result_count: usize,
    pub content_type: String,
}

pub(crate) fn results_view(items: &[ResultItem], content_type: &str) -> ResultsView {
    ResultsView {
        heading: classify::section_title(content_type),
        icon: ContentKind::from_tag(content_type).icon(),
        cards: items
            .iter()
            .map(|item| card_view(item, content_type))
            .collect(),
    }
}

fn card_view(item: &ResultItem, content_type: &str) -> ResultCardView {
    let mut fields = Vec::new();
    let mut push = |label: &'static str, value: &Option<String>| {
        if let Some(value) = value {
            fields.push(CardField {
                label,
                value: value.clone(),
            });
        }
    };
    push("Price", &item.price);
    push("Rating", &item.rating);
    push("Company", &item.company);
    push("Location", &item.location);
    push("Channel", &item.channel);
    push("Views", &item.views);
    push("Language", &item.language);
    push("Stars", &item.stars);

    ResultCardView {
        title: item.title.clone(),
        fields,
        description: item.description.clone(),
        action: CardAction {
            label: classify::action_label(item, content_type),
            link: item.link.clone(),
        },
    }
}
