/// One structured record found by the navigation service.
///
/// Every field is optional: presence is the display trigger, absence means
/// the row is omitted. Values arrive already formatted by the wire layer
/// and are never validated or coerced here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultItem {
    pub title: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub channel: Option<String>,
    pub views: Option<String>,
    pub language: Option<String>,
    pub stars: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub action_text: Option<String>,
}
