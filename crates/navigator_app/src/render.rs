//! Text rendering for the view model. Everything here is a pure function
//! from view data to lines; printing happens only in [`draw`].

use colored::Colorize;
use navigator_client::{ClientError, ServiceHealth};
use navigator_core::{AppViewModel, ResultCardView, StatusView};

const WORKING_GLYPH: &str = "⟳";
const DONE_GLYPH: &str = "✓";

pub fn draw(view: &AppViewModel) {
    for line in lines(view) {
        println!("{line}");
    }
}

pub fn lines(view: &AppViewModel) -> Vec<String> {
    let mut out = Vec::new();

    if view.status.is_none() && view.results.is_none() {
        return welcome_lines(view);
    }

    if let Some(status) = &view.status {
        out.extend(status_lines(status));
    }

    if let Some(results) = &view.results {
        out.push(String::new());
        out.push(
            format!(
                "{} {} ({})",
                results.icon,
                results.heading,
                results.cards.len()
            )
            .bold()
            .to_string(),
        );
        for (index, card) in results.cards.iter().enumerate() {
            out.push(String::new());
            out.extend(card_lines(index + 1, card));
        }
    }

    out
}

fn welcome_lines(view: &AppViewModel) -> Vec<String> {
    let mut out = Vec::new();
    out.push(
        "Navigator — natural-language web navigation"
            .bold()
            .to_string(),
    );
    out.push(format!("Session {}", &view.session[..view.session.len().min(8)]).dimmed().to_string());
    out.push(String::new());
    out.push("Tell the service what to find, in plain words. For example:".to_string());
    for example in [
        "search for Python jobs on LinkedIn",
        "find gaming laptops on Amazon under $1500",
        "search for React repositories on GitHub",
        "find JavaScript questions on Stack Overflow",
        "search for React tutorials on YouTube",
    ] {
        out.push(format!("  • {example}"));
    }
    out.push(String::new());
    out.push(
        "Commands: /example, /new, /history, /history N, /health, quit"
            .dimmed()
            .to_string(),
    );
    out
}

fn status_lines(status: &StatusView) -> Vec<String> {
    let mut out = Vec::new();
    if status.working {
        out.push(format!("{} {}", WORKING_GLYPH.yellow(), status.message));
    } else {
        out.push(format!("{} {}", DONE_GLYPH.green(), status.message));
    }
    if let Some(elapsed) = &status.elapsed {
        out.push(format!("  {}", elapsed.dimmed()));
    }
    out
}

fn card_lines(number: usize, card: &ResultCardView) -> Vec<String> {
    let mut out = Vec::new();

    match &card.title {
        Some(title) => out.push(format!("{number}. {}", title.bold())),
        None => out.push(format!("{number}.")),
    }

    if !card.fields.is_empty() {
        let row = card
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push(format!("   {row}"));
    }

    if let Some(description) = &card.description {
        out.push(format!("   {description}"));
    }

    match &card.action.link {
        Some(link) => out.push(format!(
            "   {} → {}",
            card.action.label.cyan(),
            link.underline()
        )),
        None => out.push(format!("   {}", card.action.label.cyan())),
    }

    out
}

pub fn history_lines(view: &AppViewModel) -> Vec<String> {
    if view.history.is_empty() {
        return vec!["No history yet.".dimmed().to_string()];
    }

    let mut out = vec!["Recent queries (newest first):".bold().to_string()];
    for row in &view.history {
        out.push(format!(
            "  {}. [{}] {} — {} {}",
            row.index + 1,
            row.recorded_at,
            row.instruction,
            row.result_count,
            row.content_type,
        ));
    }
    out.push(
        "Use /history N to load an entry without re-running it."
            .dimmed()
            .to_string(),
    );
    out
}

pub fn health_lines(result: &Result<ServiceHealth, ClientError>) -> Vec<String> {
    match result {
        Ok(health) => {
            let ready = if health.navigator_ready {
                "navigator ready"
            } else {
                "navigator NOT ready"
            };
            vec![format!(
                "{} Service {} — {} {} ({ready})",
                DONE_GLYPH.green(),
                health.status,
                health.service.as_deref().unwrap_or("unknown"),
                health.version.as_deref().unwrap_or(""),
            )]
        }
        Err(err) => vec![format!("{} Service check failed: {err}", "✗".red())],
    }
}

#[cfg(test)]
mod tests {
    use navigator_core::{update, AppState, Msg, NavigationOutcome, ResultItem};

    use super::{history_lines, lines};

    fn no_color() {
        colored::control::set_override(false);
    }

    fn completed_state(items: Vec<ResultItem>) -> AppState {
        let (state, _) = update(AppState::new(), Msg::InputChanged("find things".to_string()));
        let (state, _) = update(state, Msg::SubmitRequested);
        let msg = Msg::NavigationCompleted {
            session: state.session_id().clone(),
            outcome: NavigationOutcome::Completed {
                items,
                message: Some("Found things".to_string()),
                execution_time: 2.5,
                content_type: Some("products".to_string()),
                completed_at: "12:30:05".to_string(),
            },
        };
        update(state, msg).0
    }

    #[test]
    fn empty_state_renders_the_welcome_panel() {
        no_color();
        let view = AppState::new().view();
        let out = lines(&view).join("\n");
        assert!(out.contains("Navigator — natural-language web navigation"));
        assert!(out.contains("find gaming laptops on Amazon under $1500"));
    }

    #[test]
    fn working_state_renders_a_spinner_status() {
        no_color();
        let (state, _) = update(AppState::new(), Msg::InputChanged("go".to_string()));
        let (state, _) = update(state, Msg::SubmitRequested);
        let out = lines(&state.view()).join("\n");
        assert!(out.contains("⟳ Working on your request..."));
        assert!(!out.contains("Completed in"));
    }

    #[test]
    fn completed_state_renders_status_heading_and_cards() {
        no_color();
        let state = completed_state(vec![ResultItem {
            title: Some("Acer Nitro 5".to_string()),
            price: Some("$999".to_string()),
            rating: Some("4.5".to_string()),
            link: Some("https://example.com/acer".to_string()),
            ..ResultItem::default()
        }]);
        let out = lines(&state.view()).join("\n");

        assert!(out.contains("✓ Found things"));
        assert!(out.contains("Completed in 2.50 seconds"));
        assert!(out.contains("Products (1)"));
        assert!(out.contains("1. Acer Nitro 5"));
        assert!(out.contains("Price: $999 | Rating: 4.5"));
        assert!(out.contains("View Product → https://example.com/acer"));
    }

    #[test]
    fn absent_fields_are_omitted_from_cards() {
        no_color();
        let state = completed_state(vec![ResultItem {
            title: Some("bare".to_string()),
            ..ResultItem::default()
        }]);
        let out = lines(&state.view()).join("\n");

        assert!(!out.contains("Price:"));
        assert!(!out.contains("Rating:"));
        // The action label still renders, from the content-type table.
        assert!(out.contains("View Product"));
    }

    #[test]
    fn history_listing_is_numbered_from_one() {
        no_color();
        let state = completed_state(vec![ResultItem::default()]);
        let out = history_lines(&state.view()).join("\n");
        assert!(out.contains("1. [12:30:05] find things — 1 products"));
    }

    #[test]
    fn empty_history_has_a_placeholder() {
        no_color();
        let out = history_lines(&AppState::new().view()).join("\n");
        assert!(out.contains("No history yet."));
    }
}
