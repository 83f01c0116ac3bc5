//! Conversion of a model reply into an HTML fragment.
//!
//! The reply is read line by line. Runs of bullet lines (`- ` or `* ` after
//! trimming) become a `<ul>` list, every other line is copied through. The
//! resulting fragments are joined with `<br>`.

use minijinja::HtmlEscape;

const BULLET_MARKERS: [&str; 2] = ["- ", "* "];
const LINE_BREAK: &str = "<br>";

/// How per-line text is embedded in the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePolicy {
    /// HTML-escape text; only the list structure produces markup.
    #[default]
    Escape,
    /// Pass model text through untouched.
    Raw,
}

impl EscapePolicy {
    pub fn from_escape_flag(escape_html: bool) -> Self {
        if escape_html { EscapePolicy::Escape } else { EscapePolicy::Raw }
    }
}

/// Whether the formatter is currently inside a `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    OutsideList,
    InsideList,
}

/// One piece of output, before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    ListOpen,
    ListClose,
    Item(&'a str),
    Text(&'a str),
}

impl Fragment<'_> {
    pub fn render(&self, policy: EscapePolicy) -> String {
        match self {
            Fragment::ListOpen => "<ul>".to_string(),
            Fragment::ListClose => "</ul>".to_string(),
            Fragment::Item(content) => format!("<li>{}</li>", text(content, policy)),
            Fragment::Text(line) => text(line, policy),
        }
    }
}

fn text(value: &str, policy: EscapePolicy) -> String {
    match policy {
        EscapePolicy::Escape => HtmlEscape(value).to_string(),
        EscapePolicy::Raw => value.to_string(),
    }
}

/// Content of a bullet line with its marker removed, or `None` for other lines.
pub fn list_item_content(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    BULLET_MARKERS.iter().find_map(|marker| trimmed.strip_prefix(*marker))
}

/// Advance the state machine over one line.
pub fn step(state: ListState, line: &str) -> (ListState, Vec<Fragment<'_>>) {
    match (state, list_item_content(line)) {
        (ListState::OutsideList, Some(item)) => {
            (ListState::InsideList, vec![Fragment::ListOpen, Fragment::Item(item)])
        }
        (ListState::InsideList, Some(item)) => (ListState::InsideList, vec![Fragment::Item(item)]),
        (ListState::InsideList, None) => {
            (ListState::OutsideList, vec![Fragment::ListClose, Fragment::Text(line)])
        }
        (ListState::OutsideList, None) => (ListState::OutsideList, vec![Fragment::Text(line)]),
    }
}

/// Fragment needed to leave `state` balanced at end of input.
pub fn finish(state: ListState) -> Option<Fragment<'static>> {
    match state {
        ListState::InsideList => Some(Fragment::ListClose),
        ListState::OutsideList => None,
    }
}

/// Split a reply into the fragments the formatter emits.
pub fn fragments(reply: &str) -> Vec<Fragment<'_>> {
    let mut state = ListState::OutsideList;
    let mut out = Vec::new();

    for line in reply.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (next, emitted) = step(state, line);
        out.extend(emitted);
        state = next;
    }

    out.extend(finish(state));
    out
}

/// Format a model reply as an HTML fragment.
pub fn format_reply(reply: &str, policy: EscapePolicy) -> String {
    fragments(reply)
        .iter()
        .map(|fragment| fragment.render(policy))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
