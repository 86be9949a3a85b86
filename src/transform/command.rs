/// Where a command originated. Dialog-control commands suppress the
/// re-entrant dialog refresh that menu-driven commands trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    Menu,
    DialogControl,
}

/// The menu-item command vocabulary. Identifiers from the context menu and
/// commands synthesized by dialog controls share this one parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Reset,
    ResetAll,
    Reverse,
    Dialog,
    /// Carries the raw keyword; validation happens at apply time so unknown
    /// modes can be ignored without failing the whole command.
    Render(String),
    Percent(f64),
    Degrees(f64),
}

impl Command {
    pub fn parse(menu_item_id: &str) -> Option<Self> {
        match menu_item_id {
            "reset" => return Some(Self::Reset),
            "reset-all" => return Some(Self::ResetAll),
            "reverse" => return Some(Self::Reverse),
            "dialog" => return Some(Self::Dialog),
            _ => {}
        }
        if let Some(mode) = menu_item_id.strip_prefix("render:") {
            return Some(Self::Render(mode.to_string()));
        }
        if menu_item_id.ends_with('%') {
            return Some(Self::Percent(leading_number(menu_item_id)));
        }
        if menu_item_id.ends_with("deg") {
            return Some(Self::Degrees(leading_number(menu_item_id)));
        }
        None
    }
}

/// Permissive numeric prefix parse. Malformed input yields NaN, which the
/// engine stores as-is rather than rejecting.
pub fn leading_number(text: &str) -> f64 {
    let end = text
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '.' | '+' | '-'))
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(f64::NAN)
}
