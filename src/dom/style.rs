/// Ordered inline-style declaration list.
///
/// The serialized `css_text` form is the durable record used by the reset
/// baseline, so serialization and re-parsing must round-trip exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces an existing declaration in place, preserving its position.
    pub fn set_property(&mut self, property: &str, value: &str) {
        if let Some(slot) = self
            .declarations
            .iter_mut()
            .find(|(name, _)| name == property)
        {
            slot.1 = value.to_string();
        } else {
            self.declarations
                .push((property.to_string(), value.to_string()));
        }
    }

    pub fn remove_property(&mut self, property: &str) {
        self.declarations.retain(|(name, _)| name != property);
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replaces all declarations with the parsed form of `text`.
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations.clear();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if !name.is_empty() && !value.is_empty() {
                self.set_property(name, value);
            }
        }
    }
}
