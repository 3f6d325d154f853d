use once_cell::sync::Lazy;
use serde_json::Value;

/// Languages the storefront ships. Spanish is the store's own voice and
/// the default; English is offered as a toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

static ES: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("es.json")).expect("es catalog must be valid JSON")
});

static EN: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("en.json")).expect("en catalog must be valid JSON")
});

fn catalog(locale: Locale) -> &'static Value {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}

/// Resolves translation keys against the active locale's catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Translator { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Looks up a dot-separated key like `cart.item_count`. A key that is
    /// missing or does not resolve to a string is echoed back verbatim, so
    /// the UI shows the key instead of nothing.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// `t` with `{param}` interpolation. Placeholders without a matching
    /// param are left as-is.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        match lookup(catalog(self.locale), key) {
            Some(Value::String(template)) => interpolate(template, params),
            _ => {
                tracing::warn!("missing translation key: {key}");
                key.to_string()
            }
        }
    }
}

fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    let mut value = tree;

    for part in key.split('.') {
        value = value.as_object()?.get(part)?;
    }

    Some(value)
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let name = &tail[1..end];
        let is_placeholder =
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if is_placeholder {
            match params.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&tail[..=end]),
            }
            rest = &tail[end + 1..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
