use std::collections::HashMap;

pub const CREATE_ACCOUNT_KEY: &str = "create_account";

/// Resolves a translation key to display text.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// Built-in English texts. Unknown keys are shown as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn translate(&self, key: &str) -> String {
        let text = match key {
            "first_name" => "First Name",
            "last_name" => "Last Name",
            "email" => "Email",
            "password" => "Password",
            CREATE_ACCOUNT_KEY => "Create Account",
            other => other,
        };
        text.to_string()
    }
}

/// Key/text table for one language; missing keys fall back to English.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| EnglishTranslator.translate(key))
    }
}
