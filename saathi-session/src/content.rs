//! Localized user-facing strings for both supported languages.

use saathi_types::{Language, Notice, NoticeKind};

/// The strings shown to users in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageContent {
    /// Assistant greeting that opens the transcript.
    pub welcome: String,
    /// Title of the rate-limit notice.
    pub rate_limit_title: String,
    /// Body of the rate-limit notice.
    pub rate_limit_body: String,
    /// Title of the exhausted-credits notice.
    pub payment_title: String,
    /// Body of the exhausted-credits notice.
    pub payment_body: String,
    /// Title of the generic failure notice.
    pub failure_title: String,
    /// Body of the generic failure notice.
    pub failure_body: String,
}

impl LanguageContent {
    /// Product defaults for English.
    #[must_use]
    pub fn english() -> Self {
        Self {
            welcome: "Hello! I'm SehatSaathi, your health companion. How can I help you today?"
                .into(),
            rate_limit_title: "Rate Limit".into(),
            rate_limit_body: "Please try again later.".into(),
            payment_title: "Payment Required".into(),
            payment_body: "Please add credits to your workspace.".into(),
            failure_title: "Error".into(),
            failure_body: "Failed to send message. Please try again.".into(),
        }
    }

    /// Product defaults for Hindi.
    #[must_use]
    pub fn hindi() -> Self {
        Self {
            welcome: "नमस्ते! मैं सेहतसाथी हूं, आपका स्वास्थ्य साथी। मैं आज आपकी कैसे मदद कर सकता हूं?".into(),
            rate_limit_title: "सीमा पार".into(),
            rate_limit_body: "कृपया थोड़ी देर बाद पुनः प्रयास करें।".into(),
            payment_title: "भुगतान आवश्यक".into(),
            payment_body: "कृपया अपने वर्कस्पेस में क्रेडिट जोड़ें।".into(),
            failure_title: "त्रुटि".into(),
            failure_body: "संदेश भेजने में विफल। कृपया पुनः प्रयास करें।".into(),
        }
    }
}

/// Per-language content, injectable by the embedder.
///
/// Defaults to the product strings; override individual fields to
/// change the welcome or the notice wording.
///
/// # Example
///
/// ```
/// use saathi_session::ContentTable;
///
/// let mut table = ContentTable::default();
/// table.en.welcome = "Welcome to the clinic.".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    /// English strings.
    pub en: LanguageContent,
    /// Hindi strings.
    pub hi: LanguageContent,
}

impl Default for ContentTable {
    fn default() -> Self {
        Self {
            en: LanguageContent::english(),
            hi: LanguageContent::hindi(),
        }
    }
}

impl ContentTable {
    fn for_language(&self, language: Language) -> &LanguageContent {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }

    /// The assistant greeting for the given language.
    #[must_use]
    pub fn welcome(&self, language: Language) -> &str {
        &self.for_language(language).welcome
    }

    /// Build the localized notice for a failure category.
    #[must_use]
    pub fn notice_for(&self, language: Language, kind: NoticeKind) -> Notice {
        let content = self.for_language(language);
        let (title, body) = match kind {
            NoticeKind::RateLimited => (&content.rate_limit_title, &content.rate_limit_body),
            NoticeKind::PaymentRequired => (&content.payment_title, &content.payment_body),
            NoticeKind::Failure => (&content.failure_title, &content.failure_body),
        };
        Notice {
            kind,
            title: title.clone(),
            body: body.clone(),
        }
    }
}
