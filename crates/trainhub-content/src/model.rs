use serde::{Deserialize, Serialize};

/// Languages the portal publishes content in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Vietnamese, the authoring language.
    #[default]
    Vi,
    /// Thai, the translation target.
    Th,
}

impl Lang {
    /// Two-letter code used as the JSON key inside a [`LocaleText`].
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Vi => "vi",
            Lang::Th => "th",
        }
    }

    /// The other supported language.
    pub fn toggle(self) -> Self {
        match self {
            Lang::Vi => Lang::Th,
            Lang::Th => Lang::Vi,
        }
    }

    /// English name used when phrasing translation instructions.
    pub fn english_name(self) -> &'static str {
        match self {
            Lang::Vi => "Vietnamese",
            Lang::Th => "Thai",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Parallel text in the two supported languages.
///
/// Both fields are always present; either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocaleText {
    pub vi: String,
    pub th: String,
}

impl LocaleText {
    pub fn new(vi: impl Into<String>, th: impl Into<String>) -> Self {
        Self {
            vi: vi.into(),
            th: th.into(),
        }
    }

    /// Text for the given display language.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Vi => &self.vi,
            Lang::Th => &self.th,
        }
    }

    pub fn set(&mut self, lang: Lang, text: impl Into<String>) {
        match lang {
            Lang::Vi => self.vi = text.into(),
            Lang::Th => self.th = text.into(),
        }
    }
}

/// External video identifier used for placeholder videos.
const PLACEHOLDER_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Standard thumbnail URL for an external video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

/// One training video, owned by exactly one process.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// External (YouTube) video identifier.
    pub id: String,
    pub title: LocaleText,
    pub thumbnail_url: String,
}

impl Video {
    /// Embeddable player URL for this video in the given display language.
    pub fn embed_url(&self, lang: Lang) -> String {
        format!(
            "https://www.youtube.com/embed/{}?autoplay=1&rel=0&cc_lang_pref={lang}&hl={lang}",
            self.id
        )
    }

    /// Default value appended by the editor's add-video operation.
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_VIDEO_ID.to_string(),
            title: LocaleText::new("Video mới", "วิดีโอใหม่"),
            thumbnail_url: thumbnail_url(PLACEHOLDER_VIDEO_ID),
        }
    }
}

/// Symbolic icon names the home page knows how to render.
pub const ICON_NAMES: [&str; 5] = [
    "SafetyIcon",
    "MachineOperationIcon",
    "QualityControlIcon",
    "LogisticsIcon",
    "FireSafetyIcon",
];

/// One training process: bilingual chrome plus an ordered video list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrainingProcess {
    /// Unique identifier; immutable once created.
    pub id: String,
    pub title: LocaleText,
    pub description: LocaleText,
    /// Symbolic icon name from [`ICON_NAMES`].
    pub icon: String,
    pub videos: Vec<Video>,
}

impl TrainingProcess {
    /// Default value appended by the editor's add-process operation.
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            title: LocaleText::new("Quy trình mới", "กระบวนการใหม่"),
            description: LocaleText::new(
                "Mô tả ngắn cho quy trình mới.",
                "คำอธิบายสั้น ๆ สำหรับกระบวนการใหม่",
            ),
            icon: ICON_NAMES[0].to_string(),
            videos: Vec::new(),
        }
    }
}

/// Generates a time-based process id that does not collide with any id
/// already present in `existing`.
pub fn unique_process_id(existing: &[TrainingProcess]) -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let mut candidate = format!("p{millis}");
    let mut bump = 0u128;
    while existing.iter().any(|process| process.id == candidate) {
        bump += 1;
        candidate = format!("p{}", millis + bump);
    }
    candidate
}

/// Site chrome shown on the home page and in the footer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub logo_url: String,
    pub title: LocaleText,
    pub subtitle: LocaleText,
    pub site_name: LocaleText,
}

/// The full persisted unit: site chrome plus the training process catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub site_config: SiteConfig,
    pub training_data: Vec<TrainingProcess>,
}

impl Default for ContentBundle {
    fn default() -> Self {
        crate::defaults::initial_content()
    }
}
