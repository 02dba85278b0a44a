//! Draft editing state machine over a [`ContentBundle`].
//!
//! The editor owns two bundles: the committed one that readers see and a
//! detached draft that edits land in. Opening re-clones the committed bundle
//! into a clean draft, saving promotes the draft, and discarding throws it
//! away. Every mutation routes through one clone-then-patch primitive, so a
//! draft snapshot handed out earlier never changes behind a reader's back.
//!
//! Per-field translation requests are tracked here as busy markers with
//! generation counters; the network half lives in the backend, which calls
//! [`DraftEditor::begin_translation`] and [`DraftEditor::resolve_translation`]
//! around the actual request.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::model::{unique_process_id, ContentBundle, Lang, TrainingProcess, Video};
use crate::path::{apply, get, ContentPath, Segment};

/// Literal written into the target field when a translation request fails.
pub const TRANSLATION_FAILED_MARKER: &str = "Translation failed";

/// Bilingual fields a translation request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleField {
    Title,
    Description,
    Subtitle,
    SiteName,
}

impl LocaleField {
    /// JSON object key of the field inside its owning entity.
    pub fn as_key(self) -> &'static str {
        match self {
            LocaleField::Title => "title",
            LocaleField::Description => "description",
            LocaleField::Subtitle => "subtitle",
            LocaleField::SiteName => "siteName",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "title" => Some(LocaleField::Title),
            "description" => Some(LocaleField::Description),
            "subtitle" => Some(LocaleField::Subtitle),
            "siteName" | "sitename" => Some(LocaleField::SiteName),
            _ => None,
        }
    }
}

impl fmt::Display for LocaleField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_key())
    }
}

/// Identifies one translatable field: the path of the owning entity plus the
/// bilingual field inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    /// Path to the owning entity: the site config, a process, or a video.
    pub path: ContentPath,
    pub field: LocaleField,
}

impl TranslationKey {
    pub fn new(path: ContentPath, field: LocaleField) -> Self {
        Self { path, field }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(formatter, "{}", self.field)
        } else {
            write!(formatter, "{}.{}", self.path, self.field)
        }
    }
}

/// How a translation trigger was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationStart {
    /// Request accepted; the key is now busy until a response with this
    /// generation resolves it.
    Started { generation: u64, source: String },
    /// The key already has an outstanding request; the retrigger is dropped.
    AlreadyPending,
    /// Nothing to translate; any busy marker for the key was cleared.
    EmptySource,
    /// The path no longer resolves to an entity carrying the field.
    SourceMissing,
    /// The editor is not open.
    Closed,
}

/// How a translation response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The translated text was patched into the target field.
    Applied,
    /// The failure marker was patched into the target field.
    MarkedFailed,
    /// The target entity no longer exists in the draft; nothing was written.
    TargetMissing,
    /// A newer request for the key superseded this response; dropped.
    Stale,
}

/// See the module docs for the lifecycle this type implements.
#[derive(Debug, Clone)]
pub struct DraftEditor {
    committed: ContentBundle,
    draft: ContentBundle,
    open: bool,
    dirty: bool,
    pending: HashMap<TranslationKey, u64>,
    next_generation: u64,
}

impl DraftEditor {
    pub fn new(committed: ContentBundle) -> Self {
        let draft = committed.clone();
        Self {
            committed,
            draft,
            open: false,
            dirty: false,
            pending: HashMap::new(),
            next_generation: 0,
        }
    }

    /// The bundle readers see; only [`DraftEditor::save`] changes it.
    pub fn committed(&self) -> &ContentBundle {
        &self.committed
    }

    pub fn draft(&self) -> &ContentBundle {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether `key` has an outstanding translation request.
    pub fn is_translating(&self, key: &TranslationKey) -> bool {
        self.pending.contains_key(key)
    }

    /// Keys with outstanding translation requests.
    pub fn pending_translations(&self) -> impl Iterator<Item = &TranslationKey> {
        self.pending.keys()
    }

    /// Replaces the committed bundle wholesale, as after the startup load.
    /// The draft is re-cloned and the editor returns to a clean state.
    pub fn replace_committed(&mut self, bundle: ContentBundle) {
        self.committed = bundle;
        self.reset_draft();
    }

    /// Enters edit mode with a fresh clean draft, no matter what the previous
    /// session left behind.
    pub fn open(&mut self) {
        self.open = true;
        self.reset_draft();
    }

    /// Leaves edit mode without committing. Outstanding translations belong
    /// to the abandoned session and are forgotten.
    pub fn close(&mut self) {
        self.open = false;
        self.pending.clear();
    }

    /// Promotes the draft to committed and returns a copy for persistence.
    /// The editor stays open with a now-clean draft; saving again without
    /// further edits re-produces identical data. `None` when not open.
    pub fn save(&mut self) -> Option<ContentBundle> {
        if !self.open {
            log::warn!("Ignoring save: editor is not open");
            return None;
        }
        self.committed = self.draft.clone();
        self.dirty = false;
        Some(self.committed.clone())
    }

    /// Drops all draft changes, restores the committed bundle, and closes
    /// the editor.
    pub fn discard(&mut self) {
        self.reset_draft();
        self.open = false;
    }

    fn reset_draft(&mut self) {
        self.draft = self.committed.clone();
        self.dirty = false;
        self.pending.clear();
    }

    /// The single mutation primitive: rebuilds the draft with `updater`
    /// applied at `path` and marks it dirty. Returns whether the patch was
    /// accepted; a path that does not resolve, a path addressing a process
    /// id, or a patch that breaks the bundle's structure, is a logged no-op
    /// that leaves the dirty flag alone.
    pub fn edit<F>(&mut self, path: &ContentPath, updater: F) -> bool
    where
        F: FnOnce(&mut Value),
    {
        if !self.open {
            log::warn!("Ignoring edit at {path}: editor is not open");
            return false;
        }
        if addresses_process_id(path.segments()) {
            log::warn!("Ignoring edit at {path}: process ids are immutable");
            return false;
        }
        let tree = match serde_json::to_value(&self.draft) {
            Ok(tree) => tree,
            Err(error) => {
                log::error!("Draft serialization failed: {error}");
                return false;
            }
        };
        let patched = match apply(&tree, path.segments(), updater) {
            Ok(patched) => patched,
            Err(error) => {
                log::debug!("Ignoring edit at {path}: {error}");
                return false;
            }
        };
        match serde_json::from_value::<ContentBundle>(patched) {
            Ok(draft) => {
                self.draft = draft;
                self.dirty = true;
                true
            }
            Err(error) => {
                log::debug!("Ignoring edit at {path}: bundle would become invalid: {error}");
                false
            }
        }
    }

    /// Overwrites the string leaf at `path`.
    pub fn set_field(&mut self, path: &ContentPath, value: &str) -> bool {
        let text = Value::String(value.to_string());
        self.edit(path, move |node| *node = text)
    }

    /// Appends a new training process with a generated id and placeholder
    /// bilingual text.
    pub fn add_process(&mut self) -> bool {
        let id = unique_process_id(&self.draft.training_data);
        let process = match serde_json::to_value(TrainingProcess::placeholder(id)) {
            Ok(value) => value,
            Err(error) => {
                log::error!("Placeholder process serialization failed: {error}");
                return false;
            }
        };
        self.edit(&training_data_path(), move |node| {
            if let Value::Array(items) = node {
                items.push(process);
            }
        })
    }

    /// Removes the process at `index`; out of range is a no-op.
    pub fn delete_process(&mut self, index: usize) -> bool {
        let count = self.draft.training_data.len();
        if index >= count {
            log::debug!("Ignoring delete of process {index}: only {count} present");
            return false;
        }
        self.edit(&training_data_path(), move |node| {
            if let Value::Array(items) = node {
                if index < items.len() {
                    items.remove(index);
                }
            }
        })
    }

    /// Appends a placeholder video to the process at `process`; a process
    /// position that does not resolve is a no-op.
    pub fn add_video(&mut self, process: usize) -> bool {
        let video = match serde_json::to_value(Video::placeholder()) {
            Ok(value) => value,
            Err(error) => {
                log::error!("Placeholder video serialization failed: {error}");
                return false;
            }
        };
        self.edit(&videos_path(process), move |node| {
            if let Value::Array(items) = node {
                items.push(video);
            }
        })
    }

    /// Removes one video from a process's list; out of range on either
    /// position is a no-op.
    pub fn delete_video(&mut self, process: usize, video: usize) -> bool {
        let Some(owner) = self.draft.training_data.get(process) else {
            log::debug!("Ignoring video delete: no process at {process}");
            return false;
        };
        if video >= owner.videos.len() {
            log::debug!("Ignoring delete of video {video} in process {process}: out of range");
            return false;
        }
        self.edit(&videos_path(process), move |node| {
            if let Value::Array(items) = node {
                if video < items.len() {
                    items.remove(video);
                }
            }
        })
    }

    /// Marks `key` busy and hands back the Vietnamese source text, unless
    /// the key is already busy or there is nothing to translate.
    ///
    /// An empty source clears any existing busy marker instead of starting
    /// a request; an in-flight response for that key then resolves as stale.
    pub fn begin_translation(&mut self, key: &TranslationKey) -> TranslationStart {
        if !self.open {
            return TranslationStart::Closed;
        }
        let Some(source) = self.locale_leaf(key, Lang::Vi) else {
            return TranslationStart::SourceMissing;
        };
        if source.trim().is_empty() {
            self.pending.remove(key);
            return TranslationStart::EmptySource;
        }
        if self.pending.contains_key(key) {
            return TranslationStart::AlreadyPending;
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.pending.insert(key.clone(), generation);
        TranslationStart::Started { generation, source }
    }

    /// Applies a settled translation request for `key`.
    ///
    /// The target field is re-resolved against the current draft, so
    /// structural changes made while the request was in flight are honored.
    /// `None` for `translated` records a failure by writing the failure
    /// marker into the target field.
    pub fn resolve_translation(
        &mut self,
        key: &TranslationKey,
        generation: u64,
        translated: Option<String>,
    ) -> TranslationOutcome {
        match self.pending.get(key) {
            Some(current) if *current == generation => {
                self.pending.remove(key);
            }
            _ => return TranslationOutcome::Stale,
        }
        let failed = translated.is_none();
        let text = translated.unwrap_or_else(|| TRANSLATION_FAILED_MARKER.to_string());
        let target = key.path.clone().push(key.field.as_key()).push(Lang::Th.as_str());
        if self.edit(&target, move |node| *node = Value::String(text)) {
            if failed {
                TranslationOutcome::MarkedFailed
            } else {
                TranslationOutcome::Applied
            }
        } else {
            TranslationOutcome::TargetMissing
        }
    }

    fn locale_leaf(&self, key: &TranslationKey, lang: Lang) -> Option<String> {
        let tree = serde_json::to_value(&self.draft).ok()?;
        let node = get(&tree, key.path.segments())?;
        let text = node.get(key.field.as_key())?.get(lang.as_str())?.as_str()?;
        Some(text.to_string())
    }
}

fn training_data_path() -> ContentPath {
    ContentPath::new().push("trainingData")
}

fn videos_path(process: usize) -> ContentPath {
    ContentPath::new().push("trainingData").push(process).push("videos")
}

/// Whether `segments` addresses a process id. Ids are minted once by
/// `add_process` and never rewritten; video ids further down stay editable.
fn addresses_process_id(segments: &[Segment]) -> bool {
    matches!(
        segments,
        [Segment::Key(root), Segment::Index(_), Segment::Key(leaf)]
            if root == "trainingData" && leaf == "id"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocaleText, SiteConfig};

    fn sample_bundle() -> ContentBundle {
        ContentBundle {
            site_config: SiteConfig {
                logo_url: "/logo.png".to_string(),
                title: LocaleText::new("Cổng Đào Tạo", "พอร์ทัลการฝึกอบรม"),
                subtitle: LocaleText::new("Nâng cao kỹ năng", "พัฒนาทักษะ"),
                site_name: LocaleText::new("Nhà Máy ABC", "โรงงาน ABC"),
            },
            training_data: vec![TrainingProcess {
                id: "p1".to_string(),
                title: LocaleText::new("An Toàn", "ความปลอดภัย"),
                description: LocaleText::new("Quy tắc an toàn", "กฎความปลอดภัย"),
                icon: "SafetyIcon".to_string(),
                videos: vec![Video {
                    id: "abc123".to_string(),
                    title: LocaleText::new("Video an toàn", "วิดีโอความปลอดภัย"),
                    thumbnail_url: "https://img.youtube.com/vi/abc123/mqdefault.jpg".to_string(),
                }],
            }],
        }
    }

    fn open_editor() -> DraftEditor {
        let mut editor = DraftEditor::new(sample_bundle());
        editor.open();
        editor
    }

    fn site_title_path() -> ContentPath {
        ContentPath::parse("siteConfig.title.vi")
    }

    fn site_title_key() -> TranslationKey {
        TranslationKey::new(ContentPath::parse("siteConfig"), LocaleField::Title)
    }

    #[test]
    fn opening_produces_a_clean_draft_equal_to_committed() {
        let editor = open_editor();
        assert!(editor.is_open());
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft(), editor.committed());
    }

    #[test]
    fn field_edit_dirties_the_draft_but_not_the_committed_bundle() {
        let mut editor = open_editor();
        assert!(editor.set_field(&site_title_path(), "Cổng Mới"));

        assert!(editor.is_dirty());
        assert_eq!(editor.draft().site_config.title.vi, "Cổng Mới");
        assert_eq!(editor.committed().site_config.title.vi, "Cổng Đào Tạo");
    }

    #[test]
    fn mutations_are_rejected_while_closed() {
        let mut editor = DraftEditor::new(sample_bundle());
        assert!(!editor.set_field(&site_title_path(), "Cổng Mới"));
        assert!(!editor.add_process());
        assert!(editor.save().is_none());
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft(), editor.committed());
    }

    #[test]
    fn save_promotes_the_draft_and_stays_open() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");

        let saved = editor.save().expect("editor is open");
        assert_eq!(&saved, editor.committed());
        assert_eq!(editor.committed().site_config.title.vi, "Cổng Mới");
        assert!(editor.is_open());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn save_without_changes_reproduces_identical_data() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");
        let first = editor.save().expect("editor is open");
        let second = editor.save().expect("editor is open");
        assert_eq!(first, second);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn discard_restores_committed_and_closes() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");
        editor.discard();

        assert!(!editor.is_open());
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft(), editor.committed());
        assert_eq!(editor.committed().site_config.title.vi, "Cổng Đào Tạo");
    }

    #[test]
    fn reopening_discards_a_draft_left_behind_by_close() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");
        editor.close();
        assert_eq!(editor.committed().site_config.title.vi, "Cổng Đào Tạo");

        editor.open();
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft().site_config.title.vi, "Cổng Đào Tạo");
    }

    #[test]
    fn add_process_appends_a_placeholder_with_a_fresh_id() {
        let mut editor = open_editor();
        assert!(editor.add_process());

        let processes = &editor.draft().training_data;
        assert_eq!(processes.len(), 2);
        let added = &processes[1];
        assert_ne!(added.id, processes[0].id);
        assert_eq!(added.title.vi, "Quy trình mới");
        assert!(added.videos.is_empty());
        assert!(editor.is_dirty());
        assert_eq!(editor.committed().training_data.len(), 1);
    }

    #[test]
    fn delete_process_out_of_range_is_a_clean_noop() {
        let mut editor = open_editor();
        assert!(!editor.delete_process(5));
        assert!(!editor.is_dirty());

        assert!(editor.delete_process(0));
        assert!(editor.draft().training_data.is_empty());
        assert!(editor.is_dirty());
    }

    #[test]
    fn video_list_edits_are_scoped_to_their_process() {
        let mut editor = open_editor();
        assert!(editor.add_video(0));
        assert_eq!(editor.draft().training_data[0].videos.len(), 2);
        assert_eq!(editor.draft().training_data[0].videos[1].id, "dQw4w9WgXcQ");

        assert!(!editor.add_video(9));
        assert!(!editor.delete_video(0, 9));
        assert!(!editor.delete_video(9, 0));

        assert!(editor.delete_video(0, 0));
        assert_eq!(editor.draft().training_data[0].videos.len(), 1);
    }

    #[test]
    fn deleting_the_first_video_keeps_the_second_one_intact() {
        let mut editor = open_editor();
        assert!(editor.add_process());
        assert!(editor.add_video(1));
        assert!(editor.add_video(1));
        assert!(editor.set_field(&ContentPath::parse("trainingData.1.videos.0.id"), "aaa111"));
        assert!(editor.set_field(&ContentPath::parse("trainingData.1.videos.1.id"), "bbb222"));

        assert!(editor.delete_video(1, 0));

        let videos = &editor.draft().training_data[1].videos;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "bbb222");
    }

    #[test]
    fn patches_that_break_the_bundle_shape_are_rejected() {
        let mut editor = open_editor();
        let before = editor.draft().clone();

        assert!(!editor.set_field(&ContentPath::parse("siteConfig"), "oops"));
        assert!(!editor.set_field(&ContentPath::parse("siteConfig.missing.vi"), "oops"));

        assert!(!editor.is_dirty());
        assert_eq!(editor.draft(), &before);
    }

    #[test]
    fn process_ids_cannot_be_rewritten_through_field_edits() {
        let mut editor = open_editor();
        assert!(editor.add_process());
        let minted = editor.draft().training_data[1].id.clone();

        assert!(!editor.set_field(&ContentPath::parse("trainingData.1.id"), "p1"));
        assert_eq!(editor.draft().training_data[1].id, minted);
        assert_ne!(editor.draft().training_data[1].id, editor.draft().training_data[0].id);

        assert!(editor.set_field(&ContentPath::parse("trainingData.0.videos.0.id"), "xyz789"));
        assert_eq!(editor.draft().training_data[0].videos[0].id, "xyz789");
    }

    #[test]
    fn translation_round_trip_updates_the_thai_field() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");

        let key = site_title_key();
        let TranslationStart::Started { generation, source } = editor.begin_translation(&key)
        else {
            panic!("translation should start");
        };
        assert_eq!(source, "Cổng Mới");
        assert!(editor.is_translating(&key));

        let outcome = editor.resolve_translation(&key, generation, Some("พอร์ทัลใหม่".to_string()));
        assert_eq!(outcome, TranslationOutcome::Applied);
        assert_eq!(editor.draft().site_config.title.th, "พอร์ทัลใหม่");
        assert!(editor.is_dirty());
        assert!(!editor.is_translating(&key));
    }

    #[test]
    fn retriggers_for_a_busy_key_are_coalesced() {
        let mut editor = open_editor();
        let key = site_title_key();

        let TranslationStart::Started { generation, .. } = editor.begin_translation(&key) else {
            panic!("translation should start");
        };
        assert_eq!(editor.begin_translation(&key), TranslationStart::AlreadyPending);
        assert_eq!(editor.pending_translations().count(), 1);

        let outcome = editor.resolve_translation(&key, generation, Some("พอร์ทัล".to_string()));
        assert_eq!(outcome, TranslationOutcome::Applied);
        assert_eq!(editor.pending_translations().count(), 0);
    }

    #[test]
    fn responses_from_superseded_requests_are_dropped() {
        let mut editor = open_editor();
        let key = site_title_key();

        let TranslationStart::Started { generation: first, .. } = editor.begin_translation(&key)
        else {
            panic!("translation should start");
        };
        editor.resolve_translation(&key, first, Some("ครั้งแรก".to_string()));

        let TranslationStart::Started { generation: second, .. } = editor.begin_translation(&key)
        else {
            panic!("translation should start");
        };

        let replay = editor.resolve_translation(&key, first, Some("ซ้ำ".to_string()));
        assert_eq!(replay, TranslationOutcome::Stale);
        assert_eq!(editor.draft().site_config.title.th, "ครั้งแรก");
        assert!(editor.is_translating(&key));

        let outcome = editor.resolve_translation(&key, second, Some("ครั้งที่สอง".to_string()));
        assert_eq!(outcome, TranslationOutcome::Applied);
        assert_eq!(editor.draft().site_config.title.th, "ครั้งที่สอง");
    }

    #[test]
    fn empty_source_clears_the_busy_marker_without_a_request() {
        let mut editor = open_editor();
        let key = site_title_key();

        assert!(matches!(editor.begin_translation(&key), TranslationStart::Started { .. }));
        editor.set_field(&site_title_path(), "");
        assert_eq!(editor.begin_translation(&key), TranslationStart::EmptySource);
        assert!(!editor.is_translating(&key));
    }

    #[test]
    fn failed_translations_write_the_failure_marker() {
        let mut editor = open_editor();
        let key = site_title_key();

        let TranslationStart::Started { generation, .. } = editor.begin_translation(&key) else {
            panic!("translation should start");
        };
        let outcome = editor.resolve_translation(&key, generation, None);
        assert_eq!(outcome, TranslationOutcome::MarkedFailed);
        assert_eq!(editor.draft().site_config.title.th, TRANSLATION_FAILED_MARKER);
        assert!(editor.is_dirty());
    }

    #[test]
    fn responses_for_deleted_targets_are_dropped() {
        let mut editor = open_editor();
        let key = TranslationKey::new(ContentPath::parse("trainingData.0"), LocaleField::Title);

        let TranslationStart::Started { generation, .. } = editor.begin_translation(&key) else {
            panic!("translation should start");
        };
        assert!(editor.delete_process(0));
        let draft_after_delete = editor.draft().clone();

        let outcome = editor.resolve_translation(&key, generation, Some("สาย".to_string()));
        assert_eq!(outcome, TranslationOutcome::TargetMissing);
        assert_eq!(editor.draft(), &draft_after_delete);
        assert!(!editor.is_translating(&key));
    }

    #[test]
    fn missing_source_paths_are_reported() {
        let mut editor = open_editor();
        let key = TranslationKey::new(ContentPath::parse("trainingData.9"), LocaleField::Title);
        assert_eq!(editor.begin_translation(&key), TranslationStart::SourceMissing);

        let mut closed = DraftEditor::new(sample_bundle());
        assert_eq!(closed.begin_translation(&site_title_key()), TranslationStart::Closed);
    }

    #[test]
    fn replace_committed_resets_the_editor() {
        let mut editor = open_editor();
        editor.set_field(&site_title_path(), "Cổng Mới");

        let mut replacement = sample_bundle();
        replacement.site_config.title.vi = "Cổng Nạp Lại".to_string();
        editor.replace_committed(replacement);

        assert!(!editor.is_dirty());
        assert_eq!(editor.draft().site_config.title.vi, "Cổng Nạp Lại");
        assert_eq!(editor.draft(), editor.committed());
    }
}
