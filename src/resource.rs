//! Course resource and attachment model.
//!
//! A [`Resource`] is a single shared item (a set of lecture notes, a past
//! exam) with a title and zero or more file [`Attachment`]s. Attachments
//! are exclusively owned: they live inside their resource and disappear
//! with it. Only the resource title and attachment `original_name` fields
//! participate in search; `stored_name` is an opaque storage key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique, immutable resource identifier, assigned by the store.
pub type ResourceId = u64;

/// Unique attachment identifier, assigned by the store.
pub type AttachmentId = u64;

/// Category of an uploaded attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttachmentCategory {
    /// Lecture or study notes.
    #[default]
    Note,
    /// A past exam paper.
    Exam,
}

impl AttachmentCategory {
    /// Resolve a user-supplied category label.
    ///
    /// Accepts the canonical names plus the aliases seen on the upload
    /// form, including the Chinese labels. Anything unrecognized (or
    /// absent) falls back to [`AttachmentCategory::Note`].
    pub fn resolve_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return AttachmentCategory::Note;
        };
        let v = raw.trim().to_uppercase();
        if v == "EXAM" || v == "PAST_PAPER" || v.contains("试卷") || v.contains("历年") || v.contains("回忆") {
            AttachmentCategory::Exam
        } else {
            AttachmentCategory::Note
        }
    }
}

/// A single uploaded file bound to exactly one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Attachment identifier (0 until assigned by a store).
    pub id: AttachmentId,
    /// Human filename as uploaded; searchable text.
    pub original_name: String,
    /// Opaque storage key; never searched.
    pub stored_name: String,
    /// MIME type, when known.
    pub content_type: Option<String>,
    /// File size in bytes.
    pub size: u64,
    /// Attachment category.
    pub category: AttachmentCategory,
}

impl Attachment {
    /// Create a new attachment with the given filename and storage key.
    pub fn new<S: Into<String>, T: Into<String>>(original_name: S, stored_name: T) -> Self {
        Attachment {
            id: 0,
            original_name: original_name.into(),
            stored_name: stored_name.into(),
            content_type: None,
            size: 0,
            category: AttachmentCategory::default(),
        }
    }

    /// Set the MIME type.
    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the file size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the attachment category.
    pub fn with_category(mut self, category: AttachmentCategory) -> Self {
        self.category = category;
        self
    }
}

/// A course-related item with a title and zero or more attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource identifier (0 until assigned by a store).
    pub id: ResourceId,
    /// Resource title; non-empty searchable text.
    pub title: String,
    /// Creation timestamp; immutable once stored.
    pub created_at: DateTime<Utc>,
    /// College or faculty the resource belongs to.
    pub college: Option<String>,
    /// Display name of the uploading user, when known.
    pub uploader: Option<String>,
    /// Owned attachments; insertion order is irrelevant for search.
    pub attachments: Vec<Attachment>,
}

impl Resource {
    /// Create a new resource with the given title, stamped with the
    /// current time.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Resource {
            id: 0,
            title: title.into(),
            created_at: Utc::now(),
            college: None,
            uploader: None,
            attachments: Vec::new(),
        }
    }

    /// Override the creation timestamp (mainly useful in tests and data
    /// migrations; stores never touch it).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the college.
    pub fn with_college<S: Into<String>>(mut self, college: S) -> Self {
        self.college = Some(college.into());
        self
    }

    /// Set the uploader display name.
    pub fn with_uploader<S: Into<String>>(mut self, uploader: S) -> Self {
        self.uploader = Some(uploader.into());
        self
    }

    /// Append an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}
