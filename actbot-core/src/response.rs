//! Declarative action output.
//!
//! A [`Response`] says what should happen (text, media, keyboards, edit/delete flags); the compiler in
//! `actbot-responder` decides which outbound operations realize it.

use serde::{Deserialize, Serialize};

/// Rich-text flavour of a text or caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    Html,
}

/// What pressing an inline button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    Url(String),
    Callback(String),
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    /// A button whose target is a URL when it starts with `http`, otherwise a callback payload.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let action = if target.starts_with("http") {
            ButtonAction::Url(target)
        } else {
            ButtonAction::Callback(target)
        };
        Self {
            label: label.into(),
            action,
        }
    }

    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// Builds one keyboard row from `(label, target)` pairs.
    pub fn row<L, T>(pairs: impl IntoIterator<Item = (L, T)>) -> Vec<InlineButton>
    where
        L: Into<String>,
        T: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(label, target)| InlineButton::new(label, target))
            .collect()
    }
}

/// Reply keyboard: rows of button labels.
pub type Keyboard = Vec<Vec<String>>;

/// Inline keyboard: rows of buttons attached to a message.
pub type InlineKeyboard = Vec<Vec<InlineButton>>;

/// One inline-query result that sends `text` when chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub text: String,
    pub description: Option<String>,
}

impl InlineArticle {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            description: None,
        }
    }
}

/// What an action wants to happen in reply to an event.
///
/// Construct with [`Response::text`], [`Response::markdown`], [`Response::html`],
/// [`Response::notice`], [`Response::alert`], [`Response::photo`] etc., then refine with the
/// `with_*` builders. [`Response::empty`] is the explicit "do nothing" signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_link_preview: bool,
    /// Short ephemeral text shown when answering a callback; ignored outside callbacks.
    pub notice: Option<String>,
    /// Show `notice` as a modal alert instead of a toast.
    pub alert: bool,
    /// Reply keyboard; `Some(vec![])` removes the client's keyboard.
    pub keyboard: Option<Keyboard>,
    pub inline: Option<InlineKeyboard>,
    pub photos: Vec<String>,
    pub document: Option<String>,
    pub audio: Option<String>,
    /// Content type used when uploading a local file; defaults to `image/jpeg`.
    pub mime: Option<String>,
    pub articles: Vec<InlineArticle>,
    /// Edit the origin message instead of sending a new one.
    pub edit: bool,
    /// Delete the origin message first.
    pub delete: bool,
    /// Strip the inline keyboard from the origin message.
    pub clear_inline: bool,
}

impl Response {
    /// No-op response: the action handled the event and wants nothing sent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Plain text without link previews.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            disable_link_preview: true,
            ..Self::default()
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            parse_mode: Some(ParseMode::Markdown),
            ..Self::text(text)
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            parse_mode: Some(ParseMode::Html),
            ..Self::text(text)
        }
    }

    /// Callback toast.
    pub fn notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::default()
        }
    }

    /// Callback modal alert.
    pub fn alert(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            alert: true,
            ..Self::default()
        }
    }

    pub fn photo(photo: impl Into<String>) -> Self {
        Self {
            photos: vec![photo.into()],
            ..Self::default()
        }
    }

    pub fn photos<S: Into<String>>(photos: impl IntoIterator<Item = S>) -> Self {
        Self {
            photos: photos.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn audio(audio: impl Into<String>) -> Self {
        Self {
            audio: Some(audio.into()),
            ..Self::default()
        }
    }

    /// Inline-query answer.
    pub fn articles(articles: Vec<InlineArticle>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Deletes the origin message and sends nothing else.
    pub fn delete_origin() -> Self {
        Self {
            delete: true,
            ..Self::default()
        }
    }

    /// Text (or caption for media responses).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Sets a reply keyboard and drops any inline keyboard.
    pub fn with_keyboard<R, S>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard = Some(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        );
        self.inline = None;
        self
    }

    /// Removes the client's reply keyboard.
    pub fn with_keyboard_removed(mut self) -> Self {
        self.keyboard = Some(Vec::new());
        self.inline = None;
        self
    }

    /// Sets an inline keyboard and drops any reply keyboard.
    pub fn with_inline(mut self, rows: InlineKeyboard) -> Self {
        self.inline = Some(rows);
        self.keyboard = None;
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photos.push(photo.into());
        self
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn with_edit(mut self) -> Self {
        self.edit = true;
        self
    }

    pub fn with_delete(mut self) -> Self {
        self.delete = true;
        self
    }

    pub fn with_clear_inline(mut self) -> Self {
        self.clear_inline = true;
        self
    }

    pub fn with_link_preview(mut self) -> Self {
        self.disable_link_preview = false;
        self
    }

    /// True when the text is empty or whitespace only.
    pub fn text_is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// False iff there is nothing to show and nothing to delete.
    pub fn is_present(&self) -> bool {
        !self.text_is_blank()
            || self.notice.as_deref().is_some_and(|n| !n.is_empty())
            || !self.photos.is_empty()
            || self.document.is_some()
            || self.audio.is_some()
            || self.inline.is_some()
            || !self.articles.is_empty()
            || self.delete
    }
}
