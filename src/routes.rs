//! URL-path validation.
//!
//! The only request shape the wiki dispatches on is `/<operation>/<title>`,
//! where the operation is one of view/edit/save and the title is plain
//! ASCII letters and digits. The extracted title is used directly as the
//! store key, so this check is the sole defense against path traversal
//! and invalid filenames and must run before any store access.

/// One of the page operations selected by the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    View,
    Edit,
    Save,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::View => "view",
            Operation::Edit => "edit",
            Operation::Save => "save",
        }
    }
}

/// Match a request path against `/<view|edit|save>/<title>`.
///
/// Pure and total: anything that is not exactly that shape — unknown or
/// case-mismatched keyword, empty title, extra segments, characters
/// outside `[A-Za-z0-9]` — yields `None`.
pub fn match_path(path: &str) -> Option<(Operation, &str)> {
    let rest = path.strip_prefix('/')?;
    let (keyword, title) = rest.split_once('/')?;
    let op = match keyword {
        "view" => Operation::View,
        "edit" => Operation::Edit,
        "save" => Operation::Save,
        _ => return None,
    };
    if title.is_empty() || !title.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some((op, title))
}
