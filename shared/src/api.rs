//! Sheet endpoint wire protocol
//!
//! The persistence endpoint speaks an Apps-Script-shaped contract:
//!
//! - `GET ?action=getEmployers|getCases` returns the whole collection as
//!   a [`Versioned`] JSON body.
//! - `POST` carries a JSON [`SaveRequest`] sent as `text/plain;charset=utf-8`
//!   (script web-apps reject preflighted content types) and replaces the
//!   whole collection, returning [`SaveResponse`].
//! - Failures return `{ "error": "<message>" }` ([`ErrorBody`]).
//!
//! `revision` is a per-collection check-and-set counter: a save whose
//! revision does not match the stored one is rejected, so a concurrent
//! writer's update is detected instead of silently overwritten.

use serde::{Deserialize, Serialize};

/// Collection fetch actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchAction {
    #[serde(rename = "getEmployers")]
    GetEmployers,
    #[serde(rename = "getCases")]
    GetCases,
}

impl FetchAction {
    /// Spelling used in the `?action=` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchAction::GetEmployers => "getEmployers",
            FetchAction::GetCases => "getCases",
        }
    }
}

/// Collection save actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveAction {
    #[serde(rename = "saveEmployers")]
    SaveEmployers,
    #[serde(rename = "saveCases")]
    SaveCases,
}

impl SaveAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SaveAction::SaveEmployers => "saveEmployers",
            SaveAction::SaveCases => "saveCases",
        }
    }
}

/// A whole collection plus its check-and-set revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub revision: u64,
    pub items: Vec<T>,
}

impl<T> Versioned<T> {
    /// The state of a collection that has never been written.
    pub fn empty() -> Self {
        Self {
            revision: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Default for Versioned<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// POST body replacing one collection.
///
/// The server deserializes with `T = serde_json::Value` to dispatch on
/// `action` before decoding the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest<T> {
    pub action: SaveAction,
    pub revision: u64,
    pub payload: Vec<T>,
}

/// Successful save acknowledgement carrying the new revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub revision: u64,
}

/// Error envelope returned by the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
