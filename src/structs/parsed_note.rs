use serde::{Deserialize, Serialize};
use crate::structs::change::Change;

/// A patch note after parsing: title plus changes in source order.
/// The order is meaningful — category grouping and analysis both
/// preserve first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNote {
    pub title: String,
    pub changes: Vec<Change>,
}
