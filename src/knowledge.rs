//! Static topic knowledge base
//!
//! A fixed mapping from each teachable topic to the subtopic labels
//! interpolated into prompt text. Defined once as `'static` data and
//! never mutated.

use std::fmt;

/// A teachable subject area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Sorting,
    Searching,
    DataStructures,
}

impl Topic {
    /// All topics, in presentation order.
    pub fn all() -> &'static [Topic] {
        &[Topic::Sorting, Topic::Searching, Topic::DataStructures]
    }

    /// Wire/display name for this topic.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Sorting => "sorting",
            Topic::Searching => "searching",
            Topic::DataStructures => "data structures",
        }
    }

    /// Ordered subtopic labels for this topic.
    pub fn subtopics(self) -> &'static [&'static str] {
        match self {
            Topic::Sorting => &["bubble sort", "quick sort", "merge sort"],
            Topic::Searching => &["linear search", "binary search"],
            Topic::DataStructures => &["array", "linked list", "tree", "graph"],
        }
    }

    /// Parse a caller-supplied topic name. Case-insensitive; accepts an
    /// underscore in place of the space in "data structures".
    pub fn parse(input: &str) -> Option<Topic> {
        match input.trim().to_lowercase().replace('_', " ").as_str() {
            "sorting" => Some(Topic::Sorting),
            "searching" => Some(Topic::Searching),
            "data structures" => Some(Topic::DataStructures),
            _ => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
