use strum::{Display, EnumIter};

/// Response category a metric's extractor runs against.
///
/// Closed set: each category corresponds to exactly one admin endpoint shape,
/// and dispatch is by tag rather than by inspecting the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    System,
    Threads,
    Mbeans,
}
