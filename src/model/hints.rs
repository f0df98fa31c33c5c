//! View resolution hints.
//!
//! Hints are an immutable value passed with each resolution call. They can be
//! built in code, parsed from loose key/value pairs, or deserialized with
//! serde. In all three forms unknown keys and unknown values are ignored, so
//! older builds accept hint sets written for newer ones.

use serde::{Deserialize, Serialize};

/// Whether resolution may only reuse an already-open view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Existing {
    /// No constraint.
    #[default]
    Unspecified,
    /// Only ever return an open view; never request creation.
    Always,
    /// Always request a new view.
    Never,
    /// Only consider views in the current tab.
    CurrentTab,
}

impl Existing {
    /// Parse a hint value, `None` for unrecognized names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "current_tab" => Some(Self::CurrentTab),
            _ => None,
        }
    }

    /// Canonical hint name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Always => "always",
            Self::Never => "never",
            Self::CurrentTab => "current_tab",
        }
    }
}

/// How to choose among several candidate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Most recently activated view.
    LastUsed,
    /// The active view, if it shows the document.
    Current,
    /// First candidate in the current tab.
    CurrentTab,
    /// First candidate in tab order.
    First,
    /// Last candidate in tab order.
    Last,
}

impl Strategy {
    /// Every recognized strategy.
    pub const ALL: [Strategy; 5] = [
        Strategy::LastUsed,
        Strategy::Current,
        Strategy::CurrentTab,
        Strategy::First,
        Strategy::Last,
    ];

    /// Parse a strategy name, `None` for unrecognized names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "last_used" => Some(Self::LastUsed),
            "current" => Some(Self::Current),
            "current_tab" => Some(Self::CurrentTab),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            _ => None,
        }
    }

    /// Canonical strategy name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastUsed => "last_used",
            Self::Current => "current",
            Self::CurrentTab => "current_tab",
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

/// Where a newly created view is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Open a new tab for the view.
    #[default]
    NewTab,
    /// Split the view into the current tab.
    CurrentTab,
}

impl Placement {
    /// Parse a placement name, `None` for unrecognized names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "new_tab" => Some(Self::NewTab),
            "current_tab" => Some(Self::CurrentTab),
            _ => None,
        }
    }

    /// Canonical placement name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewTab => "new_tab",
            Self::CurrentTab => "current_tab",
        }
    }
}

/// Per-call resolution hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHints")]
pub struct Hints {
    /// Existence requirement.
    pub existing: Existing,
    /// Strategies tried in order; empty means "first candidate".
    pub strategy: Vec<Strategy>,
    /// Whether the caller may create a view when none qualifies.
    pub create_if_needed: bool,
    /// Placement of a created view.
    pub placement: Placement,
}

impl Default for Hints {
    fn default() -> Self {
        Self {
            existing: Existing::Unspecified,
            strategy: Vec::new(),
            create_if_needed: true,
            placement: Placement::NewTab,
        }
    }
}

impl Hints {
    /// Default hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the existence requirement.
    pub fn with_existing(mut self, existing: Existing) -> Self {
        self.existing = existing;
        self
    }

    /// Append a strategy to the list.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy.push(strategy);
        self
    }

    /// Set whether creation is permitted.
    pub fn with_create_if_needed(mut self, create: bool) -> Self {
        self.create_if_needed = create;
        self
    }

    /// Set the placement of created views.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Whether a caller may create a view when resolution yields nothing.
    ///
    /// `existing = always` forbids creation regardless of `create_if_needed`.
    pub fn allows_creation(&self) -> bool {
        self.create_if_needed && self.existing != Existing::Always
    }

    /// Build hints from loose key/value pairs.
    ///
    /// Recognized keys: `existing`, `strategy` (comma-separated), `create_if_needed`,
    /// `placement` (alias `new`). Unknown keys and unparseable values are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut hints = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref().trim() {
                "existing" => {
                    if let Some(existing) = Existing::parse(value) {
                        hints.existing = existing;
                    }
                }
                "strategy" => {
                    hints.strategy = value.split(',').filter_map(Strategy::parse).collect();
                }
                "create_if_needed" => match value.trim() {
                    "true" => hints.create_if_needed = true,
                    "false" => hints.create_if_needed = false,
                    _ => {}
                },
                "placement" | "new" => {
                    if let Some(placement) = Placement::parse(value) {
                        hints.placement = placement;
                    }
                }
                _ => {}
            }
        }
        hints
    }
}

/// Lenient wire form of [`Hints`].
#[derive(Debug, Default, Deserialize)]
struct RawHints {
    #[serde(default)]
    existing: Option<String>,
    #[serde(default)]
    strategy: Option<OneOrMany>,
    #[serde(default)]
    create_if_needed: Option<bool>,
    #[serde(default, alias = "new")]
    placement: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<RawHints> for Hints {
    fn from(raw: RawHints) -> Self {
        let defaults = Hints::default();
        let strategy = match raw.strategy {
            Some(OneOrMany::One(name)) => Strategy::parse(&name).into_iter().collect(),
            Some(OneOrMany::Many(names)) => names.iter().filter_map(|n| Strategy::parse(n)).collect(),
            None => defaults.strategy,
        };
        Hints {
            existing: raw
                .existing
                .as_deref()
                .and_then(Existing::parse)
                .unwrap_or(defaults.existing),
            strategy,
            create_if_needed: raw.create_if_needed.unwrap_or(defaults.create_if_needed),
            placement: raw
                .placement
                .as_deref()
                .and_then(Placement::parse)
                .unwrap_or(defaults.placement),
        }
    }
}

#[cfg(test)]
#[path = "hints_tests.rs"]
mod tests;
