//! Feature identity: kind, usage, lookup key, and label rendering.

use serde::{Deserialize, Serialize};

/// The four kinds of HTML feature subject to compatibility checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKind {
    /// An element (`<video>`).
    Element,
    /// An attribute scoped to one element (`img[srcset]`).
    ElementAttribute,
    /// An attribute valid on any element (`dropzone`).
    GlobalAttribute,
    /// A value of the `type` attribute of `<input>` (`color`).
    InputType,
}

impl FeatureKind {
    /// Kind name as used in pack files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::ElementAttribute => "element-attribute",
            Self::GlobalAttribute => "global-attribute",
            Self::InputType => "input-type",
        }
    }

    /// Parse from the pack-file kind name.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "element" => Some(Self::Element),
            "element-attribute" => Some(Self::ElementAttribute),
            "global-attribute" => Some(Self::GlobalAttribute),
            "input-type" => Some(Self::InputType),
            _ => None,
        }
    }

    /// Whether this kind is scoped to an owning element.
    pub fn requires_element(&self) -> bool {
        matches!(self, Self::ElementAttribute | Self::InputType)
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Locator supplied by the HTML collaborator so a host can surface the
/// diagnostic at the offending token. Opaque to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionHint {
    /// Source token to match (e.g. the element or attribute name).
    pub match_token: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl PositionHint {
    /// Hint that matches a source token.
    pub fn match_token(token: impl Into<String>) -> Self {
        Self {
            match_token: Some(token.into()),
            ..Self::default()
        }
    }
}

/// Matrix lookup identity: `(kind, name, element?)`.
///
/// `element` is present exactly when the kind requires an owning element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureKey {
    pub kind: FeatureKind,
    pub name: String,
    pub element: Option<String>,
}

/// One occurrence of a feature in a document, as extracted by the HTML
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureUsage {
    pub kind: FeatureKind,
    pub name: String,
    /// Owning element for `ElementAttribute` / `InputType`, absent otherwise.
    pub element: Option<String>,
    #[serde(default)]
    pub position: PositionHint,
}

impl FeatureUsage {
    /// An element usage, e.g. `<video>`.
    pub fn element(name: impl Into<String>, position: PositionHint) -> Self {
        Self {
            kind: FeatureKind::Element,
            name: name.into(),
            element: None,
            position,
        }
    }

    /// An element-scoped attribute usage, e.g. `img[srcset]`.
    pub fn element_attribute(
        element: impl Into<String>,
        name: impl Into<String>,
        position: PositionHint,
    ) -> Self {
        Self {
            kind: FeatureKind::ElementAttribute,
            name: name.into(),
            element: Some(element.into()),
            position,
        }
    }

    /// A global attribute usage, e.g. `dropzone` on any element.
    pub fn global_attribute(name: impl Into<String>, position: PositionHint) -> Self {
        Self {
            kind: FeatureKind::GlobalAttribute,
            name: name.into(),
            element: None,
            position,
        }
    }

    /// An input type usage, e.g. `<input type="color">`.
    pub fn input_type(name: impl Into<String>, position: PositionHint) -> Self {
        Self {
            kind: FeatureKind::InputType,
            name: name.into(),
            element: Some("input".to_string()),
            position,
        }
    }

    /// The matrix lookup key for this usage.
    pub fn key(&self) -> FeatureKey {
        FeatureKey {
            kind: self.kind,
            name: self.name.clone(),
            element: self.element.clone(),
        }
    }

    /// Human-readable feature label used in diagnostic messages.
    ///
    /// `video element`, `srcset attribute of the img element`,
    /// `global attribute dropzone`, `input type color`.
    pub fn label(&self) -> String {
        match self.kind {
            FeatureKind::Element => format!("{} element", self.name),
            FeatureKind::ElementAttribute => format!(
                "{} attribute of the {} element",
                self.name,
                self.element.as_deref().unwrap_or("unknown"),
            ),
            FeatureKind::GlobalAttribute => format!("global attribute {}", self.name),
            FeatureKind::InputType => format!("input type {}", self.name),
        }
    }
}
