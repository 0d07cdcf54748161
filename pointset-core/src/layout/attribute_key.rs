use std::fmt::Display;

/// The semantic role of an attribute stored alongside the positions of a point set. The set of
/// keys is closed, so every attribute a `PointSet` can hold is known at compile time and a typo
/// can never create an orphan attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    Index,
    Normal,
    Quality,
    Visibility,
}

impl AttributeKey {
    /// All attribute keys, in declaration order
    /// ```
    /// # use pointset_core::layout::*;
    /// assert_eq!(4, AttributeKey::ALL.len());
    /// assert_eq!(AttributeKey::Index, AttributeKey::ALL[0]);
    /// ```
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Index,
        AttributeKey::Normal,
        AttributeKey::Quality,
        AttributeKey::Visibility,
    ];

    /// Returns the human-readable name of this key
    /// ```
    /// # use pointset_core::layout::*;
    /// assert_eq!("Normal", AttributeKey::Normal.name());
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKey::Index => "Index",
            AttributeKey::Normal => "Normal",
            AttributeKey::Quality => "Quality",
            AttributeKey::Visibility => "Visibility",
        }
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_attribute_key_names_are_unique() {
        let names = AttributeKey::ALL
            .iter()
            .map(|key| key.name())
            .collect::<HashSet<_>>();
        assert_eq!(AttributeKey::ALL.len(), names.len());
    }

    #[test]
    fn test_attribute_key_display() {
        assert_eq!("Visibility", format!("{}", AttributeKey::Visibility));
        assert_eq!("Index", AttributeKey::Index.to_string());
    }
}
