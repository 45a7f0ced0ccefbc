use serde::{Deserialize, Serialize};
use std::fmt;

/// A named partition of a node's children. A map-like entity exposes `Keyed`
/// (and `Private` when it has underscore-prefixed keys), a sequence exposes
/// `Indexed`, and attribute-style inspectors use `Public`/`Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Public,
    Private,
    Keyed,
    Indexed,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Private => "private",
            Category::Keyed => "keyed",
            Category::Indexed => "indexed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse classification of an entity's shape, shared by every inspector.
///
/// `Error` marks sentinel nodes produced when inspection itself failed; it is
/// never emitted for a healthy entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Seq,
    Map,
    Callable,
    Error,
}

impl EntityKind {
    pub fn is_container(&self) -> bool {
        matches!(self, EntityKind::Seq | EntityKind::Map)
    }

    /// Sentinels, nulls and callables are shown dimmed and are never
    /// descent targets.
    pub fn is_dimmed(&self) -> bool {
        matches!(self, EntityKind::Null | EntityKind::Callable | EntityKind::Error)
    }
}

/// The filterable type predicates, as a closed set with stable identity so
/// the filter panel can toggle them by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateKind {
    IsMap,
    IsSeq,
    IsStr,
    IsInt,
    IsFloat,
    IsBool,
    IsNull,
    IsCallable,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 8] = [
        PredicateKind::IsMap,
        PredicateKind::IsSeq,
        PredicateKind::IsStr,
        PredicateKind::IsInt,
        PredicateKind::IsFloat,
        PredicateKind::IsBool,
        PredicateKind::IsNull,
        PredicateKind::IsCallable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PredicateKind::IsMap => "map",
            PredicateKind::IsSeq => "seq",
            PredicateKind::IsStr => "str",
            PredicateKind::IsInt => "int",
            PredicateKind::IsFloat => "float",
            PredicateKind::IsBool => "bool",
            PredicateKind::IsNull => "null",
            PredicateKind::IsCallable => "callable",
        }
    }

    /// Total dispatch over the kind. Sentinel (`Error`) nodes match no type
    /// predicate, which is how failed lookups behave as "does not match".
    pub fn matches(&self, kind: EntityKind) -> bool {
        match self {
            PredicateKind::IsMap => kind == EntityKind::Map,
            PredicateKind::IsSeq => kind == EntityKind::Seq,
            PredicateKind::IsStr => kind == EntityKind::Str,
            PredicateKind::IsInt => kind == EntityKind::Int,
            PredicateKind::IsFloat => kind == EntityKind::Float,
            PredicateKind::IsBool => kind == EntityKind::Bool,
            PredicateKind::IsNull => kind == EntityKind::Null,
            PredicateKind::IsCallable => kind == EntityKind::Callable,
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The one-shot classification an inspector produces for an entity.
///
/// Computed once per node at construction; the engine never re-invokes
/// `classify` for the same node instance.
#[derive(Debug, Clone)]
pub struct Classified {
    pub kind: EntityKind,

    /// Short type tag for headers and the stack trail, e.g. `map`, `seq`.
    pub type_label: String,

    /// One-line value rendering, truncated by the inspector.
    pub repr: String,

    /// Number of children/characters when the entity has a well-defined
    /// size; `None` otherwise.
    pub len: Option<usize>,

    /// Ordered child categories with their ordered key lists. Key order is
    /// the inspector's canonical order (lexicographic for names, declaration
    /// order for sequence indices) and must be deterministic.
    pub categories: Vec<(Category, Vec<String>)>,
}

impl Classified {
    /// Leaf classification with no children.
    pub fn scalar(kind: EntityKind, type_label: impl Into<String>, repr: impl Into<String>) -> Self {
        Classified {
            kind,
            type_label: type_label.into(),
            repr: repr.into(),
            len: None,
            categories: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_dispatch_is_total_and_disjoint() {
        for kind in [
            EntityKind::Null,
            EntityKind::Bool,
            EntityKind::Int,
            EntityKind::Float,
            EntityKind::Str,
            EntityKind::Seq,
            EntityKind::Map,
            EntityKind::Callable,
        ] {
            let matching = PredicateKind::ALL.iter().filter(|p| p.matches(kind)).count();
            assert_eq!(matching, 1, "{:?} should match exactly one predicate", kind);
        }
    }

    #[test]
    fn sentinel_kind_matches_no_predicate() {
        assert!(PredicateKind::ALL.iter().all(|p| !p.matches(EntityKind::Error)));
    }

    #[test]
    fn dimming_covers_unselectable_kinds() {
        assert!(EntityKind::Null.is_dimmed());
        assert!(EntityKind::Callable.is_dimmed());
        assert!(EntityKind::Error.is_dimmed());
        assert!(!EntityKind::Map.is_dimmed());
    }
}
