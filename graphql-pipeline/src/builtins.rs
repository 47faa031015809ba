//! Static metadata for the directives and scalar types defined by the GraphQL specification.
//!
//! Pure reads of static definitions; the pipeline itself never consults these.

/// Metadata for one directive defined by the GraphQL specification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectiveMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub locations: &'static [&'static str],
    pub arguments: &'static [&'static str],
}

/// Metadata for one scalar type defined by the GraphQL specification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMeta {
    pub name: &'static str,
    pub description: &'static str,
}

const STANDARD_DIRECTIVES: &[DirectiveMeta] = &[
    DirectiveMeta {
        name: "skip",
        description: "Directs the executor to skip this field or fragment when the `if` argument is true.",
        locations: &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        arguments: &["if"],
    },
    DirectiveMeta {
        name: "include",
        description: "Directs the executor to include this field or fragment only when the `if` argument is true.",
        locations: &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        arguments: &["if"],
    },
    DirectiveMeta {
        name: "deprecated",
        description: "Marks an element of a GraphQL schema as no longer supported.",
        locations: &["FIELD_DEFINITION", "ARGUMENT_DEFINITION", "INPUT_FIELD_DEFINITION", "ENUM_VALUE"],
        arguments: &["reason"],
    },
    DirectiveMeta {
        name: "specifiedBy",
        description: "Exposes a URL that specifies the behavior of this scalar.",
        locations: &["SCALAR"],
        arguments: &["url"],
    },
];

const STANDARD_SCALARS: &[ScalarMeta] = &[
    ScalarMeta {
        name: "Int",
        description: "The `Int` scalar type represents non-fractional signed whole numeric values.",
    },
    ScalarMeta {
        name: "Float",
        description: "The `Float` scalar type represents signed double-precision fractional values as specified by IEEE 754.",
    },
    ScalarMeta {
        name: "String",
        description: "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
    },
    ScalarMeta {
        name: "Boolean",
        description: "The `Boolean` scalar type represents `true` or `false`.",
    },
    ScalarMeta {
        name: "ID",
        description: "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache.",
    },
];

/// The directives defined by the GraphQL specification.
pub fn standard_directives() -> &'static [DirectiveMeta] {
    STANDARD_DIRECTIVES
}

/// The scalar types defined by the GraphQL specification.
pub fn standard_scalars() -> &'static [ScalarMeta] {
    STANDARD_SCALARS
}
