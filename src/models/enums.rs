//! Enumerations shared by the CSDL models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EDM primitive type names accepted for structural properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    #[serde(rename = "Edm.Binary")]
    Binary,
    #[serde(rename = "Edm.Boolean")]
    Boolean,
    #[serde(rename = "Edm.Byte")]
    Byte,
    #[serde(rename = "Edm.Date")]
    Date,
    #[serde(rename = "Edm.DateTimeOffset")]
    DateTimeOffset,
    #[serde(rename = "Edm.Decimal")]
    Decimal,
    #[serde(rename = "Edm.Double")]
    Double,
    #[serde(rename = "Edm.Duration")]
    Duration,
    #[serde(rename = "Edm.Guid")]
    Guid,
    #[serde(rename = "Edm.Int16")]
    Int16,
    #[serde(rename = "Edm.Int32")]
    Int32,
    #[serde(rename = "Edm.Int64")]
    Int64,
    #[serde(rename = "Edm.SByte")]
    SByte,
    #[serde(rename = "Edm.Single")]
    Single,
    #[serde(rename = "Edm.Stream")]
    Stream,
    #[serde(rename = "Edm.String")]
    String,
    #[serde(rename = "Edm.TimeOfDay")]
    TimeOfDay,
    #[serde(rename = "Edm.Geography")]
    Geography,
    #[serde(rename = "Edm.GeographyPoint")]
    GeographyPoint,
    #[serde(rename = "Edm.GeographyLineString")]
    GeographyLineString,
    #[serde(rename = "Edm.GeographyPolygon")]
    GeographyPolygon,
    #[serde(rename = "Edm.GeographyMultiPoint")]
    GeographyMultiPoint,
    #[serde(rename = "Edm.GeographyMultiLineString")]
    GeographyMultiLineString,
    #[serde(rename = "Edm.GeographyMultiPolygon")]
    GeographyMultiPolygon,
    #[serde(rename = "Edm.GeographyCollection")]
    GeographyCollection,
    #[serde(rename = "Edm.Geometry")]
    Geometry,
    #[serde(rename = "Edm.GeometryPoint")]
    GeometryPoint,
    #[serde(rename = "Edm.GeometryLineString")]
    GeometryLineString,
    #[serde(rename = "Edm.GeometryPolygon")]
    GeometryPolygon,
    #[serde(rename = "Edm.GeometryMultiPoint")]
    GeometryMultiPoint,
    #[serde(rename = "Edm.GeometryMultiLineString")]
    GeometryMultiLineString,
    #[serde(rename = "Edm.GeometryMultiPolygon")]
    GeometryMultiPolygon,
    #[serde(rename = "Edm.GeometryCollection")]
    GeometryCollection,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order
    pub const ALL: [PrimitiveType; 33] = [
        PrimitiveType::Binary,
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Date,
        PrimitiveType::DateTimeOffset,
        PrimitiveType::Decimal,
        PrimitiveType::Double,
        PrimitiveType::Duration,
        PrimitiveType::Guid,
        PrimitiveType::Int16,
        PrimitiveType::Int32,
        PrimitiveType::Int64,
        PrimitiveType::SByte,
        PrimitiveType::Single,
        PrimitiveType::Stream,
        PrimitiveType::String,
        PrimitiveType::TimeOfDay,
        PrimitiveType::Geography,
        PrimitiveType::GeographyPoint,
        PrimitiveType::GeographyLineString,
        PrimitiveType::GeographyPolygon,
        PrimitiveType::GeographyMultiPoint,
        PrimitiveType::GeographyMultiLineString,
        PrimitiveType::GeographyMultiPolygon,
        PrimitiveType::GeographyCollection,
        PrimitiveType::Geometry,
        PrimitiveType::GeometryPoint,
        PrimitiveType::GeometryLineString,
        PrimitiveType::GeometryPolygon,
        PrimitiveType::GeometryMultiPoint,
        PrimitiveType::GeometryMultiLineString,
        PrimitiveType::GeometryMultiPolygon,
        PrimitiveType::GeometryCollection,
    ];

    /// Qualified EDM name, e.g. `Edm.Int32`
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Binary => "Edm.Binary",
            PrimitiveType::Boolean => "Edm.Boolean",
            PrimitiveType::Byte => "Edm.Byte",
            PrimitiveType::Date => "Edm.Date",
            PrimitiveType::DateTimeOffset => "Edm.DateTimeOffset",
            PrimitiveType::Decimal => "Edm.Decimal",
            PrimitiveType::Double => "Edm.Double",
            PrimitiveType::Duration => "Edm.Duration",
            PrimitiveType::Guid => "Edm.Guid",
            PrimitiveType::Int16 => "Edm.Int16",
            PrimitiveType::Int32 => "Edm.Int32",
            PrimitiveType::Int64 => "Edm.Int64",
            PrimitiveType::SByte => "Edm.SByte",
            PrimitiveType::Single => "Edm.Single",
            PrimitiveType::Stream => "Edm.Stream",
            PrimitiveType::String => "Edm.String",
            PrimitiveType::TimeOfDay => "Edm.TimeOfDay",
            PrimitiveType::Geography => "Edm.Geography",
            PrimitiveType::GeographyPoint => "Edm.GeographyPoint",
            PrimitiveType::GeographyLineString => "Edm.GeographyLineString",
            PrimitiveType::GeographyPolygon => "Edm.GeographyPolygon",
            PrimitiveType::GeographyMultiPoint => "Edm.GeographyMultiPoint",
            PrimitiveType::GeographyMultiLineString => "Edm.GeographyMultiLineString",
            PrimitiveType::GeographyMultiPolygon => "Edm.GeographyMultiPolygon",
            PrimitiveType::GeographyCollection => "Edm.GeographyCollection",
            PrimitiveType::Geometry => "Edm.Geometry",
            PrimitiveType::GeometryPoint => "Edm.GeometryPoint",
            PrimitiveType::GeometryLineString => "Edm.GeometryLineString",
            PrimitiveType::GeometryPolygon => "Edm.GeometryPolygon",
            PrimitiveType::GeometryMultiPoint => "Edm.GeometryMultiPoint",
            PrimitiveType::GeometryMultiLineString => "Edm.GeometryMultiLineString",
            PrimitiveType::GeometryMultiPolygon => "Edm.GeometryMultiPolygon",
            PrimitiveType::GeometryCollection => "Edm.GeometryCollection",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the EDM primitive type names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown EDM primitive type: {0}")]
pub struct ParsePrimitiveTypeError(pub String);

impl FromStr for PrimitiveType {
    type Err = ParsePrimitiveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParsePrimitiveTypeError(s.to_string()))
    }
}

/// Multiplicity of one end of a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Multiplicity {
    #[default]
    Unknown,
    ZeroOrOne,
    One,
    Many,
}

impl Multiplicity {
    /// Collection-valued navigation (`Collection(...)` type, no referential constraint)
    pub fn is_collection(&self) -> bool {
        matches!(self, Multiplicity::Many)
    }

    /// Value for the `Nullable` attribute.
    ///
    /// `None` means the attribute is omitted, which CSDL reads as `true`.
    pub fn nullable(&self) -> Option<bool> {
        match self {
            Multiplicity::One => Some(false),
            _ => None,
        }
    }
}

/// Action applied to related entities when the principal is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnDeleteAction {
    Cascade,
    None,
    SetNull,
    SetDefault,
}

impl OnDeleteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDeleteAction::Cascade => "Cascade",
            OnDeleteAction::None => "None",
            OnDeleteAction::SetNull => "SetNull",
            OnDeleteAction::SetDefault => "SetDefault",
        }
    }
}

impl fmt::Display for OnDeleteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_type_names_round_trip() {
        for t in PrimitiveType::ALL {
            assert_eq!(t.to_string().parse::<PrimitiveType>(), Ok(t));
        }
    }

    #[test]
    fn test_unknown_primitive_type_rejected() {
        assert_eq!(
            "Edm.Foo".parse::<PrimitiveType>(),
            Err(ParsePrimitiveTypeError("Edm.Foo".to_string()))
        );
        assert!("Int32".parse::<PrimitiveType>().is_err());
    }

    #[test]
    fn test_primitive_type_serde_uses_edm_names() {
        let json = serde_json::to_string(&PrimitiveType::GeographyPoint).unwrap();
        assert_eq!(json, "\"Edm.GeographyPoint\"");
        let parsed: PrimitiveType = serde_json::from_str("\"Edm.Decimal\"").unwrap();
        assert_eq!(parsed, PrimitiveType::Decimal);
    }

    #[test]
    fn test_multiplicity_nullability() {
        assert_eq!(Multiplicity::One.nullable(), Some(false));
        assert_eq!(Multiplicity::ZeroOrOne.nullable(), None);
        assert_eq!(Multiplicity::Unknown.nullable(), None);
        assert_eq!(Multiplicity::Many.nullable(), None);
        assert!(Multiplicity::Many.is_collection());
        assert!(!Multiplicity::One.is_collection());
    }
}
