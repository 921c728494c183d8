use crate::errors::VocabularyError;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// The three element namespaces an HTML5 parser can produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
    #[default]
    Html,
    Svg,
    MathMl,
}

impl Namespace {
    /// Short label used for options and for the projected `namespace` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Html => "html",
            Namespace::Svg => "svg",
            Namespace::MathMl => "math",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Namespace::Html => HTML_NAMESPACE,
            Namespace::Svg => SVG_NAMESPACE,
            Namespace::MathMl => MATHML_NAMESPACE,
        }
    }

    /// Maps a namespace url onto one of the element namespaces. Anything unknown is treated as
    /// HTML, which is where the tree builder puts every element it does not place explicitly.
    pub fn from_url(url: &str) -> Self {
        match url {
            SVG_NAMESPACE => Namespace::Svg,
            MATHML_NAMESPACE => Namespace::MathMl,
            _ => Namespace::Html,
        }
    }
}

impl FromStr for Namespace {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Namespace::Html),
            "svg" => Ok(Namespace::Svg),
            "math" => Ok(Namespace::MathMl),
            _ => Err(VocabularyError::UnknownNamespace(s.to_owned())),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Namespace of an attribute. Only attributes adjusted by the tree builder on foreign
/// elements (xlink:href, xml:lang, xmlns:xlink, ...) carry something other than `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeNamespace {
    #[default]
    None,
    XLink,
    Xml,
    Xmlns,
}

impl AttributeNamespace {
    /// Prefix label for the attribute, `None` for attributes without a namespace
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            AttributeNamespace::None => None,
            AttributeNamespace::XLink => Some("xlink"),
            AttributeNamespace::Xml => Some("xml"),
            AttributeNamespace::Xmlns => Some("xmlns"),
        }
    }

    pub fn from_url(url: &str) -> Self {
        match url {
            XLINK_NAMESPACE => AttributeNamespace::XLink,
            XML_NAMESPACE => AttributeNamespace::Xml,
            XMLNS_NAMESPACE => AttributeNamespace::Xmlns,
            _ => AttributeNamespace::None,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash)]
pub enum QuirksMode {
    #[default]
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

impl QuirksMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuirksMode::NoQuirks => "no-quirks",
            QuirksMode::Quirks => "quirks",
            QuirksMode::LimitedQuirks => "limited-quirks",
        }
    }
}

impl fmt::Display for QuirksMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags a parser attaches to nodes it did not insert straight from a matching start tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InsertionFlags(u32);

impl InsertionFlags {
    pub const NORMAL: Self = Self(0);
    pub const BY_PARSER: Self = Self(1 << 0);
    pub const IMPLICIT_END_TAG: Self = Self(1 << 1);
    pub const IMPLIED: Self = Self(1 << 3);
    pub const CONVERTED_FROM_END_TAG: Self = Self(1 << 4);
    pub const FROM_ISINDEX: Self = Self(1 << 5);
    pub const FROM_IMAGE: Self = Self(1 << 6);
    pub const RECONSTRUCTED_FORMATTING_ELEMENT: Self = Self(1 << 7);
    pub const ADOPTION_AGENCY_CLONED: Self = Self(1 << 8);
    pub const ADOPTION_AGENCY_MOVED: Self = Self(1 << 9);
    pub const FOSTER_PARENTED: Self = Self(1 << 10);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_normal(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for InsertionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InsertionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("html", Namespace::Html)]
    #[test_case("svg", Namespace::Svg)]
    #[test_case("math", Namespace::MathMl)]
    fn namespace_from_option(value: &str, expected: Namespace) {
        assert_eq!(value.parse::<Namespace>(), Ok(expected));
        assert_eq!(expected.as_str(), value);
    }

    #[test_case("mathml" ; "long mathml name")]
    #[test_case("HTML" ; "uppercase html")]
    #[test_case("" ; "empty")]
    fn namespace_rejects_unknown_option(value: &str) {
        assert_eq!(
            value.parse::<Namespace>(),
            Err(VocabularyError::UnknownNamespace(value.to_owned()))
        );
    }

    #[test]
    fn attribute_prefixes() {
        assert_eq!(AttributeNamespace::None.prefix(), None);
        assert_eq!(AttributeNamespace::from_url(XLINK_NAMESPACE).prefix(), Some("xlink"));
        assert_eq!(AttributeNamespace::from_url(XML_NAMESPACE).prefix(), Some("xml"));
        assert_eq!(AttributeNamespace::from_url(XMLNS_NAMESPACE).prefix(), Some("xmlns"));
        assert_eq!(AttributeNamespace::from_url(""), AttributeNamespace::None);
    }

    #[test]
    fn insertion_flags() {
        let mut flags = InsertionFlags::default();
        assert!(flags.is_normal());

        flags |= InsertionFlags::FOSTER_PARENTED;
        flags |= InsertionFlags::BY_PARSER;
        assert!(!flags.is_normal());
        assert!(flags.contains(InsertionFlags::FOSTER_PARENTED));
        assert!(!flags.contains(InsertionFlags::IMPLIED));
        assert_eq!(flags.bits(), 1025);
    }
}
