//! Local name and namespace normalization for elements
use html5dom_shared::parse_tree::RawElement;
use html5dom_shared::types::Namespace;
use phf::phf_map;

/// SVG element names that are mixed case. Keyed by the lowercase name.
static SVG_TAG_REPLACEMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "altglyph" => "altGlyph",
    "altglyphdef" => "altGlyphDef",
    "altglyphitem" => "altGlyphItem",
    "animatecolor" => "animateColor",
    "animatemotion" => "animateMotion",
    "animatetransform" => "animateTransform",
    "clippath" => "clipPath",
    "feblend" => "feBlend",
    "fecolormatrix" => "feColorMatrix",
    "fecomponenttransfer" => "feComponentTransfer",
    "fecomposite" => "feComposite",
    "feconvolvematrix" => "feConvolveMatrix",
    "fediffuselighting" => "feDiffuseLighting",
    "fedisplacementmap" => "feDisplacementMap",
    "fedistantlight" => "feDistantLight",
    "fedropshadow" => "feDropShadow",
    "feflood" => "feFlood",
    "fefunca" => "feFuncA",
    "fefuncb" => "feFuncB",
    "fefuncg" => "feFuncG",
    "fefuncr" => "feFuncR",
    "fegaussianblur" => "feGaussianBlur",
    "feimage" => "feImage",
    "femerge" => "feMerge",
    "femergenode" => "feMergeNode",
    "femorphology" => "feMorphology",
    "feoffset" => "feOffset",
    "fepointlight" => "fePointLight",
    "fespecularlighting" => "feSpecularLighting",
    "fespotlight" => "feSpotLight",
    "fetile" => "feTile",
    "feturbulence" => "feTurbulence",
    "foreignobject" => "foreignObject",
    "glyphref" => "glyphRef",
    "lineargradient" => "linearGradient",
    "radialgradient" => "radialGradient",
    "textpath" => "textPath",
};

/// Returns the correctly cased name of an SVG element, if it is one of the mixed case names
pub fn normalize_svg_tagname(name: &str) -> Option<&'static str> {
    SVG_TAG_REPLACEMENTS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Extracts the tag name from the source text of a tag: `<Foo-Bar x=1>` gives `Foo-Bar`.
///
/// Text that does not start with `<` is taken to be a bare tag name already.
pub fn tag_from_original_text(text: &str) -> &str {
    let name = if let Some(rest) = text.strip_prefix("</") {
        rest
    } else if let Some(rest) = text.strip_prefix('<') {
        rest
    } else {
        return text;
    };

    let end = name
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(name.len());

    &name[..end]
}

/// Produces the local name and namespace label for an element.
///
/// Known tags use their static lowercase name. Unknown tags are named from the source text with
/// only ASCII letters folded to lowercase; other bytes are kept as they are.
pub fn normalize_tag(element: &RawElement) -> (String, Option<Namespace>) {
    let namespace = match element.namespace {
        Namespace::Html => None,
        namespace => Some(namespace),
    };

    if element.namespace == Namespace::Svg {
        let original = tag_from_original_text(&element.original_tag);
        if let Some(normalized) = normalize_svg_tagname(original) {
            return (normalized.to_owned(), namespace);
        }
    }

    if element.tag.is_known() {
        return (element.tag.as_str().to_owned(), namespace);
    }

    let original = tag_from_original_text(&element.original_tag);
    (original.to_ascii_lowercase(), namespace)
}
