//! Static table of the tag names an HTML5 parser knows about.
//!
//! Every known tag has a precomputed lowercase name. Anything else resolves to
//! [`Tag::Unknown`] and has to be named from the original source text instead.

macro_rules! known_tags {
    ($($variant:ident => $name:literal,)*) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Tag {
            $($variant,)*
            Unknown,
        }

        impl Tag {
            /// Canonical lowercase name of the tag. Unknown tags have no static name and
            /// return an empty string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                    Tag::Unknown => "",
                }
            }

            fn lookup(lowercase: &str) -> Tag {
                match lowercase {
                    $($name => Tag::$variant,)*
                    _ => Tag::Unknown,
                }
            }
        }
    };
}

known_tags! {
    Html => "html",
    Head => "head",
    Title => "title",
    Base => "base",
    Link => "link",
    Meta => "meta",
    Style => "style",
    Script => "script",
    Noscript => "noscript",
    Template => "template",
    Body => "body",
    Article => "article",
    Section => "section",
    Nav => "nav",
    Aside => "aside",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Hgroup => "hgroup",
    Header => "header",
    Footer => "footer",
    Address => "address",
    P => "p",
    Hr => "hr",
    Pre => "pre",
    Blockquote => "blockquote",
    Ol => "ol",
    Ul => "ul",
    Li => "li",
    Dl => "dl",
    Dt => "dt",
    Dd => "dd",
    Figure => "figure",
    Figcaption => "figcaption",
    Main => "main",
    Search => "search",
    Div => "div",
    A => "a",
    Em => "em",
    Strong => "strong",
    Small => "small",
    S => "s",
    Cite => "cite",
    Q => "q",
    Dfn => "dfn",
    Abbr => "abbr",
    Data => "data",
    Time => "time",
    Code => "code",
    Var => "var",
    Samp => "samp",
    Kbd => "kbd",
    Sub => "sub",
    Sup => "sup",
    I => "i",
    B => "b",
    U => "u",
    Mark => "mark",
    Ruby => "ruby",
    Rt => "rt",
    Rp => "rp",
    Bdi => "bdi",
    Bdo => "bdo",
    Span => "span",
    Br => "br",
    Wbr => "wbr",
    Ins => "ins",
    Del => "del",
    Image => "image",
    Img => "img",
    Iframe => "iframe",
    Embed => "embed",
    Object => "object",
    Param => "param",
    Video => "video",
    Audio => "audio",
    Source => "source",
    Track => "track",
    Canvas => "canvas",
    Map => "map",
    Area => "area",
    Math => "math",
    Mi => "mi",
    Mo => "mo",
    Mn => "mn",
    Ms => "ms",
    Mtext => "mtext",
    Mglyph => "mglyph",
    Malignmark => "malignmark",
    AnnotationXml => "annotation-xml",
    Svg => "svg",
    ForeignObject => "foreignobject",
    Desc => "desc",
    Table => "table",
    Caption => "caption",
    Colgroup => "colgroup",
    Col => "col",
    Tbody => "tbody",
    Thead => "thead",
    Tfoot => "tfoot",
    Tr => "tr",
    Td => "td",
    Th => "th",
    Form => "form",
    Fieldset => "fieldset",
    Legend => "legend",
    Label => "label",
    Input => "input",
    Button => "button",
    Select => "select",
    Datalist => "datalist",
    Optgroup => "optgroup",
    Option => "option",
    Textarea => "textarea",
    Keygen => "keygen",
    Output => "output",
    Progress => "progress",
    Meter => "meter",
    Details => "details",
    Summary => "summary",
    Menu => "menu",
    Menuitem => "menuitem",
    Applet => "applet",
    Acronym => "acronym",
    Bgsound => "bgsound",
    Dir => "dir",
    Frame => "frame",
    Frameset => "frameset",
    Noframes => "noframes",
    Isindex => "isindex",
    Listing => "listing",
    Xmp => "xmp",
    Nextid => "nextid",
    Noembed => "noembed",
    Plaintext => "plaintext",
    Rb => "rb",
    Strike => "strike",
    Basefont => "basefont",
    Big => "big",
    Blink => "blink",
    Center => "center",
    Font => "font",
    Marquee => "marquee",
    Multicol => "multicol",
    Nobr => "nobr",
    Spacer => "spacer",
    Tt => "tt",
    Rtc => "rtc",
}

impl Tag {
    /// Resolves a tag name to its enumeration value. Matching is ASCII case-insensitive.
    pub fn from_name(name: &str) -> Tag {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return Tag::lookup(&name.to_ascii_lowercase());
        }

        Tag::lookup(name)
    }

    pub fn is_known(&self) -> bool {
        *self != Tag::Unknown
    }
}
