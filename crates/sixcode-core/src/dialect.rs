//! Fixed facts about the target runtime.
//!
//! The encoder never evaluates anything. Every bootstrap expression is
//! paired with the value a V8-based engine produces for it, and those
//! values are described here. If the consuming runtime renders any of
//! these differently, entries built from them decode to the wrong text.

use base64::Engine;

/// `String(false)`
pub const FALSE: &str = "false";
/// `String(true)`
pub const TRUE: &str = "true";
/// `String(undefined)`
pub const UNDEFINED: &str = "undefined";
/// `String(NaN)`
pub const NAN: &str = "NaN";
/// `String(+"1e1000")`: the literal overflows.
pub const INFINITY: &str = "Infinity";
/// `String(+"11e20")`: above 1e21 numbers print in exponent form with a sign.
pub const LARGE_EXPONENT: &str = "1.1e+21";
/// `String(+".0000001")`: below 1e-6 numbers print in exponent form.
pub const SMALL_EXPONENT: &str = "1e-7";
/// `String([][Symbol.iterator]())`, reached through `[].entries()`.
pub const ARRAY_ITERATOR: &str = "[object Array Iterator]";
/// `String([[]].concat([[]]))`: two empty elements joined by a comma.
pub const NESTED_EMPTY_PAIR: &str = ",";

/// How the runtime stringifies a built-in function.
pub fn native_function(name: &str) -> String {
    format!("function {}() {{ [native code] }}", name)
}

/// A deprecated `String.prototype` HTML wrapper method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupMethod {
    pub name: &'static str,
    tag: &'static str,
    attribute: Option<&'static str>,
}

impl MarkupMethod {
    const fn bare(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag, attribute: None }
    }

    const fn with_attribute(name: &'static str, tag: &'static str, attribute: &'static str) -> Self {
        Self { name, tag, attribute: Some(attribute) }
    }

    /// Declared parameter count (`"".anchor.length`).
    pub fn arity(&self) -> usize {
        usize::from(self.attribute.is_some())
    }

    /// Result of calling the method on `""`. `None` stands for a missing
    /// argument, which the runtime stringifies as `undefined`.
    pub fn render(&self, argument: Option<&str>) -> String {
        match self.attribute {
            Some(attribute) => {
                let value = argument.unwrap_or(UNDEFINED).replace('"', "&quot;");
                format!("<{tag} {attribute}=\"{value}\"></{tag}>", tag = self.tag)
            }
            None => format!("<{tag}></{tag}>", tag = self.tag),
        }
    }
}

/// Wrapper methods in the order the bootstrap tries them.
pub const MARKUP_METHODS: &[MarkupMethod] = &[
    MarkupMethod::with_attribute("anchor", "a", "name"),
    MarkupMethod::bare("big", "big"),
    MarkupMethod::bare("blink", "blink"),
    MarkupMethod::bare("bold", "b"),
    MarkupMethod::bare("fixed", "tt"),
    MarkupMethod::with_attribute("fontcolor", "font", "color"),
    MarkupMethod::with_attribute("fontsize", "font", "size"),
    MarkupMethod::bare("italics", "i"),
    MarkupMethod::with_attribute("link", "a", "href"),
    MarkupMethod::bare("small", "small"),
    MarkupMethod::bare("strike", "strike"),
    MarkupMethod::bare("sub", "sub"),
    MarkupMethod::bare("sup", "sup"),
];

/// Global constructors reachable through `.constructor` on a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constructor {
    Array,
    Number,
    String,
    Boolean,
    Function,
    RegExp,
}

impl Constructor {
    pub const ALL: [Constructor; 6] = [
        Self::Array,
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::Function,
        Self::RegExp,
    ];

    /// The constructor's `name` property.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Number => "Number",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Function => "Function",
            Self::RegExp => "RegExp",
        }
    }

    /// `String(C)`
    pub fn rendering(&self) -> String {
        native_function(self.name())
    }

    /// `String(C())`
    pub fn empty_call(&self) -> &'static str {
        match self {
            Self::Array | Self::String => "",
            Self::Number => "0",
            Self::Boolean => FALSE,
            Self::Function => "function anonymous(\n) {\n\n}",
            Self::RegExp => "/(?:)/",
        }
    }
}

/// `btoa(value)`. The runtime throws for code units above 0xff, reported
/// here as `None`.
pub fn btoa(value: &str) -> Option<String> {
    let bytes = value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>()?;
    Some(base64::engine::general_purpose::STANDARD.encode(bytes))
}
