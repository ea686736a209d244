//! One-time construction of the symbol table.
//!
//! Starting from digits and the primitive literals, each stage builds
//! expressions out of characters unlocked by the stages before it and
//! pairs them with the values described in [`sixcode_core::dialect`].
//! Stages read the table so far and return the literals to merge; the
//! order below is load-bearing.

use std::sync::{Arc, LazyLock};

use sixcode_core::dialect::{self, Constructor, MarkupMethod, MARKUP_METHODS};
use sixcode_core::{pattern, Error, Result};

use crate::number::{digit, uint};
use crate::table::{Literal, SymbolTable};
use crate::tokenizer::str_lookup;

static GLOBAL: LazyLock<Result<Arc<Codebook>>> =
    LazyLock::new(|| Codebook::bootstrap().map(Arc::new));

/// Property names and program fragments the encoders splice into their
/// output, tokenized once after the bootstrap.
#[derive(Debug, Clone)]
pub struct Words {
    pub at: String,
    pub constructor: String,
    /// The `Function` constructor.
    pub function: String,
    pub split: String,
    pub join: String,
    pub comma: String,
    pub map: String,
    pub bind: String,
    pub char_at: String,
    /// `return"`
    pub return_quote: String,
    /// `"`
    pub quote: String,
    /// `return String.fromCodePoint(`
    pub return_from_code_point: String,
    /// `)`
    pub close_paren: String,
    /// `return eval`
    pub return_eval: String,
}

/// The bootstrapped symbol table plus the cached words built from it.
#[derive(Debug, Clone)]
pub struct Codebook {
    table: SymbolTable,
    words: Words,
}

impl Codebook {
    /// The process-wide codebook, built on first use.
    pub fn global() -> Result<Arc<Codebook>> {
        (*GLOBAL).clone()
    }

    /// Run every bootstrap stage on a fresh table.
    pub fn bootstrap() -> Result<Self> {
        let mut table = SymbolTable::new();

        merge(&mut table, "digits", &digit_literals());
        merge(&mut table, "primitives", &primitive_literals());
        let exponents = exponent_literals(&table)?;
        merge(&mut table, "exponents", &exponents);
        let small = small_exponent_literal(&table)?;
        merge(&mut table, "small exponent", &[small]);

        // reused heavily below, so resolved once while they are cheap
        let at = str_lookup(&table, "at")?;
        let entries = str_lookup(&table, "entries")?;
        merge(&mut table, "accessors", &accessor_literals(&at, &entries));

        for quoted in [false, true] {
            let mut added = 0;
            for method in MARKUP_METHODS {
                if let Some(literal) = markup_literal(&table, method, quoted)? {
                    table.add(&literal);
                    added += 1;
                }
            }
            tracing::debug!(stage = "markup", quoted, added, entries = table.len(), "bootstrap stage");
        }

        let comma = comma_literal(&table)?;
        merge(&mut table, "comma", &[comma]);

        let constructor = str_lookup(&table, "constructor")?;
        let regexp = regexp_receiver(&table, &at, &constructor)?;
        let receivers = constructor_receivers(&at, &regexp);
        merge(&mut table, "constructors", &rendering_literals(&receivers, &constructor));
        merge(&mut table, "constructor calls", &empty_call_literals(&receivers, &constructor));
        let name = str_lookup(&table, "name")?;
        merge(&mut table, "constructor names", &name_literals(&receivers, &constructor, &name));

        let patterns = pattern_literals(&table, &regexp, &constructor);
        merge(&mut table, "patterns", &patterns);

        let function = format!("[][{}][{}]", at, constructor);
        let btoa = format!("{}({})()", function, str_lookup(&table, "return btoa")?);
        let encoded = base64_literals(&table, &btoa);
        merge(&mut table, "base64", &encoded);

        let words = Words {
            split: str_lookup(&table, "split")?,
            join: str_lookup(&table, "join")?,
            comma: str_lookup(&table, ",")?,
            map: str_lookup(&table, "map")?,
            bind: str_lookup(&table, "bind")?,
            char_at: str_lookup(&table, "charAt")?,
            return_quote: str_lookup(&table, "return\"")?,
            quote: str_lookup(&table, "\"")?,
            return_from_code_point: str_lookup(&table, "return String.fromCodePoint(")?,
            close_paren: str_lookup(&table, ")")?,
            return_eval: str_lookup(&table, "return eval")?,
            at,
            constructor,
            function,
        };

        tracing::debug!(entries = table.len(), alphabet = table.alphabet().len(), "bootstrap complete");
        Ok(Self { table, words })
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn words(&self) -> &Words {
        &self.words
    }

    /// Tokenize `s` against the table.
    pub fn lookup(&self, s: &str) -> Result<String> {
        str_lookup(&self.table, s)
    }
}

fn merge(table: &mut SymbolTable, stage: &str, literals: &[Literal]) {
    table.extend(literals);
    tracing::debug!(stage, added = literals.len(), entries = table.len(), "bootstrap stage");
}

fn entry<'a>(table: &'a SymbolTable, key: &str) -> Result<&'a str> {
    table.get(key).ok_or_else(|| Error::UnknownPrefix { remaining: key.to_string() })
}

/// Stage 1: each digit as a one-character string.
pub fn digit_literals() -> Vec<Literal> {
    (0..10)
        .map(|d| Literal::new(format!("({}+[])", digit(d)), d.to_string()))
        .collect()
}

/// Stage 2: digits, booleans, `undefined` and `NaN`, each coerced to a string.
pub fn primitive_literals() -> Vec<Literal> {
    let mut literals: Vec<Literal> = (0..10)
        .map(|d| {
            let expr = if d < 2 { digit(d).to_string() } else { format!("({})", digit(d)) };
            Literal::new(format!("{}+[]", expr), d.to_string())
        })
        .collect();
    literals.push(Literal::new("![]+[]", dialect::FALSE));
    literals.push(Literal::new("!![]+[]", dialect::TRUE));
    literals.push(Literal::new("[][[]]+[]", dialect::UNDEFINED));
    literals.push(Literal::new("+[![]]+[]", dialect::NAN));
    literals
}

/// Stage 2, continued: `+"1e1000"` and `+"11e20"`, for the letters of
/// `Infinity` and the `.` and `+` of exponent notation.
pub fn exponent_literals(table: &SymbolTable) -> Result<Vec<Literal>> {
    let e = entry(table, "e")?;
    Ok(vec![
        Literal::new(format!("+[{}+{}+({})]+[]", uint(1), e, uint(1000)), dialect::INFINITY),
        Literal::new(format!("+[{}+{}+({})]+[]", uint(11), e, uint(20)), dialect::LARGE_EXPONENT),
    ])
}

/// Stage 2, last: `+".0000001"`, for `-`.
pub fn small_exponent_literal(table: &SymbolTable) -> Result<Literal> {
    let dot = entry(table, ".")?;
    let zero = format!("+({})", uint(0));
    let expr = format!("+[{}{}+({})]+[]", dot, zero.repeat(6), uint(1));
    Ok(Literal::new(expr, dialect::SMALL_EXPONENT))
}

/// Stage 3: `String([].at)` and `String([].entries())`.
pub fn accessor_literals(at: &str, entries: &str) -> Vec<Literal> {
    vec![
        Literal::new(format!("[][{}]+[]", at), dialect::native_function("at")),
        Literal::new(format!("[][{}]()+[]", entries), dialect::ARRAY_ITERATOR),
    ]
}

/// Stage 4: `"".method()`, or `"".method('"')` when `quoted`.
///
/// `None` when the name still contains characters the table lacks, or
/// when a quoted call is asked of a method that ignores its argument.
pub fn markup_literal(table: &SymbolTable, method: &MarkupMethod, quoted: bool) -> Result<Option<Literal>> {
    if !method.name.chars().all(|c| table.contains_char(c)) {
        return Ok(None);
    }
    if quoted && method.arity() == 0 {
        return Ok(None);
    }

    let name = str_lookup(table, method.name)?;
    let literal = if quoted {
        let quote = str_lookup(table, "\"")?;
        Literal::new(format!("([]+[])[{}]({})", name, quote), method.render(Some("\"")))
    } else {
        Literal::new(format!("([]+[])[{}]()", name), method.render(None))
    };
    Ok(Some(literal))
}

/// Stage 5: `String([[]].concat([[]]))`
pub fn comma_literal(table: &SymbolTable) -> Result<Literal> {
    let concat = str_lookup(table, "concat")?;
    Ok(Literal::new(format!("[[]][{}]([[]])+[]", concat), dialect::NESTED_EMPTY_PAIR))
}

/// Stage 6: a regular expression literal, compiled through `Function`
/// since the alphabet has no way to write one directly.
pub fn regexp_receiver(table: &SymbolTable, at: &str, constructor: &str) -> Result<String> {
    Ok(format!(
        "[][{}][{}]({}+![]+{})()",
        at,
        constructor,
        str_lookup(table, "return /")?,
        str_lookup(table, "/")?
    ))
}

/// Stage 6: a value whose `.constructor` is each global constructor.
pub fn constructor_receivers(at: &str, regexp: &str) -> Vec<(Constructor, String)> {
    Constructor::ALL
        .iter()
        .map(|&c| {
            let expr = match c {
                Constructor::Array => "[]".to_string(),
                Constructor::Number => "(+[])".to_string(),
                Constructor::String => "([]+[])".to_string(),
                Constructor::Boolean => "(![])".to_string(),
                Constructor::Function => format!("[][{}]", at),
                Constructor::RegExp => regexp.to_string(),
            };
            (c, expr)
        })
        .collect()
}

/// Stage 6a: `String(C)`
pub fn rendering_literals(receivers: &[(Constructor, String)], constructor: &str) -> Vec<Literal> {
    receivers
        .iter()
        .map(|(c, expr)| Literal::new(format!("{}[{}]+[]", expr, constructor), c.rendering()))
        .collect()
}

/// Stage 6b: `String(C())`
pub fn empty_call_literals(receivers: &[(Constructor, String)], constructor: &str) -> Vec<Literal> {
    receivers
        .iter()
        .map(|(c, expr)| Literal::new(format!("{}[{}]()+[]", expr, constructor), c.empty_call()))
        .collect()
}

/// Stage 6c: `C.name`
pub fn name_literals(receivers: &[(Constructor, String)], constructor: &str, name: &str) -> Vec<Literal> {
    receivers
        .iter()
        .map(|(c, expr)| Literal::new(format!("{}[{}][{}]", expr, constructor, name), c.name()))
        .collect()
}

/// Stage 7: `String(RegExp(v))` for every value `v` known so far whose
/// pattern compiles.
pub fn pattern_literals(table: &SymbolTable, regexp: &str, constructor: &str) -> Vec<Literal> {
    table
        .snapshot()
        .into_iter()
        .filter_map(|literal| {
            let value = pattern::regexp_string(&literal.value).ok()?;
            Some(Literal::new(format!("{}[{}]({})+[]", regexp, constructor, literal.expr), value))
        })
        .collect()
}

/// Stage 8: `btoa(v)` for every value `v` known so far.
pub fn base64_literals(table: &SymbolTable, btoa: &str) -> Vec<Literal> {
    table
        .snapshot()
        .into_iter()
        .filter_map(|literal| {
            let value = dialect::btoa(&literal.value)?;
            Some(Literal::new(format!("{}({})", btoa, literal.expr), value))
        })
        .collect()
}
