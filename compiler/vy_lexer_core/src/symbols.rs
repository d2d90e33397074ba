//! Static vocabulary tables.
//!
//! Every table is an immutable `match` compiled into the binary; there is
//! no runtime construction and no shared mutable data. The classifier
//! consults these in a fixed priority order, so a word present in several
//! tables takes the category of the first one checked.
//!
//! # Reserved Keywords
//!
//! Looked up with length bucketing: words outside the 2-10 character
//! range are rejected before any string comparison.
//!
//! # Sized Types
//!
//! `intN`/`uintN` (N = 8, 16, ..., 256) and `bytesN` (N = 1..=32) are
//! recognized structurally instead of being enumerated.

/// Reserved keyword lookup.
pub fn is_keyword(word: &str) -> bool {
    let len = word.len();
    if !(2..=10).contains(&len) {
        return false;
    }
    match len {
        2 => matches!(word, "as" | "if" | "in" | "is" | "or"),
        3 => matches!(word, "and" | "def" | "for" | "log" | "not" | "pub"),
        4 => matches!(word, "None" | "True" | "else" | "from" | "pass"),
        5 => matches!(word, "False" | "break" | "event" | "raise" | "while"),
        6 => matches!(
            word,
            "assert" | "global" | "import" | "lambda" | "return" | "struct"
        ),
        8 => matches!(word, "continue" | "contract" | "nonlocal"),
        9 => word == "interface",
        10 => word == "implements",
        _ => false,
    }
}

/// Control-structure words.
pub fn is_control_keyword(word: &str) -> bool {
    matches!(
        word,
        "if" | "else" | "elif" | "for" | "while" | "in" | "and" | "or" | "not"
    )
}

/// Named constants.
pub fn is_constant(word: &str) -> bool {
    matches!(
        word,
        "ZERO_ADDRESS"
            | "EMPTY_BYTES32"
            | "MAX_INT128"
            | "MIN_INT128"
            | "MAX_DECIMAL"
            | "MIN_DECIMAL"
            | "MAX_UINT256"
    )
}

/// Built-in functions.
pub fn is_builtin(word: &str) -> bool {
    matches!(
        word,
        "as_unitless_number"
            | "as_wei_value"
            | "bitwise_and"
            | "bitwise_not"
            | "bitwise_or"
            | "bitwise_xor"
            | "blockhash"
            | "ceil"
            | "concat"
            | "convert"
            | "create_with_code_of"
            | "ecadd"
            | "ecmul"
            | "ecrecover"
            | "empty"
            | "extract32"
            | "floor"
            | "keccak256"
            | "len"
            | "max"
            | "method_id"
            | "min"
            | "pow_mod256"
            | "raw_call"
            | "sha256"
            | "sha3"
            | "shift"
            | "slice"
            | "uint256_addmod"
            | "uint256_mulmod"
    )
}

/// Value-type names, including visibility/mutability words that the
/// language spells like types in declarations.
pub fn is_value_type(word: &str) -> bool {
    matches!(
        word,
        "bool"
            | "byte"
            | "string"
            | "enum"
            | "address"
            | "decimal"
            | "external"
            | "internal"
            | "nonreentrant"
            | "pure"
            | "view"
            | "payable"
            | "nonpayable"
            | "public"
            | "indexed"
            | "constant"
            | "Bytes"
            | "String"
            | "HashMap"
    ) || is_sized_type(word)
}

/// `intN`, `uintN`, or `bytesN` with a canonical width.
fn is_sized_type(word: &str) -> bool {
    if let Some(width) = word.strip_prefix("bytes") {
        return canonical_width(width).is_some_and(|n| (1..=32).contains(&n));
    }
    let width = word
        .strip_prefix("uint")
        .or_else(|| word.strip_prefix("int"));
    width
        .and_then(canonical_width)
        .is_some_and(|n| (8..=256).contains(&n) && n % 8 == 0)
}

/// Parse a decimal width with no sign and no leading zero.
fn canonical_width(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.starts_with('0') || digits.len() > 3 {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Properties reachable as `object.property` for the block/transaction
/// globals, or `None` if `object` is not one of them.
pub fn block_tx_properties(object: &str) -> Option<&'static [&'static str]> {
    const BLOCK: &[&str] = &["coinbase", "difficulty", "gaslimit", "number", "timestamp"];
    const MSG: &[&str] = &["data", "sender", "sig", "value"];
    const TX: &[&str] = &["gasprice", "origin"];
    match object {
        "block" => Some(BLOCK),
        "msg" => Some(MSG),
        "tx" => Some(TX),
        _ => None,
    }
}

/// Block/transaction globals that stand alone without a property suffix.
pub fn is_bare_block_tx_property(word: &str) -> bool {
    matches!(word, "now" | "gasleft" | "blockhash")
}

/// Literal atoms.
pub fn is_atom(word: &str) -> bool {
    matches!(word, "None" | "True" | "False")
}

/// NatSpec documentation tags, spelled with their leading `@`.
pub fn is_natspec_tag(word: &str) -> bool {
    matches!(
        word,
        "@title"
            | "@license"
            | "@author"
            | "@notice"
            | "@dev"
            | "@param"
            | "@return"
            | "@version"
    )
}

/// Decorator names (without `@`) that classify as keywords.
pub fn is_decorator_modifier(name: &str) -> bool {
    matches!(
        name,
        "payable" | "nonpayable" | "view" | "pure" | "internal" | "external" | "nonreentrant"
    )
}

/// Characters that form operator runs.
#[inline]
pub fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '&' | '^' | '%' | ':' | '=' | '<' | '>' | '!' | '|' | '/' | '~'
    )
}

/// Bracket, separator, and member-access characters.
#[inline]
pub fn is_punctuation_char(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';' | ':' | '.'
    )
}

/// Characters that continue a word: ASCII word chars, `$`, and anything
/// from U+00A1 upward.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch >= '\u{a1}'
}
