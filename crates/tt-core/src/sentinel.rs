//! Reserved vocabulary shared by documents and the interpreter.

/// Prefix that marks a string as a control directive.
pub const DIRECTIVE_PREFIX: &str = "::";
/// Default identifier of the first node visited.
pub const START: &str = "::START";
/// Directive (and input token) that ends the walk.
pub const QUIT: &str = "::QUIT";
/// Directive (and input token) that does nothing.
pub const NONE: &str = "::NONE";
/// Directive keyword that moves the cursor.
pub const GOTO: &str = "::GOTO";
/// Reserved document key listing documents to merge in.
pub const INCLUDE: &str = "::INCLUDE";
/// Default document file extension.
pub const EXTENSION: &str = "json";
