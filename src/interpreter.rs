/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// dimension-tracking arithmetic, manages variable and function state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, user functions, built-in functions, and constants.
/// - Orchestrates expression batches, including unit conversion and
///   significant-figure bookkeeping.
/// - Reports runtime errors such as unknown names or bad assignments.
pub mod evaluator;
/// The lexer module tokenizes expression source for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful elements of the LaTeX-style
/// grammar such as numbers, identifiers, operators, delimiters, and
/// commands. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Resolves backslash commands into functions, units, and named symbols.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. This enables the evaluator to execute user input.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with stream positions.
/// - Supports arithmetic, implicit multiplication, function calls,
///   assignments, lists, and absolute-value bars.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during evaluation: scalar
/// quantities carrying a dimension vector, an imaginary part, and a
/// significant-figure count; element-wise lists of quantities; booleans;
/// and user-defined functions.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements dimensional arithmetic, complex arithmetic, and
///   element-wise broadcasting.
/// - Tracks significant figures across operations.
pub mod value;
