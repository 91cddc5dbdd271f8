use std::{borrow::Borrow, fmt};

/// The name of the last-result register.
///
/// Every evaluated expression writes its value here, and the renderer never
/// echoes this name back.
pub const LAST_RESULT: &str = "_";

/// The reserved word introducing a deletion.
pub const DELETE_KEYWORD: &str = "del";

/// A validated variable or function name.
///
/// A name is non-empty, starts with an ASCII letter or underscore, and
/// continues with ASCII letters, digits, or underscores. The reserved word
/// `del` is never a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validates `text` and wraps it as a [`Name`].
    ///
    /// Returns `None` when `text` is not a syntactically valid identifier or is
    /// the reserved word `del`.
    ///
    /// # Example
    /// ```
    /// use linecalc::ast::Name;
    ///
    /// assert!(Name::new("radius_2").is_some());
    /// assert!(Name::new("_").is_some());
    /// assert!(Name::new("2x").is_none());
    /// assert!(Name::new("del").is_none());
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        is_valid_name(&text).then_some(Self(text))
    }

    /// Wraps an identifier the lexer already matched.
    pub(crate) fn from_lexeme(text: String) -> Self {
        debug_assert!(is_valid_name(&text), "lexer produced invalid name {text:?}");
        Self(text)
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `_` last-result register.
    #[must_use]
    pub fn is_last_result(&self) -> bool {
        self.0 == LAST_RESULT
    }

    /// The `_` last-result register.
    #[must_use]
    pub fn last_result() -> Self {
        Self(LAST_RESULT.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_name(text: &str) -> bool {
    let mut chars = text.chars();
    let starts_well = chars.next()
                           .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    starts_well
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    && text != DELETE_KEYWORD
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// Trees are built once by the parser, owned by the [`Command`] that holds
/// them, and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    Number(f64),
    /// Reference to a variable by name.
    Variable(Name),
    /// Arithmetic negation, `-expr`.
    Negate(Box<Self>),
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A single-argument call to a built-in function, e.g. `sin(x)`.
    FunctionCall {
        /// Name of the function being called.
        name:     Name,
        /// The argument expression.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Number of levels in the tree. A literal or variable has depth 1.
    ///
    /// # Example
    /// ```
    /// use linecalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Number(1.0), BinaryOperator::Add, Expr::Number(2.0));
    /// assert_eq!(sum.depth(), 2);
    /// assert_eq!(Expr::Negate(Box::new(sum)).depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::Negate(operand) | Self::FunctionCall { argument: operand, .. } => operand.depth() + 1,
            Self::BinaryOp { left, right, .. } => left.depth().max(right.depth()) + 1,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`), right-associative.
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// A single change to the variable store.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// `name = expr`
    Assignment {
        /// The variable being written.
        name:  Name,
        /// The value expression, evaluated against the store at execution
        /// time.
        value: Expr,
    },
    /// `del name`
    Deletion(Name),
}

/// The parsed intent of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A single expression to evaluate.
    Eval(Expr),
    /// One or more comma-separated updates, in execution order.
    Updates(Vec<Update>),
}
