//! Core data structures for outline generation
//!
//! All types here are immutable value records: the parser builds them once
//! per file and the renderer only reads them.

use serde::{Deserialize, Serialize};

/// A single top-level structural element of one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopLevelNode {
    /// Import statement
    Import(ImportNode),
    /// Class definition
    Class(ClassNode),
    /// Function definition
    Function(FunctionNode),
    /// Module-level variable binding
    Var(VarNode),
}

/// An import statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportNode {
    /// `import a, b`: one node per statement, modules in source order
    Plain {
        /// Imported module names as written
        modules: Vec<String>,
    },
    /// `from m import a, b`: one node per statement
    ///
    /// `names` keep source order here; the renderer sorts and deduplicates.
    /// Distinct from-imports of the same module stay distinct nodes.
    From {
        /// Source module as written (`pathlib`, `.`, `..pkg`)
        module: String,
        /// Imported names (`*` for a wildcard import)
        names: Vec<String>,
    },
}

/// A class definition with its direct members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    /// Class name
    pub name: String,
    /// Positional base expressions, verbatim source text (may be empty)
    pub bases: Vec<String>,
    /// Members found one level into the class body, in source order
    pub members: Vec<ClassMember>,
}

/// A member found directly in a class body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassMember {
    /// Method definition
    Function(FunctionNode),
    /// Class-level variable binding
    Var(VarNode),
}

/// A function definition with its parameters and local bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionNode {
    /// Function name
    pub name: String,
    /// Bare parameter names in declared order
    pub params: Vec<String>,
    /// Simple assignment targets one level into the body, in source order,
    /// duplicates preserved
    pub locals: Vec<VarNode>,
}

/// A single variable binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarNode {
    /// Bound name
    pub name: String,
}

impl VarNode {
    /// Create a new variable node
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Structural outline of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutline {
    /// Top-level nodes in source appearance order
    pub nodes: Vec<TopLevelNode>,
}

impl FileOutline {
    /// Create an outline from its nodes
    pub fn new(nodes: Vec<TopLevelNode>) -> Self {
        Self { nodes }
    }

    /// Whether the file contributed no structural nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Sentinel for a file whose text could not be turned into an outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    /// Path of the file, relative to the scanned root
    pub relative_path: String,
    /// Human-readable cause
    pub message: String,
}

/// One report entry: a file's outline, or the failure that replaced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileReport {
    /// The file parsed into an outline
    Outline {
        /// Path of the file, relative to the scanned root
        relative_path: String,
        /// The extracted outline
        outline: FileOutline,
    },
    /// The file could not be processed
    Failed(ParseFailure),
}

impl FileReport {
    /// Create an entry for a successfully outlined file
    pub fn outline(relative_path: impl Into<String>, outline: FileOutline) -> Self {
        Self::Outline {
            relative_path: relative_path.into(),
            outline,
        }
    }

    /// Create an entry for a file that could not be processed
    pub fn failed(relative_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed(ParseFailure {
            relative_path: relative_path.into(),
            message: message.into(),
        })
    }

    /// The entry's relative path
    pub fn relative_path(&self) -> &str {
        match self {
            Self::Outline { relative_path, .. } => relative_path,
            Self::Failed(failure) => &failure.relative_path,
        }
    }

    /// Whether this entry records a failure
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
