//! Python source parsing into structural outlines
//!
//! Walks only the module scope of the tree-sitter parse tree, one statement
//! kind at a time, and exactly one level into class and function bodies.
//! Anything deeper is outside the outline on purpose: the report is a quick
//! overview, not a mirror of the source tree.

use tree_sitter::{Node, Parser};

use crate::error::{OutlineError, Result};
use crate::types::{
    ClassMember, ClassNode, FileOutline, FunctionNode, ImportNode, TopLevelNode, VarNode,
};

/// Parse one file's text into a structural outline.
///
/// Total over arbitrary input: malformed source yields
/// [`OutlineError::Syntax`], never a panic. An empty file is a valid, empty
/// outline.
pub fn parse_source(text: &str) -> Result<FileOutline> {
    let mut parser = build_parser()?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| OutlineError::grammar("parser produced no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(OutlineError::syntax(describe_first_error(root)));
    }

    Ok(FileOutline::new(collect_top_level(root, text.as_bytes())))
}

/// Build a tree-sitter parser configured for the Python grammar
fn build_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| OutlineError::grammar(e.to_string()))?;
    Ok(parser)
}

/// Describe the first error or missing node in a tree that has errors
fn describe_first_error(root: Node<'_>) -> String {
    match find_error_node(root) {
        Some(node) => {
            let pos = node.start_position();
            if node.is_missing() {
                format!(
                    "missing {} at line {}, column {}",
                    node.kind(),
                    pos.row + 1,
                    pos.column + 1
                )
            } else {
                format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
            }
        }
        None => "syntax error".to_string(),
    }
}

fn find_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_error_node(child) {
            return Some(found);
        }
    }
    None
}

/// Collect one [`TopLevelNode`] per module-scope statement of interest
fn collect_top_level(root: Node<'_>, src: &[u8]) -> Vec<TopLevelNode> {
    let mut nodes = Vec::new();
    let mut cursor = root.walk();
    for stmt in root.named_children(&mut cursor) {
        match stmt.kind() {
            "import_statement" => nodes.push(TopLevelNode::Import(plain_import(stmt, src))),
            "import_from_statement" => nodes.push(TopLevelNode::Import(from_import(stmt, src))),
            "function_definition" => nodes.push(TopLevelNode::Function(function_node(stmt, src))),
            "class_definition" => nodes.push(TopLevelNode::Class(class_node(stmt, src))),
            "decorated_definition" => {
                if let Some(def) = stmt.child_by_field_name("definition") {
                    match def.kind() {
                        "function_definition" => {
                            nodes.push(TopLevelNode::Function(function_node(def, src)))
                        }
                        "class_definition" => nodes.push(TopLevelNode::Class(class_node(def, src))),
                        _ => {}
                    }
                }
            }
            "expression_statement" => {
                for var in assignment_targets(stmt, src) {
                    nodes.push(TopLevelNode::Var(var));
                }
            }
            // every other statement kind is outside the outline
            _ => {}
        }
    }
    nodes
}

/// `import a, b.c`: one module string per imported dotted name
fn plain_import(stmt: Node<'_>, src: &[u8]) -> ImportNode {
    let mut modules = Vec::new();
    let mut cursor = stmt.walk();
    for name in stmt.children_by_field_name("name", &mut cursor) {
        if let Some(module) = import_target_name(name, src) {
            modules.push(module);
        }
    }
    ImportNode::Plain { modules }
}

/// `from m import a, b`: module text verbatim, aliases collapsed to the
/// imported name, `*` for a wildcard import
fn from_import(stmt: Node<'_>, src: &[u8]) -> ImportNode {
    let module = stmt
        .child_by_field_name("module_name")
        .and_then(|n| node_text(n, src))
        .unwrap_or_default();

    let mut names = Vec::new();
    let mut cursor = stmt.walk();
    for name in stmt.children_by_field_name("name", &mut cursor) {
        if let Some(imported) = import_target_name(name, src) {
            names.push(imported);
        }
    }

    // `from m import *` carries a wildcard_import child instead of names
    if names.is_empty() {
        let mut cursor = stmt.walk();
        if stmt
            .named_children(&mut cursor)
            .any(|c| c.kind() == "wildcard_import")
        {
            names.push("*".to_string());
        }
    }

    ImportNode::From { module, names }
}

/// Resolve an import target to its module/name text, ignoring `as` aliases
fn import_target_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    let target = if node.kind() == "aliased_import" {
        node.child_by_field_name("name")?
    } else {
        node
    };
    node_text(target, src)
}

fn function_node(def: Node<'_>, src: &[u8]) -> FunctionNode {
    let name = def
        .child_by_field_name("name")
        .and_then(|n| node_text(n, src))
        .unwrap_or_default();
    let params = def
        .child_by_field_name("parameters")
        .map(|p| parameter_names(p, src))
        .unwrap_or_default();
    let locals = def
        .child_by_field_name("body")
        .map(|b| body_locals(b, src))
        .unwrap_or_default();
    FunctionNode {
        name,
        params,
        locals,
    }
}

/// Bare names of all named parameters in declared order.
///
/// The `*` and `/` separators contribute nothing; annotations and defaults
/// are stripped down to the parameter name.
fn parameter_names(parameters: Node<'_>, src: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = parameters.walk();
    for param in parameters.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => {
                if let Some(name) = node_text(param, src) {
                    names.push(name);
                }
            }
            "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                if let Some(name) = first_identifier(param, src) {
                    names.push(name);
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                let name = param
                    .child_by_field_name("name")
                    .and_then(|n| node_text(n, src))
                    .or_else(|| first_identifier(param, src));
                if let Some(name) = name {
                    names.push(name);
                }
            }
            _ => {}
        }
    }
    names
}

/// Simple assignment targets one level into a block, in source order,
/// duplicates preserved
fn body_locals(body: Node<'_>, src: &[u8]) -> Vec<VarNode> {
    let mut locals = Vec::new();
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() == "expression_statement" {
            locals.extend(assignment_targets(stmt, src));
        }
    }
    locals
}

fn class_node(def: Node<'_>, src: &[u8]) -> ClassNode {
    let name = def
        .child_by_field_name("name")
        .and_then(|n| node_text(n, src))
        .unwrap_or_default();
    let bases = def
        .child_by_field_name("superclasses")
        .map(|s| base_names(s, src))
        .unwrap_or_default();
    let members = def
        .child_by_field_name("body")
        .map(|b| class_members(b, src))
        .unwrap_or_default();
    ClassNode {
        name,
        bases,
        members,
    }
}

/// Verbatim positional base expressions; `metaclass=` and friends are
/// keyword arguments, not bases
fn base_names(superclasses: Node<'_>, src: &[u8]) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = superclasses.walk();
    for arg in superclasses.named_children(&mut cursor) {
        match arg.kind() {
            "keyword_argument" | "comment" => {}
            _ => {
                if let Some(text) = node_text(arg, src) {
                    bases.push(text);
                }
            }
        }
    }
    bases
}

/// Members one level into a class body: methods and simple assignments.
/// Nested classes are outside the one-level outline.
fn class_members(body: Node<'_>, src: &[u8]) -> Vec<ClassMember> {
    let mut members = Vec::new();
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        match stmt.kind() {
            "function_definition" => {
                members.push(ClassMember::Function(function_node(stmt, src)))
            }
            "decorated_definition" => {
                if let Some(def) = stmt.child_by_field_name("definition") {
                    if def.kind() == "function_definition" {
                        members.push(ClassMember::Function(function_node(def, src)));
                    }
                }
            }
            "expression_statement" => {
                for var in assignment_targets(stmt, src) {
                    members.push(ClassMember::Var(var));
                }
            }
            _ => {}
        }
    }
    members
}

/// Simple assignment targets of one expression statement.
///
/// Annotated (`x: int = 1`) and augmented (`x += 1`) assignments are not
/// simple assignments and bind nothing here.
fn assignment_targets(stmt: Node<'_>, src: &[u8]) -> Vec<VarNode> {
    let mut targets = Vec::new();
    let mut cursor = stmt.walk();
    for expr in stmt.named_children(&mut cursor) {
        if expr.kind() == "assignment" {
            collect_assignment_targets(expr, src, &mut targets);
        }
    }
    targets
}

fn collect_assignment_targets(assignment: Node<'_>, src: &[u8], out: &mut Vec<VarNode>) {
    if assignment.child_by_field_name("type").is_some() {
        return;
    }
    if let Some(left) = assignment.child_by_field_name("left") {
        collect_target_names(left, src, out);
    }
    // chained assignment nests on the right: `a = b = 1`
    if let Some(right) = assignment.child_by_field_name("right") {
        if right.kind() == "assignment" {
            collect_assignment_targets(right, src, out);
        }
    }
}

/// One [`VarNode`] per bound name, left to right. Attribute and subscript
/// targets bind no new name and are skipped.
fn collect_target_names(target: Node<'_>, src: &[u8], out: &mut Vec<VarNode>) {
    match target.kind() {
        "identifier" => {
            if let Some(name) = node_text(target, src) {
                out.push(VarNode::new(name));
            }
        }
        "pattern_list" | "tuple_pattern" | "list_pattern" => {
            let mut cursor = target.walk();
            for child in target.named_children(&mut cursor) {
                collect_target_names(child, src, out);
            }
        }
        "list_splat_pattern" => {
            if let Some(name) = first_identifier(target, src) {
                out.push(VarNode::new(name));
            }
        }
        _ => {}
    }
}

/// Text of the first identifier found under a node (depth-first)
fn first_identifier(node: Node<'_>, src: &[u8]) -> Option<String> {
    if node.kind() == "identifier" {
        return node_text(node, src);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(name) = first_identifier(child, src) {
            return Some(name);
        }
    }
    None
}

fn node_text(node: Node<'_>, src: &[u8]) -> Option<String> {
    node.utf8_text(src).ok().map(str::to_owned)
}
