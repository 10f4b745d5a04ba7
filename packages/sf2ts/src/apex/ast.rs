/**
 * Apex declaration tree
 *
 * Immutable structural view of a compilation unit: type declarations with
 * their modifier clauses, fields, methods and nested types. Every name and
 * type token carries its byte span in the original source so declaration
 * output can be aligned back to it. Bodies and initializers are not
 * represented; the declaration compiler never looks inside them.
 */
use bitflags::bitflags;

/// A name token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Identifier {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Identifier {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A type reference as written in source. `text` is the verbatim slice
/// covering the whole reference, which is also the fallback declaration
/// output for names the mapper does not rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: TypeRefKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRefKind {
    /// Plain, dotted or array type name, kept as raw text.
    Named,
    /// Generic reference; `base` is the raw base name, `args` the type
    /// arguments in order.
    Generic { base: String, args: Vec<TypeRef> },
}

/// One `key=value` argument of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationArg {
    pub key: String,
    pub value: String,
}

/// A leading `@Name(...)` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: Identifier,
    pub args: Vec<AnnotationArg>,
    pub start: usize,
    pub end: usize,
}

impl Annotation {
    /// True when an argument with this key carries the value `true`, both
    /// matched case-insensitively.
    pub fn bool_arg(&self, key: &str) -> bool {
        self.args
            .iter()
            .any(|arg| arg.key.eq_ignore_ascii_case(key) && arg.value.eq_ignore_ascii_case("true"))
    }
}

bitflags! {
    /// Keyword modifiers of a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModifierFlags: u16 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const GLOBAL = 1 << 3;
        const STATIC = 1 << 4;
        const FINAL = 1 << 5;
        const ABSTRACT = 1 << 6;
        const VIRTUAL = 1 << 7;
        const OVERRIDE = 1 << 8;
        const TRANSIENT = 1 << 9;
        const TESTMETHOD = 1 << 10;
        const WEBSERVICE = 1 << 11;
        const WITH_SHARING = 1 << 12;
        const WITHOUT_SHARING = 1 << 13;
        const INHERITED_SHARING = 1 << 14;
    }
}

/// The modifier clause of a member: leading annotations plus keyword flags.
/// A member written with neither has no clause at all (`Option::None` at the
/// use site), which the field rule treats differently from an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifiers {
    pub annotations: Vec<Annotation>,
    pub flags: ModifierFlags,
    pub start: usize,
    pub end: usize,
}

impl Modifiers {
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|annotation| annotation.name.text.eq_ignore_ascii_case(name))
    }
}

/// One formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_ref: TypeRef,
    pub name: Identifier,
}

/// A field declaration. `declarators` holds the declared names in order;
/// the first one is the name the declaration compiler emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub modifiers: Option<Modifiers>,
    pub type_ref: Option<TypeRef>,
    pub declarators: Vec<Identifier>,
}

/// A method declaration; the body is skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub modifiers: Option<Modifiers>,
    pub return_type: Option<TypeRef>,
    pub name: Option<Identifier>,
    pub params: Vec<Parameter>,
}

/// A class declaration with its direct members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub modifiers: Option<Modifiers>,
    pub name: Identifier,
    pub members: Vec<ClassMember>,
    pub start: usize,
    pub end: usize,
}

/// Direct members of a class body. Shapes beyond fields, methods and nested
/// classes are recognized so the parser can step over them, but produce no
/// declaration output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Class(ClassDeclaration),
    Constructor { name: Identifier },
    Property { name: Identifier },
    Enum { name: Identifier },
    Interface { name: Identifier },
    Initializer,
}

/// A parsed compilation unit. Only class declarations are materialized;
/// top-level enums, interfaces and triggers leave the list empty or shorter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationUnit {
    pub classes: Vec<ClassDeclaration>,
}
