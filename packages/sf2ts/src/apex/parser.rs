/**
 * Apex structural parser
 *
 * Recursive descent over the token stream, recovering only the declaration
 * shapes the compiler consumes: type declarations with modifier clauses,
 * fields, methods, constructors, properties and nested types. Method
 * bodies, accessor blocks and initializer expressions are stepped over by
 * balanced-delimiter scanning. Malformed input fails with the byte offset
 * of the offending token.
 */
use thiserror::Error;

use super::ast::{
    Annotation, AnnotationArg, ClassDeclaration, ClassMember, CompilationUnit, FieldDeclaration,
    Identifier, MethodDeclaration, ModifierFlags, Modifiers, Parameter, TypeRef, TypeRefKind,
};
use super::lexer::{Lexer, Token};

/// Syntax failure with the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

/// Parses one compilation unit. Top-level enums, interfaces and triggers
/// are recognized and skipped; only classes are materialized.
pub fn parse(source: &str) -> Result<CompilationUnit, ParseError> {
    Parser::new(source).parse_compilation_unit()
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Parser {
            source,
            tokens: Lexer::new().tokenize(source),
            index: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.index + offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn peek_is_character(&self, code: char) -> bool {
        self.peek().is_some_and(|token| token.is_character(code))
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| token.is_keyword(keyword))
    }

    fn error_here(&self, message: &str) -> ParseError {
        let offset = self
            .peek()
            .map(|token| token.index)
            .unwrap_or(self.source.len());
        ParseError {
            message: message.to_string(),
            offset,
        }
    }

    fn expect_character(&mut self, code: char) -> Result<Token, ParseError> {
        if self.peek_is_character(code) {
            self.next()
                .ok_or_else(|| self.error_here("unexpected end of input"))
        } else {
            Err(self.error_here(&format!("expected '{}'", code)))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<Token, ParseError> {
        if self.peek_is_keyword(keyword) {
            self.next()
                .ok_or_else(|| self.error_here("unexpected end of input"))
        } else {
            Err(self.error_here(&format!("expected '{}'", keyword)))
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        match self.peek() {
            Some(token) if token.is_identifier() => {
                let token = self
                    .next()
                    .ok_or_else(|| self.error_here("unexpected end of input"))?;
                Ok(Identifier::new(token.str_value, token.index, token.end))
            }
            _ => Err(self.error_here("expected an identifier")),
        }
    }

    fn parse_compilation_unit(mut self) -> Result<CompilationUnit, ParseError> {
        let mut classes = Vec::new();
        while !self.at_end() {
            let modifiers = self.parse_modifiers()?;
            if self.peek_is_keyword("class") {
                classes.push(self.parse_class(modifiers)?);
            } else if self.peek_is_keyword("enum") || self.peek_is_keyword("interface") {
                self.next();
                self.expect_identifier()?;
                self.skip_through_braces()?;
            } else if self.peek_is_keyword("trigger") {
                self.next();
                self.expect_identifier()?;
                self.skip_through_braces()?;
            } else {
                return Err(self.error_here("expected a type declaration"));
            }
        }
        Ok(CompilationUnit { classes })
    }

    fn parse_class(
        &mut self,
        modifiers: Option<Modifiers>,
    ) -> Result<ClassDeclaration, ParseError> {
        let class_keyword = self.expect_keyword("class")?;
        let name = self.expect_identifier()?;
        if self.peek_is_keyword("extends") {
            self.next();
            self.parse_type()?;
        }
        if self.peek_is_keyword("implements") {
            self.next();
            self.parse_type()?;
            while self.peek_is_character(',') {
                self.next();
                self.parse_type()?;
            }
        }
        self.expect_character('{')?;
        let mut members = Vec::new();
        while !self.peek_is_character('}') {
            if self.at_end() {
                return Err(self.error_here("unterminated class body"));
            }
            members.push(self.parse_member()?);
        }
        let close = self.expect_character('}')?;
        let start = modifiers
            .as_ref()
            .map(|m| m.start)
            .unwrap_or(class_keyword.index);
        Ok(ClassDeclaration {
            modifiers,
            name,
            members,
            start,
            end: close.end,
        })
    }

    fn parse_member(&mut self) -> Result<ClassMember, ParseError> {
        let modifiers = self.parse_modifiers()?;
        if self.peek_is_keyword("class") {
            return Ok(ClassMember::Class(self.parse_class(modifiers)?));
        }
        if self.peek_is_keyword("enum") {
            self.next();
            let name = self.expect_identifier()?;
            self.skip_through_braces()?;
            return Ok(ClassMember::Enum { name });
        }
        if self.peek_is_keyword("interface") {
            self.next();
            let name = self.expect_identifier()?;
            self.skip_through_braces()?;
            return Ok(ClassMember::Interface { name });
        }
        if self.peek_is_character('{') {
            self.skip_balanced_braces()?;
            return Ok(ClassMember::Initializer);
        }

        let type_ref = self.parse_type()?;

        // A parenthesis right after the leading type name means the name was
        // a constructor, not a return type.
        if self.peek_is_character('(') {
            if !matches!(type_ref.kind, TypeRefKind::Named) || type_ref.text.contains('.') {
                return Err(self.error_here("expected a member name"));
            }
            let name = Identifier::new(type_ref.text.clone(), type_ref.start, type_ref.end);
            self.parse_params()?;
            self.skip_member_body()?;
            return Ok(ClassMember::Constructor { name });
        }

        let name = self.expect_identifier()?;

        if self.peek_is_character('(') {
            let params = self.parse_params()?;
            self.skip_member_body()?;
            return Ok(ClassMember::Method(MethodDeclaration {
                modifiers,
                return_type: Some(type_ref),
                name: Some(name),
                params,
            }));
        }

        if self.peek_is_character('{') {
            self.skip_balanced_braces()?;
            return Ok(ClassMember::Property { name });
        }

        // Field declarator list. An initializer runs to the terminating
        // semicolon; declarators written after it are not recovered.
        let mut declarators = vec![name];
        loop {
            if self.peek_is_character(';') {
                self.next();
                break;
            }
            if self.peek_is_character(',') {
                self.next();
                declarators.push(self.expect_identifier()?);
                continue;
            }
            if self.peek_is_character('=') {
                self.next();
                self.skip_initializer()?;
                break;
            }
            return Err(self.error_here("expected ';' in field declaration"));
        }
        Ok(ClassMember::Field(FieldDeclaration {
            modifiers,
            type_ref: Some(type_ref),
            declarators,
        }))
    }

    fn parse_modifiers(&mut self) -> Result<Option<Modifiers>, ParseError> {
        let mut annotations = Vec::new();
        let mut flags = ModifierFlags::empty();
        let mut span: Option<(usize, usize)> = None;
        loop {
            let Some(token) = self.peek() else { break };
            if token.is_character('@') {
                let annotation = self.parse_annotation()?;
                span = extend_span(span, annotation.start, annotation.end);
                annotations.push(annotation);
                continue;
            }
            if !token.is_any_keyword() {
                break;
            }
            let lower = token.str_value.to_lowercase();
            let flag = match lower.as_str() {
                "public" => ModifierFlags::PUBLIC,
                "private" => ModifierFlags::PRIVATE,
                "protected" => ModifierFlags::PROTECTED,
                "global" => ModifierFlags::GLOBAL,
                "static" => ModifierFlags::STATIC,
                "final" => ModifierFlags::FINAL,
                "abstract" => ModifierFlags::ABSTRACT,
                "virtual" => ModifierFlags::VIRTUAL,
                "override" => ModifierFlags::OVERRIDE,
                "transient" => ModifierFlags::TRANSIENT,
                "testmethod" => ModifierFlags::TESTMETHOD,
                "webservice" => ModifierFlags::WEBSERVICE,
                "with" | "without" | "inherited" => {
                    let sharing_kind = self
                        .next()
                        .ok_or_else(|| self.error_here("unexpected end of input"))?;
                    let sharing = self.expect_keyword("sharing")?;
                    span = extend_span(span, sharing_kind.index, sharing.end);
                    flags |= match lower.as_str() {
                        "with" => ModifierFlags::WITH_SHARING,
                        "without" => ModifierFlags::WITHOUT_SHARING,
                        _ => ModifierFlags::INHERITED_SHARING,
                    };
                    continue;
                }
                _ => break,
            };
            let token = self
                .next()
                .ok_or_else(|| self.error_here("unexpected end of input"))?;
            span = extend_span(span, token.index, token.end);
            flags |= flag;
        }
        match span {
            Some((start, end)) => Ok(Some(Modifiers {
                annotations,
                flags,
                start,
                end,
            })),
            None => Ok(None),
        }
    }

    fn parse_annotation(&mut self) -> Result<Annotation, ParseError> {
        let at = self.expect_character('@')?;
        let name = self.expect_identifier()?;
        let mut end = name.end;
        let mut args = Vec::new();
        if self.peek_is_character('(') {
            self.next();
            loop {
                if self.peek_is_character(')') {
                    let close = self.expect_character(')')?;
                    end = close.end;
                    break;
                }
                if self.at_end() {
                    return Err(self.error_here("unterminated annotation argument list"));
                }
                let key = self.expect_identifier()?.text;
                self.expect_character('=')?;
                let value = self
                    .next()
                    .ok_or_else(|| self.error_here("expected an annotation argument value"))?;
                if value.is_character(')') || value.is_character(',') {
                    return Err(ParseError {
                        message: "expected an annotation argument value".to_string(),
                        offset: value.index,
                    });
                }
                args.push(AnnotationArg {
                    key,
                    value: value.str_value,
                });
                // Argument pairs may be comma- or whitespace-separated.
                if self.peek_is_character(',') {
                    self.next();
                }
            }
        }
        Ok(Annotation {
            name,
            args,
            start: at.index,
            end,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect_character('(')?;
        let mut params = Vec::new();
        if self.peek_is_character(')') {
            self.next();
            return Ok(params);
        }
        loop {
            if self.peek_is_keyword("final") {
                self.next();
            }
            let type_ref = self.parse_type()?;
            let name = self.expect_identifier()?;
            params.push(Parameter { type_ref, name });
            if self.peek_is_character(',') {
                self.next();
                continue;
            }
            self.expect_character(')')?;
            break;
        }
        Ok(params)
    }

    fn parse_type(&mut self) -> Result<TypeRef, ParseError> {
        let first = self.expect_identifier().map_err(|mut err| {
            err.message = "expected a type".to_string();
            err
        })?;
        let start = first.start;
        let mut end = first.end;
        while self.peek_is_character('.')
            && self.peek_at(1).is_some_and(|token| token.is_identifier())
        {
            self.next();
            let segment = self.expect_identifier()?;
            end = segment.end;
        }
        let base_end = end;

        if self.peek_is_character('<') {
            self.next();
            let mut args = vec![self.parse_type()?];
            while self.peek_is_character(',') {
                self.next();
                args.push(self.parse_type()?);
            }
            let close = self.expect_character('>')?;
            end = close.end;
            return Ok(TypeRef {
                text: self.source[start..end].to_string(),
                start,
                end,
                kind: TypeRefKind::Generic {
                    base: self.source[start..base_end].to_string(),
                    args,
                },
            });
        }

        while self.peek_is_character('[')
            && self.peek_at(1).is_some_and(|token| token.is_character(']'))
        {
            self.next();
            let close = self.expect_character(']')?;
            end = close.end;
        }
        Ok(TypeRef {
            text: self.source[start..end].to_string(),
            start,
            end,
            kind: TypeRefKind::Named,
        })
    }

    /// Consumes a method or constructor body: a balanced brace block, or a
    /// bare semicolon for abstract declarations.
    fn skip_member_body(&mut self) -> Result<(), ParseError> {
        if self.peek_is_character(';') {
            self.next();
            return Ok(());
        }
        if self.peek_is_character('{') {
            return self.skip_balanced_braces();
        }
        Err(self.error_here("expected a member body"))
    }

    fn skip_balanced_braces(&mut self) -> Result<(), ParseError> {
        self.expect_character('{')?;
        let mut depth = 1usize;
        while depth > 0 {
            let Some(token) = self.next() else {
                return Err(self.error_here("unterminated block"));
            };
            if token.is_character('{') {
                depth += 1;
            } else if token.is_character('}') {
                depth -= 1;
            }
        }
        Ok(())
    }

    /// Advances to the next `{` and consumes the balanced block.
    fn skip_through_braces(&mut self) -> Result<(), ParseError> {
        while !self.peek_is_character('{') {
            if self.next().is_none() {
                return Err(self.error_here("expected a block"));
            }
        }
        self.skip_balanced_braces()
    }

    /// Consumes an initializer expression including the terminating
    /// semicolon. Commas inside the expression are not declarator
    /// separators and are swallowed with it.
    fn skip_initializer(&mut self) -> Result<(), ParseError> {
        let mut depth = 0i32;
        loop {
            let Some(token) = self.next() else {
                return Err(self.error_here("unterminated field initializer"));
            };
            if token.is_character('(') || token.is_character('[') || token.is_character('{') {
                depth += 1;
            } else if token.is_character(')') || token.is_character(']') || token.is_character('}')
            {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError {
                        message: "unbalanced delimiter in field initializer".to_string(),
                        offset: token.index,
                    });
                }
            } else if token.is_character(';') && depth == 0 {
                return Ok(());
            }
        }
    }
}

fn extend_span(span: Option<(usize, usize)>, start: usize, end: usize) -> Option<(usize, usize)> {
    match span {
        None => Some((start, end)),
        Some((s, _)) => Some((s, end)),
    }
}
