mod util;
use util::*;
use pretty_assertions::assert_eq;
use neon::{check_source, Error, TypeId};
use neon::frontend::{new_scope, parse_module, check_module, Type, UserDefinedType, CheckErrorKind};

fn member<'a>(alias_name: &'a str, type_name: &'a str) -> AdtMember<'a> {
    AdtMember { alias_name, type_name }
}

#[test]
fn new_scope_has_builtins() {
    let scope = new_scope();
    assert_eq!(scope.len(), 2);
    assert_eq!(scope.get("Int").map(|t| t.type_id()), Some(TypeId::INT));
    assert_eq!(scope.get("String").map(|t| t.type_id()), Some(TypeId::STRING));
    assert!(scope.get("Float").is_none());
}

#[test]
fn adt_type_checks() {
    let definition = adt("type SomeType:\n  I Int\n  S String\n");
    let mut scope = new_scope();
    let mut udt = UserDefinedType::new(definition, scope.counter_mut());
    assert!(udt.check(&scope).is_ok());

    assert_eq!(udt.type_id(), TypeId::new(64));
    assert_eq!(udt.members().len(), 2);
    assert_eq!(*udt.members()[0], Type::Int);
    assert_eq!(*udt.members()[1], Type::String);
    assert_eq!(udt.member_names().len(), 2);
    assert_eq!(udt.member("I").map(|t| t.type_id()), Some(TypeId::INT));
    assert_eq!(udt.member("S").map(|t| t.type_id()), Some(TypeId::STRING));
}

#[test]
fn unknown_member_type_fails() {
    let definition = AdtTypeDefinition { name: "Bad", members: vec![ member("X", "Unknown") ] };
    let mut scope = new_scope();
    let mut udt = UserDefinedType::new(definition, scope.counter_mut());
    let err = udt.check(&scope).unwrap_err();

    assert_eq!(err.kind(), &CheckErrorKind::UndefinedType {
        type_name   : "Unknown".to_string(),
        owner       : "Bad".to_string(),
        tag         : Some("X".to_string()),
    });
    assert_eq!(err.to_string(), "Unknown type name 'Unknown' in 'Bad': 'X Unknown'");
    assert!(udt.members().is_empty());
    assert!(udt.member_names().is_empty());
}

#[test]
fn first_unknown_member_is_reported() {
    let definition = AdtTypeDefinition { name: "Bad", members: vec![ member("A", "Int"), member("B", "Missing"), member("C", "Other") ] };
    let mut scope = new_scope();
    let mut udt = UserDefinedType::new(definition, scope.counter_mut());
    let err = udt.check(&scope).unwrap_err();
    assert_eq!(err.to_string(), "Unknown type name 'Missing' in 'Bad': 'B Missing'");
    assert!(udt.members().is_empty());
}

#[test]
fn type_ids_are_allocated_per_scope() {
    let mut scope = new_scope();
    let bad = UserDefinedType::new(AdtTypeDefinition { name: "Bad", members: vec![ member("X", "Unknown") ] }, scope.counter_mut());
    let mut good = UserDefinedType::new(AdtTypeDefinition { name: "Good", members: vec![ member("I", "Int") ] }, scope.counter_mut());
    assert_eq!(bad.type_id(), TypeId::new(64));
    assert_eq!(good.type_id(), TypeId::new(65));
    assert!(good.check(&scope).is_ok());
    assert!(!good.type_id().is_builtin());

    let mut other = new_scope();
    let first = UserDefinedType::new(AdtTypeDefinition { name: "Good", members: vec![] }, other.counter_mut());
    assert_eq!(first.type_id(), TypeId::new(64));
}

#[test]
fn define_registers_types() {
    let mut scope = new_scope();
    assert_eq!(scope.define(&type_definition("type Number Int")), Ok(TypeId::INT));
    assert_eq!(scope.define(&type_definition("type Value:\n  N Number\n  S String\n")), Ok(TypeId::new(64)));
    assert_eq!(scope.define(&type_definition("type Wrapper:\n  V Value\n")), Ok(TypeId::new(65)));

    let wrapper = scope.get("Wrapper").and_then(|t| t.as_user_defined()).unwrap();
    assert_eq!(wrapper.name(), "Wrapper");
    assert_eq!(wrapper.member("V").map(|t| t.type_id()), Some(TypeId::new(64)));

    let value = scope.get("Value").and_then(|t| t.as_user_defined()).unwrap();
    assert_eq!(value.member("N").map(|t| t.type_id()), Some(TypeId::INT));
}

#[test]
fn define_rejects_duplicates_and_unknown_aliases() {
    let mut scope = new_scope();
    let err = scope.define(&type_definition("type Int String")).unwrap_err();
    assert_eq!(err.kind(), &CheckErrorKind::DuplicateType("Int".to_string()));

    let err = scope.define(&type_definition("type Alias Nothing")).unwrap_err();
    assert_eq!(err.to_string(), "Unknown type name 'Nothing' in alias 'Alias'");
    assert!(!scope.contains("Alias"));
}

#[test]
fn types_must_be_defined_before_use() {
    let module = parse_module("type Later:\n  E Early\n\ntype Early Int\n", "test_data").unwrap();
    let mut scope = new_scope();
    assert!(check_module(&module, &mut scope).is_err());
}

#[test]
fn check_source_program() {
    let src = "type Name String\n\ntype Shape:\n  Circle Int\n  Label Name\n\narea :: Shape = Int\n";
    let scope = check_source(src, "shapes.neon").unwrap();
    let shape = scope.get("Shape").and_then(|t| t.as_user_defined()).unwrap();
    assert_eq!(shape.type_id(), TypeId::new(64));
    assert_eq!(shape.member("Label").map(|t| t.type_id()), Some(TypeId::STRING));
    assert_eq!(shape.definition().members.len(), 2);
}

#[test]
fn check_source_errors() {
    match check_source("type Broken:\n  A Int\n  B [Int\n", "broken.neon") {
        Err(Error::ParseError(err)) => {
            assert_eq!(err.kind(), ParseErrorKind::SyntaxError);
            assert_eq!(err.loc(), (3, 3));
        }
        other => panic!("Expected a parse error, got {:?}", other.map(|_| ())),
    }
    match check_source("type Shape:\n  Circle Float\n", "shapes.neon") {
        Err(err @ Error::CheckError(_)) => {
            assert!(err.location().is_none());
            assert_eq!(err.to_string(), "Unknown type name 'Float' in 'Shape': 'Circle Float'");
        }
        other => panic!("Expected a check error, got {:?}", other.map(|_| ())),
    }
}
