//! Integration tests for the tokenizer and declaration parser.

use plume_style::DeclarationError;
use plume_style::parser::{ComponentValue, DeclarationParser};
use plume_style::tokenizer::{CssToken, CssTokenizer};

#[test]
fn test_tokenize_declaration_list() {
    let tokens = CssTokenizer::tokenize("color:red;margin:0 4px");
    assert_eq!(
        tokens,
        vec![
            CssToken::ident("color"),
            CssToken::Colon,
            CssToken::ident("red"),
            CssToken::Semicolon,
            CssToken::ident("margin"),
            CssToken::Colon,
            CssToken::Number(0.0),
            CssToken::Whitespace,
            CssToken::dimension(4.0, "px"),
            CssToken::Eof,
        ]
    );
}

#[test]
fn test_run_and_into_tokens_match_tokenize() {
    let text = "background: url(a.png) no-repeat, linear-gradient(45deg, red, blue)";
    let mut tokenizer = CssTokenizer::new(text);
    tokenizer.run();
    assert_eq!(tokenizer.into_tokens(), CssTokenizer::tokenize(text));
}

#[test]
fn test_function_tokens() {
    let tokens = CssTokenizer::tokenize("rgba(1,2,3,0.5)");
    assert_eq!(tokens[0], CssToken::Function("rgba".to_string()));
    assert_eq!(tokens[1], CssToken::Number(1.0));
    assert_eq!(tokens[2], CssToken::Comma);
    assert_eq!(tokens.last(), Some(&CssToken::Eof));
}

#[test]
fn test_parse_several_declarations() {
    let decls = DeclarationParser::parse("color: red; margin: 0 4px !important;; width: 10px");
    let names: Vec<&str> = decls
        .iter()
        .map(|d| d.as_ref().map_or("", |d| d.name.as_str()))
        .collect();
    assert_eq!(names, vec!["color", "margin", "width"]);
    assert!(decls[1].as_ref().is_ok_and(|d| d.important));
    assert!(decls[2].as_ref().is_ok_and(|d| !d.important));
}

#[test]
fn test_parser_recovers_after_bad_item() {
    let decls = DeclarationParser::parse("4px: red; color: blue");
    assert_eq!(decls.len(), 2);
    assert!(matches!(decls[0], Err(DeclarationError::UnexpectedToken(_))));
    assert_eq!(decls[1].as_ref().map(|d| d.name.as_str()), Ok("color"));
}

#[test]
fn test_missing_colon() {
    let decls = DeclarationParser::parse("margin 4px");
    assert_eq!(decls, vec![Err(DeclarationError::MissingColon("margin".to_string()))]);
}

#[test]
fn test_gradient_is_one_function_value() {
    let decls = DeclarationParser::parse("background-image: linear-gradient(to right, red 10%, blue)");
    let decl = decls[0].as_ref().unwrap();
    assert_eq!(decl.value.len(), 1);
    assert!(matches!(
        &decl.value[0],
        ComponentValue::Function { name, .. } if name == "linear-gradient"
    ));
}

#[test]
fn test_parse_declaration_list_from_tokens() {
    let mut parser = DeclarationParser::new(CssTokenizer::tokenize("opacity: 0.5"));
    let decls = parser.parse_declaration_list();
    assert_eq!(decls.len(), 1);
    assert_eq!(
        decls[0].as_ref().map(|d| d.value.clone()),
        Ok(vec![ComponentValue::Token(CssToken::Number(0.5))])
    );
}
