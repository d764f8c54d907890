#[cfg(test)]
/// Parser unit tests.
///
/// These cover the fail-fast header grammar and the lenient recovery behavior of the
/// declaration loop.
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> InterfaceFile {
        match parse(source) {
            Ok(file) => file,
            Err(err) => panic!("expected {source:?} to parse, got: {err}"),
        }
    }

    /// Wrap declarations in a minimal header.
    fn decls(body: &str) -> InterfaceFile {
        parse_ok(&format!("package demo interface Foo {{ {body} }}"))
    }

    fn param(ty: &str, name: &str) -> Param {
        Param {
            ty: ty.to_string(),
            name: name.to_string(),
            ..Param::default()
        }
    }

    // ========================================================================
    // Header
    // ========================================================================

    #[test]
    fn test_minimal_file() {
        let file = parse_ok("package demo interface Foo { }");
        assert_eq!(file.package.name, "demo");
        assert!(file.package.imports.is_empty());
        assert_eq!(file.interface.name, "Foo");
        assert_eq!(file.interface.description, None);
        assert_eq!((file.interface.major_version, file.interface.minor_version), (0, 0));
        assert_eq!(file.declaration_count(), 0);
    }

    #[test]
    fn test_end_to_end_example() {
        let source = "package demo <**iface doc**> interface Foo { version { major 1 minor 2 } \
                      attribute Int32 bar method baz { in { Int32 x } out { Boolean ok } } }";
        let file = parse_ok(source);

        assert_eq!(file.package.name, "demo");
        assert_eq!(file.interface.name, "Foo");
        assert_eq!(file.interface.description.as_deref(), Some("iface doc"));
        assert_eq!(file.interface.major_version, 1);
        assert_eq!(file.interface.minor_version, 2);

        assert_eq!(
            file.attributes,
            vec![Attribute {
                description: String::new(),
                ty: "Int32".to_string(),
                name: "bar".to_string(),
                is_array: false,
            }]
        );
        assert_eq!(
            file.methods,
            vec![Method {
                description: String::new(),
                name: "baz".to_string(),
                fire_and_forget: false,
                in_params: vec![param("Int32", "x")],
                out_params: vec![param("Boolean", "ok")],
            }]
        );
    }

    #[test]
    fn test_missing_package_names_found_token() {
        let err = parse("interface Foo { }").unwrap_err();
        match err {
            ParseError::Syntax { expected, found, literal, .. } => {
                assert_eq!(expected, "`package`");
                assert_eq!(found, TokenKind::Keyword(KeywordId::Interface));
                assert_eq!(literal, "interface");
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_package_name() {
        let err = parse("package { }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax { expected: "package name", found: TokenKind::Punctuation(PunctuationId::LBrace), .. }
        ));
    }

    #[test]
    fn test_empty_input_fails_at_end_of_input() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { found: TokenKind::Eof, .. }));
    }

    #[test]
    fn test_missing_interface_keyword() {
        let err = parse("package demo struct S { }").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { expected: "`interface`", .. }));
        assert_eq!(err.to_string(), "expected `interface`, found keyword `struct`");
    }

    #[test]
    fn test_description_without_interface_fails() {
        let err = parse("package demo <** doc **> Foo { }").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { found: TokenKind::Ident, .. }));
    }

    #[test]
    fn test_interface_requires_name_and_brace() {
        assert!(matches!(
            parse("package demo interface { }"),
            Err(ParseError::Syntax { expected: "interface name", .. })
        ));
        assert!(matches!(
            parse("package demo interface Foo method m"),
            Err(ParseError::Syntax { found: TokenKind::Keyword(KeywordId::Method), .. })
        ));
    }

    #[test]
    fn test_version_entries_are_optional_and_unordered() {
        let file = parse_ok("package demo interface Foo { version { minor 7 major 3 } }");
        assert_eq!((file.interface.major_version, file.interface.minor_version), (3, 7));

        let file = parse_ok("package demo interface Foo { version { minor 4 } }");
        assert_eq!((file.interface.major_version, file.interface.minor_version), (0, 4));

        let file = parse_ok("package demo interface Foo { version { } }");
        assert_eq!((file.interface.major_version, file.interface.minor_version), (0, 0));
    }

    #[test]
    fn test_version_non_integer_fails() {
        let err = parse("package demo interface Foo { version { major x } }").unwrap_err();
        match err {
            ParseError::NumberFormat { field, literal, .. } => {
                assert_eq!(field, "major");
                assert_eq!(literal, "x");
            }
            other => panic!("expected a number format error, got {other:?}"),
        }
    }

    #[test]
    fn test_version_decimal_is_number_format() {
        for (source, expected) in [
            ("package demo interface Foo { version { major 1.5 } }", "1.5"),
            ("package demo interface Foo { version { minor 2a } }", "2a"),
        ] {
            match parse(source).unwrap_err() {
                ParseError::NumberFormat { literal, .. } => assert_eq!(literal, expected),
                other => panic!("expected a number format error for {source:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_version_unknown_entry_fails() {
        let err = parse("package demo interface Foo { version { patch 1 } }").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { found: TokenKind::Ident, .. }));
    }

    #[test]
    fn test_unterminated_description_fails() {
        let err = parse("package demo interface Foo { <** never closed").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedDescription { .. }));
    }

    // ========================================================================
    // Imports
    // ========================================================================

    #[test]
    fn test_wildcard_import_with_quoted_source() {
        let file = parse_ok(r#"package demo import a.b.* from "x" interface Foo { }"#);
        assert_eq!(
            file.package.imports,
            vec![Import {
                path: "a.b.*".to_string(),
                from: "x".to_string(),
            }]
        );
        assert!(file.package.imports[0].is_wildcard());
    }

    #[test]
    fn test_plain_import() {
        let file = parse_ok("package demo import a.b interface Foo { }");
        assert_eq!(file.package.imports[0].path, "a.b");
        assert_eq!(file.package.imports[0].from, "");
        assert!(!file.package.imports[0].is_wildcard());
    }

    #[test]
    fn test_multiple_imports_keep_order() {
        let source = "package demo import a.X from common import b.* from 'types.fidl' interface Foo { }";
        let file = parse_ok(source);
        let imports: Vec<_> = file.package.imports.iter().map(|i| (i.path.as_str(), i.from.as_str())).collect();
        assert_eq!(imports, vec![("a.X", "common"), ("b.*", "types.fidl")]);
    }

    #[test]
    fn test_quoted_source_keeps_raw_text() {
        let file = parse_ok(r#"package demo import a.* from "../common/my types.fidl" interface Foo { }"#);
        assert_eq!(file.package.imports[0].from, "../common/my types.fidl");
    }

    #[test]
    fn test_quoted_source_without_from() {
        let file = parse_ok(r#"package demo import model "types.fidl" interface Foo { }"#);
        assert_eq!(file.package.imports[0].path, "model");
        assert_eq!(file.package.imports[0].from, "types.fidl");
    }

    #[test]
    fn test_import_requires_path() {
        let err = parse("package demo import * interface Foo { }").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { expected: "import path", .. }));
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    #[test]
    fn test_attribute_array_and_description() {
        let file = decls("<** all of them **> attribute UInt8 [ ] values attribute String name");
        assert_eq!(file.attributes.len(), 2);
        assert_eq!(file.attributes[0].description, " all of them ");
        assert_eq!(file.attributes[0].ty, "UInt8");
        assert!(file.attributes[0].is_array);
        assert_eq!(file.attributes[0].name, "values");
        assert!(!file.attributes[1].is_array);
        assert_eq!(file.attributes[1].description, "");
    }

    #[test]
    fn test_method_empty_groups_are_present_but_empty() {
        let file = decls("method ping { in { } out { } }");
        assert_eq!(file.methods.len(), 1);
        assert!(file.methods[0].in_params.is_empty());
        assert!(file.methods[0].out_params.is_empty());
    }

    #[test]
    fn test_method_without_body() {
        let file = decls("method ping method pong");
        let names: Vec<_> = file.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ping", "pong"]);
    }

    #[test]
    fn test_fire_and_forget_method() {
        let file = decls("method notify fireAndForget { in { String text } }");
        assert!(file.methods[0].fire_and_forget);
        assert_eq!(file.methods[0].in_params, vec![param("String", "text")]);
    }

    #[test]
    fn test_params_array_change_notification_and_description() {
        let file = decls("method m { out { <** the ids **> UInt32[] ^ids Boolean done } }");
        let out = &file.methods[0].out_params;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].description, " the ids ");
        assert!(out[0].is_array);
        assert!(out[0].change_notification);
        assert_eq!(out[0].name, "ids");
        assert_eq!(out[1], param("Boolean", "done"));
    }

    #[test]
    fn test_array_marker_ignores_whitespace() {
        let a = decls("attribute Int32[] a");
        let b = decls("attribute Int32 [\n ] a");
        assert_eq!(a.attributes, b.attributes);
        assert!(a.attributes[0].is_array);
    }

    #[test]
    fn test_keyword_spelled_param_names() {
        let file = decls("method m { in { UInt32 version String out } }");
        assert_eq!(file.methods[0].in_params, vec![param("UInt32", "version"), param("String", "out")]);
    }

    #[test]
    fn test_broadcast_selective_drops_in_params() {
        let file = decls("broadcast changed selective { in { Int32 ignored } out { String value } }");
        assert_eq!(
            file.broadcasts,
            vec![Broadcast {
                description: String::new(),
                name: "changed".to_string(),
                selective: true,
                out_params: vec![param("String", "value")],
            }]
        );
    }

    #[test]
    fn test_struct_fields() {
        let file = decls("struct Point { Int32 x Int32 y Double[] weights }");
        assert_eq!(file.structs.len(), 1);
        let s = &file.structs[0];
        assert_eq!(s.name, "Point");
        assert_eq!(s.fields.len(), 3);
        assert_eq!(s.fields[2].name, "weights");
        assert!(s.fields[2].is_array);
    }

    #[test]
    fn test_typedef_and_array() {
        let file = decls("typedef Handle is UInt64 array Handles of Handle");
        assert_eq!(file.typedefs[0].name, "Handle");
        assert_eq!(file.typedefs[0].aliased_type, "UInt64");
        assert_eq!(file.arraydefs[0].name, "Handles");
        assert_eq!(file.arraydefs[0].element_type, "Handle");
    }

    #[test]
    fn test_wrong_linking_word_is_skipped() {
        let file = decls("typedef Handle as UInt64");
        assert_eq!(file.typedefs[0].aliased_type, "UInt64");
    }

    #[test]
    fn test_declarations_keep_source_order() {
        let file = decls("method a method b attribute Int32 x method c");
        let names: Vec<_> = file.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(file.attributes[0].name, "x");
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    #[test]
    fn test_stray_identifier_between_declarations() {
        let file = decls("attribute Int32 a stray attribute Int32 b");
        let names: Vec<_> = file.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_illegal_characters_are_skipped() {
        let file = decls("attribute Int32 a = ; method m");
        assert_eq!(file.attributes.len(), 1);
        assert_eq!(file.methods.len(), 1);
    }

    #[test]
    fn test_missing_name_leaves_it_empty() {
        let file = decls("method { in { Int32 x } }");
        assert_eq!(file.methods[0].name, "");
        assert_eq!(file.methods[0].in_params, vec![param("Int32", "x")]);
    }

    #[test]
    fn test_param_missing_name_is_kept() {
        let file = decls("struct S { Int32 }");
        assert_eq!(file.structs[0].fields, vec![param("Int32", "")]);
    }

    #[test]
    fn test_unclosed_list_ends_at_next_declaration() {
        let file = decls("method m { in { Int32 x method n");
        let names: Vec<_> = file.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["m", "n"]);
        assert_eq!(file.methods[0].in_params, vec![param("Int32", "x")]);
    }

    #[test]
    fn test_garbage_inside_list_is_dropped() {
        let file = decls("struct S { Int32 a , = Int32 b }");
        let names: Vec<_> = file.structs[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_unclosed_file_still_parses() {
        let file = parse_ok("package demo interface Foo { method m { in { Int32 x");
        assert_eq!(file.methods[0].in_params, vec![param("Int32", "x")]);
    }

    #[test]
    fn test_consecutive_descriptions_use_the_last() {
        let file = decls("<** first **> <** second **> method m");
        assert_eq!(file.methods[0].description, " second ");
    }

    #[test]
    fn test_parse_reader() {
        let source = "package demo interface Foo { method m }";
        let file = parse_reader(source.as_bytes()).unwrap();
        assert_eq!(file.methods[0].name, "m");
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xff, 0xfe];
        assert!(matches!(parse_reader(bytes), Err(ParseError::Io(_))));
    }
}
