#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the shape of the trees each rule builds and on where the first error is
/// reported.
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!("program p; begin {body} end.")
    }

    /// Return the statement list of a parsed program.
    fn statements(source: &str) -> SyntaxNode {
        let tree = parse(source).unwrap();
        tree.children()[2].children()[0].clone()
    }

    fn labels(node: &SyntaxNode) -> Vec<&str> {
        node.children().iter().map(|child| child.label()).collect()
    }

    // ---- Program ----

    #[test]
    fn test_program_shape() {
        let tree = parse("program demo; begin end.").unwrap();
        assert_eq!(tree.label(), "Program");
        assert_eq!(labels(&tree), vec!["Keyword: program", "Program name: demo", "Block"]);
        assert_eq!(labels(&tree.children()[2]), vec!["Statement list"]);
        assert!(tree.children()[2].children()[0].is_leaf());
    }

    #[test]
    fn test_missing_program_keyword() {
        let err = parse("begin end.").unwrap_err();
        assert_eq!(err.kind, MessageId::ProgramKeyword);
        assert_eq!(err.found, "begin");
        assert_eq!((err.line, err.col), (1, 1));
    }

    #[test]
    fn test_missing_program_name() {
        let err = parse("program ; begin end.").unwrap_err();
        assert_eq!(err.kind, MessageId::ProgramName);
        assert_eq!(err.found, ";");
    }

    #[test]
    fn test_missing_program_dot_reports_end_of_input() {
        let err = parse("program p; begin end").unwrap_err();
        assert_eq!(err.kind, MessageId::ProgramDot);
        assert_eq!(err.found, "");
        assert_eq!((err.line, err.col), (1, 21));
    }

    #[test]
    fn test_trailing_content_after_dot() {
        let err = parse("program p; begin end. x").unwrap_err();
        assert_eq!(err.kind, MessageId::TrailingContent);
        assert_eq!(err.found, "x");
    }

    // ---- Statements ----

    #[test]
    fn test_trailing_semicolon_before_end() {
        let list = statements(&wrap("x := 1;"));
        assert_eq!(labels(&list), vec!["Assignment"]);
    }

    #[test]
    fn test_statement_sequence() {
        let list = statements(&wrap("x := 1; y := 2; break"));
        assert_eq!(labels(&list), vec!["Assignment", "Assignment", "Break statement"]);
        assert_eq!(labels(&list.children()[1]), vec!["Target: y", "Number: 2"]);
    }

    #[test]
    fn test_missing_semicolon_between_statements() {
        let err = parse(&wrap("x := 1 y := 2")).unwrap_err();
        assert_eq!(err.kind, MessageId::Expected);
        assert_eq!(err.expected.as_deref(), Some("end"));
        assert_eq!(err.found, "y");
    }

    #[test]
    fn test_nested_block_is_compound_statement() {
        let list = statements(&wrap("begin x := 1 end"));
        assert_eq!(labels(&list), vec!["Compound statement"]);
        assert_eq!(labels(&list.children()[0]), vec!["Block"]);
    }

    #[test]
    fn test_if_with_else_and_block_body() {
        let list = statements(&wrap("if a < 1 then begin x := 1 end else x := 2"));
        let stmt = &list.children()[0];
        assert_eq!(stmt.label(), "If statement");
        assert_eq!(labels(stmt), vec!["Condition", "Block", "Assignment"]);
    }

    #[test]
    fn test_if_without_then() {
        let err = parse(&wrap("if a < 1 x := 1")).unwrap_err();
        assert_eq!(err.kind, MessageId::Expected);
        assert_eq!(err.message, "expected 'then'");
        assert_eq!(err.found, "x");
    }

    #[test]
    fn test_while_with_break() {
        let list = statements(&wrap("while x > 0 do begin x := x - 1; break end"));
        let stmt = &list.children()[0];
        assert_eq!(labels(stmt), vec!["Condition", "Block"]);
        let body = &stmt.children()[1].children()[0];
        assert_eq!(labels(body), vec!["Assignment", "Break statement"]);
    }

    #[test]
    fn test_statement_starting_with_number() {
        let err = parse(&wrap("1 := 2")).unwrap_err();
        assert_eq!(err.kind, MessageId::StatementStartsWithNumber);
        assert_eq!(err.found, "1");
        assert_eq!((err.line, err.col), (1, 18));
    }

    #[test]
    fn test_statement_starting_with_other_token() {
        let err = parse(&wrap("then")).unwrap_err();
        assert_eq!(err.kind, MessageId::ExpectedStatement);
    }

    #[test]
    fn test_assignment_needs_assign_operator() {
        let err = parse(&wrap("x = 1")).unwrap_err();
        assert_eq!(err.expected.as_deref(), Some(":="));
        assert_eq!(err.found, "=");
    }

    #[test]
    fn test_first_error_wins() {
        let err = parse(&wrap("x := ; y := ")).unwrap_err();
        assert_eq!(err.kind, MessageId::ExpectedFactor);
        assert_eq!(err.found, ";");
        assert_eq!((err.line, err.col), (1, 23));
    }

    // ---- Expressions ----

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = parse_expression("1 - 2 - 3").unwrap();
        assert_eq!(tree.dump(), "-\n  -\n    Number: 1\n    Number: 2\n  Number: 3\n");
    }

    #[test]
    fn test_division_is_left_associative() {
        let tree = parse_expression("8 / 2 / 2").unwrap();
        assert_eq!(tree.dump(), "/\n  /\n    Number: 8\n    Number: 2\n  Number: 2\n");
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = parse_expression("2 + 3 * 4").unwrap();
        assert_eq!(tree.label(), "+");
        assert_eq!(labels(&tree), vec!["Number: 2", "*"]);
    }

    #[test]
    fn test_parentheses_return_inner_expression() {
        let tree = parse_expression("(1 + 2) * x").unwrap();
        assert_eq!(tree.label(), "*");
        assert_eq!(labels(&tree), vec!["+", "Variable: x"]);
    }

    #[test]
    fn test_mod_is_multiplicative() {
        let tree = parse_expression("a + b mod 2").unwrap();
        assert_eq!(labels(&tree), vec!["Variable: a", "mod"]);
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let err = parse_expression("(1 + 2").unwrap_err();
        assert_eq!(err.expected.as_deref(), Some(")"));
        assert_eq!(err.found, "");
    }

    #[test]
    fn test_unknown_character_is_not_a_factor() {
        let err = parse_expression("1 + @").unwrap_err();
        assert_eq!(err.kind, MessageId::ExpectedFactor);
        assert_eq!(err.found, "@");
    }

    // ---- Conditions ----

    #[test]
    fn test_condition_shape() {
        let tree = parse_condition("x <= 10").unwrap();
        assert_eq!(tree.label(), "Condition");
        assert_eq!(labels(&tree), vec!["Variable: x", "Relop: <=", "Number: 10"]);
    }

    #[test]
    fn test_bang_equal_is_relational() {
        let tree = parse_condition("a != b").unwrap();
        assert_eq!(tree.children()[1].label(), "Relop: !=");
    }

    #[test]
    fn test_parenthesized_condition() {
        let tree = parse_condition("(a + 1 <> b)").unwrap();
        assert_eq!(labels(&tree), vec!["+", "Relop: <>", "Variable: b"]);
    }

    #[test]
    fn test_parenthesized_condition_without_relop_reports_at_paren() {
        let err = parse(&wrap("if (a + 1) then x := 1")).unwrap_err();
        assert_eq!(err.kind, MessageId::ParenConditionWithoutRelop);
        assert_eq!(err.found, ")");
        assert_eq!((err.line, err.col), (1, 27));
    }

    #[test]
    fn test_parenthesized_condition_with_relop_in_if() {
        let list = statements(&wrap("if (a < 1) then a := 1"));
        let stmt = &list.children()[0];
        assert_eq!(labels(stmt), vec!["Condition", "Assignment"]);
    }

    #[test]
    fn test_malformed_parenthesized_condition() {
        let err = parse_condition("(a b)").unwrap_err();
        assert_eq!(err.kind, MessageId::MalformedParenCondition);
        assert_eq!(err.found, "b");
    }

    #[test]
    fn test_missing_relop() {
        let err = parse_condition("a + 1").unwrap_err();
        assert_eq!(err.kind, MessageId::MissingRelop);
        assert_eq!(err.found, "");
    }

    #[test]
    fn test_not_wraps_condition() {
        let tree = parse_condition("not a = b").unwrap();
        assert_eq!(tree.label(), "Not: not");
        assert_eq!(labels(&tree), vec!["Condition"]);
    }

    #[test]
    fn test_logical_connectives_nest_to_the_right() {
        let tree = parse_condition("a < 1 and b > 2 or c = 3").unwrap();
        assert_eq!(tree.label(), "Logical: and");
        assert_eq!(labels(&tree), vec!["Condition", "Logical: or"]);
        assert_eq!(labels(&tree.children()[1]), vec!["Condition", "Condition"]);
    }

    #[test]
    fn test_parenthesized_conditions_with_and() {
        let tree = parse_condition("(a < 1) and (b > 2)").unwrap();
        assert_eq!(tree.label(), "Logical: and");
        assert_eq!(labels(&tree), vec!["Condition", "Condition"]);
    }

    // ---- Locale ----

    #[test]
    fn test_chinese_labels() {
        let tree = parse_with_locale("program p; begin x := 1 end.", Locale::Zh).unwrap();
        assert_eq!(tree.label(), "程序");
        assert_eq!(labels(&tree), vec!["关键字: program", "程序名: p", "块"]);
    }

    #[test]
    fn test_chinese_diagnostic() {
        let err = parse_with_locale("program p begin end.", Locale::Zh).unwrap_err();
        assert_eq!(err.kind, MessageId::ProgramSemicolon);
        assert_eq!(err.message, "程序名后必须有分号");
        assert_eq!(err.report(Locale::Zh), "错误：程序名后必须有分号（在行 1, 列 11，遇到 'begin'）");
    }

    #[test]
    fn test_chinese_end_and_condition_diagnostics() {
        let err = parse_with_locale("program p; begin x := 1 end", Locale::Zh).unwrap_err();
        assert_eq!(err.kind, MessageId::ProgramDot);
        let err = parse_with_locale("program p; begin if a then x := 1 end.", Locale::Zh).unwrap_err();
        assert_eq!(err.kind, MessageId::MissingRelop);
        assert_eq!(err.message, "条件表达式中缺少关系运算符");
    }
}
