/**
 * Apex Lexer Tests
 *
 * Token kinds, byte spans, keyword case-insensitivity, comment and
 * whitespace skipping.
 */

#[cfg(test)]
mod tests {
    use sf2ts::apex::lexer::{Lexer, Token};

    fn lex(text: &str) -> Vec<Token> {
        Lexer::new().tokenize(text)
    }

    fn expect_token(token: &Token, index: usize, end: usize) {
        assert_eq!(token.index, index, "Token index mismatch");
        assert_eq!(token.end, end, "Token end mismatch");
    }

    fn expect_character_token(token: &Token, index: usize, end: usize, character: char) {
        expect_token(token, index, end);
        assert!(
            token.is_character(character),
            "Expected character token '{}', got {:?}",
            character,
            token
        );
    }

    fn expect_identifier_token(token: &Token, index: usize, end: usize, identifier: &str) {
        expect_token(token, index, end);
        assert!(token.is_identifier(), "Expected identifier token");
        assert_eq!(token.str_value, identifier, "Expected identifier value");
    }

    fn expect_keyword_token(token: &Token, index: usize, end: usize, keyword: &str) {
        expect_token(token, index, end);
        assert!(
            token.is_keyword(keyword),
            "Expected keyword token '{}', got {:?}",
            keyword,
            token
        );
    }

    fn expect_number_token(token: &Token, index: usize, end: usize, text: &str) {
        expect_token(token, index, end);
        assert!(token.is_number(), "Expected number token");
        assert_eq!(token.str_value, text, "Expected number text");
    }

    fn expect_string_token(token: &Token, index: usize, end: usize, value: &str) {
        expect_token(token, index, end);
        assert!(token.is_string(), "Expected string token");
        assert_eq!(token.str_value, value, "Expected string value");
    }

    #[test]
    fn tokenizes_a_class_header() {
        let tokens = lex("public class Foo {");
        assert_eq!(tokens.len(), 4);
        expect_keyword_token(&tokens[0], 0, 6, "public");
        expect_keyword_token(&tokens[1], 7, 12, "class");
        expect_identifier_token(&tokens[2], 13, 16, "Foo");
        expect_character_token(&tokens[3], 17, 18, '{');
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let tokens = lex("PUBLIC Static GLOBAL");
        expect_keyword_token(&tokens[0], 0, 6, "public");
        expect_keyword_token(&tokens[1], 7, 13, "static");
        expect_keyword_token(&tokens[2], 14, 20, "global");
        // Original spelling is preserved on the token.
        assert_eq!(tokens[0].str_value, "PUBLIC");
    }

    #[test]
    fn type_names_and_void_are_identifiers() {
        let tokens = lex("void Integer String Boolean");
        for token in &tokens {
            assert!(
                token.is_identifier(),
                "{} must not be a keyword",
                token.str_value
            );
        }
    }

    #[test]
    fn tokenizes_an_annotation_with_arguments() {
        let tokens = lex("@AuraEnabled(Cacheable=true)");
        expect_character_token(&tokens[0], 0, 1, '@');
        expect_identifier_token(&tokens[1], 1, 12, "AuraEnabled");
        expect_character_token(&tokens[2], 12, 13, '(');
        expect_identifier_token(&tokens[3], 13, 22, "Cacheable");
        expect_character_token(&tokens[4], 22, 23, '=');
        expect_identifier_token(&tokens[5], 23, 27, "true");
        expect_character_token(&tokens[6], 27, 28, ')');
    }

    #[test]
    fn tokenizes_numbers() {
        let tokens = lex("40 3.14 2.5e10 1e+5 100L 0.5d");
        expect_number_token(&tokens[0], 0, 2, "40");
        expect_number_token(&tokens[1], 3, 7, "3.14");
        expect_number_token(&tokens[2], 8, 14, "2.5e10");
        expect_number_token(&tokens[3], 15, 19, "1e+5");
        expect_number_token(&tokens[4], 20, 24, "100L");
        expect_number_token(&tokens[5], 25, 29, "0.5d");
    }

    #[test]
    fn integer_followed_by_member_access_is_not_a_fraction() {
        let tokens = lex("1.format()");
        expect_number_token(&tokens[0], 0, 1, "1");
        expect_character_token(&tokens[1], 1, 2, '.');
        expect_identifier_token(&tokens[2], 2, 8, "format");
    }

    #[test]
    fn tokenizes_strings_with_escapes() {
        let tokens = lex("s = 'Hello, World!';");
        expect_string_token(&tokens[2], 4, 19, "Hello, World!");

        let tokens = lex(r"'don\'t'");
        expect_string_token(&tokens[0], 0, 8, r"don\'t");
    }

    #[test]
    fn an_unterminated_string_consumes_the_rest_of_the_input() {
        let tokens = lex("'oops");
        assert_eq!(tokens.len(), 1);
        expect_string_token(&tokens[0], 0, 5, "oops");
    }

    #[test]
    fn skips_line_and_block_comments() {
        let tokens = lex("class // trailing words\n/* a\n block */ Foo");
        assert_eq!(tokens.len(), 2);
        expect_keyword_token(&tokens[0], 0, 5, "class");
        assert_eq!(tokens[1].str_value, "Foo");
    }

    #[test]
    fn comment_at_end_of_input_yields_no_token() {
        assert!(lex("// nothing else").is_empty());
        assert!(lex("/* unterminated").is_empty());
    }

    #[test]
    fn unexpected_characters_become_character_tokens() {
        let tokens = lex("a # b");
        expect_identifier_token(&tokens[0], 0, 1, "a");
        expect_character_token(&tokens[1], 2, 3, '#');
        expect_identifier_token(&tokens[2], 4, 5, "b");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(lex("").is_empty());
        assert!(lex("   \n\t ").is_empty());
    }
}
