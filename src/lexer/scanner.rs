//! 词法扫描器
//!
//! 将源代码字符串转换为 Token 流

use super::diagnostics::{Diagnostics, LexError, LexErrorKind, Reporter};
use super::token::{Literal, Span, Token, TokenKind};

/// 扫描整段源码
///
/// 总是返回以唯一的 `Eof` 结尾的 token 序列。词法错误交给 `reporter`，
/// 扫描本身不会中止，出错片段不产生 token。
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// 扫描并收集错误
pub fn scan_collect(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    (tokens, diagnostics)
}

/// 单次扫描的上下文，扫描结束即丢弃
struct Scanner<'src, 'r> {
    /// 源代码
    source: &'src str,
    /// 错误上报
    reporter: &'r mut dyn Reporter,
    /// 已产生的 token
    tokens: Vec<Token>,
    /// 当前位置（字节偏移）
    current: usize,
    /// 当前 token 起始位置（字节偏移）
    start: usize,
    /// 当前行号
    line: usize,
    /// 当前列号
    column: usize,
    /// token 起始行号
    start_line: usize,
    /// token 起始列号
    start_column: usize,
}

impl<'src, 'r> Scanner<'src, 'r> {
    /// 创建新的扫描器
    fn new(source: &'src str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            source,
            reporter,
            tokens: Vec::new(),
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// 扫描所有 token
    fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            None,
            Span::new(end, end, self.line, self.column),
        ));
        self.tokens
    }

    /// 扫描单个 token
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // 分隔符
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // ! 和 !=
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }

            // = 和 ==
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }

            // < 和 <=
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }

            // > 和 >=
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            // / 和单行注释
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // 空白和换行（行号在 advance 中维护）
            ' ' | '\r' | '\t' | '\n' => {}

            // 字符串
            '"' => self.scan_string(),

            // 数字
            '0'..='9' => self.scan_number(),

            // 标识符或关键字
            c if Self::is_identifier_start(c) => self.scan_identifier(),

            // 未知字符：报告后跳过，继续扫描
            _ => self.error(LexErrorKind::UnexpectedCharacter(c), self.line),
        }
    }

    /// 跳过单行注释，不消费换行
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// 扫描字符串（双引号，不处理转义）
    fn scan_string(&mut self) {
        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexErrorKind::UnterminatedString, self.start_line);
            return;
        }

        // 消费闭合的引号
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value.to_string()));
    }

    /// 扫描数字，小数点两侧都必须是数字
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // 消费 '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // 词素只含数字和至多一个小数点，解析总会成功
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    /// 扫描标识符或关键字
    fn scan_identifier(&mut self) {
        while Self::is_identifier_continue(self.peek()) {
            self.advance();
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// 检查字符是否可以作为标识符开头
    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    /// 检查字符是否可以作为标识符的后续字符
    fn is_identifier_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回，同时维护行列号
    fn advance(&mut self) -> char {
        let c = self.source[self.current..].chars().next().unwrap_or('\0');
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// 查看当前字符，末尾返回 '\0'
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// 查看下一个字符
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// 如果当前字符匹配，则前进
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// 当前词素
    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// 当前词素的位置
    fn span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    /// 添加不带字面量的 token
    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme().to_string(), None, self.span());
        self.tokens.push(token);
    }

    /// 添加带字面量的 token
    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let token = Token::new(kind, self.lexeme().to_string(), Some(literal), self.span());
        self.tokens.push(token);
    }

    /// 上报词法错误
    fn error(&mut self, kind: LexErrorKind, line: usize) {
        self.reporter.report(LexError::new(kind, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = scan_collect(source);
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source() {
        let (tokens, diagnostics) = scan_collect("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].lexeme, "");
        assert_eq!(tokens[0].line(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
                Star, Slash, Eof
            ]
        );
    }

    #[test]
    fn test_two_char_tokens() {
        assert_eq!(
            kinds("! != = == < <= > >="),
            vec![Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual, Eof]
        );
    }

    #[test]
    fn test_maximal_munch() {
        let (tokens, _) = scan_collect("a<=b");
        assert_eq!(tokens[1].kind, LessEqual);
        assert_eq!(tokens[1].lexeme, "<=");

        // 第三个 '=' 单独成为 Equal
        assert_eq!(kinds("!==="), vec![BangEqual, EqualEqual, Eof]);
        assert_eq!(kinds("<=="), vec![LessEqual, Equal, Eof]);
        assert_eq!(kinds("< ="), vec![Less, Equal, Eof]);
    }

    #[test]
    fn test_line_comment() {
        let (tokens, _) = scan_collect("// nothing here\n+");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, Plus);
        assert_eq!(tokens[0].line(), 2);

        // 注释直到输入结束
        assert_eq!(kinds("1 // trailing"), vec![Number, Eof]);
        assert_eq!(kinds("a / b"), vec![Identifier, Slash, Identifier, Eof]);
    }

    #[test]
    fn test_comment_does_not_swallow_newline() {
        let (tokens, _) = scan_collect("// one\n// two\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_whitespace_and_lines() {
        let (tokens, _) = scan_collect(" \t\r\n(\n\n)");
        assert_eq!(tokens[0].kind, LeftParen);
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens[1].kind, RightParen);
        assert_eq!(tokens[1].line(), 4);
        assert_eq!(tokens[2].line(), 4);
    }

    #[test]
    fn test_numbers() {
        let (tokens, _) = scan_collect("42 3.14 0.5 007");
        let values: Vec<_> = tokens
            .iter()
            .filter_map(|t| match &t.literal {
                Some(Literal::Number(n)) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(values, vec![42.0, 3.14, 0.5, 7.0]);
        assert_eq!(tokens[3].lexeme, "007");
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let (tokens, _) = scan_collect("123.foo");
        assert_eq!(tokens[0].kind, Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].kind, Dot);
        assert_eq!(tokens[2].kind, Identifier);

        assert_eq!(kinds("123."), vec![Number, Dot, Eof]);
        assert_eq!(kinds(".5"), vec![Dot, Number, Eof]);
        assert_eq!(kinds("1.2.3"), vec![Number, Dot, Number, Eof]);
    }

    #[test]
    fn test_string_literal() {
        let (tokens, diagnostics) = scan_collect("\"hello world\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].kind, String);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("hello world".to_string())));
        assert_eq!(tokens[1].kind, Eof);
    }

    #[test]
    fn test_string_without_escape_processing() {
        let (tokens, _) = scan_collect(r#""a\nb""#);
        assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb".to_string())));

        let (tokens, _) = scan_collect("\"\"");
        assert_eq!(tokens[0].literal, Some(Literal::String(std::string::String::new())));
    }

    #[test]
    fn test_multiline_string() {
        let (tokens, _) = scan_collect("\"one\ntwo\" x");
        assert_eq!(tokens[0].kind, String);
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_string())));
        assert_eq!(tokens[1].kind, Identifier);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = scan_collect("+\n\"abc\ndef");
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Plus, Eof]);
        assert_eq!(diagnostics.len(), 1);
        let error = &diagnostics.errors()[0];
        assert_eq!(error.kind, LexErrorKind::UnterminatedString);
        assert_eq!(error.line, 2);
        assert_eq!(tokens[1].line(), 3);
    }

    #[test]
    fn test_identifier_and_keywords() {
        let (tokens, _) = scan_collect("var foo = true;");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![Var, Identifier, Equal, True, Semicolon, Eof]
        );
        assert_eq!(tokens[1].lexeme, "foo");
        assert!(tokens.iter().all(|t| t.literal.is_none()));
    }

    #[test]
    fn test_keywords_are_exact() {
        assert_eq!(
            kinds("class classic Class _class"),
            vec![Class, Identifier, Identifier, Identifier, Eof]
        );
        assert_eq!(kinds("start"), vec![Identifier, Eof]);
        assert_eq!(kinds("a1_b2 _"), vec![Identifier, Identifier, Eof]);
    }

    #[test]
    fn test_all_keywords() {
        assert_eq!(
            kinds("and class else false fun for if nil or print return super this true var while"),
            vec![
                And, Class, Else, False, Fun, For, If, Nil, Or, Print, Return, Super, This, True,
                Var, While, Eof
            ]
        );
    }

    #[test]
    fn test_unexpected_characters() {
        let (tokens, diagnostics) = scan_collect("@ (\n# $");
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![LeftParen, Eof]);
        let errors: Vec<_> = diagnostics.iter().map(|e| (e.kind, e.line)).collect();
        assert_eq!(
            errors,
            vec![
                (LexErrorKind::UnexpectedCharacter('@'), 1),
                (LexErrorKind::UnexpectedCharacter('#'), 2),
                (LexErrorKind::UnexpectedCharacter('$'), 2),
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_not_identifier() {
        let (tokens, diagnostics) = scan_collect("é1");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.errors()[0].kind, LexErrorKind::UnexpectedCharacter('é'));
        assert_eq!(tokens[0].kind, Number);
        assert_eq!(tokens[0].span, Span::new(2, 3, 1, 2));
    }

    #[test]
    fn test_end_to_end_statement() {
        let source = "var x = 12.5; // set x\n";
        let (tokens, diagnostics) = scan_collect(source);
        assert!(diagnostics.is_empty());
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![Var, Identifier, Equal, Number, Semicolon, Eof]
        );
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[3].literal, Some(Literal::Number(12.5)));
        assert!(tokens[..5].iter().all(|t| t.line() == 1));
        assert_eq!(tokens[5].line(), 2);
    }

    #[test]
    fn test_spans_and_columns() {
        let (tokens, _) = scan_collect("a\n  bc");
        assert_eq!(tokens[0].span, Span::new(0, 1, 1, 1));
        assert_eq!(tokens[1].span, Span::new(4, 6, 2, 3));
        assert_eq!(tokens[2].span, Span::new(6, 6, 2, 5));
    }

    #[test]
    fn test_lexemes_reconstruct_source() {
        let source = "fun add(a, b) {\n  return a + b; // sum\n}\nprint add(1, 2.5) >= \"x\";\n";
        let (tokens, diagnostics) = scan_collect(source);
        assert!(diagnostics.is_empty());

        let mut rebuilt = std::string::String::new();
        let mut last = 0;
        for token in &tokens {
            assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
            let gap = &source[last..token.span.start];
            // 间隙里只能有空白和注释
            for line in gap.split('\n') {
                let code = line.split("//").next().unwrap_or("");
                assert!(code.trim().is_empty(), "unexpected trivia {:?}", gap);
            }
            rebuilt.push_str(gap);
            rebuilt.push_str(&token.lexeme);
            last = token.span.end;
        }
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_custom_reporter() {
        let mut errors: Vec<LexError> = Vec::new();
        let tokens = scan("\"open", &mut errors);
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors, vec![LexError::new(LexErrorKind::UnterminatedString, 1)]);
    }
}
