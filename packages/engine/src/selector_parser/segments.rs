//! Dot, descendant and bracket segments

use crate::ast::{Query, Segment, Selector};
use crate::compiler::QueryParser;
use crate::error::{ParseResult, unexpected};
use crate::tokens::TokenKind;

impl QueryParser<'_> {
    /// Parse the segments following a consumed `$` or `@`
    ///
    /// Blank space may separate segments but is left in place when no
    /// segment follows it.
    pub(crate) fn parse_segments(&mut self, root: bool) -> ParseResult<Query> {
        let mut segments = Vec::new();

        loop {
            if self.peek_kind() == TokenKind::BlankSpace {
                let after = self.peek_nth(1);
                if !(after.is_punct('.') || after.is_punct('[')) {
                    break;
                }
                self.next_token();
            }

            if self.peek().is_punct('.') {
                self.next_token();
                if self.peek().is_punct('.') {
                    self.next_token();
                    segments.push(self.parse_descendant_segment()?);
                } else {
                    segments.push(Segment::child(vec![self.parse_dot_selector()?]));
                }
            } else if self.peek().is_punct('[') {
                self.next_token();
                segments.push(Segment::child(self.parse_bracketed_selection()?));
            } else {
                break;
            }
        }

        Ok(Query::new(root, segments))
    }

    /// Member name or `*` directly after `.` or `..`
    fn parse_dot_selector(&mut self) -> ParseResult<Selector> {
        let token = self.next_token();
        if token.is_punct('*') {
            Ok(Selector::Wildcard)
        } else if token.is_member_name() {
            Ok(Selector::Name(token.text))
        } else {
            Err(unexpected(&token))
        }
    }

    fn parse_descendant_segment(&mut self) -> ParseResult<Segment> {
        if self.peek().is_punct('[') {
            self.next_token();
            return Ok(Segment::descendant(self.parse_bracketed_selection()?));
        }
        Ok(Segment::descendant(vec![self.parse_dot_selector()?]))
    }
}
