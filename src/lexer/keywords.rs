//! Reserved-word classification.
//!
//! Reserved words are stored in a byte trie built once from [`RESERVED`].
//! The first byte of a lexeme selects its family (`b` → `break`,
//! `c` → `case`/`char`/`const`/`continue`, ...) and every following byte
//! narrows it further. A lexeme is a keyword only when the walk consumes all
//! of its bytes and stops on a node that ends a reserved word, so prefixes
//! (`ret`) and extensions (`returning`) both stay identifiers.

use lazy_static::lazy_static;

use super::tokens::TokenKind;

pub const RESERVED: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("char", TokenKind::Char),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("do", TokenKind::Do),
    ("double", TokenKind::Double),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("float", TokenKind::Float),
    ("for", TokenKind::For),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("int", TokenKind::Int),
    ("long", TokenKind::Long),
    ("return", TokenKind::Return),
    ("short", TokenKind::Short),
    ("sizeof", TokenKind::Sizeof),
    ("string", TokenKind::String),
    ("struct", TokenKind::Struct),
    ("switch", TokenKind::Switch),
    ("typedef", TokenKind::Typedef),
    ("union", TokenKind::Union),
    ("unsigned", TokenKind::Unsigned),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
];

lazy_static! {
    pub static ref KEYWORD_TRIE: KeywordTrie = KeywordTrie::new(RESERVED);
}

#[derive(Debug, Default)]
struct TrieNode {
    /// Outgoing edges sorted by byte.
    children: Vec<(u8, usize)>,
    /// Set when the path from the root to this node spells a reserved word.
    keyword: Option<TokenKind>,
}

#[derive(Debug)]
pub struct KeywordTrie {
    nodes: Vec<TrieNode>,
}

impl KeywordTrie {
    pub fn new(words: &[(&str, TokenKind)]) -> Self {
        let mut trie = KeywordTrie {
            nodes: vec![TrieNode::default()],
        };

        for (word, kind) in words {
            trie.insert(word.as_bytes(), *kind);
        }

        trie
    }

    fn insert(&mut self, word: &[u8], kind: TokenKind) {
        let mut node = 0;

        for &byte in word {
            node = match self.child(node, byte) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());

                    let children = &mut self.nodes[node].children;
                    let slot = children.partition_point(|(b, _)| *b < byte);
                    children.insert(slot, (byte, next));

                    next
                }
            };
        }

        self.nodes[node].keyword = Some(kind);
    }

    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&byte, |(b, _)| *b)
            .ok()
            .map(|index| children[index].1)
    }

    /// Exact-match lookup of `lexeme` against the reserved words.
    pub fn lookup(&self, lexeme: &[u8]) -> Option<TokenKind> {
        let mut node = 0;

        for &byte in lexeme {
            node = self.child(node, byte)?;
        }

        self.nodes[node].keyword
    }

    /// Number of reserved words stored.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.keyword.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies a fully scanned identifier-shaped lexeme.
pub fn identifier_type(lexeme: &str) -> TokenKind {
    KEYWORD_TRIE
        .lookup(lexeme.as_bytes())
        .unwrap_or(TokenKind::Identifier)
}
