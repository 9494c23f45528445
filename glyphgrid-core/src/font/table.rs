//! Default 3x5 bitmap font table
//!
//! Most glyphs are 3 wide; narrow punctuation uses width 1. The
//! lower-case block does not hold letterforms: 'a' through 'u' (and
//! '_') are repurposed as base-runner/outs scoreboard icons.

/// Source bitmaps for [`default_catalog`](super::default_catalog)
pub const DEFAULT_TABLE: &[(char, &[&str])] = &[
    ('0', &["010", "101", "101", "101", "010"]),
    ('1', &["010", "110", "010", "010", "010"]),
    ('2', &["110", "001", "010", "100", "111"]),
    ('3', &["110", "001", "110", "001", "110"]),
    ('4', &["101", "101", "011", "001", "001"]),
    ('5', &["111", "100", "110", "001", "110"]),
    ('6', &["010", "100", "110", "101", "010"]),
    ('7', &["111", "001", "010", "010", "010"]),
    ('8', &["010", "101", "010", "101", "010"]),
    ('9', &["010", "101", "011", "001", "010"]),
    ('-', &["000", "000", "111", "000", "000"]),
    ('°', &["010", "101", "010", "000", "000"]),
    ('^', &["000", "010", "111", "000", "000"]),
    ('v', &["000", "000", "000", "111", "010"]),
    (':', &["0", "1", "0", "1", "0"]),
    ('@', &["000", "000", "010", "000", "000"]),
    (' ', &["000", "000", "000", "000", "000"]),
    ('.', &["000", "000", "000", "000", "010"]),
    ('|', &["010", "010", "010", "010", "010"]),
    ('\'', &["010", "010", "000", "000", "000"]),
    ('&', &["010", "101", "010", "101", "011"]),
    ('(', &["010", "100", "100", "100", "010"]),
    (')', &["010", "001", "001", "001", "010"]),
    ('[', &["011", "010", "010", "010", "011"]),
    (']', &["110", "010", "010", "010", "110"]),
    ('#', &["101", "111", "101", "111", "101"]),
    ('A', &["010", "101", "111", "101", "101"]),
    ('B', &["110", "101", "110", "101", "110"]),
    ('C', &["010", "101", "100", "101", "010"]),
    ('D', &["110", "101", "101", "101", "110"]),
    ('E', &["111", "100", "110", "100", "111"]),
    ('F', &["111", "100", "111", "100", "100"]),
    ('G', &["011", "100", "101", "101", "011"]),
    ('H', &["101", "101", "111", "101", "101"]),
    ('I', &["111", "010", "010", "010", "111"]),
    ('J', &["111", "001", "001", "001", "110"]),
    ('K', &["101", "101", "110", "101", "101"]),
    ('L', &["100", "100", "100", "100", "111"]),
    ('M', &["101", "111", "111", "101", "101"]),
    ('N', &["110", "101", "101", "101", "101"]),
    ('O', &["010", "101", "101", "101", "010"]),
    ('P', &["110", "101", "110", "100", "100"]),
    ('Q', &["111", "101", "101", "111", "011"]),
    ('R', &["110", "101", "110", "101", "101"]),
    ('S', &["011", "100", "010", "001", "110"]),
    ('T', &["111", "010", "010", "010", "010"]),
    ('U', &["101", "101", "101", "101", "011"]),
    ('V', &["101", "101", "101", "101", "010"]),
    ('W', &["101", "101", "101", "111", "111"]),
    ('X', &["101", "101", "010", "101", "101"]),
    ('Y', &["101", "101", "010", "010", "010"]),
    ('Z', &["111", "001", "010", "100", "111"]),
    // Baseball icons: middle rows mark occupied bases, bottom row outs
    ('a', &["000", "000", "000", "000", "000"]), // bases empty, 0 out
    ('b', &["000", "000", "001", "000", "000"]), // 1st, 0 out
    ('c', &["000", "010", "000", "000", "000"]), // 2nd, 0 out
    ('d', &["000", "000", "100", "000", "000"]), // 3rd, 0 out
    ('e', &["000", "010", "001", "000", "000"]), // 1st+2nd, 0 out
    ('f', &["000", "010", "100", "000", "000"]), // 2nd+3rd, 0 out
    ('g', &["000", "010", "101", "000", "000"]), // loaded, 0 out
    ('h', &["000", "000", "000", "000", "100"]), // bases empty, 1 out
    ('i', &["000", "000", "001", "000", "100"]), // 1st, 1 out
    ('j', &["000", "010", "000", "000", "100"]), // 2nd, 1 out
    ('k', &["000", "000", "100", "000", "100"]), // 3rd, 1 out
    ('l', &["000", "010", "001", "000", "100"]), // 1st+2nd, 1 out
    ('m', &["000", "010", "100", "000", "100"]), // 2nd+3rd, 1 out
    ('n', &["000", "010", "101", "000", "100"]), // loaded, 1 out
    ('o', &["000", "000", "000", "000", "110"]), // bases empty, 2 out
    ('p', &["000", "000", "001", "000", "110"]), // 1st, 2 out
    ('q', &["000", "010", "000", "000", "110"]), // 2nd, 2 out
    ('r', &["000", "000", "100", "000", "110"]), // 3rd, 2 out
    ('s', &["000", "010", "001", "000", "110"]), // 1st+2nd, 2 out
    ('t', &["000", "010", "100", "000", "110"]), // 2nd+3rd, 2 out
    ('u', &["000", "010", "101", "000", "110"]), // loaded, 2 out
    ('_', &["000", "000", "000", "000", "111"]), // 3 out
];
