//! Advance widths of the standard Helvetica faces, from the Adobe core AFM files.
//!
//! Tables cover the printable ASCII range 32..=126. Codes outside it (the upper half
//! of WinAnsi) use `FALLBACK_WIDTH`.

pub const FIRST_CODE: u8 = 32;
pub const LAST_CODE: u8 = 126;

/// Width used for codes the tables do not cover.
pub const FALLBACK_WIDTH: u16 = 556;

const TABLE_LEN: usize = (LAST_CODE - FIRST_CODE + 1) as usize;

#[rustfmt::skip]
pub static HELVETICA_WIDTHS: [u16; TABLE_LEN] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
pub static HELVETICA_BOLD_WIDTHS: [u16; TABLE_LEN] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

pub fn lookup(table: &[u16; TABLE_LEN], code: u8) -> u16 {
    if (FIRST_CODE..=LAST_CODE).contains(&code) {
        table[(code - FIRST_CODE) as usize]
    } else {
        FALLBACK_WIDTH
    }
}
