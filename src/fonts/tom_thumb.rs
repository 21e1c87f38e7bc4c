// src/fonts/tom_thumb.rs

//! Tom Thumb, a tiny 3x5 pixel font by Robey Pointer, in Adafruit GFX layout.
//!
//! Covers printable ASCII (0x20 to 0x7E). Line height is 6 pixels.

use crate::glyph::{Font, Glyph};

#[rustfmt::skip]
static BITMAP: [u8; 181] = [
    0x00,              // 0x20 space
    0xE8,              // 0x21 exclam
    0xB4,              // 0x22 quotedbl
    0xBE, 0xFA,        // 0x23 numbersign
    0x79, 0xE4,        // 0x24 dollar
    0xA5, 0x4A,        // 0x25 percent
    0xDB, 0xD6,        // 0x26 ampersand
    0xC0,              // 0x27 quotesingle
    0x6A, 0x40,        // 0x28 parenleft
    0x95, 0x80,        // 0x29 parenright
    0xAA, 0x80,        // 0x2A asterisk
    0x5D, 0x00,        // 0x2B plus
    0x60,              // 0x2C comma
    0xE0,              // 0x2D hyphen
    0x80,              // 0x2E period
    0x25, 0x48,        // 0x2F slash
    0xF6, 0xDE,        // 0x30 zero
    0x59, 0x2E,        // 0x31 one
    0xE7, 0xCE,        // 0x32 two
    0xE7, 0x9E,        // 0x33 three
    0xB7, 0x92,        // 0x34 four
    0xF3, 0x9E,        // 0x35 five
    0xF3, 0xDE,        // 0x36 six
    0xE4, 0x92,        // 0x37 seven
    0xF7, 0xDE,        // 0x38 eight
    0xF7, 0x9E,        // 0x39 nine
    0xA0,              // 0x3A colon
    0x46,              // 0x3B semicolon
    0x2A, 0x22,        // 0x3C less
    0xE3, 0x80,        // 0x3D equal
    0x88, 0xA8,        // 0x3E greater
    0xE5, 0x04,        // 0x3F question
    0x57, 0xC6,        // 0x40 at
    0xD7, 0xDA,        // 0x41 A
    0xD7, 0x5C,        // 0x42 B
    0x56, 0x54,        // 0x43 C
    0xD6, 0xDC,        // 0x44 D
    0xF3, 0xCE,        // 0x45 E
    0xF3, 0xC8,        // 0x46 F
    0x72, 0xD6,        // 0x47 G
    0xB7, 0xDA,        // 0x48 H
    0xF8,              // 0x49 I
    0x24, 0xD4,        // 0x4A J
    0xB7, 0x5A,        // 0x4B K
    0x92, 0x4E,        // 0x4C L
    0x8E, 0xEB, 0x18, 0x80, // 0x4D M
    0x9D, 0xB9, 0x90,  // 0x4E N
    0x56, 0xD4,        // 0x4F O
    0xF7, 0x48,        // 0x50 P
    0x4A, 0xAA, 0x70,  // 0x51 Q
    0xF7, 0x5A,        // 0x52 R
    0xF3, 0x9E,        // 0x53 S
    0xE9, 0x24,        // 0x54 T
    0xB6, 0xDE,        // 0x55 U
    0xB6, 0xD4,        // 0x56 V
    0x8C, 0x63, 0x55, 0x00, // 0x57 W
    0xB5, 0x5A,        // 0x58 X
    0xB7, 0x9C,        // 0x59 Y
    0xE5, 0x4E,        // 0x5A Z
    0xF2, 0x4E,        // 0x5B bracketleft
    0x88, 0x80,        // 0x5C backslash
    0xE4, 0x9E,        // 0x5D bracketright
    0x54,              // 0x5E asciicircum
    0xE0,              // 0x5F underscore
    0x90,              // 0x60 grave
    0xCE, 0xF0,        // 0x61 a
    0x9A, 0xDC,        // 0x62 b
    0x72, 0x30,        // 0x63 c
    0x2E, 0xD6,        // 0x64 d
    0x77, 0x30,        // 0x65 e
    0x2B, 0xA4,        // 0x66 f
    0x77, 0x94,        // 0x67 g
    0x9A, 0xDA,        // 0x68 h
    0xB8,              // 0x69 i
    0x20, 0x9A, 0x80,  // 0x6A j
    0x97, 0x6A,        // 0x6B k
    0xC9, 0x2E,        // 0x6C l
    0xFF, 0xD0,        // 0x6D m
    0xD6, 0xD0,        // 0x6E n
    0x56, 0xA0,        // 0x6F o
    0xD6, 0xE8,        // 0x70 p
    0x76, 0xB2,        // 0x71 q
    0x72, 0x40,        // 0x72 r
    0x79, 0xE0,        // 0x73 s
    0x5D, 0x26,        // 0x74 t
    0xB6, 0xB0,        // 0x75 u
    0xB7, 0xA0,        // 0x76 v
    0xBF, 0xF0,        // 0x77 w
    0xA9, 0x50,        // 0x78 x
    0xB5, 0x94,        // 0x79 y
    0xEF, 0x70,        // 0x7A z
    0x6A, 0x26,        // 0x7B braceleft
    0xD8,              // 0x7C bar
    0xC8, 0xAC,        // 0x7D braceright
    0x78,              // 0x7E asciitilde
];

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 1, 1, 2, 0, -5),     // 0x20 space
    Glyph::new(1, 1, 5, 2, 0, -5),     // 0x21 exclam
    Glyph::new(2, 3, 2, 4, 0, -5),     // 0x22 quotedbl
    Glyph::new(3, 3, 5, 4, 0, -5),     // 0x23 numbersign
    Glyph::new(5, 3, 5, 4, 0, -5),     // 0x24 dollar
    Glyph::new(7, 3, 5, 4, 0, -5),     // 0x25 percent
    Glyph::new(9, 3, 5, 4, 0, -5),     // 0x26 ampersand
    Glyph::new(11, 1, 2, 2, 0, -5),    // 0x27 quotesingle
    Glyph::new(12, 2, 5, 3, 0, -5),    // 0x28 parenleft
    Glyph::new(14, 2, 5, 3, 0, -5),    // 0x29 parenright
    Glyph::new(16, 3, 3, 4, 0, -5),    // 0x2A asterisk
    Glyph::new(18, 3, 3, 4, 0, -4),    // 0x2B plus
    Glyph::new(20, 2, 2, 3, 0, -2),    // 0x2C comma
    Glyph::new(21, 3, 1, 4, 0, -3),    // 0x2D hyphen
    Glyph::new(22, 1, 1, 2, 0, -1),    // 0x2E period
    Glyph::new(23, 3, 5, 4, 0, -5),    // 0x2F slash
    Glyph::new(25, 3, 5, 4, 0, -5),    // 0x30 zero
    Glyph::new(27, 3, 5, 4, 0, -5),    // 0x31 one
    Glyph::new(29, 3, 5, 4, 0, -5),    // 0x32 two
    Glyph::new(31, 3, 5, 4, 0, -5),    // 0x33 three
    Glyph::new(33, 3, 5, 4, 0, -5),    // 0x34 four
    Glyph::new(35, 3, 5, 4, 0, -5),    // 0x35 five
    Glyph::new(37, 3, 5, 4, 0, -5),    // 0x36 six
    Glyph::new(39, 3, 5, 4, 0, -5),    // 0x37 seven
    Glyph::new(41, 3, 5, 4, 0, -5),    // 0x38 eight
    Glyph::new(43, 3, 5, 4, 0, -5),    // 0x39 nine
    Glyph::new(45, 1, 3, 2, 0, -4),    // 0x3A colon
    Glyph::new(46, 2, 4, 3, 0, -4),    // 0x3B semicolon
    Glyph::new(47, 3, 5, 4, 0, -5),    // 0x3C less
    Glyph::new(49, 3, 3, 4, 0, -4),    // 0x3D equal
    Glyph::new(51, 3, 5, 4, 0, -5),    // 0x3E greater
    Glyph::new(53, 3, 5, 4, 0, -5),    // 0x3F question
    Glyph::new(55, 3, 5, 4, 0, -5),    // 0x40 at
    Glyph::new(57, 3, 5, 4, 0, -5),    // 0x41 A
    Glyph::new(59, 3, 5, 4, 0, -5),    // 0x42 B
    Glyph::new(61, 3, 5, 4, 0, -5),    // 0x43 C
    Glyph::new(63, 3, 5, 4, 0, -5),    // 0x44 D
    Glyph::new(65, 3, 5, 4, 0, -5),    // 0x45 E
    Glyph::new(67, 3, 5, 4, 0, -5),    // 0x46 F
    Glyph::new(69, 3, 5, 4, 0, -5),    // 0x47 G
    Glyph::new(71, 3, 5, 4, 0, -5),    // 0x48 H
    Glyph::new(73, 1, 5, 2, 0, -5),    // 0x49 I
    Glyph::new(74, 3, 5, 4, 0, -5),    // 0x4A J
    Glyph::new(76, 3, 5, 4, 0, -5),    // 0x4B K
    Glyph::new(78, 3, 5, 4, 0, -5),    // 0x4C L
    Glyph::new(80, 5, 5, 6, 0, -5),    // 0x4D M
    Glyph::new(84, 4, 5, 5, 0, -5),    // 0x4E N
    Glyph::new(87, 3, 5, 4, 0, -5),    // 0x4F O
    Glyph::new(89, 3, 5, 4, 0, -5),    // 0x50 P
    Glyph::new(91, 4, 5, 5, 0, -5),    // 0x51 Q
    Glyph::new(94, 3, 5, 4, 0, -5),    // 0x52 R
    Glyph::new(96, 3, 5, 4, 0, -5),    // 0x53 S
    Glyph::new(98, 3, 5, 4, 0, -5),    // 0x54 T
    Glyph::new(100, 3, 5, 4, 0, -5),   // 0x55 U
    Glyph::new(102, 3, 5, 4, 0, -5),   // 0x56 V
    Glyph::new(104, 5, 5, 6, 0, -5),   // 0x57 W
    Glyph::new(108, 3, 5, 4, 0, -5),   // 0x58 X
    Glyph::new(110, 3, 5, 4, 0, -5),   // 0x59 Y
    Glyph::new(112, 3, 5, 4, 0, -5),   // 0x5A Z
    Glyph::new(114, 3, 5, 4, 0, -5),   // 0x5B bracketleft
    Glyph::new(116, 3, 3, 4, 0, -4),   // 0x5C backslash
    Glyph::new(118, 3, 5, 4, 0, -5),   // 0x5D bracketright
    Glyph::new(120, 3, 2, 4, 0, -5),   // 0x5E asciicircum
    Glyph::new(121, 3, 1, 4, 0, -1),   // 0x5F underscore
    Glyph::new(122, 2, 2, 3, 0, -5),   // 0x60 grave
    Glyph::new(123, 3, 4, 4, 0, -4),   // 0x61 a
    Glyph::new(125, 3, 5, 4, 0, -5),   // 0x62 b
    Glyph::new(127, 3, 4, 4, 0, -4),   // 0x63 c
    Glyph::new(129, 3, 5, 4, 0, -5),   // 0x64 d
    Glyph::new(131, 3, 4, 4, 0, -4),   // 0x65 e
    Glyph::new(133, 3, 5, 4, 0, -5),   // 0x66 f
    Glyph::new(135, 3, 5, 4, 0, -4),   // 0x67 g
    Glyph::new(137, 3, 5, 4, 0, -5),   // 0x68 h
    Glyph::new(139, 1, 5, 2, 0, -5),   // 0x69 i
    Glyph::new(140, 3, 6, 4, 0, -5),   // 0x6A j
    Glyph::new(143, 3, 5, 4, 0, -5),   // 0x6B k
    Glyph::new(145, 3, 5, 4, 0, -5),   // 0x6C l
    Glyph::new(147, 3, 4, 4, 0, -4),   // 0x6D m
    Glyph::new(149, 3, 4, 4, 0, -4),   // 0x6E n
    Glyph::new(151, 3, 4, 4, 0, -4),   // 0x6F o
    Glyph::new(153, 3, 5, 4, 0, -4),   // 0x70 p
    Glyph::new(155, 3, 5, 4, 0, -4),   // 0x71 q
    Glyph::new(157, 3, 4, 4, 0, -4),   // 0x72 r
    Glyph::new(159, 3, 4, 4, 0, -4),   // 0x73 s
    Glyph::new(161, 3, 5, 4, 0, -5),   // 0x74 t
    Glyph::new(163, 3, 4, 4, 0, -4),   // 0x75 u
    Glyph::new(165, 3, 4, 4, 0, -4),   // 0x76 v
    Glyph::new(167, 3, 4, 4, 0, -4),   // 0x77 w
    Glyph::new(169, 3, 4, 4, 0, -4),   // 0x78 x
    Glyph::new(171, 3, 5, 4, 0, -4),   // 0x79 y
    Glyph::new(173, 3, 4, 4, 0, -4),   // 0x7A z
    Glyph::new(175, 3, 5, 4, 0, -5),   // 0x7B braceleft
    Glyph::new(177, 1, 5, 2, 0, -5),   // 0x7C bar
    Glyph::new(178, 3, 5, 4, 0, -5),   // 0x7D braceright
    Glyph::new(180, 3, 2, 4, 0, -5),   // 0x7E asciitilde
];

pub static TOM_THUMB: Font<'static> = Font {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first_char: 0x20,
    last_char: 0x7E,
    y_advance: 6,
};
