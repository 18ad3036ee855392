// Color tables of the catalog.  The ColorBrewer schemes come from
// http://colorbrewer2.org/, the TU/e colors from the corporate identity
// of the Eindhoven University of Technology.  The xterm cycle is computed
// from its definition in `xterm`.

use lazy_static::lazy_static;
use rgb::RGB8;
pub(crate) mod ty;
use ty::*;

const fn c(r: u8, g: u8, b: u8) -> RGB8 { RGB8 { r, g, b } }

// Qualitative

const ACCENT: [RGB8; 8] = [
    c(127, 201, 127), c(190, 174, 212), c(253, 192, 134), c(255, 255, 153),
    c( 56, 108, 176), c(240,   2, 127), c(191,  91,  23), c(102, 102, 102),
];

const DARK2: [RGB8; 8] = [
    c( 27, 158, 119), c(217,  95,   2), c(117, 112, 179), c(231,  41, 138),
    c(102, 166,  30), c(230, 171,   2), c(166, 118,  29), c(102, 102, 102),
];

const PAIRED: [RGB8; 12] = [
    c(166, 206, 227), c( 31, 120, 180), c(178, 223, 138), c( 51, 160,  44),
    c(251, 154, 153), c(227,  26,  28), c(253, 191, 111), c(255, 127,   0),
    c(202, 178, 214), c(106,  61, 154), c(255, 255, 153), c(177,  89,  40),
];

const SPECTRAL: [RGB8; 11] = [
    c(158,   1,  66), c(213,  62,  79), c(244, 109,  67), c(253, 174,  97),
    c(254, 224, 139), c(255, 255, 191), c(230, 245, 152), c(171, 221, 164),
    c(102, 194, 165), c( 50, 136, 189), c( 94,  79, 162),
];

const PASTEL1: [RGB8; 9] = [
    c(251, 180, 174), c(179, 205, 227), c(204, 235, 197), c(222, 203, 228),
    c(254, 217, 166), c(255, 255, 204), c(229, 216, 189), c(253, 218, 236),
    c(242, 242, 242),
];

const PASTEL2: [RGB8; 8] = [
    c(179, 226, 205), c(253, 205, 172), c(203, 213, 232), c(244, 202, 228),
    c(230, 245, 201), c(255, 242, 174), c(241, 226, 204), c(204, 204, 204),
];

const SET1: [RGB8; 9] = [
    c(228,  26,  28), c( 55, 126, 184), c( 77, 175,  74), c(152,  78, 163),
    c(255, 127,   0), c(255, 255,  51), c(166,  86,  40), c(247, 129, 191),
    c(153, 153, 153),
];

const SET2: [RGB8; 8] = [
    c(102, 194, 165), c(252, 141,  98), c(141, 160, 203), c(231, 138, 195),
    c(166, 216,  84), c(255, 217,  47), c(229, 196, 148), c(179, 179, 179),
];

const SET3: [RGB8; 12] = [
    c(141, 211, 199), c(255, 255, 179), c(190, 186, 218), c(251, 128, 114),
    c(128, 177, 211), c(253, 180,  98), c(179, 222, 105), c(252, 205, 229),
    c(217, 217, 217), c(188, 128, 189), c(204, 235, 197), c(255, 237, 111),
];

// Sequential

const BLUES: [RGB8; 9] = [
    c(247, 251, 255), c(222, 235, 247), c(198, 219, 239), c(158, 202, 225),
    c(107, 174, 214), c( 66, 146, 198), c( 33, 113, 181), c(  8,  81, 156),
    c(  8,  48, 107),
];

const GREENS: [RGB8; 9] = [
    c(247, 252, 245), c(229, 245, 224), c(199, 233, 192), c(161, 217, 155),
    c(116, 196, 118), c( 65, 171,  93), c( 35, 139,  69), c(  0, 109,  44),
    c(  0,  68,  27),
];

const GREYS: [RGB8; 2] = [
    c(  0,   0,   0), c(255, 255, 255),
];

const ORANGES: [RGB8; 9] = [
    c(255, 245, 235), c(254, 230, 206), c(253, 208, 162), c(253, 174, 107),
    c(253, 141,  60), c(241, 105,  19), c(217,  72,   1), c(166,  54,   3),
    c(127,  39,   4),
];

const PURPLES: [RGB8; 9] = [
    c(252, 251, 253), c(239, 237, 245), c(218, 218, 235), c(188, 189, 220),
    c(158, 154, 200), c(128, 125, 186), c(106,  81, 163), c( 84,  39, 143),
    c( 63,   0, 125),
];

const REDS: [RGB8; 9] = [
    c(255, 245, 240), c(254, 224, 210), c(252, 187, 161), c(252, 146, 114),
    c(251, 106,  74), c(239,  59,  44), c(203,  24,  29), c(165,  15,  21),
    c(103,   0,  13),
];

const BUPU: [RGB8; 9] = [
    c(247, 252, 253), c(224, 236, 244), c(191, 211, 230), c(158, 188, 218),
    c(140, 150, 198), c(140, 107, 177), c(136,  65, 157), c(129,  15, 124),
    c( 77,   0,  75),
];

const GNBU: [RGB8; 9] = [
    c(247, 252, 240), c(224, 243, 219), c(204, 235, 197), c(168, 221, 181),
    c(123, 204, 196), c( 78, 179, 211), c( 43, 140, 190), c(  8, 104, 172),
    c(  8,  64, 129),
];

const PUBU: [RGB8; 9] = [
    c(255, 247, 251), c(236, 231, 242), c(208, 209, 230), c(166, 189, 219),
    c(116, 169, 207), c( 54, 144, 192), c(  5, 112, 176), c(  4,  90, 141),
    c(  2,  56,  88),
];

const PUBUGN: [RGB8; 9] = [
    c(255, 247, 251), c(236, 226, 240), c(208, 209, 230), c(166, 189, 219),
    c(103, 169, 207), c( 54, 144, 192), c(  2, 129, 138), c(  1, 108,  89),
    c(  1,  70,  54),
];

const PURD: [RGB8; 9] = [
    c(247, 244, 249), c(231, 225, 239), c(212, 185, 218), c(201, 148, 199),
    c(223, 101, 176), c(231,  41, 138), c(206,  18,  86), c(152,   0,  67),
    c(103,   0,  31),
];

const RDPU: [RGB8; 9] = [
    c(255, 247, 243), c(253, 224, 221), c(252, 197, 192), c(250, 159, 181),
    c(247, 104, 161), c(221,  52, 151), c(174,   1, 126), c(122,   1, 119),
    c( 73,   0, 106),
];

const ORRD: [RGB8; 9] = [
    c(255, 247, 236), c(254, 232, 200), c(253, 212, 158), c(253, 187, 132),
    c(252, 141,  89), c(239, 101,  72), c(215,  48,  31), c(179,   0,   0),
    c(127,   0,   0),
];

const RDORYL: [RGB8; 9] = [
    c(128,   0,  38), c(189,   0,  38), c(227,  26,  28), c(252,  78,  42),
    c(253, 141,  60), c(254, 178,  76), c(254, 217, 118), c(255, 237, 160),
    c(255, 255, 204),
];

const YLGN: [RGB8; 9] = [
    c(255, 255, 229), c(247, 252, 185), c(217, 240, 163), c(173, 221, 142),
    c(120, 198, 121), c( 65, 171,  93), c( 35, 132,  67), c(  0, 104,  55),
    c(  0,  69,  41),
];

const YLGNBU: [RGB8; 9] = [
    c(255, 255, 217), c(237, 248, 177), c(199, 233, 180), c(127, 205, 187),
    c( 65, 182, 196), c( 29, 145, 192), c( 34,  94, 168), c( 37,  52, 148),
    c(  8,  29,  88),
];

const YLORRD: [RGB8; 9] = [
    c(255, 255, 204), c(255, 237, 160), c(254, 217, 118), c(254, 178,  76),
    c(253, 141,  60), c(252,  78,  42), c(227,  26,  28), c(189,   0,  38),
    c(128,   0,  38),
];

// Diverging

const BRBG: [RGB8; 11] = [
    c( 84,  48,   5), c(140,  81,  10), c(191, 129,  45), c(223, 194, 125),
    c(246, 232, 195), c(245, 245, 245), c(199, 234, 229), c(128, 205, 193),
    c( 53, 151, 143), c(  1, 102,  94), c(  0,  60,  48),
];

const PUOR: [RGB8; 11] = [
    c(127,  59,   8), c(179,  88,   6), c(224, 130,  20), c(253, 184,  99),
    c(254, 224, 182), c(247, 247, 247), c(216, 218, 235), c(178, 171, 210),
    c(128, 115, 172), c( 84,  39, 136), c( 45,   0,  75),
];

const RDBU: [RGB8; 11] = [
    c(103,   0,  31), c(178,  24,  43), c(214,  96,  77), c(244, 165, 130),
    c(253, 219, 199), c(247, 247, 247), c(209, 229, 240), c(146, 197, 222),
    c( 67, 147, 195), c( 33, 102, 172), c(  5,  48,  97),
];

const RDGY: [RGB8; 11] = [
    c(103,   0,  31), c(178,  24,  43), c(214,  96,  77), c(244, 165, 130),
    c(253, 219, 199), c(255, 255, 255), c(224, 224, 224), c(186, 186, 186),
    c(135, 135, 135), c( 77,  77,  77), c( 26,  26,  26),
];

const RDYLBU: [RGB8; 11] = [
    c(165,   0,  38), c(215,  48,  39), c(244, 109,  67), c(253, 174,  97),
    c(254, 224, 144), c(255, 255, 191), c(224, 243, 248), c(171, 217, 233),
    c(116, 173, 209), c( 69, 117, 180), c( 49,  54, 149),
];

const RDYLGN: [RGB8; 11] = [
    c(165,   0,  38), c(215,  48,  39), c(244, 109,  67), c(253, 174,  97),
    c(254, 224, 139), c(255, 255, 191), c(217, 239, 139), c(166, 217, 106),
    c(102, 189,  99), c( 26, 152,  80), c(  0, 104,  55),
];

const PIYG: [RGB8; 11] = [
    c(142,   1,  82), c(197,  27, 125), c(222, 119, 174), c(241, 182, 218),
    c(253, 224, 239), c(247, 247, 247), c(230, 245, 208), c(184, 225, 134),
    c(127, 188,  65), c( 77, 146,  33), c( 39, 100,  25),
];

const PRGN: [RGB8; 11] = [
    c( 64,   0,  75), c(118,  42, 131), c(153, 112, 171), c(194, 165, 207),
    c(231, 212, 232), c(247, 247, 247), c(217, 240, 211), c(166, 219, 160),
    c( 90, 174,  97), c( 27, 120,  55), c(  0,  68,  27),
];

// Monocolor

const WHITE: [RGB8; 1] = [
    c(255, 255, 255),
];

const GREY: [RGB8; 1] = [
    c(127, 127, 127),
];

const BLACK: [RGB8; 1] = [
    c(  0,   0,   0),
];

const RED: [RGB8; 1] = [
    c(255,   0,   0),
];

const BLUE: [RGB8; 1] = [
    c(  0,   0, 255),
];

const TUEWARMRED: [RGB8; 1] = [
    c(247,  49,  49),
];

const TUEDARKBLUE: [RGB8; 1] = [
    c( 16,  16, 115),
];

const TUEBLUE: [RGB8; 1] = [
    c(  0, 102, 204),
];

const TUELIGHTBLUE: [RGB8; 1] = [
    c(  0, 162, 222),
];

// Cycle

const TUE: [RGB8; 13] = [
    c(247,  49,  49), c(214,   0,  74), c(214,   0, 123), c(173,  32, 173),
    c( 16,  16, 115), c(  0, 102, 204), c(  0, 162, 222), c(255, 154,   0),
    c(255, 221,   0), c(206, 223,   0), c(132, 210,   0), c(  0, 172, 130),
    c(  0, 146, 181),
];

// xterm 256-color palette: the 16 system colors, a 6×6×6 color cube and a
// 24-step grey ramp.
const XTERM_SYSTEM: [RGB8; 16] = [
    c(  0,   0,   0), c(128,   0,   0), c(  0, 128,   0), c(128, 128,   0),
    c(  0,   0, 128), c(128,   0, 128), c(  0, 128, 128), c(192, 192, 192),
    c(128, 128, 128), c(255,   0,   0), c(  0, 255,   0), c(255, 255,   0),
    c(  0,   0, 255), c(255,   0, 255), c(  0, 255, 255), c(255, 255, 255),
];

const XTERM_CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn xterm() -> Vec<RGB8> {
    let mut rgb = Vec::with_capacity(256);
    rgb.extend_from_slice(&XTERM_SYSTEM);
    for r in XTERM_CUBE_LEVELS {
        for g in XTERM_CUBE_LEVELS {
            for b in XTERM_CUBE_LEVELS { rgb.push(c(r, g, b)) }
        }
    }
    rgb.extend((0 .. 24).map(|k| { let v = 8 + 10 * k; c(v, v, v) }));
    rgb
}

lazy_static! {
  /// Every entry of the catalog, in listing order.
  pub(crate) static ref ALL_PALETTES: Vec<PaletteData> = {
    use Category::*;
    vec![
      PaletteData::new("Accent", Qualitative, &ACCENT),
      PaletteData::new("Dark2", Qualitative, &DARK2),
      PaletteData::new("Paired", Qualitative, &PAIRED),
      PaletteData::new("Spectral", Qualitative, &SPECTRAL),
      PaletteData::new("Pastel1", Qualitative, &PASTEL1),
      PaletteData::new("Pastel2", Qualitative, &PASTEL2),
      PaletteData::new("Set1", Qualitative, &SET1),
      PaletteData::new("Set2", Qualitative, &SET2),
      PaletteData::new("Set3", Qualitative, &SET3),
      PaletteData::new("Blues", Sequential, &BLUES),
      PaletteData::new("Greens", Sequential, &GREENS),
      PaletteData::new("Greys", Sequential, &GREYS),
      PaletteData::new("Oranges", Sequential, &ORANGES),
      PaletteData::new("Purples", Sequential, &PURPLES),
      PaletteData::new("Reds", Sequential, &REDS),
      PaletteData::new("BuPu", Sequential, &BUPU),
      PaletteData::new("GnBu", Sequential, &GNBU),
      PaletteData::new("PuBu", Sequential, &PUBU),
      PaletteData::new("PuBuGn", Sequential, &PUBUGN),
      PaletteData::new("PuRd", Sequential, &PURD),
      PaletteData::new("RdPu", Sequential, &RDPU),
      PaletteData::new("OrRd", Sequential, &ORRD),
      PaletteData::new("RdOrYl", Sequential, &RDORYL),
      PaletteData::new("YlGn", Sequential, &YLGN),
      PaletteData::new("YlGnBu", Sequential, &YLGNBU),
      PaletteData::new("YlOrRd", Sequential, &YLORRD),
      PaletteData::new("BrBG", Diverging, &BRBG),
      PaletteData::new("PuOr", Diverging, &PUOR),
      PaletteData::new("RdBu", Diverging, &RDBU),
      PaletteData::new("RdGy", Diverging, &RDGY),
      PaletteData::new("RdYlBu", Diverging, &RDYLBU),
      PaletteData::new("RdYlGn", Diverging, &RDYLGN),
      PaletteData::new("PiYG", Diverging, &PIYG),
      PaletteData::new("PRGn", Diverging, &PRGN),
      PaletteData::new("White", Monocolor, &WHITE),
      PaletteData::new("Grey", Monocolor, &GREY),
      PaletteData::new("Black", Monocolor, &BLACK),
      PaletteData::new("Red", Monocolor, &RED),
      PaletteData::new("Blue", Monocolor, &BLUE),
      PaletteData::new("tuewarmred", Monocolor, &TUEWARMRED),
      PaletteData::new("tuedarkblue", Monocolor, &TUEDARKBLUE),
      PaletteData::new("tueblue", Monocolor, &TUEBLUE),
      PaletteData::new("tuelightblue", Monocolor, &TUELIGHTBLUE),
      PaletteData::new("tue", Cycle, &TUE),
      PaletteData { name: "xterm", category: Cycle, rgb: xterm() },
    ]
  };
}
