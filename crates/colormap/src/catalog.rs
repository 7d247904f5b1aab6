//! The built-in color scheme catalog.
//!
//! Every identifier is `<family>_<mode>` for the 27 ColorBrewer families in
//! four interpolation modes, preceded by the black/white ramps. The table
//! below is the only list of identifiers; lookup indexes into it.

use std::collections::HashMap;
use std::sync::LazyLock;

use heatstamp_core::{Error, Result};

use crate::scheme::{ColorScheme, ColorStop, InterpolationMode, Rgba};

/// Identifier of the scheme used by `render_default`.
pub const DEFAULT_SCHEME: &str = "b2w";

// ─── Color stop definitions ───────────────────────────────────────────

const BLACK_TO_WHITE: &[ColorStop] = &[
    ColorStop::new(0.0, Rgba::new(0, 0, 0, 255)),
    ColorStop::new(1.0, Rgba::new(255, 255, 255, 255)),
];

const WHITE_TO_BLACK: &[ColorStop] = &[
    ColorStop::new(0.0, Rgba::new(255, 255, 255, 255)),
    ColorStop::new(1.0, Rgba::new(0, 0, 0, 255)),
];

/// Blues, ColorBrewer 9-class sequential
const BLUES_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7fbff),
    ColorStop::hex(0.125, 0xdeebf7),
    ColorStop::hex(0.25, 0xc6dbef),
    ColorStop::hex(0.375, 0x9ecae1),
    ColorStop::hex(0.5, 0x6baed6),
    ColorStop::hex(0.625, 0x4292c6),
    ColorStop::hex(0.75, 0x2171b5),
    ColorStop::hex(0.875, 0x08519c),
    ColorStop::hex(1.0, 0x08306b),
];

/// BrBG, ColorBrewer 11-class diverging
const BR_BG_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x543005),
    ColorStop::hex(0.1, 0x8c510a),
    ColorStop::hex(0.2, 0xbf812d),
    ColorStop::hex(0.3, 0xdfc27d),
    ColorStop::hex(0.4, 0xf6e8c3),
    ColorStop::hex(0.5, 0xf5f5f5),
    ColorStop::hex(0.6, 0xc7eae5),
    ColorStop::hex(0.7, 0x80cdc1),
    ColorStop::hex(0.8, 0x35978f),
    ColorStop::hex(0.9, 0x01665e),
    ColorStop::hex(1.0, 0x003c30),
];

/// BuGn, ColorBrewer 9-class sequential
const BU_GN_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7fcfd),
    ColorStop::hex(0.125, 0xe5f5f9),
    ColorStop::hex(0.25, 0xccece6),
    ColorStop::hex(0.375, 0x99d8c9),
    ColorStop::hex(0.5, 0x66c2a4),
    ColorStop::hex(0.625, 0x41ae76),
    ColorStop::hex(0.75, 0x238b45),
    ColorStop::hex(0.875, 0x006d2c),
    ColorStop::hex(1.0, 0x00441b),
];

/// BuPu, ColorBrewer 9-class sequential
const BU_PU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7fcfd),
    ColorStop::hex(0.125, 0xe0ecf4),
    ColorStop::hex(0.25, 0xbfd3e6),
    ColorStop::hex(0.375, 0x9ebcda),
    ColorStop::hex(0.5, 0x8c96c6),
    ColorStop::hex(0.625, 0x8c6bb1),
    ColorStop::hex(0.75, 0x88419d),
    ColorStop::hex(0.875, 0x810f7c),
    ColorStop::hex(1.0, 0x4d004b),
];

/// GnBu, ColorBrewer 9-class sequential
const GN_BU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7fcf0),
    ColorStop::hex(0.125, 0xe0f3db),
    ColorStop::hex(0.25, 0xccebc5),
    ColorStop::hex(0.375, 0xa8ddb5),
    ColorStop::hex(0.5, 0x7bccc4),
    ColorStop::hex(0.625, 0x4eb3d3),
    ColorStop::hex(0.75, 0x2b8cbe),
    ColorStop::hex(0.875, 0x0868ac),
    ColorStop::hex(1.0, 0x084081),
];

/// Greens, ColorBrewer 9-class sequential
const GREENS_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7fcf5),
    ColorStop::hex(0.125, 0xe5f5e0),
    ColorStop::hex(0.25, 0xc7e9c0),
    ColorStop::hex(0.375, 0xa1d99b),
    ColorStop::hex(0.5, 0x74c476),
    ColorStop::hex(0.625, 0x41ab5d),
    ColorStop::hex(0.75, 0x238b45),
    ColorStop::hex(0.875, 0x006d2c),
    ColorStop::hex(1.0, 0x00441b),
];

/// Greys, ColorBrewer 9-class sequential
const GREYS_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xffffff),
    ColorStop::hex(0.125, 0xf0f0f0),
    ColorStop::hex(0.25, 0xd9d9d9),
    ColorStop::hex(0.375, 0xbdbdbd),
    ColorStop::hex(0.5, 0x969696),
    ColorStop::hex(0.625, 0x737373),
    ColorStop::hex(0.75, 0x525252),
    ColorStop::hex(0.875, 0x252525),
    ColorStop::hex(1.0, 0x000000),
];

/// Oranges, ColorBrewer 9-class sequential
const ORANGES_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff5eb),
    ColorStop::hex(0.125, 0xfee6ce),
    ColorStop::hex(0.25, 0xfdd0a2),
    ColorStop::hex(0.375, 0xfdae6b),
    ColorStop::hex(0.5, 0xfd8d3c),
    ColorStop::hex(0.625, 0xf16913),
    ColorStop::hex(0.75, 0xd94801),
    ColorStop::hex(0.875, 0xa63603),
    ColorStop::hex(1.0, 0x7f2704),
];

/// OrRd, ColorBrewer 9-class sequential
const OR_RD_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff7ec),
    ColorStop::hex(0.125, 0xfee8c8),
    ColorStop::hex(0.25, 0xfdd49e),
    ColorStop::hex(0.375, 0xfdbb84),
    ColorStop::hex(0.5, 0xfc8d59),
    ColorStop::hex(0.625, 0xef6548),
    ColorStop::hex(0.75, 0xd7301f),
    ColorStop::hex(0.875, 0xb30000),
    ColorStop::hex(1.0, 0x7f0000),
];

/// PiYG, ColorBrewer 11-class diverging
const PI_YG_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x8e0152),
    ColorStop::hex(0.1, 0xc51b7d),
    ColorStop::hex(0.2, 0xde77ae),
    ColorStop::hex(0.3, 0xf1b6da),
    ColorStop::hex(0.4, 0xfde0ef),
    ColorStop::hex(0.5, 0xf7f7f7),
    ColorStop::hex(0.6, 0xe6f5d0),
    ColorStop::hex(0.7, 0xb8e186),
    ColorStop::hex(0.8, 0x7fbc41),
    ColorStop::hex(0.9, 0x4d9221),
    ColorStop::hex(1.0, 0x276419),
];

/// PRGn, ColorBrewer 11-class diverging
const PRGN_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x40004b),
    ColorStop::hex(0.1, 0x762a83),
    ColorStop::hex(0.2, 0x9970ab),
    ColorStop::hex(0.3, 0xc2a5cf),
    ColorStop::hex(0.4, 0xe7d4e8),
    ColorStop::hex(0.5, 0xf7f7f7),
    ColorStop::hex(0.6, 0xd9f0d3),
    ColorStop::hex(0.7, 0xa6dba0),
    ColorStop::hex(0.8, 0x5aae61),
    ColorStop::hex(0.9, 0x1b7837),
    ColorStop::hex(1.0, 0x00441b),
];

/// PuBuGn, ColorBrewer 9-class sequential
const PU_BU_GN_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff7fb),
    ColorStop::hex(0.125, 0xece2f0),
    ColorStop::hex(0.25, 0xd0d1e6),
    ColorStop::hex(0.375, 0xa6bddb),
    ColorStop::hex(0.5, 0x67a9cf),
    ColorStop::hex(0.625, 0x3690c0),
    ColorStop::hex(0.75, 0x02818a),
    ColorStop::hex(0.875, 0x016c59),
    ColorStop::hex(1.0, 0x014636),
];

/// PuBu, ColorBrewer 9-class sequential
const PU_BU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff7fb),
    ColorStop::hex(0.125, 0xece7f2),
    ColorStop::hex(0.25, 0xd0d1e6),
    ColorStop::hex(0.375, 0xa6bddb),
    ColorStop::hex(0.5, 0x74a9cf),
    ColorStop::hex(0.625, 0x3690c0),
    ColorStop::hex(0.75, 0x0570b0),
    ColorStop::hex(0.875, 0x045a8d),
    ColorStop::hex(1.0, 0x023858),
];

/// PuOr, ColorBrewer 11-class diverging
const PU_OR_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x7f3b08),
    ColorStop::hex(0.1, 0xb35806),
    ColorStop::hex(0.2, 0xe08214),
    ColorStop::hex(0.3, 0xfdb863),
    ColorStop::hex(0.4, 0xfee0b6),
    ColorStop::hex(0.5, 0xf7f7f7),
    ColorStop::hex(0.6, 0xd8daeb),
    ColorStop::hex(0.7, 0xb2abd2),
    ColorStop::hex(0.8, 0x8073ac),
    ColorStop::hex(0.9, 0x542788),
    ColorStop::hex(1.0, 0x2d004b),
];

/// PuRd, ColorBrewer 9-class sequential
const PU_RD_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xf7f4f9),
    ColorStop::hex(0.125, 0xe7e1ef),
    ColorStop::hex(0.25, 0xd4b9da),
    ColorStop::hex(0.375, 0xc994c7),
    ColorStop::hex(0.5, 0xdf65b0),
    ColorStop::hex(0.625, 0xe7298a),
    ColorStop::hex(0.75, 0xce1256),
    ColorStop::hex(0.875, 0x980043),
    ColorStop::hex(1.0, 0x67001f),
];

/// Purples, ColorBrewer 9-class sequential
const PURPLES_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfcfbfd),
    ColorStop::hex(0.125, 0xefedf5),
    ColorStop::hex(0.25, 0xdadaeb),
    ColorStop::hex(0.375, 0xbcbddc),
    ColorStop::hex(0.5, 0x9e9ac8),
    ColorStop::hex(0.625, 0x807dba),
    ColorStop::hex(0.75, 0x6a51a3),
    ColorStop::hex(0.875, 0x54278f),
    ColorStop::hex(1.0, 0x3f007d),
];

/// RdBu, ColorBrewer 11-class diverging
const RD_BU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x67001f),
    ColorStop::hex(0.1, 0xb2182b),
    ColorStop::hex(0.2, 0xd6604d),
    ColorStop::hex(0.3, 0xf4a582),
    ColorStop::hex(0.4, 0xfddbc7),
    ColorStop::hex(0.5, 0xf7f7f7),
    ColorStop::hex(0.6, 0xd1e5f0),
    ColorStop::hex(0.7, 0x92c5de),
    ColorStop::hex(0.8, 0x4393c3),
    ColorStop::hex(0.9, 0x2166ac),
    ColorStop::hex(1.0, 0x053061),
];

/// RdGy, ColorBrewer 11-class diverging
const RD_GY_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x67001f),
    ColorStop::hex(0.1, 0xb2182b),
    ColorStop::hex(0.2, 0xd6604d),
    ColorStop::hex(0.3, 0xf4a582),
    ColorStop::hex(0.4, 0xfddbc7),
    ColorStop::hex(0.5, 0xffffff),
    ColorStop::hex(0.6, 0xe0e0e0),
    ColorStop::hex(0.7, 0xbababa),
    ColorStop::hex(0.8, 0x878787),
    ColorStop::hex(0.9, 0x4d4d4d),
    ColorStop::hex(1.0, 0x1a1a1a),
];

/// RdPu, ColorBrewer 9-class sequential
const RD_PU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff7f3),
    ColorStop::hex(0.125, 0xfde0dd),
    ColorStop::hex(0.25, 0xfcc5c0),
    ColorStop::hex(0.375, 0xfa9fb5),
    ColorStop::hex(0.5, 0xf768a1),
    ColorStop::hex(0.625, 0xdd3497),
    ColorStop::hex(0.75, 0xae017e),
    ColorStop::hex(0.875, 0x7a0177),
    ColorStop::hex(1.0, 0x49006a),
];

/// RdYlBu, ColorBrewer 11-class diverging
const RD_YL_BU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xa50026),
    ColorStop::hex(0.1, 0xd73027),
    ColorStop::hex(0.2, 0xf46d43),
    ColorStop::hex(0.3, 0xfdae61),
    ColorStop::hex(0.4, 0xfee090),
    ColorStop::hex(0.5, 0xffffbf),
    ColorStop::hex(0.6, 0xe0f3f8),
    ColorStop::hex(0.7, 0xabd9e9),
    ColorStop::hex(0.8, 0x74add1),
    ColorStop::hex(0.9, 0x4575b4),
    ColorStop::hex(1.0, 0x313695),
];

/// RdYlGn, ColorBrewer 11-class diverging
const RD_YL_GN_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xa50026),
    ColorStop::hex(0.1, 0xd73027),
    ColorStop::hex(0.2, 0xf46d43),
    ColorStop::hex(0.3, 0xfdae61),
    ColorStop::hex(0.4, 0xfee08b),
    ColorStop::hex(0.5, 0xffffbf),
    ColorStop::hex(0.6, 0xd9ef8b),
    ColorStop::hex(0.7, 0xa6d96a),
    ColorStop::hex(0.8, 0x66bd63),
    ColorStop::hex(0.9, 0x1a9850),
    ColorStop::hex(1.0, 0x006837),
];

/// Reds, ColorBrewer 9-class sequential
const REDS_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xfff5f0),
    ColorStop::hex(0.125, 0xfee0d2),
    ColorStop::hex(0.25, 0xfcbba1),
    ColorStop::hex(0.375, 0xfc9272),
    ColorStop::hex(0.5, 0xfb6a4a),
    ColorStop::hex(0.625, 0xef3b2c),
    ColorStop::hex(0.75, 0xcb181d),
    ColorStop::hex(0.875, 0xa50f15),
    ColorStop::hex(1.0, 0x67000d),
];

/// Spectral, ColorBrewer 11-class diverging
const SPECTRAL_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0x9e0142),
    ColorStop::hex(0.1, 0xd53e4f),
    ColorStop::hex(0.2, 0xf46d43),
    ColorStop::hex(0.3, 0xfdae61),
    ColorStop::hex(0.4, 0xfee08b),
    ColorStop::hex(0.5, 0xffffbf),
    ColorStop::hex(0.6, 0xe6f598),
    ColorStop::hex(0.7, 0xabdda4),
    ColorStop::hex(0.8, 0x66c2a5),
    ColorStop::hex(0.9, 0x3288bd),
    ColorStop::hex(1.0, 0x5e4fa2),
];

/// YlGnBu, ColorBrewer 9-class sequential
const YL_GN_BU_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xffffd9),
    ColorStop::hex(0.125, 0xedf8b1),
    ColorStop::hex(0.25, 0xc7e9b4),
    ColorStop::hex(0.375, 0x7fcdbb),
    ColorStop::hex(0.5, 0x41b6c4),
    ColorStop::hex(0.625, 0x1d91c0),
    ColorStop::hex(0.75, 0x225ea8),
    ColorStop::hex(0.875, 0x253494),
    ColorStop::hex(1.0, 0x081d58),
];

/// YlGn, ColorBrewer 9-class sequential
const YL_GN_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xffffe5),
    ColorStop::hex(0.125, 0xf7fcb9),
    ColorStop::hex(0.25, 0xd9f0a3),
    ColorStop::hex(0.375, 0xaddd8e),
    ColorStop::hex(0.5, 0x78c679),
    ColorStop::hex(0.625, 0x41ab5d),
    ColorStop::hex(0.75, 0x238443),
    ColorStop::hex(0.875, 0x006837),
    ColorStop::hex(1.0, 0x004529),
];

/// YlOrBr, ColorBrewer 9-class sequential
const YL_OR_BR_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xffffe5),
    ColorStop::hex(0.125, 0xfff7bc),
    ColorStop::hex(0.25, 0xfee391),
    ColorStop::hex(0.375, 0xfec44f),
    ColorStop::hex(0.5, 0xfe9929),
    ColorStop::hex(0.625, 0xec7014),
    ColorStop::hex(0.75, 0xcc4c02),
    ColorStop::hex(0.875, 0x993404),
    ColorStop::hex(1.0, 0x662506),
];

/// YlOrRd, ColorBrewer 9-class sequential
const YL_OR_RD_STOPS: &[ColorStop] = &[
    ColorStop::hex(0.0, 0xffffcc),
    ColorStop::hex(0.125, 0xffeda0),
    ColorStop::hex(0.25, 0xfed976),
    ColorStop::hex(0.375, 0xfeb24c),
    ColorStop::hex(0.5, 0xfd8d3c),
    ColorStop::hex(0.625, 0xfc4e2a),
    ColorStop::hex(0.75, 0xe31a1c),
    ColorStop::hex(0.875, 0xbd0026),
    ColorStop::hex(1.0, 0x800026),
];

// ─── Catalog ──────────────────────────────────────────────────────────

macro_rules! catalog {
    ($($family:ident => $stops:ident,)*) => {
        &[
            ColorScheme::new("b2w", InterpolationMode::Mixed, BLACK_TO_WHITE),
            ColorScheme::new("b2w_opaque", InterpolationMode::Soft, BLACK_TO_WHITE),
            ColorScheme::new("w2b", InterpolationMode::Mixed, WHITE_TO_BLACK),
            ColorScheme::new("w2b_opaque", InterpolationMode::Soft, WHITE_TO_BLACK),
            $(
                ColorScheme::new(concat!(stringify!($family), "_discrete"), InterpolationMode::Discrete, $stops),
                ColorScheme::new(concat!(stringify!($family), "_soft"), InterpolationMode::Soft, $stops),
                ColorScheme::new(concat!(stringify!($family), "_mixed"), InterpolationMode::Mixed, $stops),
                ColorScheme::new(concat!(stringify!($family), "_mixed_exp"), InterpolationMode::MixedExp, $stops),
            )*
        ]
    };
}

/// All predefined schemes, in catalog order.
static SCHEMES: &[ColorScheme] = catalog! {
    Blues => BLUES_STOPS,
    BrBG => BR_BG_STOPS,
    BuGn => BU_GN_STOPS,
    BuPu => BU_PU_STOPS,
    GnBu => GN_BU_STOPS,
    Greens => GREENS_STOPS,
    Greys => GREYS_STOPS,
    Oranges => ORANGES_STOPS,
    OrRd => OR_RD_STOPS,
    PiYG => PI_YG_STOPS,
    PRGn => PRGN_STOPS,
    PuBuGn => PU_BU_GN_STOPS,
    PuBu => PU_BU_STOPS,
    PuOr => PU_OR_STOPS,
    PuRd => PU_RD_STOPS,
    Purples => PURPLES_STOPS,
    RdBu => RD_BU_STOPS,
    RdGy => RD_GY_STOPS,
    RdPu => RD_PU_STOPS,
    RdYlBu => RD_YL_BU_STOPS,
    RdYlGn => RD_YL_GN_STOPS,
    Reds => REDS_STOPS,
    Spectral => SPECTRAL_STOPS,
    YlGnBu => YL_GN_BU_STOPS,
    YlGn => YL_GN_STOPS,
    YlOrBr => YL_OR_BR_STOPS,
    YlOrRd => YL_OR_RD_STOPS,
};

static INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    SCHEMES
        .iter()
        .enumerate()
        .map(|(i, scheme)| (scheme.name(), i))
        .collect()
});

/// Look up a predefined scheme by identifier, e.g. `"Spectral_mixed"`.
pub fn scheme_by_name(name: &str) -> Result<&'static ColorScheme> {
    INDEX
        .get(name)
        .map(|&i| &SCHEMES[i])
        .ok_or_else(|| Error::NotFound(format!("color scheme '{name}'")))
}

/// The scheme used when none is given.
pub fn default_scheme() -> &'static ColorScheme {
    &SCHEMES[0]
}

/// Every predefined scheme, in catalog order.
pub fn schemes() -> &'static [ColorScheme] {
    SCHEMES
}

/// Every predefined identifier, in catalog order.
pub fn scheme_names() -> impl Iterator<Item = &'static str> {
    SCHEMES.iter().map(|s| s.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_size_and_order() {
        assert_eq!(schemes().len(), 4 + 27 * 4);
        let names: Vec<&str> = scheme_names().take(8).collect();
        assert_eq!(
            names,
            vec![
                "b2w",
                "b2w_opaque",
                "w2b",
                "w2b_opaque",
                "Blues_discrete",
                "Blues_soft",
                "Blues_mixed",
                "Blues_mixed_exp",
            ]
        );
        assert_eq!(scheme_names().last(), Some("YlOrRd_mixed_exp"));
    }

    #[test]
    fn identifiers_are_unique() {
        assert_eq!(INDEX.len(), SCHEMES.len());
    }

    #[test]
    fn every_scheme_is_valid() {
        for scheme in schemes() {
            scheme.validate().unwrap_or_else(|e| panic!("{}: {e}", scheme.name()));
        }
    }

    #[test]
    fn suffix_matches_mode() {
        for scheme in schemes().iter().skip(4) {
            let suffix = format!("_{}", scheme.mode().as_str());
            assert!(scheme.name().ends_with(&suffix), "{}", scheme.name());
        }
    }

    #[test]
    fn lookup_by_name() {
        let s = scheme_by_name("Spectral_mixed").unwrap();
        assert_eq!(s.name(), "Spectral_mixed");
        assert_eq!(s.mode(), InterpolationMode::Mixed);
        assert_eq!(s.stops().len(), 11);
        assert_eq!(scheme_by_name("Blues_soft").unwrap().stops().len(), 9);
        assert_eq!(default_scheme().name(), DEFAULT_SCHEME);
    }

    #[test]
    fn unknown_name_not_found() {
        assert!(matches!(scheme_by_name("Rainbow_soft"), Err(Error::NotFound(_))));
        assert!(scheme_by_name("blues_soft").is_err());
    }

    #[test]
    fn black_white_ramps() {
        let b2w = scheme_by_name("b2w").unwrap();
        assert_eq!(b2w.evaluate(0.0), Rgba::TRANSPARENT);
        assert_eq!(b2w.evaluate(1.0), Rgba::new(255, 255, 255, 255));
        let opaque = scheme_by_name("b2w_opaque").unwrap();
        assert_eq!(opaque.evaluate(0.0), Rgba::new(0, 0, 0, 255));
        let w2b = scheme_by_name("w2b_opaque").unwrap();
        assert_eq!(w2b.evaluate(0.0), Rgba::new(255, 255, 255, 255));
        assert_eq!(w2b.evaluate(1.0), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn family_modes_share_stops() {
        let discrete = scheme_by_name("YlOrRd_discrete").unwrap();
        let soft = scheme_by_name("YlOrRd_soft").unwrap();
        assert_eq!(discrete.stops(), soft.stops());
        assert_eq!(soft.evaluate(1.0), Rgba::from_hex(0x800026));
        assert_eq!(discrete.evaluate(0.2), Rgba::from_hex(0xffeda0));
    }
}
