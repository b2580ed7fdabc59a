//! Share-URL query codec.
//!
//! A shape travels in a URL query string:
//!
//! ```text
//! w=100&h=100&r=20,0,10,10&ic=20x30x10:0,60x30x10:1,30x20x10:0,20x20x10:1&b=0&bc=FF2056&bg=513D34
//! ```
//!
//! `r` lists the radii and `ic` the notch descriptors (`width x height x
//! roundness : inverted`), both in `tl,tr,br,bl` order. Decoding never fails:
//! anything missing or malformed falls back to its default, and the result
//! goes through the constraint resolver.

use tracing::warn;
use url::{Url, form_urlencoded};

use crate::constraint::resolve_params;
use crate::editor::{ShapeColors, hex, parse_color};
use crate::error::{ShapeError, parse_number};
use crate::geometry::{Canvas, Corner, CornerRadius, InvertedCorner, InvertedCorners, ShapeParams};
use crate::numeric::{Num, canonicalize};

/// A decoded share URL: resolved parameters plus colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareQuery {
    pub params: ShapeParams,
    pub colors: ShapeColors,
}

impl ShareQuery {
    /// Writes the query string, without a leading `?`.
    pub fn encode(params: &ShapeParams, colors: &ShapeColors) -> String {
        let r = params.corner_radius;
        let ic = Corner::ALL
            .iter()
            .map(|&corner| {
                let notch = params.inverted_corners[corner];
                format!(
                    "{}x{}x{}:{}",
                    Num(notch.width),
                    Num(notch.height),
                    Num(notch.roundness),
                    u8::from(notch.inverted)
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "w={}&h={}&r={},{},{},{}&ic={ic}&b={}&bc={}&bg={}",
            Num(params.canvas.width),
            Num(params.canvas.height),
            Num(r.tl),
            Num(r.tr),
            Num(r.br),
            Num(r.bl),
            Num(params.border_width),
            hex(colors.border),
            hex(colors.background),
        )
    }

    /// `base` with its query replaced by the encoded shape and its fragment
    /// dropped.
    pub fn to_url(
        base: &str,
        params: &ShapeParams,
        colors: &ShapeColors,
    ) -> Result<Url, ShapeError> {
        let mut url = Url::parse(base)?;
        url.set_fragment(None);
        url.set_query(Some(&Self::encode(params, colors)));
        Ok(url)
    }

    /// Reads a query string, with or without the leading `?`, or a full URL.
    ///
    /// The first occurrence of a key wins. Values are percent-decoded and
    /// canonicalized before the whole set is resolved.
    pub fn decode(input: &str) -> Self {
        let fields = QueryFields::parse(input);
        let defaults = ShapeParams::default();

        let canvas = Canvas::new(
            fields.dimension("w", defaults.canvas.width),
            fields.dimension("h", defaults.canvas.height),
        )
        .unwrap_or_else(|e| {
            warn!("{e}, using default canvas");
            defaults.canvas
        });

        let params = ShapeParams {
            canvas,
            corner_radius: fields.radii(&defaults.corner_radius),
            inverted_corners: fields.inverted_corners(&defaults.inverted_corners),
            border_width: fields.number("b").unwrap_or(0.0),
        };

        let defaults = ShapeColors::default();
        let colors = ShapeColors {
            border: fields.color("bc").unwrap_or(defaults.border),
            background: fields.color("bg").unwrap_or(defaults.background),
        };

        Self {
            params: resolve_params(&params),
            colors,
        }
    }
}

// ============================================================================
// Field access
// ============================================================================

struct QueryFields {
    pairs: Vec<(String, String)>,
}

impl QueryFields {
    /// Accepts an absolute URL, or a bare query with or without its `?`.
    fn parse(input: &str) -> Self {
        let pairs = match Url::parse(input) {
            Ok(url) => url.query_pairs().into_owned().collect(),
            Err(_) => {
                let query = input.strip_prefix('?').unwrap_or(input);
                form_urlencoded::parse(query.as_bytes()).into_owned().collect()
            }
        };
        Self { pairs }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A present field that is not a finite number is logged and treated as
    /// missing.
    fn number(&self, key: &str) -> Option<f64> {
        let text = self.get(key)?;
        let value = parse_value(text);
        if value.is_none() {
            warn!(field = key, value = text, "ignoring malformed share field");
        }
        value
    }

    fn dimension(&self, key: &'static str, default: f64) -> f64 {
        let Some(text) = self.get(key) else {
            return default;
        };
        match parse_number(key, text).map(canonicalize) {
            Ok(value) if value > 0.0 => value,
            Ok(_) => {
                warn!(field = key, "canvas dimension must be positive, using default");
                default
            }
            Err(e) => {
                warn!("{e}, using default");
                default
            }
        }
    }

    /// Missing trailing radii repeat the first one.
    fn radii(&self, defaults: &CornerRadius) -> CornerRadius {
        let Some(text) = self.get("r") else {
            return *defaults;
        };
        let values: Vec<&str> = text.split(',').collect();
        let first = values
            .first()
            .and_then(|v| parse_value(v))
            .unwrap_or(defaults.tl);

        let mut radii = *defaults;
        for corner in Corner::ALL {
            radii[corner] = match values.get(corner.index()) {
                None => first,
                Some(v) => parse_value(v).unwrap_or_else(|| {
                    warn!(corner = corner.key(), value = *v, "ignoring malformed radius");
                    defaults[corner]
                }),
            };
        }
        radii
    }

    fn inverted_corners(&self, defaults: &InvertedCorners) -> InvertedCorners {
        let Some(text) = self.get("ic") else {
            return *defaults;
        };
        let tuples: Vec<&str> = text.split(',').collect();

        let mut corners = *defaults;
        for corner in Corner::ALL {
            if let Some(tuple) = tuples.get(corner.index()).filter(|t| !t.is_empty()) {
                corners[corner] = parse_notch(tuple, &defaults[corner]);
            }
        }
        corners
    }

    fn color(&self, key: &str) -> Option<palette::Srgb<u8>> {
        let text = self.get(key)?;
        parse_color(text)
            .inspect_err(|e| warn!(field = key, "{e}"))
            .ok()
    }
}

/// `WxHxR:F`. Missing or malformed components keep their default; the flag
/// is set only by `1`.
fn parse_notch(tuple: &str, default: &InvertedCorner) -> InvertedCorner {
    let (sizes, flag) = tuple.split_once(':').unwrap_or((tuple, ""));
    let mut parts = sizes.split('x').map(parse_value);
    let mut next = |fallback: f64| parts.next().flatten().unwrap_or(fallback);
    InvertedCorner {
        width: next(default.width),
        height: next(default.height),
        roundness: next(default.roundness),
        inverted: flag.trim() == "1",
    }
}

fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(canonicalize)
}
