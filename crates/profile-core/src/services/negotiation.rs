//! Content negotiation between the JSON and XML representations

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

impl Representation {
    /// Media types this representation can be served as, `type/subtype` pairs.
    fn media_types(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Representation::Json => &[("application", "json"), ("text", "json"), ("application", "*+json")],
            Representation::Xml => &[("application", "xml"), ("text", "xml"), ("application", "*+xml")],
        }
    }
}

/// Everything the user resource can be rendered as, in order of preference.
pub const JSON_AND_XML: &[Representation] = &[Representation::Json, Representation::Xml];

#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    quality: f32,
}

impl MediaRange {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let essence = parts.next()?.trim().to_ascii_lowercase();
        let (kind, subtype) = essence.split_once('/')?;
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().unwrap_or(0.0).clamp(0.0, 1.0);
                }
            }
        }

        Some(Self {
            kind: kind.trim().to_string(),
            subtype: subtype.trim().to_string(),
            quality,
        })
    }

    fn matches(&self, kind: &str, subtype: &str) -> bool {
        let kind_ok = self.kind == "*" || self.kind == kind;
        let subtype_ok = self.subtype == "*" || subtype_matches(subtype, &self.subtype);
        kind_ok && subtype_ok
    }
}

/// `*+json` stands for any structured-syntax subtype such as `problem+json`.
fn subtype_matches(offered: &str, requested: &str) -> bool {
    match offered.strip_prefix('*') {
        Some(suffix) => requested.ends_with(suffix) && requested.len() > suffix.len(),
        None => offered == requested,
    }
}

/// Picks the representation to answer with, or `None` when the caller accepts
/// none of `offered`.
///
/// Each offered representation scores the best quality of any range matching it.
/// The highest score wins and ties go to the earlier entry in `offered`.
pub fn negotiate(accept: Option<&str>, offered: &[Representation]) -> Option<Representation> {
    let ranges: Vec<MediaRange> = accept
        .unwrap_or_default()
        .split(',')
        .filter_map(MediaRange::parse)
        .collect();

    if ranges.is_empty() {
        return offered.first().copied();
    }

    let mut best: Option<(Representation, f32)> = None;
    for representation in offered {
        let score = ranges
            .iter()
            .filter(|range| {
                representation
                    .media_types()
                    .iter()
                    .any(|(kind, subtype)| range.matches(kind, subtype))
            })
            .map(|range| range.quality)
            .fold(0.0_f32, f32::max);

        if score > 0.0 && best.map_or(true, |(_, current)| score > current) {
            best = Some((*representation, score));
        }
    }

    debug!("Negotiated {:?} for Accept {:?}", best.map(|(r, _)| r), accept);
    best.map(|(representation, _)| representation)
}
