//! Font loading, glyph rasterization and text placement
//!
//! Runs are shaped with swash (kerning and GPOS positioning) and each glyph
//! is rasterized as an 8-bit coverage mask blended onto the canvas. Text is positioned the way a top-left anchored label
//! is: `x` is the pen origin and `y` is the top of the font's ascent, so the
//! baseline sits at `y + ascent`.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use swash::scale::{Render, ScaleContext, Source};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};
use swash::{CacheKey, FontRef};

use crate::rendering::canvas::Canvas;
use crate::rendering::paint::Color;
use crate::{Error, Result};

/// The three typefaces the layouts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Proportional UI face
    Sans,
    /// Monospace face for IMEI, timestamps and counters
    Mono,
    /// Rounded face; loaded and validated with the others
    Rounded,
}

impl FontRole {
    pub fn name(&self) -> &'static str {
        match self {
            FontRole::Sans => "proportional",
            FontRole::Mono => "monospace",
            FontRole::Rounded => "rounded",
        }
    }
}

/// Font file locations, one per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPaths {
    pub sans: PathBuf,
    pub mono: PathBuf,
    pub rounded: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            sans: PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
            mono: PathBuf::from("/System/Library/Fonts/SFNSMono.ttf"),
            rounded: PathBuf::from("/System/Library/Fonts/SFNSRounded.ttf"),
        }
    }
}

impl FontPaths {
    pub fn get(&self, role: FontRole) -> &Path {
        match role {
            FontRole::Sans => &self.sans,
            FontRole::Mono => &self.mono,
            FontRole::Rounded => &self.rounded,
        }
    }
}

/// Owned font data plus the header offset swash needs to address the face.
#[derive(Clone)]
pub struct Face {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
    origin: String,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("origin", &self.origin)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Face {
    /// Parse face `index` out of raw font (or collection) data.
    pub fn from_data(data: Vec<u8>, index: usize, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let font = FontRef::from_index(&data, index)
            .ok_or_else(|| Error::FontParse(origin.clone()))?;
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            origin,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_data(data, 0, path.display().to_string())
    }

    /// Where the face was loaded from (a path or a system family name).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    /// This face at a pixel size.
    pub fn at(&self, size: f32) -> Font<'_> {
        Font { face: self, size }
    }
}

/// A face at a specific pixel size.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    pub face: &'a Face,
    pub size: f32,
}

impl Font<'_> {
    fn scale(&self) -> f32 {
        let upem = self.face.font_ref().metrics(&[]).units_per_em.max(1);
        self.size / upem as f32
    }

    /// Distance from the top anchor to the baseline, in pixels.
    pub fn ascent(&self) -> f32 {
        self.face.font_ref().metrics(&[]).ascent * self.scale()
    }
}

/// The loaded faces for every role.
#[derive(Debug, Clone)]
pub struct FontBook {
    sans: Face,
    mono: Face,
    rounded: Face,
}

impl FontBook {
    pub fn new(sans: Face, mono: Face, rounded: Face) -> Self {
        Self { sans, mono, rounded }
    }

    /// Load every role from `paths`.
    ///
    /// With `system_fallback` a missing file is replaced by an installed
    /// font of the same kind; the rounded role falls back to the
    /// proportional face. Without it, any missing file is an error.
    pub fn load(paths: &FontPaths, system_fallback: bool) -> Result<Self> {
        let mut system = SystemFonts::default();
        let sans = Self::resolve(paths, FontRole::Sans, system_fallback, &mut system)?;
        let mono = Self::resolve(paths, FontRole::Mono, system_fallback, &mut system)?;
        let rounded = match Self::load_file(paths.get(FontRole::Rounded)) {
            Some(face) => face?,
            None if system_fallback => {
                warn!(
                    "rounded font missing at {}; using {}",
                    paths.rounded.display(),
                    sans.origin()
                );
                sans.clone()
            }
            None => {
                return Err(Error::FontNotFound {
                    role: FontRole::Rounded.name(),
                    path: paths.rounded.clone(),
                })
            }
        };
        Ok(Self::new(sans, mono, rounded))
    }

    /// Resolve every role from the installed system fonts only.
    #[cfg(feature = "system-fonts")]
    pub fn from_system() -> Result<Self> {
        let mut system = SystemFonts::default();
        let sans = system
            .face(FontRole::Sans)
            .ok_or_else(|| Self::not_found(FontRole::Sans, Path::new("<system>")))?;
        let mono = system
            .face(FontRole::Mono)
            .ok_or_else(|| Self::not_found(FontRole::Mono, Path::new("<system>")))?;
        let rounded = sans.clone();
        Ok(Self::new(sans, mono, rounded))
    }

    fn load_file(path: &Path) -> Option<Result<Face>> {
        path.is_file().then(|| Face::from_file(path))
    }

    fn not_found(role: FontRole, path: &Path) -> Error {
        Error::FontNotFound {
            role: role.name(),
            path: path.to_path_buf(),
        }
    }

    fn resolve(
        paths: &FontPaths,
        role: FontRole,
        system_fallback: bool,
        system: &mut SystemFonts,
    ) -> Result<Face> {
        let path = paths.get(role);
        if let Some(face) = Self::load_file(path) {
            let face = face?;
            debug!("loaded {} font from {}", role.name(), face.origin());
            return Ok(face);
        }
        if !system_fallback {
            return Err(Self::not_found(role, path));
        }
        let face = system
            .face(role)
            .ok_or_else(|| Self::not_found(role, path))?;
        warn!(
            "{} font missing at {}; using system font {}",
            role.name(),
            path.display(),
            face.origin()
        );
        Ok(face)
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Sans => &self.sans,
            FontRole::Mono => &self.mono,
            FontRole::Rounded => &self.rounded,
        }
    }

    pub fn sans(&self, size: f32) -> Font<'_> {
        self.sans.at(size)
    }

    pub fn mono(&self, size: f32) -> Font<'_> {
        self.mono.at(size)
    }
}

/// Lazily scanned system font database.
#[derive(Default)]
struct SystemFonts {
    #[cfg(feature = "system-fonts")]
    db: Option<fontdb::Database>,
}

#[cfg(feature = "system-fonts")]
impl SystemFonts {
    const SANS_NAMES: &'static [&'static str] = &[
        "SF Pro",
        "Helvetica Neue",
        "Arial",
        "DejaVu Sans",
        "Liberation Sans",
        "Noto Sans",
    ];
    const MONO_NAMES: &'static [&'static str] = &[
        "SF Mono",
        "Menlo",
        "Courier New",
        "DejaVu Sans Mono",
        "Liberation Mono",
        "Noto Sans Mono",
    ];

    fn db(&mut self) -> &fontdb::Database {
        self.db.get_or_insert_with(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            debug!("scanned {} system font faces", db.len());
            db
        })
    }

    fn query(db: &fontdb::Database, family: fontdb::Family<'_>) -> Option<fontdb::ID> {
        db.query(&fontdb::Query {
            families: &[family],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })
    }

    fn face(&mut self, role: FontRole) -> Option<Face> {
        let db = self.db();
        let (generic, names, want_mono) = match role {
            FontRole::Mono => (fontdb::Family::Monospace, Self::MONO_NAMES, true),
            _ => (fontdb::Family::SansSerif, Self::SANS_NAMES, false),
        };

        // Generic families map to platform defaults that may not be
        // installed, so named families and a plain scan follow.
        let id = Self::query(db, generic)
            .or_else(|| {
                names
                    .iter()
                    .find_map(|name| Self::query(db, fontdb::Family::Name(*name)))
            })
            .or_else(|| {
                db.faces()
                    .find(|f| f.monospaced == want_mono)
                    .or_else(|| db.faces().next())
                    .map(|f| f.id)
            })?;

        let origin = db
            .face(id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| "system font".to_string());
        db.with_face_data(id, |data, index| {
            Face::from_data(data.to_vec(), index as usize, origin).ok()
        })
        .flatten()
    }
}

#[cfg(not(feature = "system-fonts"))]
impl SystemFonts {
    fn face(&mut self, _role: FontRole) -> Option<Face> {
        None
    }
}

/// One rasterized glyph, positioned relative to the pen origin
/// (x) and the baseline (y).
#[derive(Debug, Clone)]
struct GlyphMask {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

/// Tight box around the pixels a run of text actually covers, relative
/// to the pen origin and the ascent line. Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBox {
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    fn union(self, other: InkBox) -> InkBox {
        InkBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Measured size of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    /// Pen advance in pixels
    pub advance: f32,
    /// Covered pixels; `None` for blank text
    pub ink: Option<InkBox>,
}

impl TextExtent {
    /// Width used for centring: ink width, or the advance for blank text.
    pub fn width(&self) -> i32 {
        self.ink
            .map(|ink| ink.width())
            .unwrap_or(self.advance.round() as i32)
    }

    pub fn height(&self) -> i32 {
        self.ink.map(|ink| ink.height()).unwrap_or(0)
    }
}

struct ShapedText {
    glyphs: Vec<GlyphMask>,
    advance: f32,
    baseline: i32,
}

impl ShapedText {
    /// Ink bounds relative to the ascent line.
    fn ink(&self) -> Option<InkBox> {
        let mut ink: Option<InkBox> = None;
        for g in &self.glyphs {
            let w = g.width as usize;
            let mut glyph_ink: Option<InkBox> = None;
            for (i, &c) in g.coverage.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let x = g.left + (i % w) as i32;
                let y = self.baseline + g.top + (i / w) as i32;
                let px = InkBox { left: x, top: y, right: x, bottom: y };
                glyph_ink = Some(glyph_ink.map_or(px, |b| b.union(px)));
            }
            if let Some(b) = glyph_ink {
                ink = Some(ink.map_or(b, |acc| acc.union(b)));
            }
        }
        ink
    }
}

/// Shape `text` into positioned glyphs, then rasterize each glyph at its
/// subpixel pen offset.
fn shape(
    scale: &mut ScaleContext,
    shaper: &mut ShapeContext,
    text: &str,
    font: Font<'_>,
) -> ShapedText {
    let font_ref = font.face.font_ref();
    let baseline = font.ascent().round() as i32;

    // (glyph id, pen x, y offset upwards)
    let mut placed = Vec::with_capacity(text.len());
    let mut pen = 0.0f32;
    let mut run = shaper.builder(font_ref).size(font.size).build();
    run.add_str(text);
    run.shape_with(|cluster| {
        for glyph in cluster.glyphs {
            placed.push((glyph.id, pen + glyph.x, glyph.y));
            pen += glyph.advance;
        }
    });

    let mut scaler = scale.builder(font_ref).size(font.size).hint(false).build();
    let mut glyphs = Vec::with_capacity(placed.len());
    for (id, x, y) in placed {
        let origin = x.floor();
        let image = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .offset(Vector::new(x - origin, 0.0))
            .render(&mut scaler, id);
        let Some(img) = image else { continue };
        if img.placement.width > 0 && img.placement.height > 0 {
            glyphs.push(GlyphMask {
                left: origin as i32 + img.placement.left,
                top: -img.placement.top - y.round() as i32,
                width: img.placement.width,
                height: img.placement.height,
                coverage: img.data,
            });
        }
    }

    ShapedText {
        glyphs,
        advance: pen,
        baseline,
    }
}

impl Canvas {
    /// Measure `text` without drawing it.
    pub fn measure_text(&mut self, text: &str, font: Font<'_>) -> TextExtent {
        let shaped = shape(&mut self.scale, &mut self.shaper, text, font);
        TextExtent {
            advance: shaped.advance,
            ink: shaped.ink(),
        }
    }

    /// Draw `text` with its pen origin at `x` and its ascent line at `y`.
    pub fn draw_text(&mut self, text: &str, (x, y): (i32, i32), font: Font<'_>, color: Color) {
        let shaped = shape(&mut self.scale, &mut self.shaper, text, font);
        for g in &shaped.glyphs {
            let w = g.width as usize;
            for (i, &c) in g.coverage.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let px = x + g.left + (i % w) as i32;
                let py = y + shaped.baseline + g.top + (i / w) as i32;
                self.blend_pixel(px, py, color.with_coverage(c));
            }
        }
    }
}

/// Draw `text` so its ink is horizontally centred within `[x, x + w)`.
/// Returns the measured extent.
pub fn text_center_in(
    canvas: &mut Canvas,
    text: &str,
    x: i32,
    w: i32,
    y: i32,
    font: Font<'_>,
    color: Color,
) -> TextExtent {
    let extent = canvas.measure_text(text, font);
    let ink_left = extent.ink.map(|ink| ink.left).unwrap_or(0);
    let target = x + (w - extent.width()) / 2;
    canvas.draw_text(text, (target - ink_left, y), font, color);
    extent
}

/// Draw `text` horizontally centred on the whole canvas.
pub fn text_center(canvas: &mut Canvas, text: &str, y: i32, font: Font<'_>, color: Color) -> TextExtent {
    let w = canvas.width() as i32;
    text_center_in(canvas, text, 0, w, y, font, color)
}
