use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.3;

/// Extent of a shaped string, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Cached extents before the cache starts over.
const MAX_EXTENTS: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ExtentKey {
    text: String,
    px_bits: u32,
    face: String,
}

impl ExtentKey {
    fn new(text: &str, px: f32, face: &str) -> Self {
        Self {
            text: text.to_owned(),
            px_bits: px.to_bits(),
            face: face.to_owned(),
        }
    }
}

/// Extents keyed by the full (text, size, face), bounded by `MAX_EXTENTS`.
#[derive(Default)]
struct ExtentCache {
    map: AHashMap<ExtentKey, TextExtent>,
}

impl ExtentCache {
    fn get(&self, key: &ExtentKey) -> Option<TextExtent> {
        self.map.get(key).copied()
    }

    fn insert(&mut self, key: ExtentKey, extent: TextExtent) {
        if self.map.len() >= MAX_EXTENTS {
            log::debug!("text extent cache full, starting over");
            self.map.clear();
        }
        self.map.insert(key, extent);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

struct Engine {
    fs: FontSystem,
    extents: ExtentCache,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> MutexGuard<'static, Engine> {
    let m = ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        log::debug!("font system ready ({} faces)", fs.db().len());
        Mutex::new(Engine {
            fs,
            extents: ExtentCache::default(),
        })
    });
    // a panic mid-measure leaves only a stale cache behind
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Shape without wrapping. Every line counts; the widest one sets the width.
fn shape_extent(fs: &mut FontSystem, text: &str, px: f32, face: &str) -> TextExtent {
    let mut buf = Buffer::new(fs, Metrics::new(px, px * LINE_HEIGHT));
    let attrs = if face.is_empty() {
        Attrs::new()
    } else {
        Attrs::new().family(Family::Name(face))
    };
    {
        let mut b = buf.borrow_with(fs);
        b.set_size(None, None);
        b.set_text(text, &attrs, Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }

    let width = buf
        .layout_runs()
        .fold(0.0f32, |w, run| w.max(run.line_w));
    let lines = text.split('\n').count();
    TextExtent {
        width: width.ceil(),
        height: (lines as f32 * px * LINE_HEIGHT).ceil(),
    }
}

/// Measures `text` set in `face` at `px`. Empty text measures zero so it
/// drops out of pair layout. Results are cached per (text, size, face).
pub fn measure_line(text: &str, px: f32, face: &str) -> TextExtent {
    if text.is_empty() || px <= 0.0 {
        return TextExtent::default();
    }
    let key = ExtentKey::new(text, px, face);
    let mut eng = engine();
    if let Some(e) = eng.extents.get(&key) {
        return e;
    }
    let Engine { fs, extents } = &mut *eng;
    let e = shape_extent(fs, text, px, face);
    log::trace!("measured {text:?} @ {px}px {face}: {}x{}", e.width, e.height);
    extents.insert(key, e);
    e
}

/// Drops cached extents, e.g. after fonts were added.
pub fn clear_cache() {
    engine().extents.clear();
}

/// Loads an extra font file into the shared font system.
pub fn load_font_data(data: Vec<u8>) {
    let mut eng = engine();
    eng.fs.db_mut().load_font_data(data);
    eng.extents.clear();
}
