use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    sync::LazyLock,
};

use byteorder::ReadBytesExt;
use serde::Deserialize;
use thiserror::Error;

use crate::closest::{ColorLike, FindError, RankedColor, find_closest};
use crate::colour::Color;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette: {0}")]
    Io(#[from] io::Error),
    #[error("malformed palette json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette has no entries")]
    Empty,
    #[error("palette ended after {entries} of {expected} entries")]
    Truncated { entries: usize, expected: usize },
}

/// One colour of a palette, together with the metadata it was loaded with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct PaletteEntry {
    pub id: u32,
    pub color: Color,
    pub hex: String,
    pub name: Option<String>,
}

impl PaletteEntry {
    pub fn new(id: u32, color: Color, name: Option<String>) -> Self {
        Self {
            id,
            color,
            hex: color.to_hex(),
            name,
        }
    }
}

impl ColorLike for PaletteEntry {
    fn channels(&self) -> (u8, u8, u8) {
        self.color.rgb
    }
}

// Layout of the xterm colour reference dataset.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    color_id: u32,
    hex_string: String,
    rgb: RawRgb,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawRgb {
    r: u8,
    g: u8,
    b: u8,
}

impl From<RawEntry> for PaletteEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            id: raw.color_id,
            color: Color::rgb(raw.rgb.r, raw.rgb.g, raw.rgb.b),
            hex: raw.hex_string,
            name: raw.name,
        }
    }
}

/// An ordered set of colours to match against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

static XTERM_256: LazyLock<Palette> = LazyLock::new(|| {
    let entries = (0..=255u8)
        .map(|code| {
            let name = Color::SYSTEM_NAMES
                .get(code as usize)
                .map(|name| name.to_string());
            PaletteEntry::new(code.into(), Color::from_ansi256(code), name)
        })
        .collect();
    Palette::new(entries)
});

impl Palette {
    /// Number of entries in a `.pal` file.
    pub const PAL_ENTRIES: usize = 256;

    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// The default xterm 256-colour palette, ids being the ANSI codes.
    pub fn xterm256() -> &'static Self {
        &XTERM_256
    }

    /// Load a palette from a JSON array of
    /// `{"colorId", "hexString", "rgb": {"r", "g", "b"}, "name"}` objects.
    ///
    /// ## Error
    /// if the reader fails, the JSON is malformed or the array is empty
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, PaletteError> {
        let entries: Vec<PaletteEntry> = serde_json::from_reader(reader)?;
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        tracing::debug!(entries = entries.len(), "loaded json palette");
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let f = File::open(path)?;
        Self::from_json_reader(BufReader::new(f))
    }

    /// Read a raw `.pal` palette: 256 RGB triples, 768 bytes.
    /// Entry ids are the indices.
    pub fn read_pal<R: Read>(r: &mut R) -> Result<Self, PaletteError> {
        let mut entries = Vec::with_capacity(Self::PAL_ENTRIES);
        for i in 0..Self::PAL_ENTRIES {
            let color = match read_rgb(r) {
                Ok(color) => color,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(PaletteError::Truncated {
                        entries: i,
                        expected: Self::PAL_ENTRIES,
                    });
                }
                Err(e) => return Err(e.into()),
            };
            entries.push(PaletteEntry::new(i as u32, color, None));
        }
        tracing::debug!(entries = entries.len(), "loaded pal palette");
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with the given id, or ``None``.
    pub fn get(&self, id: u32) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The `count` entries closest to `query`, nearest first.
    pub fn find_closest<Q: ColorLike + ?Sized>(
        &self,
        query: &Q,
        count: usize,
    ) -> Result<Vec<RankedColor<'_, PaletteEntry>>, FindError> {
        find_closest(query, count, &self.entries)
    }

    /// The single closest entry, or ``None`` for an empty palette.
    pub fn closest<Q: ColorLike + ?Sized>(&self, query: &Q) -> Option<&PaletteEntry> {
        let ranked = self.find_closest(query, 1).ok()?;
        ranked.first().map(|r| r.color)
    }
}

fn read_rgb<R: Read>(r: &mut R) -> io::Result<Color> {
    let red = r.read_u8()?;
    let green = r.read_u8()?;
    let blue = r.read_u8()?;
    Ok(Color::rgb(red, green, blue))
}
