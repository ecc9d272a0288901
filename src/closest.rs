use thiserror::Error;

/// Anything that can report its red, green and blue channels.
pub trait ColorLike {
    /// The `(r, g, b)` channel triple.
    fn channels(&self) -> (u8, u8, u8);
}

impl<T: ColorLike + ?Sized> ColorLike for &T {
    fn channels(&self) -> (u8, u8, u8) {
        (**self).channels()
    }
}

impl ColorLike for (u8, u8, u8) {
    fn channels(&self) -> (u8, u8, u8) {
        *self
    }
}

impl ColorLike for [u8; 3] {
    fn channels(&self) -> (u8, u8, u8) {
        (self[0], self[1], self[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FindError {
    #[error("count must be between 1 and the palette size ({len}), got {count}")]
    InvalidCount { count: usize, len: usize },
}

/// A palette entry together with its distance to the query colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedColor<'a, C> {
    pub color: &'a C,
    pub distance: f64,
}

impl<C> RankedColor<'_, C> {
    /// True if the entry has exactly the same channels as the query.
    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}

/// Squared euclidean distance between two colours in RGB space.
pub fn squared_distance<A, B>(a: &A, b: &B) -> u32
where
    A: ColorLike + ?Sized,
    B: ColorLike + ?Sized,
{
    let (r1, g1, b1) = a.channels();
    let (r2, g2, b2) = b.channels();
    let dr = r1 as i32 - r2 as i32;
    let dg = g1 as i32 - g2 as i32;
    let db = b1 as i32 - b2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Euclidean distance between two colours in RGB space.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: ColorLike + ?Sized,
    B: ColorLike + ?Sized,
{
    f64::from(squared_distance(a, b)).sqrt()
}

/// Find the `count` entries of `palette` closest to `query`.
///
/// The result is sorted by ascending distance. Entries at the same distance
/// keep their palette order.
///
/// ## Error
/// if `count` is zero or larger than the palette
pub fn find_closest<'a, Q, C>(
    query: &Q,
    count: usize,
    palette: &'a [C],
) -> Result<Vec<RankedColor<'a, C>>, FindError>
where
    Q: ColorLike + ?Sized,
    C: ColorLike,
{
    if count == 0 || count > palette.len() {
        tracing::debug!(count, palette_len = palette.len(), "invalid closest colour count");
        return Err(FindError::InvalidCount {
            count,
            len: palette.len(),
        });
    }

    let mut ranked: Vec<RankedColor<'a, C>> = palette
        .iter()
        .map(|color| RankedColor {
            color,
            distance: distance(query, color),
        })
        .collect();
    // must stay a stable sort
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(count);

    tracing::trace!(
        count,
        palette_len = palette.len(),
        best = ranked[0].distance,
        "found closest colours"
    );
    Ok(ranked)
}
