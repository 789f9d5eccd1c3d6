use crate::element::Cuboid;

/// Largest coordinate a block model may use.
pub const MODEL_BOUND: f32 = 32.0;

/// Contraction applied by [`rescale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescale {
    pub max: f32,
    pub shrink: f32,
}

/// Largest `to` component over all cuboids; 0 when there are none.
pub fn max_coord(cuboids: &[Cuboid]) -> f32 {
    cuboids
        .iter()
        .map(|c| c.to.max_element())
        .fold(0.0, f32::max)
}

/// Shrinks every coordinate by `(max - bound) / max` when `max` exceeds `bound`.
///
/// Single pass; float rounding may leave the result marginally off `bound`.
pub fn rescale(cuboids: &mut [Cuboid], bound: f32) -> Option<Rescale> {
    let max = max_coord(cuboids);
    if max <= bound {
        return None;
    }
    let shrink = (max - bound) / max;
    for c in cuboids.iter_mut() {
        let b = c.bounds().contracted(shrink);
        c.set_bounds(b);
    }
    Some(Rescale { max, shrink })
}
