use super::grid::Pixel;

/// What a painted square represents
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Tile {
    SnakeHead,
    SnakeBody,
    Food,
}

/// Something the game can draw itself onto.
///
/// The game describes its state as a series of filled squares with side
/// `side` pixels whose top-left corners are at `origin`; what a "pixel" is
/// depends on the implementation.
pub(crate) trait Surface {
    fn fill_square(&mut self, origin: Pixel, side: u16, tile: Tile);
}

/// A surface that just records what was drawn on it
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Recorder(pub(crate) Vec<(Pixel, u16, Tile)>);

#[cfg(test)]
impl Surface for Recorder {
    fn fill_square(&mut self, origin: Pixel, side: u16, tile: Tile) {
        self.0.push((origin, side, tile));
    }
}
