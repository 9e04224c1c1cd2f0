//! Compile-time description of panel geometry and wiring, for single and tiled matrices.
//!
//! See [`MatrixLayout`] for examples. Wiring is described twice, with the same three
//! choices each time:
//! - [`PanelOrdering`]: how the LEDs inside one panel are chained,
//! - [`TileOrdering`]: how the panels themselves are chained into the tile grid.
//!
//! Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
//! `x` increases to the right, and `y` increases downward.

/// Corner where the first LED (or first panel) sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corner {
    /// Wiring starts at the top-left.
    #[default]
    TopLeft,
    /// Wiring starts at the top-right.
    TopRight,
    /// Wiring starts at the bottom-left.
    BottomLeft,
    /// Wiring starts at the bottom-right.
    BottomRight,
}

impl Corner {
    /// Whether the wiring starts on the right edge.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Whether the wiring starts on the bottom edge.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// The diagonally opposite corner (both edges toggled).
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// Outer dimension when walking the wiring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MajorAxis {
    /// Wiring runs along rows, then moves to the next row.
    #[default]
    Rows,
    /// Wiring runs along columns, then moves to the next column.
    Columns,
}

/// Whether consecutive lines keep or alternate direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sequence {
    /// Every line starts on the same side.
    #[default]
    Progressive,
    /// Every other line runs backwards (serpentine strip wiring).
    Zigzag,
}

/// How LEDs are chained inside one panel.
///
/// ```text
/// PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag), 4×3:
///   LED0  LED1  LED2  LED3
///   LED7  LED6  LED5  LED4
///   LED8  LED9  LED10 LED11
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelOrdering {
    /// Corner of the first LED.
    pub corner: Corner,
    /// Outer dimension of the wiring.
    pub axis: MajorAxis,
    /// Line direction pattern.
    pub sequence: Sequence,
}

impl PanelOrdering {
    /// Describe the wiring inside a panel.
    #[must_use]
    pub const fn new(corner: Corner, axis: MajorAxis, sequence: Sequence) -> Self {
        Self {
            corner,
            axis,
            sequence,
        }
    }

    /// Same ordering starting from a different corner.
    #[must_use]
    pub const fn with_corner(self, corner: Corner) -> Self {
        Self { corner, ..self }
    }

    const fn grid(self) -> GridOrder {
        GridOrder {
            corner: self.corner,
            axis: self.axis,
            sequence: self.sequence,
        }
    }
}

/// How panels are chained into a tile grid.
///
/// With [`Sequence::Zigzag`], panels on every other tile line are mounted upside down,
/// so their first LED moves to the [opposite](Corner::opposite) corner.
///
/// ```text
/// TileOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag), 3×2 tiles:
///   Tile0  Tile1  Tile2
///   Tile5  Tile4  Tile3      (panels in this row are rotated 180°)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TileOrdering {
    /// Corner of the first panel.
    pub corner: Corner,
    /// Outer dimension of the panel chain.
    pub axis: MajorAxis,
    /// Line direction pattern.
    pub sequence: Sequence,
}

impl TileOrdering {
    /// Describe the chaining of panels.
    #[must_use]
    pub const fn new(corner: Corner, axis: MajorAxis, sequence: Sequence) -> Self {
        Self {
            corner,
            axis,
            sequence,
        }
    }

    const fn grid(self) -> GridOrder {
        GridOrder {
            corner: self.corner,
            axis: self.axis,
            sequence: self.sequence,
        }
    }
}

/// Shared linearization for tiles in a grid and pixels in a panel.
#[derive(Clone, Copy)]
struct GridOrder {
    corner: Corner,
    axis: MajorAxis,
    sequence: Sequence,
}

/// Position of a cell along the wiring.
struct GridPosition {
    index: usize,
    reversed_line: bool,
}

impl GridOrder {
    /// Wiring position of cell `(column, row)` in a `width × height` grid.
    const fn position(self, column: usize, row: usize, width: usize, height: usize) -> GridPosition {
        let mut minor = column;
        let mut major = row;
        if self.corner.is_right() {
            minor = width - 1 - minor;
        }
        if self.corner.is_bottom() {
            major = height - 1 - major;
        }

        let major_scale = match self.axis {
            MajorAxis::Rows => width,
            MajorAxis::Columns => {
                let swap = minor;
                minor = major;
                major = swap;
                height
            }
        };

        let reversed_line = matches!(self.sequence, Sequence::Zigzag) && major % 2 == 1;
        let index = if reversed_line {
            (major + 1) * major_scale - 1 - minor
        } else {
            major * major_scale + minor
        };
        GridPosition {
            index,
            reversed_line,
        }
    }
}

/// Where a canvas coordinate lands in the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TileLocation {
    /// Index of the panel along the chain.
    pub tile_index: usize,
    /// LED index of the panel's first LED.
    pub tile_offset: usize,
    /// Column within the panel.
    pub local_x: u16,
    /// Row within the panel.
    pub local_y: u16,
    /// Panel corner to use for this panel (mirrored on reversed zigzag lines).
    pub panel_corner: Corner,
}

/// Geometry and wiring of a single panel or a grid of identical panels.
///
/// Most users start from [`single`](Self::single) or [`tiled`](Self::tiled). Layouts are
/// `const`, so they can live in `const` items next to the pin definitions.
///
/// ```rust
/// use matrix_envoy::matrix::layout::{
///     Corner, MajorAxis, MatrixLayout, PanelOrdering, Sequence, TileOrdering,
/// };
///
/// // Two 8×8 serpentine panels side by side, chained left to right.
/// const LAYOUT: MatrixLayout = MatrixLayout::tiled(
///     8,
///     8,
///     2,
///     1,
///     TileOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Progressive),
///     PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
/// );
/// const _: () = assert!(LAYOUT.led_count() == 128);
///
/// assert_eq!((LAYOUT.width(), LAYOUT.height()), (16, 8));
/// assert_eq!(LAYOUT.led_index(7, 1), Some(8)); // second row runs backwards
/// assert_eq!(LAYOUT.led_index(8, 0), Some(64)); // first LED of the second panel
/// assert_eq!(LAYOUT.led_index(16, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixLayout {
    panel_width: u16,
    panel_height: u16,
    tiles_x: u16,
    tiles_y: u16,
    tile_ordering: Option<TileOrdering>,
    panel_ordering: PanelOrdering,
}

impl MatrixLayout {
    /// A single panel of `panel_width × panel_height` LEDs.
    #[must_use]
    pub const fn single(panel_width: u16, panel_height: u16, ordering: PanelOrdering) -> Self {
        Self {
            panel_width,
            panel_height,
            tiles_x: 1,
            tiles_y: 1,
            tile_ordering: None,
            panel_ordering: ordering,
        }
    }

    /// A grid of `tiles_x × tiles_y` identical panels.
    ///
    /// A tile count of `0` is treated as `1`; a `0×0` or `1×1` grid behaves exactly like
    /// [`single`](Self::single).
    #[must_use]
    pub const fn tiled(
        panel_width: u16,
        panel_height: u16,
        tiles_x: u16,
        tiles_y: u16,
        tile_ordering: TileOrdering,
        panel_ordering: PanelOrdering,
    ) -> Self {
        Self {
            panel_width,
            panel_height,
            tiles_x: if tiles_x == 0 { 1 } else { tiles_x },
            tiles_y: if tiles_y == 0 { 1 } else { tiles_y },
            tile_ordering: Some(tile_ordering),
            panel_ordering,
        }
    }

    /// Panel width in LEDs.
    #[must_use]
    pub const fn panel_width(&self) -> u16 {
        self.panel_width
    }

    /// Panel height in LEDs.
    #[must_use]
    pub const fn panel_height(&self) -> u16 {
        self.panel_height
    }

    /// Number of panels across.
    #[must_use]
    pub const fn tiles_x(&self) -> u16 {
        self.tiles_x
    }

    /// Number of panels down.
    #[must_use]
    pub const fn tiles_y(&self) -> u16 {
        self.tiles_y
    }

    /// Tile chaining, or `None` for a single panel.
    #[must_use]
    pub const fn tile_ordering(&self) -> Option<TileOrdering> {
        self.tile_ordering
    }

    /// Wiring inside each panel.
    #[must_use]
    pub const fn panel_ordering(&self) -> PanelOrdering {
        self.panel_ordering
    }

    /// Unrotated canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.panel_width as usize * self.tiles_x as usize
    }

    /// Unrotated canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.panel_height as usize * self.tiles_y as usize
    }

    /// LEDs in one panel.
    #[must_use]
    pub const fn panel_len(&self) -> usize {
        self.panel_width as usize * self.panel_height as usize
    }

    /// Total number of LEDs the layout addresses.
    #[must_use]
    pub const fn led_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Find the panel holding canvas coordinate `(x, y)`.
    ///
    /// A single panel is reported as tile `0` with the configured panel corner.
    /// The coordinate must be inside the canvas.
    #[must_use]
    pub const fn locate_tile(&self, x: u16, y: u16) -> TileLocation {
        let panel_corner = self.panel_ordering.corner;
        let Some(tile_ordering) = self.tile_ordering else {
            return TileLocation {
                tile_index: 0,
                tile_offset: 0,
                local_x: x,
                local_y: y,
                panel_corner,
            };
        };

        let tile_x = x / self.panel_width;
        let tile_y = y / self.panel_height;
        let local_x = x - tile_x * self.panel_width;
        let local_y = y - tile_y * self.panel_height;

        let position = tile_ordering.grid().position(
            tile_x as usize,
            tile_y as usize,
            self.tiles_x as usize,
            self.tiles_y as usize,
        );

        TileLocation {
            tile_index: position.index,
            tile_offset: position.index * self.panel_len(),
            local_x,
            local_y,
            panel_corner: if position.reversed_line {
                panel_corner.opposite()
            } else {
                panel_corner
            },
        }
    }

    /// Offset of `(local_x, local_y)` within its panel, wired from `corner`.
    ///
    /// The coordinate must be inside the panel.
    #[must_use]
    pub const fn locate_pixel(&self, local_x: u16, local_y: u16, corner: Corner) -> usize {
        self.panel_ordering
            .with_corner(corner)
            .grid()
            .position(
                local_x as usize,
                local_y as usize,
                self.panel_width as usize,
                self.panel_height as usize,
            )
            .index
    }

    /// LED index of unrotated canvas coordinate `(x, y)`, or `None` if it is off the canvas.
    #[must_use]
    pub const fn led_index(&self, x: u16, y: u16) -> Option<usize> {
        if x as usize >= self.width() || y as usize >= self.height() {
            return None;
        }
        Some(self.led_index_unchecked(x, y))
    }

    /// LED index of a coordinate already known to be on the canvas.
    pub(crate) const fn led_index_unchecked(&self, x: u16, y: u16) -> usize {
        let tile = self.locate_tile(x, y);
        tile.tile_offset + self.locate_pixel(tile.local_x, tile.local_y, tile.panel_corner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZIGZAG_ROWS: PanelOrdering =
        PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag);

    #[test]
    fn opposite_toggles_both_edges() {
        for corner in [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ] {
            let opposite = corner.opposite();
            assert_ne!(corner.is_right(), opposite.is_right());
            assert_ne!(corner.is_bottom(), opposite.is_bottom());
            assert_eq!(opposite.opposite(), corner);
        }
    }

    #[test]
    fn zero_tiles_behave_like_one() {
        let layout = MatrixLayout::tiled(4, 3, 0, 0, TileOrdering::default(), ZIGZAG_ROWS);
        assert_eq!((layout.tiles_x(), layout.tiles_y()), (1, 1));
        assert_eq!(layout.led_count(), 12);
        let single = MatrixLayout::single(4, 3, ZIGZAG_ROWS);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(layout.led_index(x, y), single.led_index(x, y));
            }
        }
    }

    #[test]
    fn single_panel_reports_tile_zero() {
        let layout = MatrixLayout::single(4, 3, ZIGZAG_ROWS);
        let tile = layout.locate_tile(3, 2);
        assert_eq!(tile.tile_index, 0);
        assert_eq!(tile.tile_offset, 0);
        assert_eq!((tile.local_x, tile.local_y), (3, 2));
        assert_eq!(tile.panel_corner, Corner::TopLeft);
    }

    #[test]
    fn reversed_tile_line_mirrors_panel_corner() {
        let layout = MatrixLayout::tiled(
            2,
            2,
            2,
            2,
            TileOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
            ZIGZAG_ROWS,
        );
        assert_eq!(layout.locate_tile(0, 0).panel_corner, Corner::TopLeft);
        let second_row = layout.locate_tile(0, 2);
        assert_eq!(second_row.tile_index, 3);
        assert_eq!(second_row.tile_offset, 12);
        assert_eq!(second_row.panel_corner, Corner::BottomRight);
    }
}
